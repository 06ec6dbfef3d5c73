//! Billing Domain - bills, fee calculation, and payment state
//!
//! This crate implements the money side of the clinic system:
//!
//! - [`Bill`] - the billable record tied to an appointment
//! - [`BillCalculator`] - pure subtotal/tax/discount arithmetic over a bill
//! - [`BillFactory`] - per-type constructors mapping type-specific fees into
//!   the two generic fee slots
//! - [`BillSummary`] - an immutable reporting projection
//! - [`BillService`] - paid/unpaid partitions and revenue analytics
//!
//! All amounts are `rust_decimal::Decimal`; no floating point is used for
//! money anywhere in the system.

pub mod bill;
pub mod calculator;
pub mod factory;
pub mod service;
pub mod summary;

pub use bill::{Bill, BillType};
pub use calculator::{BillCalculator, DEFAULT_SERVICE_CHARGE, DEFAULT_TAX_RATE};
pub use factory::BillFactory;
pub use service::BillService;
pub use summary::BillSummary;
