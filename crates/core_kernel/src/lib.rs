//! Core Kernel - Foundational types and utilities for the clinic system
//!
//! This crate provides the fundamental building blocks used across all domain
//! modules:
//! - Strongly-typed entity identifiers and the process-wide id generator
//! - The generic identity-keyed `EntityStore`
//! - Common field validators and the core error type

pub mod error;
pub mod identifiers;
pub mod store;
pub mod validation;

pub use error::CoreError;
pub use identifiers::{
    AppointmentId, BillId, DoctorId, EntityKind, IdGenerator, PatientId,
};
pub use store::{EntityStore, Identified};
