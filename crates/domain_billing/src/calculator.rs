//! Fee arithmetic over bills
//!
//! All computation here is pure: the calculator never mutates a bill and
//! never rounds. `Decimal` keeps every intermediate exact, so the reference
//! figures (a 1000 fee with 200 extra charges yields a 1250 subtotal, 225
//! tax, 1475 total) hold to the last digit.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::bill::Bill;

/// Flat service charge applied to every bill
pub const DEFAULT_SERVICE_CHARGE: Decimal = dec!(50);

/// Standard tax rate applied on the subtotal
pub const DEFAULT_TAX_RATE: Decimal = dec!(0.18);

/// Pure fee calculator parameterized by service charge and tax rate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillCalculator {
    service_charge: Decimal,
    tax_rate: Decimal,
}

impl Default for BillCalculator {
    fn default() -> Self {
        Self {
            service_charge: DEFAULT_SERVICE_CHARGE,
            tax_rate: DEFAULT_TAX_RATE,
        }
    }
}

impl BillCalculator {
    pub fn new(service_charge: Decimal, tax_rate: Decimal) -> Self {
        Self {
            service_charge,
            tax_rate,
        }
    }

    pub fn service_charge(&self) -> Decimal {
        self.service_charge
    }

    pub fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }

    /// Consultation fee plus additional charges plus the service charge
    pub fn subtotal(&self, bill: &Bill) -> Decimal {
        bill.consultation_fee() + bill.additional_charges() + self.service_charge
    }

    /// Tax on the subtotal at the calculator's standard rate
    pub fn tax(&self, bill: &Bill) -> Decimal {
        self.subtotal(bill) * self.tax_rate
    }

    /// Subtotal plus standard tax
    pub fn total(&self, bill: &Bill) -> Decimal {
        self.subtotal(bill) + self.tax(bill)
    }

    /// Total with the given rate replacing the standard one
    ///
    /// The rate is not range-checked: zero yields the bare subtotal and a
    /// negative rate produces a rebate below the subtotal.
    pub fn total_with_tax_rate(&self, bill: &Bill, tax_rate: Decimal) -> Decimal {
        self.subtotal(bill) * (Decimal::ONE + tax_rate)
    }

    /// Total after deducting a discount from the subtotal, then taxing at the
    /// standard rate
    ///
    /// `is_percentage` interprets `discount` as a percentage of the subtotal
    /// rather than a flat amount. The discounted subtotal is not clamped: a
    /// discount larger than the subtotal drives the total negative.
    pub fn total_with_discount(
        &self,
        bill: &Bill,
        discount: Decimal,
        is_percentage: bool,
    ) -> Decimal {
        let subtotal = self.subtotal(bill);
        let deduction = if is_percentage {
            subtotal * discount / Decimal::from(100)
        } else {
            discount
        };
        (subtotal - deduction) * (Decimal::ONE + self.tax_rate)
    }
}
