//! Immutable reporting projection over a bill

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::BillId;

use crate::bill::Bill;
use crate::calculator::BillCalculator;

/// Read-only snapshot of a bill joined with party names and computed totals
///
/// A summary is built once and never mutated; it has getters only. It holds
/// the figures as of the moment it was produced and does not track later
/// changes to the underlying bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillSummary {
    bill_id: BillId,
    patient_name: String,
    doctor_name: String,
    total_amount: Decimal,
    is_paid: bool,
}

impl BillSummary {
    pub fn new(
        bill_id: BillId,
        patient_name: impl Into<String>,
        doctor_name: impl Into<String>,
        total_amount: Decimal,
        is_paid: bool,
    ) -> Self {
        Self {
            bill_id,
            patient_name: patient_name.into(),
            doctor_name: doctor_name.into(),
            total_amount,
            is_paid,
        }
    }

    /// Builds a summary from a bill, computing the total with the calculator
    pub fn from_bill(
        bill: &Bill,
        calculator: &BillCalculator,
        patient_name: impl Into<String>,
        doctor_name: impl Into<String>,
    ) -> Self {
        Self::new(
            bill.id().clone(),
            patient_name,
            doctor_name,
            calculator.total(bill),
            bill.is_paid(),
        )
    }

    pub fn bill_id(&self) -> &BillId {
        &self.bill_id
    }

    pub fn patient_name(&self) -> &str {
        &self.patient_name
    }

    pub fn doctor_name(&self) -> &str {
        &self.doctor_name
    }

    pub fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    pub fn is_paid(&self) -> bool {
        self.is_paid
    }
}

impl fmt::Display for BillSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BillSummary[ID={}, Patient={}, Doctor={}, Total=₹{:.2}, Paid={}]",
            self.bill_id, self.patient_name, self.doctor_name, self.total_amount, self.is_paid
        )
    }
}
