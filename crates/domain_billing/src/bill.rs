//! Bill entity and bill types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{AppointmentId, BillId, Identified};

use crate::calculator::BillCalculator;

/// Classification driving which fee slots the factory populates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BillType {
    Consultation,
    Surgery,
    Diagnostic,
    Pharmacy,
    Emergency,
}

impl BillType {
    pub const ALL: [BillType; 5] = [
        BillType::Consultation,
        BillType::Surgery,
        BillType::Diagnostic,
        BillType::Pharmacy,
        BillType::Emergency,
    ];

    /// Human-readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            BillType::Consultation => "Consultation Bill",
            BillType::Surgery => "Surgery Bill",
            BillType::Diagnostic => "Diagnostic Bill",
            BillType::Pharmacy => "Pharmacy Bill",
            BillType::Emergency => "Emergency Bill",
        }
    }

    /// Stable name used in CSV records
    pub fn name(&self) -> &'static str {
        match self {
            BillType::Consultation => "CONSULTATION",
            BillType::Surgery => "SURGERY",
            BillType::Diagnostic => "DIAGNOSTIC",
            BillType::Pharmacy => "PHARMACY",
            BillType::Emergency => "EMERGENCY",
        }
    }

    /// Strict parse of the stable name; CSV decoding rejects unknown types
    pub fn from_name(text: &str) -> Option<BillType> {
        Self::ALL
            .iter()
            .copied()
            .find(|bill_type| bill_type.name().eq_ignore_ascii_case(text))
    }
}

impl fmt::Display for BillType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A bill raised against an appointment
///
/// The two fee fields are generic slots; what each slot means depends on the
/// bill type (see [`crate::BillFactory`]). Bills start unpaid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    id: BillId,
    appointment_id: AppointmentId,
    bill_type: BillType,
    consultation_fee: Decimal,
    additional_charges: Decimal,
    is_paid: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Bill {
    pub fn new(
        id: BillId,
        appointment_id: AppointmentId,
        bill_type: BillType,
        consultation_fee: Decimal,
        additional_charges: Decimal,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            appointment_id,
            bill_type,
            consultation_fee,
            additional_charges,
            is_paid: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &BillId {
        &self.id
    }

    pub fn appointment_id(&self) -> &AppointmentId {
        &self.appointment_id
    }

    pub fn bill_type(&self) -> BillType {
        self.bill_type
    }

    pub fn consultation_fee(&self) -> Decimal {
        self.consultation_fee
    }

    pub fn additional_charges(&self) -> Decimal {
        self.additional_charges
    }

    pub fn is_paid(&self) -> bool {
        self.is_paid
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn set_additional_charges(&mut self, charges: Decimal) {
        self.additional_charges = charges;
        self.touch();
    }

    pub fn set_paid(&mut self, paid: bool) {
        self.is_paid = paid;
        self.touch();
    }

    /// Marks the bill as paid
    ///
    /// Idempotent: paying an already-paid bill is accepted and changes
    /// nothing beyond the updated timestamp.
    pub fn process_payment(&mut self) {
        self.is_paid = true;
        self.touch();
    }

    /// Opt-in validity check; never enforced by the store
    ///
    /// A zero consultation fee is valid - diagnostic and pharmacy bills
    /// carry their whole amount in the additional-charges slot.
    pub fn is_valid(&self) -> bool {
        !self.id.as_str().is_empty()
            && !self.appointment_id.as_str().is_empty()
            && self.consultation_fee >= Decimal::ZERO
    }

    /// Renders the printable statement block for this bill
    pub fn render_statement(&self, calculator: &BillCalculator) -> String {
        let divider = "=".repeat(40);
        let rule = "-".repeat(40);
        let mut out = String::new();
        out.push_str(&format!("\n{divider}\n"));
        out.push_str("           MEDITRACK BILL              \n");
        out.push_str(&format!("{divider}\n"));
        out.push_str(&format!("Bill ID: {}\n", self.id));
        out.push_str(&format!("Appointment ID: {}\n", self.appointment_id));
        out.push_str(&format!("Bill Type: {}\n", self.bill_type));
        out.push_str(&format!("{rule}\n"));
        out.push_str(&format!("Consultation Fee: ₹{:.2}\n", self.consultation_fee));
        out.push_str(&format!(
            "Additional Charges: ₹{:.2}\n",
            self.additional_charges
        ));
        out.push_str(&format!(
            "Service Charge: ₹{:.2}\n",
            calculator.service_charge()
        ));
        out.push_str(&format!("{rule}\n"));
        out.push_str(&format!("Subtotal: ₹{:.2}\n", calculator.subtotal(self)));
        out.push_str(&format!(
            "Tax ({:.0}%): ₹{:.2}\n",
            calculator.tax_rate() * Decimal::from(100),
            calculator.tax(self)
        ));
        out.push_str(&format!("{divider}\n"));
        out.push_str(&format!("TOTAL: ₹{:.2}\n", calculator.total(self)));
        out.push_str(&format!("{divider}\n"));
        out.push_str(&format!(
            "Status: {}\n",
            if self.is_paid { "PAID" } else { "UNPAID" }
        ));
        out.push_str(&format!("{divider}\n"));
        out
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Identified for Bill {
    type Id = BillId;

    fn id(&self) -> &BillId {
        &self.id
    }
}

impl PartialEq for Bill {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Bill {}

impl fmt::Display for Bill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bill[ID={}, Type={}, Appointment={}, Paid={}]",
            self.id, self.bill_type, self.appointment_id, self.is_paid
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_bill() -> Bill {
        Bill::new(
            BillId::new("BILL4001"),
            AppointmentId::new("APT3001"),
            BillType::Consultation,
            dec!(1000),
            dec!(200),
        )
    }

    #[test]
    fn test_new_bill_starts_unpaid() {
        assert!(!sample_bill().is_paid());
    }

    #[test]
    fn test_process_payment_is_idempotent() {
        let mut bill = sample_bill();
        bill.process_payment();
        assert!(bill.is_paid());
        bill.process_payment();
        assert!(bill.is_paid());
    }

    #[test]
    fn test_zero_consultation_fee_is_valid() {
        let bill = Bill::new(
            BillId::new("BILL4002"),
            AppointmentId::new("APT3001"),
            BillType::Pharmacy,
            Decimal::ZERO,
            dec!(350),
        );
        assert!(bill.is_valid());
    }

    #[test]
    fn test_negative_consultation_fee_is_invalid() {
        let bill = Bill::new(
            BillId::new("BILL4003"),
            AppointmentId::new("APT3001"),
            BillType::Consultation,
            dec!(-1),
            Decimal::ZERO,
        );
        assert!(!bill.is_valid());
    }

    #[test]
    fn test_bill_type_strict_parse() {
        assert_eq!(BillType::from_name("SURGERY"), Some(BillType::Surgery));
        assert_eq!(BillType::from_name("surgery"), Some(BillType::Surgery));
        assert_eq!(BillType::from_name("MASSAGE"), None);
    }

    #[test]
    fn test_statement_contains_totals() {
        let bill = sample_bill();
        let statement = bill.render_statement(&BillCalculator::default());
        assert!(statement.contains("Subtotal: ₹1250.00"));
        assert!(statement.contains("TOTAL: ₹1475.00"));
        assert!(statement.contains("Status: UNPAID"));
    }
}
