//! Per-type bill construction
//!
//! Each bill type maps its domain-specific fees into the bill's two generic
//! slots. The mapping is fixed:
//!
//! | Type         | consultation_fee slot | additional_charges slot |
//! |--------------|-----------------------|-------------------------|
//! | Consultation | consultation fee      | 0                       |
//! | Surgery      | surgery fee           | equipment charges       |
//! | Diagnostic   | 0                     | test charges            |
//! | Pharmacy     | 0                     | medicine charges        |
//! | Emergency    | emergency fee         | additional charges      |

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;

use core_kernel::{AppointmentId, IdGenerator};

use crate::bill::{Bill, BillType};

/// Creates bills with generated ids and the per-type fee slot mapping
#[derive(Debug, Clone)]
pub struct BillFactory {
    ids: Arc<IdGenerator>,
}

impl BillFactory {
    pub fn new(ids: Arc<IdGenerator>) -> Self {
        Self { ids }
    }

    pub fn create_consultation_bill(
        &self,
        appointment_id: AppointmentId,
        consultation_fee: Decimal,
    ) -> Bill {
        self.build(
            appointment_id,
            BillType::Consultation,
            consultation_fee,
            Decimal::ZERO,
        )
    }

    pub fn create_surgery_bill(
        &self,
        appointment_id: AppointmentId,
        surgery_fee: Decimal,
        equipment_charges: Decimal,
    ) -> Bill {
        self.build(
            appointment_id,
            BillType::Surgery,
            surgery_fee,
            equipment_charges,
        )
    }

    pub fn create_diagnostic_bill(
        &self,
        appointment_id: AppointmentId,
        test_charges: Decimal,
    ) -> Bill {
        self.build(
            appointment_id,
            BillType::Diagnostic,
            Decimal::ZERO,
            test_charges,
        )
    }

    pub fn create_pharmacy_bill(
        &self,
        appointment_id: AppointmentId,
        medicine_charges: Decimal,
    ) -> Bill {
        self.build(
            appointment_id,
            BillType::Pharmacy,
            Decimal::ZERO,
            medicine_charges,
        )
    }

    pub fn create_emergency_bill(
        &self,
        appointment_id: AppointmentId,
        emergency_fee: Decimal,
        additional_charges: Decimal,
    ) -> Bill {
        self.build(
            appointment_id,
            BillType::Emergency,
            emergency_fee,
            additional_charges,
        )
    }

    /// Generic constructor taking raw slot values for the given type
    pub fn create_bill(
        &self,
        appointment_id: AppointmentId,
        bill_type: BillType,
        consultation_fee: Decimal,
        additional_charges: Decimal,
    ) -> Bill {
        self.build(appointment_id, bill_type, consultation_fee, additional_charges)
    }

    fn build(
        &self,
        appointment_id: AppointmentId,
        bill_type: BillType,
        consultation_fee: Decimal,
        additional_charges: Decimal,
    ) -> Bill {
        let id = self.ids.next_bill_id();
        debug!(bill_id = %id, appointment_id = %appointment_id, %bill_type, "creating bill");
        Bill::new(
            id,
            appointment_id,
            bill_type,
            consultation_fee,
            additional_charges,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn factory() -> BillFactory {
        BillFactory::new(Arc::new(IdGenerator::new()))
    }

    #[test]
    fn test_ids_are_sequential() {
        let factory = factory();
        let first = factory.create_consultation_bill(AppointmentId::new("APT3001"), dec!(500));
        let second = factory.create_consultation_bill(AppointmentId::new("APT3001"), dec!(500));
        assert_eq!(first.id().as_str(), "BILL4001");
        assert_eq!(second.id().as_str(), "BILL4002");
    }

    #[test]
    fn test_consultation_zeroes_additional_slot() {
        let bill = factory().create_consultation_bill(AppointmentId::new("APT3001"), dec!(800));
        assert_eq!(bill.bill_type(), BillType::Consultation);
        assert_eq!(bill.consultation_fee(), dec!(800));
        assert_eq!(bill.additional_charges(), Decimal::ZERO);
    }

    #[test]
    fn test_surgery_fills_both_slots() {
        let bill = factory().create_surgery_bill(
            AppointmentId::new("APT3001"),
            dec!(15000),
            dec!(2500),
        );
        assert_eq!(bill.bill_type(), BillType::Surgery);
        assert_eq!(bill.consultation_fee(), dec!(15000));
        assert_eq!(bill.additional_charges(), dec!(2500));
    }

    #[test]
    fn test_diagnostic_and_pharmacy_use_additional_slot_only() {
        let factory = factory();
        let diagnostic =
            factory.create_diagnostic_bill(AppointmentId::new("APT3001"), dec!(1200));
        assert_eq!(diagnostic.consultation_fee(), Decimal::ZERO);
        assert_eq!(diagnostic.additional_charges(), dec!(1200));

        let pharmacy = factory.create_pharmacy_bill(AppointmentId::new("APT3001"), dec!(350));
        assert_eq!(pharmacy.consultation_fee(), Decimal::ZERO);
        assert_eq!(pharmacy.additional_charges(), dec!(350));
    }

    #[test]
    fn test_generic_create_bill_passes_slots_through() {
        let bill = factory().create_bill(
            AppointmentId::new("APT3001"),
            BillType::Emergency,
            dec!(2000),
            dec!(750),
        );
        assert_eq!(bill.bill_type(), BillType::Emergency);
        assert_eq!(bill.consultation_fee(), dec!(2000));
        assert_eq!(bill.additional_charges(), dec!(750));
        assert!(!bill.is_paid());
    }
}
