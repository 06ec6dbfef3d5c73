//! Billing service and revenue analytics

use rust_decimal::Decimal;
use tracing::{debug, info};

use core_kernel::{AppointmentId, BillId, EntityStore};

use crate::bill::Bill;
use crate::calculator::BillCalculator;

/// In-memory billing service over an [`EntityStore`] of bills
#[derive(Debug, Default)]
pub struct BillService {
    store: EntityStore<Bill>,
    calculator: BillCalculator,
}

impl BillService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_calculator(calculator: BillCalculator) -> Self {
        Self {
            store: EntityStore::new(),
            calculator,
        }
    }

    pub fn calculator(&self) -> &BillCalculator {
        &self.calculator
    }

    pub fn add_bill(&mut self, bill: Bill) {
        debug!(bill_id = %bill.id(), bill_type = %bill.bill_type(), "adding bill");
        self.store.add(bill);
    }

    pub fn get_bill_by_id(&self, id: &BillId) -> Option<&Bill> {
        self.store.get_by_id(id)
    }

    pub fn get_all_bills(&self) -> Vec<Bill> {
        self.store.get_all()
    }

    pub fn bills_by_appointment(&self, appointment_id: &AppointmentId) -> Vec<Bill> {
        self.store
            .get_all()
            .into_iter()
            .filter(|bill| bill.appointment_id() == appointment_id)
            .collect()
    }

    pub fn paid_bills(&self) -> Vec<Bill> {
        self.store
            .get_all()
            .into_iter()
            .filter(|bill| bill.is_paid())
            .collect()
    }

    pub fn unpaid_bills(&self) -> Vec<Bill> {
        self.store
            .get_all()
            .into_iter()
            .filter(|bill| !bill.is_paid())
            .collect()
    }

    /// Sum of computed totals over paid bills; zero when none are paid
    pub fn total_revenue(&self) -> Decimal {
        self.paid_bills()
            .iter()
            .map(|bill| self.calculator.total(bill))
            .sum()
    }

    /// Sum of computed totals over unpaid bills; zero when all are settled
    pub fn total_pending(&self) -> Decimal {
        self.unpaid_bills()
            .iter()
            .map(|bill| self.calculator.total(bill))
            .sum()
    }

    pub fn update_bill(&mut self, bill: Bill) {
        self.store.update(bill);
    }

    /// Marks the bill paid when present; an unknown id is a quiet no-op
    pub fn process_bill_payment(&mut self, id: &BillId) {
        if let Some(bill) = self.store.get_by_id(id) {
            let mut paid = bill.clone();
            paid.process_payment();
            info!(bill_id = %id, "bill payment processed");
            self.store.update(paid);
        } else {
            debug!(bill_id = %id, "payment requested for unknown bill, ignoring");
        }
    }

    pub fn delete_bill(&mut self, id: &BillId) {
        self.store.delete(id);
    }

    pub fn bill_count(&self) -> usize {
        self.store.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bill::BillType;
    use rust_decimal_macros::dec;

    fn bill(id: &str, fee: Decimal, extra: Decimal) -> Bill {
        bill_for(id, "APT3001", fee, extra)
    }

    fn bill_for(id: &str, appointment: &str, fee: Decimal, extra: Decimal) -> Bill {
        Bill::new(
            BillId::new(id),
            AppointmentId::new(appointment),
            BillType::Consultation,
            fee,
            extra,
        )
    }

    #[test]
    fn test_payment_moves_bill_between_partitions() {
        let mut service = BillService::new();
        service.add_bill(bill("BILL4001", dec!(1000), dec!(200)));
        assert_eq!(service.unpaid_bills().len(), 1);
        assert!(service.paid_bills().is_empty());

        service.process_bill_payment(&BillId::new("BILL4001"));
        assert!(service.unpaid_bills().is_empty());
        assert_eq!(service.paid_bills().len(), 1);
    }

    #[test]
    fn test_payment_for_unknown_bill_is_a_no_op() {
        let mut service = BillService::new();
        service.add_bill(bill("BILL4001", dec!(1000), dec!(200)));
        service.process_bill_payment(&BillId::new("BILL9999"));
        assert_eq!(service.unpaid_bills().len(), 1);
    }

    #[test]
    fn test_revenue_and_pending_split_on_paid_flag() {
        let mut service = BillService::new();
        service.add_bill(bill("BILL4001", dec!(1000), dec!(200)));
        service.add_bill(bill("BILL4002", dec!(500), dec!(0)));

        // Both unpaid: revenue zero, pending carries both totals.
        assert_eq!(service.total_revenue(), Decimal::ZERO);
        assert_eq!(service.total_pending(), dec!(1475) + dec!(649));

        service.process_bill_payment(&BillId::new("BILL4001"));
        assert_eq!(service.total_revenue(), dec!(1475));
        assert_eq!(service.total_pending(), dec!(649));
    }

    #[test]
    fn test_totals_are_zero_on_empty_store() {
        let service = BillService::new();
        assert_eq!(service.total_revenue(), Decimal::ZERO);
        assert_eq!(service.total_pending(), Decimal::ZERO);
    }

    #[test]
    fn test_bills_by_appointment_filters() {
        let mut service = BillService::new();
        service.add_bill(bill("BILL4001", dec!(1000), dec!(0)));
        service.add_bill(bill_for("BILL4002", "APT3002", dec!(500), dec!(0)));

        let matches = service.bills_by_appointment(&AppointmentId::new("APT3001"));
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id().as_str(), "BILL4001");
    }

    #[test]
    fn test_delete_bill_removes_only_that_bill() {
        let mut service = BillService::new();
        service.add_bill(bill("BILL4001", dec!(1000), dec!(0)));
        service.add_bill(bill("BILL4002", dec!(500), dec!(0)));

        service.delete_bill(&BillId::new("BILL4001"));
        assert_eq!(service.bill_count(), 1);
        assert!(service.get_bill_by_id(&BillId::new("BILL4001")).is_none());

        // deleting an absent id is a no-op
        service.delete_bill(&BillId::new("BILL4001"));
        assert_eq!(service.bill_count(), 1);
    }

    #[test]
    fn test_add_is_an_upsert() {
        let mut service = BillService::new();
        service.add_bill(bill("BILL4001", dec!(1000), dec!(0)));
        service.add_bill(bill("BILL4001", dec!(2000), dec!(0)));
        assert_eq!(service.bill_count(), 1);
        let stored = service.get_bill_by_id(&BillId::new("BILL4001")).unwrap();
        assert_eq!(stored.consultation_fee(), dec!(2000));
    }
}
