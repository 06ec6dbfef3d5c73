//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use chrono::{NaiveDate, NaiveDateTime};
use domain_billing::BillType;
use domain_clinic::{AppointmentStatus, Specialization};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating any specialization
pub fn specialization_strategy() -> impl Strategy<Value = Specialization> {
    proptest::sample::select(Specialization::ALL.to_vec())
}

/// Strategy for generating any appointment status
pub fn appointment_status_strategy() -> impl Strategy<Value = AppointmentStatus> {
    proptest::sample::select(AppointmentStatus::ALL.to_vec())
}

/// Strategy for generating any bill type
pub fn bill_type_strategy() -> impl Strategy<Value = BillType> {
    proptest::sample::select(BillType::ALL.to_vec())
}

/// Strategy for generating non-negative fee amounts with two decimal places
pub fn fee_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_00).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for generating strictly positive fee amounts
pub fn positive_fee_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_00).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for generating valid patient or doctor ages
pub fn age_strategy() -> impl Strategy<Value = u32> {
    1u32..=150
}

/// Strategy for generating ten-digit contact numbers
pub fn contact_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(0u8..10, 10)
        .prop_map(|digits| digits.iter().map(|d| (b'0' + d) as char).collect())
}

/// Strategy for generating appointment slots within 2026
pub fn appointment_time_strategy() -> impl Strategy<Value = NaiveDateTime> {
    (1u32..=12, 1u32..=28, 8u32..=18, proptest::sample::select(vec![0u32, 15, 30, 45]))
        .prop_map(|(month, day, hour, minute)| {
            NaiveDate::from_ymd_opt(2026, month, day)
                .unwrap()
                .and_hms_opt(hour, minute, 0)
                .unwrap()
        })
}
