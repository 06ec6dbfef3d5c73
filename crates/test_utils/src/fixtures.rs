//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the clinic
//! system. These fixtures are designed to be consistent and predictable for
//! unit tests.

use chrono::{NaiveDate, NaiveDateTime};
use core_kernel::{AppointmentId, BillId, DoctorId, PatientId};
use domain_billing::{Bill, BillType};
use domain_clinic::{Appointment, AppointmentStatus, Doctor, Patient, Specialization};
use rust_decimal_macros::dec;

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// First doctor id a fresh generator produces
    pub fn doctor_id() -> DoctorId {
        DoctorId::new("DOC1001")
    }

    /// First patient id a fresh generator produces
    pub fn patient_id() -> PatientId {
        PatientId::new("PAT2001")
    }

    /// First appointment id a fresh generator produces
    pub fn appointment_id() -> AppointmentId {
        AppointmentId::new("APT3001")
    }

    /// First bill id a fresh generator produces
    pub fn bill_id() -> BillId {
        BillId::new("BILL4001")
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard appointment slot (Sep 1, 2026 at 10:30)
    pub fn morning_slot() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 9, 1)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    /// Afternoon slot on the same day
    pub fn afternoon_slot() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 9, 1)
            .unwrap()
            .and_hms_opt(15, 0, 0)
            .unwrap()
    }

    /// A slot on the following day
    pub fn next_day_slot() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 9, 2)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }
}

/// Fixture for entity test data
pub struct EntityFixtures;

impl EntityFixtures {
    /// A cardiologist with a 1500 consultation fee
    pub fn cardiologist() -> Doctor {
        Doctor::new(
            IdFixtures::doctor_id(),
            "Dr. Asha Mehta",
            45,
            "9876543210",
            Specialization::Cardiologist,
            dec!(1500),
        )
    }

    /// A general physician with a 600 consultation fee
    pub fn general_physician() -> Doctor {
        Doctor::new(
            DoctorId::new("DOC1002"),
            "Dr. Rohan Iyer",
            38,
            "9876500001",
            Specialization::GeneralPhysician,
            dec!(600),
        )
    }

    /// A patient with one allergy on record
    pub fn patient() -> Patient {
        let mut patient = Patient::new(
            IdFixtures::patient_id(),
            "Kiran Rao",
            34,
            "9123456780",
            "Hypertension, managed with medication",
        );
        patient.add_allergy("Penicillin");
        patient
    }

    /// A scheduled appointment between the fixture doctor and patient
    pub fn scheduled_appointment() -> Appointment {
        Appointment::new(
            IdFixtures::appointment_id(),
            IdFixtures::patient_id(),
            IdFixtures::doctor_id(),
            TemporalFixtures::morning_slot(),
            AppointmentStatus::Scheduled,
        )
    }

    /// An unpaid consultation bill with the reference fee figures
    pub fn consultation_bill() -> Bill {
        Bill::new(
            IdFixtures::bill_id(),
            IdFixtures::appointment_id(),
            BillType::Consultation,
            dec!(1000),
            dec!(200),
        )
    }
}
