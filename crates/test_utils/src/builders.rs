//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use chrono::NaiveDateTime;
use core_kernel::{AppointmentId, BillId, DoctorId, PatientId};
use domain_billing::{Bill, BillType};
use domain_clinic::{Appointment, AppointmentStatus, Doctor, Patient, Specialization};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::{IdFixtures, TemporalFixtures};

/// Builder for constructing test doctors
pub struct TestDoctorBuilder {
    id: DoctorId,
    name: String,
    age: u32,
    contact: String,
    specialization: Specialization,
    consultation_fee: Decimal,
}

impl Default for TestDoctorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDoctorBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: IdFixtures::doctor_id(),
            name: "Dr. Asha Mehta".to_string(),
            age: 45,
            contact: "9876543210".to_string(),
            specialization: Specialization::GeneralPhysician,
            consultation_fee: dec!(800),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = DoctorId::new(id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = contact.into();
        self
    }

    pub fn with_specialization(mut self, specialization: Specialization) -> Self {
        self.specialization = specialization;
        self
    }

    pub fn with_consultation_fee(mut self, fee: Decimal) -> Self {
        self.consultation_fee = fee;
        self
    }

    pub fn build(self) -> Doctor {
        Doctor::new(
            self.id,
            self.name,
            self.age,
            self.contact,
            self.specialization,
            self.consultation_fee,
        )
    }
}

/// Builder for constructing test patients
pub struct TestPatientBuilder {
    id: PatientId,
    name: String,
    age: u32,
    contact: String,
    medical_history: String,
    allergies: Vec<String>,
}

impl Default for TestPatientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPatientBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: IdFixtures::patient_id(),
            name: "Kiran Rao".to_string(),
            age: 34,
            contact: "9123456780".to_string(),
            medical_history: "No significant history".to_string(),
            allergies: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = PatientId::new(id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = contact.into();
        self
    }

    pub fn with_medical_history(mut self, history: impl Into<String>) -> Self {
        self.medical_history = history.into();
        self
    }

    pub fn with_allergy(mut self, allergy: impl Into<String>) -> Self {
        self.allergies.push(allergy.into());
        self
    }

    pub fn build(self) -> Patient {
        let mut patient = Patient::new(
            self.id,
            self.name,
            self.age,
            self.contact,
            self.medical_history,
        );
        for allergy in self.allergies {
            patient.add_allergy(allergy);
        }
        patient
    }
}

/// Builder for constructing test appointments
pub struct TestAppointmentBuilder {
    id: AppointmentId,
    patient_id: PatientId,
    doctor_id: DoctorId,
    appointment_time: NaiveDateTime,
    status: AppointmentStatus,
    notes: Vec<(String, String)>,
}

impl Default for TestAppointmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppointmentBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: IdFixtures::appointment_id(),
            patient_id: IdFixtures::patient_id(),
            doctor_id: IdFixtures::doctor_id(),
            appointment_time: TemporalFixtures::morning_slot(),
            status: AppointmentStatus::Scheduled,
            notes: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = AppointmentId::new(id);
        self
    }

    pub fn with_patient_id(mut self, id: impl Into<String>) -> Self {
        self.patient_id = PatientId::new(id);
        self
    }

    pub fn with_doctor_id(mut self, id: impl Into<String>) -> Self {
        self.doctor_id = DoctorId::new(id);
        self
    }

    pub fn with_time(mut self, time: NaiveDateTime) -> Self {
        self.appointment_time = time;
        self
    }

    pub fn with_status(mut self, status: AppointmentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_note(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.notes.push((key.into(), value.into()));
        self
    }

    pub fn build(self) -> Appointment {
        let mut appointment = Appointment::new(
            self.id,
            self.patient_id,
            self.doctor_id,
            self.appointment_time,
            self.status,
        );
        for (key, value) in self.notes {
            appointment.add_note(key, value);
        }
        appointment
    }
}

/// Builder for constructing test bills
pub struct TestBillBuilder {
    id: BillId,
    appointment_id: AppointmentId,
    bill_type: BillType,
    consultation_fee: Decimal,
    additional_charges: Decimal,
    is_paid: bool,
}

impl Default for TestBillBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBillBuilder {
    /// Creates a new builder with the reference fee figures
    pub fn new() -> Self {
        Self {
            id: IdFixtures::bill_id(),
            appointment_id: IdFixtures::appointment_id(),
            bill_type: BillType::Consultation,
            consultation_fee: dec!(1000),
            additional_charges: dec!(200),
            is_paid: false,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = BillId::new(id);
        self
    }

    pub fn with_appointment_id(mut self, id: impl Into<String>) -> Self {
        self.appointment_id = AppointmentId::new(id);
        self
    }

    pub fn with_bill_type(mut self, bill_type: BillType) -> Self {
        self.bill_type = bill_type;
        self
    }

    pub fn with_consultation_fee(mut self, fee: Decimal) -> Self {
        self.consultation_fee = fee;
        self
    }

    pub fn with_additional_charges(mut self, charges: Decimal) -> Self {
        self.additional_charges = charges;
        self
    }

    pub fn paid(mut self) -> Self {
        self.is_paid = true;
        self
    }

    pub fn build(self) -> Bill {
        let mut bill = Bill::new(
            self.id,
            self.appointment_id,
            self.bill_type,
            self.consultation_fee,
            self.additional_charges,
        );
        if self.is_paid {
            bill.process_payment();
        }
        bill
    }
}
