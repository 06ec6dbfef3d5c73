//! Line-level encoding for each entity kind
//!
//! Field orders are fixed per entity and must not change: saved files are the
//! interchange format between runs. Sub-fields (patient allergies) join with
//! `;` inside their comma-separated slot. A line that splits into the wrong
//! shape decodes to `None`, with one exception: patient medical history is
//! free text that may itself contain commas, so the patient decode accepts
//! extra fields and rejoins them into the history slot.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use core_kernel::{AppointmentId, BillId, DoctorId, PatientId};
use domain_billing::{Bill, BillType};
use domain_clinic::{Appointment, AppointmentStatus, Doctor, Patient, Specialization};

const APPOINTMENT_TIME_FORMAT: &str = "%d-%m-%Y %H:%M";

/// One-line CSV encoding for an entity kind
pub trait CsvRecord: Sized {
    /// Encodes the entity as a single CSV line (no trailing newline)
    fn to_record(&self) -> String;

    /// Decodes one CSV line; `None` on any shape or field mismatch
    fn from_record(line: &str) -> Option<Self>;
}

impl CsvRecord for Doctor {
    fn to_record(&self) -> String {
        format!(
            "{},{},{},{},{},{}",
            self.id(),
            self.name(),
            self.age(),
            self.contact(),
            self.specialization().name(),
            self.consultation_fee(),
        )
    }

    fn from_record(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 6 {
            return None;
        }
        let age: u32 = fields[2].trim().parse().ok()?;
        let fee: Decimal = fields[5].trim().parse().ok()?;
        Some(Doctor::new(
            DoctorId::new(fields[0].trim()),
            fields[1].trim(),
            age,
            fields[3].trim(),
            Specialization::from_str_lenient(fields[4].trim()),
            fee,
        ))
    }
}

impl CsvRecord for Patient {
    fn to_record(&self) -> String {
        format!(
            "{},{},{},{},{},{}",
            self.id(),
            self.name(),
            self.age(),
            self.contact(),
            self.medical_history(),
            self.allergies().join(";"),
        )
    }

    fn from_record(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 6 {
            return None;
        }
        let age: u32 = fields[2].trim().parse().ok()?;
        // The history slot spans every field between the fixed prefix and
        // the trailing allergy slot, so commas inside it survive a reload.
        let history = fields[4..fields.len() - 1].join(",");
        let mut patient = Patient::new(
            PatientId::new(fields[0].trim()),
            fields[1].trim(),
            age,
            fields[3].trim(),
            history.trim(),
        );
        let allergies: Vec<String> = fields[fields.len() - 1]
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        patient.set_allergies(allergies);
        Some(patient)
    }
}

impl CsvRecord for Appointment {
    fn to_record(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.id(),
            self.patient_id(),
            self.doctor_id(),
            self.appointment_time().format(APPOINTMENT_TIME_FORMAT),
            self.status().name(),
        )
    }

    fn from_record(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 5 {
            return None;
        }
        let time =
            NaiveDateTime::parse_from_str(fields[3].trim(), APPOINTMENT_TIME_FORMAT).ok()?;
        Some(Appointment::new(
            AppointmentId::new(fields[0].trim()),
            PatientId::new(fields[1].trim()),
            DoctorId::new(fields[2].trim()),
            time,
            AppointmentStatus::from_str_lenient(fields[4].trim()),
        ))
    }
}

impl CsvRecord for Bill {
    fn to_record(&self) -> String {
        format!(
            "{},{},{},{},{},{}",
            self.id(),
            self.appointment_id(),
            self.bill_type().name(),
            self.consultation_fee(),
            self.additional_charges(),
            self.is_paid(),
        )
    }

    fn from_record(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 6 {
            return None;
        }
        let bill_type = BillType::from_name(fields[2].trim())?;
        let fee: Decimal = fields[3].trim().parse().ok()?;
        let additional: Decimal = fields[4].trim().parse().ok()?;
        let is_paid: bool = fields[5].trim().parse().ok()?;
        let mut bill = Bill::new(
            BillId::new(fields[0].trim()),
            AppointmentId::new(fields[1].trim()),
            bill_type,
            fee,
            additional,
        );
        if is_paid {
            bill.set_paid(true);
        }
        Some(bill)
    }
}
