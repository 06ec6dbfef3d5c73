//! Appointment entity and status

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use core_kernel::{AppointmentId, DoctorId, Identified, PatientId};

/// Lifecycle status of an appointment
///
/// There is no enforced transition graph: any status may be set from any
/// other by explicit operator action. This permissiveness is intentional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
    Pending,
    NoShow,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 6] = [
        AppointmentStatus::Scheduled,
        AppointmentStatus::Confirmed,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
        AppointmentStatus::Pending,
        AppointmentStatus::NoShow,
    ];

    /// Human-readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "Scheduled",
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
            AppointmentStatus::Pending => "Pending",
            AppointmentStatus::NoShow => "No Show",
        }
    }

    /// Stable name used in CSV records
    pub fn name(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "SCHEDULED",
            AppointmentStatus::Confirmed => "CONFIRMED",
            AppointmentStatus::Completed => "COMPLETED",
            AppointmentStatus::Cancelled => "CANCELLED",
            AppointmentStatus::Pending => "PENDING",
            AppointmentStatus::NoShow => "NO_SHOW",
        }
    }

    /// Lenient parse matching either the stable name or the display label,
    /// case-insensitively; unknown text falls back to `Pending`
    pub fn from_str_lenient(text: &str) -> AppointmentStatus {
        Self::ALL
            .iter()
            .copied()
            .find(|status| {
                status.name().eq_ignore_ascii_case(text)
                    || status.display_name().eq_ignore_ascii_case(text)
            })
            .unwrap_or(AppointmentStatus::Pending)
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A booked appointment between a patient and a doctor
///
/// `patient_id` and `doctor_id` are foreign references, not ownership -
/// deleting a doctor does not cascade to their appointments. The notes
/// mapping is owned exclusively by the appointment and only ever exposed as
/// a copy; cloning duplicates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    id: AppointmentId,
    patient_id: PatientId,
    doctor_id: DoctorId,
    appointment_time: NaiveDateTime,
    status: AppointmentStatus,
    notes: HashMap<String, String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Appointment {
    pub fn new(
        id: AppointmentId,
        patient_id: PatientId,
        doctor_id: DoctorId,
        appointment_time: NaiveDateTime,
        status: AppointmentStatus,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            patient_id,
            doctor_id,
            appointment_time,
            status,
            notes: HashMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &AppointmentId {
        &self.id
    }

    pub fn patient_id(&self) -> &PatientId {
        &self.patient_id
    }

    pub fn doctor_id(&self) -> &DoctorId {
        &self.doctor_id
    }

    pub fn appointment_time(&self) -> NaiveDateTime {
        self.appointment_time
    }

    pub fn status(&self) -> AppointmentStatus {
        self.status
    }

    /// Returns an independent copy of the notes mapping
    pub fn notes(&self) -> HashMap<String, String> {
        self.notes.clone()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn set_appointment_time(&mut self, time: NaiveDateTime) {
        self.appointment_time = time;
        self.touch();
    }

    /// Sets the status unconditionally (no transition graph is enforced)
    pub fn set_status(&mut self, status: AppointmentStatus) {
        self.status = status;
        self.touch();
    }

    pub fn add_note(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.notes.insert(key.into(), value.into());
        self.touch();
    }

    /// Opt-in validity check; never enforced by the store
    pub fn is_valid(&self) -> bool {
        !self.id.as_str().is_empty()
            && !self.patient_id.as_str().is_empty()
            && !self.doctor_id.as_str().is_empty()
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Identified for Appointment {
    type Id = AppointmentId;

    fn id(&self) -> &AppointmentId {
        &self.id
    }
}

impl PartialEq for Appointment {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Appointment {}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Appointment[ID={}, Patient={}, Doctor={}, Time={}, Status={}]",
            self.id, self.patient_id, self.doctor_id, self.appointment_time, self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_appointment() -> Appointment {
        Appointment::new(
            AppointmentId::new("APT3001"),
            PatientId::new("PAT2001"),
            DoctorId::new("DOC1001"),
            NaiveDate::from_ymd_opt(2026, 9, 1)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap(),
            AppointmentStatus::Scheduled,
        )
    }

    #[test]
    fn test_clone_notes_are_independent() {
        let mut original = sample_appointment();
        original.add_note("symptom", "fever");

        let mut cloned = original.clone();
        cloned.add_note("follow-up", "2 weeks");

        assert_eq!(original.notes().len(), 1);
        assert_eq!(cloned.notes().len(), 2);
    }

    #[test]
    fn test_notes_read_is_a_copy() {
        let mut appointment = sample_appointment();
        appointment.add_note("symptom", "fever");

        let mut copy = appointment.notes();
        copy.insert("extra".into(), "entry".into());

        assert_eq!(appointment.notes().len(), 1);
    }

    #[test]
    fn test_any_status_reachable_from_any_other() {
        let mut appointment = sample_appointment();
        appointment.set_status(AppointmentStatus::Completed);
        appointment.set_status(AppointmentStatus::Pending);
        assert_eq!(appointment.status(), AppointmentStatus::Pending);
    }

    #[test]
    fn test_status_lenient_parse_defaults_to_pending() {
        assert_eq!(
            AppointmentStatus::from_str_lenient("no show"),
            AppointmentStatus::NoShow
        );
        assert_eq!(
            AppointmentStatus::from_str_lenient("NO_SHOW"),
            AppointmentStatus::NoShow
        );
        assert_eq!(
            AppointmentStatus::from_str_lenient("garbage"),
            AppointmentStatus::Pending
        );
    }
}
