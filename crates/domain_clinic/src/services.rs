//! Clinic services
//!
//! Thin query/command layers, each wrapping one [`EntityStore`] and adding
//! domain-specific filters. Services never validate entities on their own;
//! validation is the caller's responsibility.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::{debug, info};

use core_kernel::{AppointmentId, DoctorId, EntityStore, PatientId};

use crate::appointment::{Appointment, AppointmentStatus};
use crate::doctor::{Doctor, Specialization};
use crate::error::ClinicError;
use crate::patient::Patient;
use crate::Searchable;

/// Queries and commands over the doctor roster
#[derive(Debug, Default)]
pub struct DoctorService {
    store: EntityStore<Doctor>,
}

impl DoctorService {
    pub fn new() -> Self {
        Self {
            store: EntityStore::new(),
        }
    }

    pub fn add_doctor(&mut self, doctor: Doctor) {
        debug!(doctor_id = %doctor.id(), "adding doctor");
        self.store.add(doctor);
    }

    pub fn get_doctor_by_id(&self, id: &DoctorId) -> Option<&Doctor> {
        self.store.get_by_id(id)
    }

    pub fn get_all_doctors(&self) -> Vec<Doctor> {
        self.store.get_all()
    }

    /// Keyword search over name, specialization label, and exact id
    pub fn search_doctors(&self, keyword: &str) -> Vec<Doctor> {
        self.store
            .get_all()
            .into_iter()
            .filter(|doctor| doctor.matches(keyword))
            .collect()
    }

    /// Doctors with the given specialization, sorted by name ascending
    pub fn doctors_by_specialization(&self, specialization: Specialization) -> Vec<Doctor> {
        let mut doctors: Vec<Doctor> = self
            .store
            .get_all()
            .into_iter()
            .filter(|doctor| doctor.specialization() == specialization)
            .collect();
        doctors.sort_by(|a, b| a.name().cmp(b.name()));
        doctors
    }

    /// Mean consultation fee across the roster; zero when the roster is empty
    pub fn average_consultation_fee(&self) -> Decimal {
        let doctors = self.store.get_all();
        if doctors.is_empty() {
            return Decimal::ZERO;
        }
        let total: Decimal = doctors.iter().map(|d| d.consultation_fee()).sum();
        total / Decimal::from(doctors.len() as u64)
    }

    /// Writes back a doctor; silent no-op if the id is not stored
    pub fn update_doctor(&mut self, doctor: Doctor) {
        self.store.update(doctor);
    }

    pub fn delete_doctor(&mut self, id: &DoctorId) {
        self.store.delete(id);
    }

    pub fn doctor_count(&self) -> usize {
        self.store.len()
    }
}

/// Queries and commands over registered patients
#[derive(Debug, Default)]
pub struct PatientService {
    store: EntityStore<Patient>,
}

impl PatientService {
    pub fn new() -> Self {
        Self {
            store: EntityStore::new(),
        }
    }

    pub fn add_patient(&mut self, patient: Patient) {
        debug!(patient_id = %patient.id(), "adding patient");
        self.store.add(patient);
    }

    pub fn get_patient_by_id(&self, id: &PatientId) -> Option<&Patient> {
        self.store.get_by_id(id)
    }

    pub fn get_all_patients(&self) -> Vec<Patient> {
        self.store.get_all()
    }

    /// Keyword search over name, exact id, and contact substring
    pub fn search_patients(&self, keyword: &str) -> Vec<Patient> {
        self.store
            .get_all()
            .into_iter()
            .filter(|patient| patient.matches(keyword))
            .collect()
    }

    /// Id lookup with an exact-match toggle
    ///
    /// With `exact_match` the id must match a stored key; otherwise the first
    /// patient whose id contains `id` as a substring is returned. Either way
    /// absence yields `None`.
    pub fn find_patient(&self, id: &str, exact_match: bool) -> Option<Patient> {
        if exact_match {
            return self.store.get_by_id(&PatientId::new(id)).cloned();
        }
        self.store
            .get_all()
            .into_iter()
            .find(|patient| patient.id().as_str().contains(id))
    }

    /// Patients whose age lies in the inclusive range `[min_age, max_age]`
    pub fn patients_in_age_range(&self, min_age: u32, max_age: u32) -> Vec<Patient> {
        self.store
            .get_all()
            .into_iter()
            .filter(|patient| patient.age() >= min_age && patient.age() <= max_age)
            .collect()
    }

    /// Writes back a patient; silent no-op if the id is not stored
    pub fn update_patient(&mut self, patient: Patient) {
        self.store.update(patient);
    }

    pub fn delete_patient(&mut self, id: &PatientId) {
        self.store.delete(id);
    }

    pub fn patient_count(&self) -> usize {
        self.store.len()
    }
}

/// Scheduling and status transitions for appointments
#[derive(Debug, Default)]
pub struct AppointmentService {
    store: EntityStore<Appointment>,
}

impl AppointmentService {
    pub fn new() -> Self {
        Self {
            store: EntityStore::new(),
        }
    }

    pub fn schedule_appointment(&mut self, appointment: Appointment) {
        info!(
            appointment_id = %appointment.id(),
            patient_id = %appointment.patient_id(),
            doctor_id = %appointment.doctor_id(),
            "scheduling appointment"
        );
        self.store.add(appointment);
    }

    /// Looks up an appointment, signalling absence as a named error
    ///
    /// Unlike the other entity lookups this does not return `Option`: the
    /// status-transition helpers depend on reacting to absence specifically.
    pub fn get_appointment(&self, id: &AppointmentId) -> Result<&Appointment, ClinicError> {
        self.store
            .get_by_id(id)
            .ok_or_else(|| ClinicError::AppointmentNotFound(id.clone()))
    }

    pub fn get_all_appointments(&self) -> Vec<Appointment> {
        self.store.get_all()
    }

    pub fn appointments_by_patient(&self, patient_id: &PatientId) -> Vec<Appointment> {
        self.store
            .get_all()
            .into_iter()
            .filter(|apt| apt.patient_id() == patient_id)
            .collect()
    }

    pub fn appointments_by_doctor(&self, doctor_id: &DoctorId) -> Vec<Appointment> {
        self.store
            .get_all()
            .into_iter()
            .filter(|apt| apt.doctor_id() == doctor_id)
            .collect()
    }

    /// Appointment counts grouped by doctor; no ordering guarantee
    pub fn appointments_per_doctor(&self) -> HashMap<DoctorId, u64> {
        let mut counts = HashMap::new();
        for appointment in self.store.get_all() {
            *counts.entry(appointment.doctor_id().clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Writes back an appointment; silent no-op if the id is not stored
    pub fn update_appointment(&mut self, appointment: Appointment) {
        self.store.update(appointment);
    }

    pub fn confirm_appointment(&mut self, id: &AppointmentId) -> Result<(), ClinicError> {
        self.transition(id, AppointmentStatus::Confirmed)
    }

    pub fn complete_appointment(&mut self, id: &AppointmentId) -> Result<(), ClinicError> {
        self.transition(id, AppointmentStatus::Completed)
    }

    pub fn cancel_appointment(&mut self, id: &AppointmentId) -> Result<(), ClinicError> {
        self.transition(id, AppointmentStatus::Cancelled)
    }

    /// Fetch-or-fail, set the status, write back through `update`
    fn transition(
        &mut self,
        id: &AppointmentId,
        status: AppointmentStatus,
    ) -> Result<(), ClinicError> {
        let mut appointment = self.get_appointment(id)?.clone();
        appointment.set_status(status);
        info!(appointment_id = %id, status = %status, "appointment status changed");
        self.store.update(appointment);
        Ok(())
    }

    pub fn appointment_count(&self) -> usize {
        self.store.len()
    }
}
