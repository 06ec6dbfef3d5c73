//! Application wiring
//!
//! One [`ClinicApp`] owns the id generator, the four services, and the bill
//! factory, and knows how to move their contents to and from the CSV files
//! named by the configuration.

use std::sync::Arc;

use tracing::info;

use core_kernel::IdGenerator;
use domain_billing::{BillFactory, BillService};
use domain_clinic::{AppointmentService, DoctorService, PatientService};
use infra_csv::{load_entities, save_entities, CsvError};

use crate::config::CliConfig;

pub struct ClinicApp {
    pub config: CliConfig,
    pub ids: Arc<IdGenerator>,
    pub doctors: DoctorService,
    pub patients: PatientService,
    pub appointments: AppointmentService,
    pub billing: BillService,
    pub bill_factory: BillFactory,
}

impl ClinicApp {
    pub fn new(config: CliConfig) -> Self {
        let ids = Arc::new(IdGenerator::new());
        let bill_factory = BillFactory::new(Arc::clone(&ids));
        Self {
            config,
            ids,
            doctors: DoctorService::new(),
            patients: PatientService::new(),
            appointments: AppointmentService::new(),
            billing: BillService::new(),
            bill_factory,
        }
    }

    /// Loads all four entity files from the configured data directory
    pub fn load_from_disk(&mut self) -> Result<(), CsvError> {
        for doctor in load_entities(self.config.doctors_file())? {
            self.doctors.add_doctor(doctor);
        }
        for patient in load_entities(self.config.patients_file())? {
            self.patients.add_patient(patient);
        }
        for appointment in load_entities(self.config.appointments_file())? {
            self.appointments.schedule_appointment(appointment);
        }
        for bill in load_entities(self.config.bills_file())? {
            self.billing.add_bill(bill);
        }
        info!(
            doctors = self.doctors.doctor_count(),
            patients = self.patients.patient_count(),
            appointments = self.appointments.appointment_count(),
            bills = self.billing.bill_count(),
            "data loaded"
        );
        Ok(())
    }

    /// Writes all four entity collections to the configured data directory
    pub fn save_to_disk(&self) -> Result<(), CsvError> {
        save_entities(self.config.doctors_file(), &self.doctors.get_all_doctors())?;
        save_entities(self.config.patients_file(), &self.patients.get_all_patients())?;
        save_entities(
            self.config.appointments_file(),
            &self.appointments.get_all_appointments(),
        )?;
        save_entities(self.config.bills_file(), &self.billing.get_all_bills())?;
        info!(data_dir = %self.config.data_dir, "data saved");
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.doctor_count() == 0
            && self.patients.patient_count() == 0
            && self.appointments.appointment_count() == 0
            && self.billing.bill_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::seed_sample_data;
    use tempfile::tempdir;

    #[test]
    fn test_save_then_load_preserves_counts() {
        let dir = tempdir().unwrap();
        let config = CliConfig {
            data_dir: dir.path().to_string_lossy().into_owned(),
            ..CliConfig::default()
        };

        let mut app = ClinicApp::new(config.clone());
        seed_sample_data(&mut app);
        app.save_to_disk().unwrap();

        let mut reloaded = ClinicApp::new(config);
        reloaded.load_from_disk().unwrap();
        assert_eq!(reloaded.doctors.doctor_count(), app.doctors.doctor_count());
        assert_eq!(
            reloaded.patients.patient_count(),
            app.patients.patient_count()
        );
        assert_eq!(
            reloaded.appointments.appointment_count(),
            app.appointments.appointment_count()
        );
        assert_eq!(reloaded.billing.bill_count(), app.billing.bill_count());

        // The seeded history contains a comma; a reload must not truncate
        // it or drop the record.
        let original = app.patients.find_patient("PAT2001", true).unwrap();
        let restored = reloaded.patients.find_patient("PAT2001", true).unwrap();
        assert_eq!(restored.medical_history(), original.medical_history());
        assert_eq!(restored.allergies(), original.allergies());
    }

    #[test]
    fn test_fresh_app_is_empty() {
        let app = ClinicApp::new(CliConfig::default());
        assert!(app.is_empty());
    }
}
