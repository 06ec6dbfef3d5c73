//! Sample data seeding for a first run

use rust_decimal_macros::dec;

use chrono::NaiveDate;
use domain_clinic::{Appointment, AppointmentStatus, Doctor, Patient, Specialization};

use crate::app::ClinicApp;

/// Seeds a small roster so the menus have something to show on a fresh start
pub fn seed_sample_data(app: &mut ClinicApp) {
    let cardiologist = Doctor::new(
        app.ids.next_doctor_id(),
        "Dr. Asha Mehta",
        45,
        "9876543210",
        Specialization::Cardiologist,
        dec!(1500),
    );
    let physician = Doctor::new(
        app.ids.next_doctor_id(),
        "Dr. Rohan Iyer",
        38,
        "9876500001",
        Specialization::GeneralPhysician,
        dec!(600),
    );

    let mut first_patient = Patient::new(
        app.ids.next_patient_id(),
        "Kiran Rao",
        34,
        "9123456780",
        "Hypertension, managed with medication",
    );
    first_patient.add_allergy("Penicillin");
    let second_patient = Patient::new(
        app.ids.next_patient_id(),
        "Meera Nair",
        28,
        "9123456781",
        "No significant history",
    );

    let appointment = Appointment::new(
        app.ids.next_appointment_id(),
        first_patient.id().clone(),
        cardiologist.id().clone(),
        NaiveDate::from_ymd_opt(2026, 9, 1)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap(),
        AppointmentStatus::Scheduled,
    );

    let bill = app
        .bill_factory
        .create_consultation_bill(appointment.id().clone(), cardiologist.consultation_fee());

    app.doctors.add_doctor(cardiologist);
    app.doctors.add_doctor(physician);
    app.patients.add_patient(first_patient);
    app.patients.add_patient(second_patient);
    app.appointments.schedule_appointment(appointment);
    app.billing.add_bill(bill);
}
