//! Integration tests for the clinic services
//!
//! Exercises the doctor, patient, and appointment services together the way
//! the interactive layer drives them.

use core_kernel::{AppointmentId, DoctorId, PatientId};
use domain_clinic::{
    AppointmentService, AppointmentStatus, ClinicError, DoctorService, PatientService,
    Specialization,
};
use rust_decimal_macros::dec;
use test_utils::{
    EntityFixtures, TestAppointmentBuilder, TestDoctorBuilder, TestPatientBuilder,
};

// Doctor service

#[test]
fn registering_and_fetching_a_doctor() {
    let mut service = DoctorService::new();
    service.add_doctor(
        TestDoctorBuilder::new()
            .with_id("DOC1001")
            .with_name("Dr. Asha Mehta")
            .with_specialization(Specialization::Cardiologist)
            .build(),
    );

    let doctor = service
        .get_doctor_by_id(&DoctorId::new("DOC1001"))
        .expect("doctor should be present");
    assert_eq!(doctor.name(), "Dr. Asha Mehta");
    assert_eq!(doctor.specialization(), Specialization::Cardiologist);
}

#[test]
fn doctor_search_matches_name_specialization_and_exact_id() {
    let mut service = DoctorService::new();
    service.add_doctor(
        TestDoctorBuilder::new()
            .with_id("DOC1001")
            .with_name("Dr. Asha Mehta")
            .with_specialization(Specialization::Cardiologist)
            .build(),
    );
    service.add_doctor(
        TestDoctorBuilder::new()
            .with_id("DOC1002")
            .with_name("Dr. Rohan Iyer")
            .with_specialization(Specialization::Dermatologist)
            .build(),
    );

    assert_eq!(service.search_doctors("mehta").len(), 1);
    assert_eq!(service.search_doctors("cardio").len(), 1);
    assert_eq!(service.search_doctors("doc1002").len(), 1);
    // A partial id is not an id match and does not hit any name
    assert!(service.search_doctors("DOC100").is_empty());
}

#[test]
fn doctors_by_specialization_come_back_sorted_by_name() {
    let mut service = DoctorService::new();
    service.add_doctor(
        TestDoctorBuilder::new()
            .with_id("DOC1001")
            .with_name("Dr. Zane Kapoor")
            .with_specialization(Specialization::Orthopedic)
            .build(),
    );
    service.add_doctor(
        TestDoctorBuilder::new()
            .with_id("DOC1002")
            .with_name("Dr. Asha Mehta")
            .with_specialization(Specialization::Orthopedic)
            .build(),
    );

    let orthopedics = service.doctors_by_specialization(Specialization::Orthopedic);
    let names: Vec<&str> = orthopedics.iter().map(|d| d.name()).collect();
    assert_eq!(names, vec!["Dr. Asha Mehta", "Dr. Zane Kapoor"]);
}

#[test]
fn average_fee_is_zero_for_an_empty_roster() {
    let service = DoctorService::new();
    assert_eq!(service.average_consultation_fee(), dec!(0));
}

#[test]
fn average_fee_over_the_roster() {
    let mut service = DoctorService::new();
    service.add_doctor(
        TestDoctorBuilder::new()
            .with_id("DOC1001")
            .with_consultation_fee(dec!(500))
            .build(),
    );
    service.add_doctor(
        TestDoctorBuilder::new()
            .with_id("DOC1002")
            .with_consultation_fee(dec!(1500))
            .build(),
    );
    assert_eq!(service.average_consultation_fee(), dec!(1000));
}

#[test]
fn fixture_roster_wires_together() {
    let mut doctors = DoctorService::new();
    let mut patients = PatientService::new();
    let mut appointments = AppointmentService::new();

    let doctor = EntityFixtures::cardiologist();
    let patient = EntityFixtures::patient();
    let appointment = EntityFixtures::scheduled_appointment();
    assert_eq!(appointment.doctor_id(), doctor.id());
    assert_eq!(appointment.patient_id(), patient.id());

    doctors.add_doctor(doctor);
    patients.add_patient(patient);
    appointments.schedule_appointment(appointment);

    let booked = appointments.appointments_by_doctor(&DoctorId::new("DOC1001"));
    assert_eq!(booked.len(), 1);
    assert_eq!(booked[0].status(), AppointmentStatus::Scheduled);
}

// Patient service

#[test]
fn patient_search_and_exact_lookup() {
    let mut service = PatientService::new();
    service.add_patient(
        TestPatientBuilder::new()
            .with_id("PAT2001")
            .with_name("Kiran Rao")
            .build(),
    );
    service.add_patient(
        TestPatientBuilder::new()
            .with_id("PAT2002")
            .with_name("Meera Nair")
            .build(),
    );

    assert_eq!(service.search_patients("rao").len(), 1);

    // Exact lookup requires the whole id; substring lookup does not
    assert!(service.find_patient("PAT200", true).is_none());
    assert!(service.find_patient("PAT2001", true).is_some());
    assert!(service.find_patient("2002", false).is_some());
}

#[test]
fn age_range_bounds_are_inclusive() {
    let mut service = PatientService::new();
    for (id, age) in [("PAT2001", 20), ("PAT2002", 25), ("PAT2003", 30), ("PAT2004", 35)] {
        service.add_patient(TestPatientBuilder::new().with_id(id).with_age(age).build());
    }

    let in_range = service.patients_in_age_range(25, 30);
    let mut ages: Vec<u32> = in_range.iter().map(|p| p.age()).collect();
    ages.sort_unstable();
    assert_eq!(ages, vec![25, 30]);
}

#[test]
fn stored_patient_allergies_are_isolated_from_callers() {
    let mut service = PatientService::new();
    service.add_patient(
        TestPatientBuilder::new()
            .with_id("PAT2001")
            .with_allergy("Penicillin")
            .build(),
    );

    let mut copy = service
        .get_patient_by_id(&PatientId::new("PAT2001"))
        .unwrap()
        .allergies();
    copy.push("Dust".to_string());

    let stored = service
        .get_patient_by_id(&PatientId::new("PAT2001"))
        .unwrap();
    assert_eq!(stored.allergies().len(), 1);
}

// Appointment service

#[test]
fn scheduling_then_confirming_and_completing() {
    let mut service = AppointmentService::new();
    service.schedule_appointment(TestAppointmentBuilder::new().with_id("APT3001").build());

    service
        .confirm_appointment(&AppointmentId::new("APT3001"))
        .unwrap();
    assert_eq!(
        service
            .get_appointment(&AppointmentId::new("APT3001"))
            .unwrap()
            .status(),
        AppointmentStatus::Confirmed
    );

    service
        .complete_appointment(&AppointmentId::new("APT3001"))
        .unwrap();
    assert_eq!(
        service
            .get_appointment(&AppointmentId::new("APT3001"))
            .unwrap()
            .status(),
        AppointmentStatus::Completed
    );
}

#[test]
fn missing_appointment_is_a_named_error() {
    let service = AppointmentService::new();
    let missing = AppointmentId::new("APT9999");
    assert_eq!(
        service.get_appointment(&missing),
        Err(ClinicError::AppointmentNotFound(missing.clone()))
    );
}

#[test]
fn transitions_on_missing_appointments_leave_the_store_untouched() {
    let mut service = AppointmentService::new();
    service.schedule_appointment(TestAppointmentBuilder::new().with_id("APT3001").build());

    let result = service.cancel_appointment(&AppointmentId::new("APT9999"));
    assert!(result.is_err());
    assert_eq!(service.appointment_count(), 1);
    assert_eq!(
        service
            .get_appointment(&AppointmentId::new("APT3001"))
            .unwrap()
            .status(),
        AppointmentStatus::Scheduled
    );
}

#[test]
fn per_doctor_counts_aggregate_across_patients() {
    let mut service = AppointmentService::new();
    service.schedule_appointment(
        TestAppointmentBuilder::new()
            .with_id("APT3001")
            .with_doctor_id("DOC1001")
            .with_patient_id("PAT2001")
            .build(),
    );
    service.schedule_appointment(
        TestAppointmentBuilder::new()
            .with_id("APT3002")
            .with_doctor_id("DOC1001")
            .with_patient_id("PAT2002")
            .build(),
    );
    service.schedule_appointment(
        TestAppointmentBuilder::new()
            .with_id("APT3003")
            .with_doctor_id("DOC1002")
            .with_patient_id("PAT2001")
            .build(),
    );

    let counts = service.appointments_per_doctor();
    assert_eq!(counts.get(&DoctorId::new("DOC1001")), Some(&2));
    assert_eq!(counts.get(&DoctorId::new("DOC1002")), Some(&1));

    assert_eq!(
        service
            .appointments_by_patient(&PatientId::new("PAT2001"))
            .len(),
        2
    );
}

// Property tests over randomly generated rosters

mod proptests {
    use super::*;
    use proptest::prelude::*;
    use test_utils::{age_strategy, positive_fee_strategy, specialization_strategy};

    proptest! {
        #[test]
        fn a_registered_doctor_is_found_by_their_own_name(
            specialization in specialization_strategy(),
            fee in positive_fee_strategy(),
        ) {
            let mut service = DoctorService::new();
            service.add_doctor(
                TestDoctorBuilder::new()
                    .with_name("Dr. Nisha Kulkarni")
                    .with_specialization(specialization)
                    .with_consultation_fee(fee)
                    .build(),
            );
            prop_assert_eq!(service.search_doctors("kulkarni").len(), 1);
            prop_assert_eq!(service.average_consultation_fee(), fee);
        }

        #[test]
        fn a_patient_always_falls_in_their_own_age_range(age in age_strategy()) {
            let mut service = PatientService::new();
            service.add_patient(TestPatientBuilder::new().with_age(age).build());
            prop_assert_eq!(service.patients_in_age_range(age, age).len(), 1);
        }
    }
}
