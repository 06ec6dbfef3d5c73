//! Interactive console menus
//!
//! A numbered main menu with one submenu per area. All input goes through
//! the `read_*` helpers, which reprompt on unparseable input and treat end
//! of input as a request to leave the current menu.

use std::io::BufRead;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use tracing::warn;

use core_kernel::validation::{require_age, require_not_empty, require_phone, require_positive};
use core_kernel::{AppointmentId, BillId, CoreError, DoctorId, PatientId};
use domain_billing::BillType;
use domain_clinic::{Appointment, AppointmentStatus, Doctor, Patient, Specialization};

use crate::app::ClinicApp;

const TIME_FORMAT: &str = "%d-%m-%Y %H:%M";

/// Runs the main menu loop until the user exits or input ends
pub fn run(app: &mut ClinicApp, input: &mut impl BufRead) -> std::io::Result<()> {
    loop {
        println!();
        println!("===== MediTrack =====");
        println!("1. Doctors");
        println!("2. Patients");
        println!("3. Appointments");
        println!("4. Billing");
        println!("5. Analytics");
        println!("6. Save data");
        println!("0. Exit");

        let Some(choice) = read_line(input, "Choice: ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => doctor_menu(app, input)?,
            "2" => patient_menu(app, input)?,
            "3" => appointment_menu(app, input)?,
            "4" => billing_menu(app, input)?,
            "5" => analytics_menu(app, input)?,
            "6" => {
                if let Err(error) = app.save_to_disk() {
                    warn!(%error, "save failed");
                    println!("Could not save data: {error}");
                } else {
                    println!("Data saved to {}", app.config.data_dir);
                }
            }
            "0" => return Ok(()),
            other => println!("Unknown option: {other}"),
        }
    }
}

fn doctor_menu(app: &mut ClinicApp, input: &mut impl BufRead) -> std::io::Result<()> {
    loop {
        println!();
        println!("--- Doctors ---");
        println!("1. Register doctor");
        println!("2. List doctors");
        println!("3. Search doctors");
        println!("4. By specialization");
        println!("5. Average consultation fee");
        println!("0. Back");

        let Some(choice) = read_line(input, "Choice: ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => {
                let Some(doctor) = read_doctor(app, input)? else {
                    return Ok(());
                };
                if let Err(error) = validate_doctor(&doctor) {
                    println!("Not saved: {error}");
                    continue;
                }
                println!("Registered {doctor}");
                app.doctors.add_doctor(doctor);
            }
            "2" => {
                for doctor in app.doctors.get_all_doctors() {
                    println!("{doctor}");
                }
            }
            "3" => {
                let Some(keyword) = read_line(input, "Keyword: ")? else {
                    return Ok(());
                };
                for doctor in app.doctors.search_doctors(&keyword) {
                    println!("{doctor}");
                }
            }
            "4" => {
                let Some(text) = read_line(input, "Specialization: ")? else {
                    return Ok(());
                };
                let specialization = Specialization::from_str_lenient(&text);
                for doctor in app.doctors.doctors_by_specialization(specialization) {
                    println!("{doctor}");
                }
            }
            "5" => println!(
                "Average consultation fee: ₹{:.2}",
                app.doctors.average_consultation_fee()
            ),
            "0" => return Ok(()),
            other => println!("Unknown option: {other}"),
        }
    }
}

fn patient_menu(app: &mut ClinicApp, input: &mut impl BufRead) -> std::io::Result<()> {
    loop {
        println!();
        println!("--- Patients ---");
        println!("1. Register patient");
        println!("2. List patients");
        println!("3. Search patients");
        println!("4. By age range");
        println!("0. Back");

        let Some(choice) = read_line(input, "Choice: ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => {
                let Some(patient) = read_patient(app, input)? else {
                    return Ok(());
                };
                if let Err(error) = validate_patient(&patient) {
                    println!("Not saved: {error}");
                    continue;
                }
                println!("Registered {patient}");
                app.patients.add_patient(patient);
            }
            "2" => {
                for patient in app.patients.get_all_patients() {
                    println!("{patient}");
                }
            }
            "3" => {
                let Some(keyword) = read_line(input, "Keyword: ")? else {
                    return Ok(());
                };
                for patient in app.patients.search_patients(&keyword) {
                    println!("{patient}");
                }
            }
            "4" => {
                let Some(min_age) = read_u32(input, "Minimum age: ")? else {
                    return Ok(());
                };
                let Some(max_age) = read_u32(input, "Maximum age: ")? else {
                    return Ok(());
                };
                for patient in app.patients.patients_in_age_range(min_age, max_age) {
                    println!("{patient}");
                }
            }
            "0" => return Ok(()),
            other => println!("Unknown option: {other}"),
        }
    }
}

fn appointment_menu(app: &mut ClinicApp, input: &mut impl BufRead) -> std::io::Result<()> {
    loop {
        println!();
        println!("--- Appointments ---");
        println!("1. Schedule appointment");
        println!("2. List appointments");
        println!("3. Confirm appointment");
        println!("4. Complete appointment");
        println!("5. Cancel appointment");
        println!("6. By doctor");
        println!("0. Back");

        let Some(choice) = read_line(input, "Choice: ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => {
                let Some(appointment) = read_appointment(app, input)? else {
                    return Ok(());
                };
                println!("Scheduled {appointment}");
                app.appointments.schedule_appointment(appointment);
            }
            "2" => {
                for appointment in app.appointments.get_all_appointments() {
                    println!("{appointment}");
                }
            }
            "3" | "4" | "5" => {
                let Some(id) = read_line(input, "Appointment id: ")? else {
                    return Ok(());
                };
                let id = AppointmentId::new(id);
                let result = match choice.as_str() {
                    "3" => app.appointments.confirm_appointment(&id),
                    "4" => app.appointments.complete_appointment(&id),
                    _ => app.appointments.cancel_appointment(&id),
                };
                match result {
                    Ok(()) => println!("Updated {id}"),
                    Err(error) => println!("{error}"),
                }
            }
            "6" => {
                let Some(id) = read_line(input, "Doctor id: ")? else {
                    return Ok(());
                };
                for appointment in app.appointments.appointments_by_doctor(&DoctorId::new(id)) {
                    println!("{appointment}");
                }
            }
            "0" => return Ok(()),
            other => println!("Unknown option: {other}"),
        }
    }
}

fn billing_menu(app: &mut ClinicApp, input: &mut impl BufRead) -> std::io::Result<()> {
    loop {
        println!();
        println!("--- Billing ---");
        println!("1. Create bill");
        println!("2. List bills");
        println!("3. Pay bill");
        println!("4. Print statement");
        println!("0. Back");

        let Some(choice) = read_line(input, "Choice: ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => {
                let Some(bill) = read_bill(app, input)? else {
                    return Ok(());
                };
                println!("Created {bill}");
                app.billing.add_bill(bill);
            }
            "2" => {
                for bill in app.billing.get_all_bills() {
                    println!("{bill}");
                }
            }
            "3" => {
                let Some(id) = read_line(input, "Bill id: ")? else {
                    return Ok(());
                };
                let id = BillId::new(id);
                app.billing.process_bill_payment(&id);
                match app.billing.get_bill_by_id(&id) {
                    Some(bill) if bill.is_paid() => println!("Paid {id}"),
                    _ => println!("No bill with id {id}"),
                }
            }
            "4" => {
                let Some(id) = read_line(input, "Bill id: ")? else {
                    return Ok(());
                };
                match app.billing.get_bill_by_id(&BillId::new(id)) {
                    Some(bill) => println!("{}", bill.render_statement(app.billing.calculator())),
                    None => println!("No such bill."),
                }
            }
            "0" => return Ok(()),
            other => println!("Unknown option: {other}"),
        }
    }
}

fn analytics_menu(app: &mut ClinicApp, input: &mut impl BufRead) -> std::io::Result<()> {
    loop {
        println!();
        println!("--- Analytics ---");
        println!("1. Appointments per doctor");
        println!("2. Average consultation fee");
        println!("3. Revenue and pending");
        println!("0. Back");

        let Some(choice) = read_line(input, "Choice: ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => {
                for (doctor_id, count) in app.appointments.appointments_per_doctor() {
                    let name = app
                        .doctors
                        .get_doctor_by_id(&doctor_id)
                        .map(|d| d.name().to_string())
                        .unwrap_or_else(|| doctor_id.to_string());
                    println!("{name}: {count}");
                }
            }
            "2" => println!(
                "Average consultation fee: ₹{:.2}",
                app.doctors.average_consultation_fee()
            ),
            "3" => {
                println!("Total revenue: ₹{:.2}", app.billing.total_revenue());
                println!("Total pending: ₹{:.2}", app.billing.total_pending());
            }
            "0" => return Ok(()),
            other => println!("Unknown option: {other}"),
        }
    }
}

fn validate_doctor(doctor: &Doctor) -> Result<(), CoreError> {
    require_not_empty(doctor.name(), "Name")?;
    require_age(doctor.age())?;
    require_phone(doctor.contact())?;
    require_positive(doctor.consultation_fee(), "Consultation fee")
}

fn validate_patient(patient: &Patient) -> Result<(), CoreError> {
    require_not_empty(patient.name(), "Name")?;
    require_age(patient.age())?;
    require_phone(patient.contact())
}

fn read_doctor(app: &mut ClinicApp, input: &mut impl BufRead) -> std::io::Result<Option<Doctor>> {
    let Some(name) = read_line(input, "Name: ")? else {
        return Ok(None);
    };
    let Some(age) = read_u32(input, "Age: ")? else {
        return Ok(None);
    };
    let Some(contact) = read_line(input, "Contact: ")? else {
        return Ok(None);
    };
    let Some(text) = read_line(input, "Specialization: ")? else {
        return Ok(None);
    };
    let Some(fee) = read_decimal(input, "Consultation fee: ")? else {
        return Ok(None);
    };
    Ok(Some(Doctor::new(
        app.ids.next_doctor_id(),
        name,
        age,
        contact,
        Specialization::from_str_lenient(&text),
        fee,
    )))
}

fn read_patient(
    app: &mut ClinicApp,
    input: &mut impl BufRead,
) -> std::io::Result<Option<Patient>> {
    let Some(name) = read_line(input, "Name: ")? else {
        return Ok(None);
    };
    let Some(age) = read_u32(input, "Age: ")? else {
        return Ok(None);
    };
    let Some(contact) = read_line(input, "Contact: ")? else {
        return Ok(None);
    };
    let Some(history) = read_line(input, "Medical history: ")? else {
        return Ok(None);
    };
    let Some(allergies) = read_line(input, "Allergies (';' separated, empty for none): ")? else {
        return Ok(None);
    };
    let mut patient = Patient::new(app.ids.next_patient_id(), name, age, contact, history);
    for allergy in allergies.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        patient.add_allergy(allergy);
    }
    Ok(Some(patient))
}

fn read_appointment(
    app: &mut ClinicApp,
    input: &mut impl BufRead,
) -> std::io::Result<Option<Appointment>> {
    let Some(patient_id) = read_line(input, "Patient id: ")? else {
        return Ok(None);
    };
    let Some(doctor_id) = read_line(input, "Doctor id: ")? else {
        return Ok(None);
    };
    let Some(time) = read_datetime(input, "Time (dd-mm-yyyy hh:mm): ")? else {
        return Ok(None);
    };
    Ok(Some(Appointment::new(
        app.ids.next_appointment_id(),
        PatientId::new(patient_id),
        DoctorId::new(doctor_id),
        time,
        AppointmentStatus::Scheduled,
    )))
}

fn read_bill(
    app: &mut ClinicApp,
    input: &mut impl BufRead,
) -> std::io::Result<Option<domain_billing::Bill>> {
    let Some(appointment_id) = read_line(input, "Appointment id: ")? else {
        return Ok(None);
    };
    let appointment_id = AppointmentId::new(appointment_id);

    println!("Bill types: CONSULTATION, SURGERY, DIAGNOSTIC, PHARMACY, EMERGENCY");
    let bill_type = loop {
        let Some(text) = read_line(input, "Bill type: ")? else {
            return Ok(None);
        };
        match BillType::from_name(&text) {
            Some(bill_type) => break bill_type,
            None => println!("Unknown bill type, try again."),
        }
    };

    let bill = match bill_type {
        BillType::Consultation => {
            let Some(fee) = read_decimal(input, "Consultation fee: ")? else {
                return Ok(None);
            };
            app.bill_factory.create_consultation_bill(appointment_id, fee)
        }
        BillType::Surgery => {
            let Some(fee) = read_decimal(input, "Surgery fee: ")? else {
                return Ok(None);
            };
            let Some(equipment) = read_decimal(input, "Equipment charges: ")? else {
                return Ok(None);
            };
            app.bill_factory
                .create_surgery_bill(appointment_id, fee, equipment)
        }
        BillType::Diagnostic => {
            let Some(tests) = read_decimal(input, "Test charges: ")? else {
                return Ok(None);
            };
            app.bill_factory.create_diagnostic_bill(appointment_id, tests)
        }
        BillType::Pharmacy => {
            let Some(medicines) = read_decimal(input, "Medicine charges: ")? else {
                return Ok(None);
            };
            app.bill_factory.create_pharmacy_bill(appointment_id, medicines)
        }
        BillType::Emergency => {
            let Some(fee) = read_decimal(input, "Emergency fee: ")? else {
                return Ok(None);
            };
            let Some(additional) = read_decimal(input, "Additional charges: ")? else {
                return Ok(None);
            };
            app.bill_factory
                .create_emergency_bill(appointment_id, fee, additional)
        }
    };
    Ok(Some(bill))
}

/// Reads one trimmed line; `None` when the input stream has ended
fn read_line(input: &mut impl BufRead, prompt: &str) -> std::io::Result<Option<String>> {
    print!("{prompt}");
    use std::io::Write;
    std::io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn read_u32(input: &mut impl BufRead, prompt: &str) -> std::io::Result<Option<u32>> {
    loop {
        let Some(line) = read_line(input, prompt)? else {
            return Ok(None);
        };
        match line.parse() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("Enter a whole number."),
        }
    }
}

fn read_decimal(input: &mut impl BufRead, prompt: &str) -> std::io::Result<Option<Decimal>> {
    loop {
        let Some(line) = read_line(input, prompt)? else {
            return Ok(None);
        };
        match line.parse() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("Enter an amount."),
        }
    }
}

fn read_datetime(
    input: &mut impl BufRead,
    prompt: &str,
) -> std::io::Result<Option<NaiveDateTime>> {
    loop {
        let Some(line) = read_line(input, prompt)? else {
            return Ok(None);
        };
        match NaiveDateTime::parse_from_str(&line, TIME_FORMAT) {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("Enter a time as dd-mm-yyyy hh:mm."),
        }
    }
}
