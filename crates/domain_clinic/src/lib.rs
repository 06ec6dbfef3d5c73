//! Clinic Domain - doctors, patients, and appointments
//!
//! This crate holds the people-and-scheduling side of the record system:
//! the entity types, keyword search, and the services that wrap one
//! [`core_kernel::EntityStore`] each.
//!
//! # Entity invariants
//!
//! - Ids are immutable after construction
//! - Every mutating setter refreshes `updated_at`
//! - Equality is defined solely by id within a kind
//! - Owned collections (allergies, notes) are only ever exposed as copies

pub mod appointment;
pub mod doctor;
pub mod error;
pub mod patient;
pub mod services;

pub use appointment::{Appointment, AppointmentStatus};
pub use doctor::{Doctor, Specialization};
pub use error::ClinicError;
pub use patient::Patient;
pub use services::{AppointmentService, DoctorService, PatientService};

/// Capability for entities that support keyword matching
pub trait Searchable {
    /// Returns true if the entity matches the given keyword
    fn matches(&self, keyword: &str) -> bool;
}
