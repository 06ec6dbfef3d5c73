//! Clinic domain errors

use thiserror::Error;

use core_kernel::{AppointmentId, CoreError};

/// Errors raised by the clinic services
///
/// Only appointment lookups signal absence as an error - the status
/// transition helpers need to react to it specifically. Doctor, patient and
/// bill lookups return `Option` instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClinicError {
    #[error("Appointment not found with ID: {0}")]
    AppointmentNotFound(AppointmentId),

    #[error(transparent)]
    Core(#[from] CoreError),
}
