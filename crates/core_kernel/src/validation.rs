//! Common field validators
//!
//! Validation is opt-in: stores and services never invoke these on their own.
//! Callers (typically the input boundary) run them explicitly before handing
//! an entity to a service.

use rust_decimal::Decimal;

use crate::error::CoreError;

/// Rejects empty or whitespace-only strings
pub fn require_not_empty(value: &str, field: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Rejects zero and negative amounts
pub fn require_positive(value: Decimal, field: &str) -> Result<(), CoreError> {
    if value <= Decimal::ZERO {
        return Err(CoreError::validation(format!("{field} must be positive")));
    }
    Ok(())
}

/// Rejects ages outside the plausible 1..=150 range
pub fn require_age(age: u32) -> Result<(), CoreError> {
    if age == 0 || age > 150 {
        return Err(CoreError::validation(format!("Invalid age: {age}")));
    }
    Ok(())
}

/// Rejects contact numbers that are not exactly 10 ASCII digits
pub fn require_phone(phone: &str) -> Result<(), CoreError> {
    if phone.len() != 10 || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(CoreError::validation(
            "Invalid phone number. Must be 10 digits.",
        ));
    }
    Ok(())
}
