//! Patient entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{Identified, PatientId};

use crate::Searchable;

/// A patient registered with the clinic
///
/// The allergies list is owned exclusively by the patient: reads return an
/// independent copy and writes go through [`Patient::add_allergy`] or
/// [`Patient::set_allergies`]. Cloning a patient duplicates the list, so a
/// clone and its original never share mutable state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    id: PatientId,
    name: String,
    age: u32,
    contact: String,
    medical_history: String,
    allergies: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Patient {
    pub fn new(
        id: PatientId,
        name: impl Into<String>,
        age: u32,
        contact: impl Into<String>,
        medical_history: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            age,
            contact: contact.into(),
            medical_history: medical_history.into(),
            allergies: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &PatientId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn medical_history(&self) -> &str {
        &self.medical_history
    }

    /// Returns an independent copy of the allergies list
    pub fn allergies(&self) -> Vec<String> {
        self.allergies.clone()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.touch();
    }

    pub fn set_age(&mut self, age: u32) {
        self.age = age;
        self.touch();
    }

    pub fn set_contact(&mut self, contact: impl Into<String>) {
        self.contact = contact.into();
        self.touch();
    }

    pub fn set_medical_history(&mut self, history: impl Into<String>) {
        self.medical_history = history.into();
        self.touch();
    }

    pub fn add_allergy(&mut self, allergy: impl Into<String>) {
        self.allergies.push(allergy.into());
        self.touch();
    }

    /// Replaces the allergies list with the patient's own copy of `allergies`
    pub fn set_allergies(&mut self, allergies: Vec<String>) {
        self.allergies = allergies;
        self.touch();
    }

    /// Opt-in validity check; never enforced by the store
    pub fn is_valid(&self) -> bool {
        !self.id.as_str().is_empty() && !self.name.is_empty() && self.age > 0
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Identified for Patient {
    type Id = PatientId;

    fn id(&self) -> &PatientId {
        &self.id
    }
}

impl Searchable for Patient {
    /// Substring match on name, exact case-insensitive id match, or
    /// substring match on the contact number
    fn matches(&self, keyword: &str) -> bool {
        let keyword_lower = keyword.to_lowercase();
        self.name.to_lowercase().contains(&keyword_lower)
            || self.id.as_str().eq_ignore_ascii_case(keyword)
            || self.contact.contains(keyword)
    }
}

impl PartialEq for Patient {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Patient {}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Patient[ID={}, Name={}, Age={}, Contact={}, Allergies={}]",
            self.id,
            self.name,
            self.age,
            self.contact,
            self.allergies.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_patient() -> Patient {
        let mut patient = Patient::new(
            PatientId::new("PAT2001"),
            "Anil Kumar",
            32,
            "9123456780",
            "Asthma since childhood",
        );
        patient.add_allergy("Penicillin");
        patient.add_allergy("Dust");
        patient
    }

    #[test]
    fn test_clone_allergies_are_independent() {
        let original = sample_patient();
        let mut cloned = original.clone();
        cloned.add_allergy("Pollen");

        assert_eq!(original.allergies(), vec!["Penicillin", "Dust"]);
        assert_eq!(cloned.allergies(), vec!["Penicillin", "Dust", "Pollen"]);
    }

    #[test]
    fn test_allergies_read_is_a_copy() {
        let patient = sample_patient();
        let mut copy = patient.allergies();
        copy.push("Latex".to_string());

        assert_eq!(patient.allergies().len(), 2);
    }

    #[test]
    fn test_set_allergies_owns_its_copy() {
        let mut patient = sample_patient();
        let replacement = vec!["Soy".to_string()];
        patient.set_allergies(replacement.clone());

        assert_eq!(patient.allergies(), replacement);
    }

    #[test]
    fn test_matches_contact_substring() {
        let patient = sample_patient();
        assert!(patient.matches("912345"));
        assert!(patient.matches("anil"));
        assert!(patient.matches("pat2001"));
        assert!(!patient.matches("2001"));
    }

    #[test]
    fn test_validity_requires_positive_age() {
        let mut patient = sample_patient();
        assert!(patient.is_valid());
        patient.set_age(0);
        assert!(!patient.is_valid());
    }
}
