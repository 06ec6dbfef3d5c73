//! Doctor entity and specializations

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{DoctorId, Identified};

use crate::Searchable;

/// Medical specializations offered by the clinic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Specialization {
    GeneralPhysician,
    Cardiologist,
    Dermatologist,
    Orthopedic,
    Ophthalmologist,
    Pediatrician,
    Neurologist,
    Psychiatrist,
    Dentist,
    EntSpecialist,
}

impl Specialization {
    pub const ALL: [Specialization; 10] = [
        Specialization::GeneralPhysician,
        Specialization::Cardiologist,
        Specialization::Dermatologist,
        Specialization::Orthopedic,
        Specialization::Ophthalmologist,
        Specialization::Pediatrician,
        Specialization::Neurologist,
        Specialization::Psychiatrist,
        Specialization::Dentist,
        Specialization::EntSpecialist,
    ];

    /// Human-readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            Specialization::GeneralPhysician => "General Physician",
            Specialization::Cardiologist => "Cardiologist",
            Specialization::Dermatologist => "Dermatologist",
            Specialization::Orthopedic => "Orthopedic",
            Specialization::Ophthalmologist => "Ophthalmologist",
            Specialization::Pediatrician => "Pediatrician",
            Specialization::Neurologist => "Neurologist",
            Specialization::Psychiatrist => "Psychiatrist",
            Specialization::Dentist => "Dentist",
            Specialization::EntSpecialist => "ENT Specialist",
        }
    }

    /// Stable name used in CSV records
    pub fn name(&self) -> &'static str {
        match self {
            Specialization::GeneralPhysician => "GENERAL_PHYSICIAN",
            Specialization::Cardiologist => "CARDIOLOGIST",
            Specialization::Dermatologist => "DERMATOLOGIST",
            Specialization::Orthopedic => "ORTHOPEDIC",
            Specialization::Ophthalmologist => "OPHTHALMOLOGIST",
            Specialization::Pediatrician => "PEDIATRICIAN",
            Specialization::Neurologist => "NEUROLOGIST",
            Specialization::Psychiatrist => "PSYCHIATRIST",
            Specialization::Dentist => "DENTIST",
            Specialization::EntSpecialist => "ENT_SPECIALIST",
        }
    }

    /// Lenient parse matching either the stable name or the display label,
    /// case-insensitively
    ///
    /// Unknown text falls back to `GeneralPhysician` rather than failing;
    /// callers that need strict parsing must check the input themselves.
    pub fn from_str_lenient(text: &str) -> Specialization {
        Self::ALL
            .iter()
            .copied()
            .find(|spec| {
                spec.name().eq_ignore_ascii_case(text)
                    || spec.display_name().eq_ignore_ascii_case(text)
            })
            .unwrap_or(Specialization::GeneralPhysician)
    }
}

impl fmt::Display for Specialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A doctor on the clinic roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    id: DoctorId,
    name: String,
    age: u32,
    contact: String,
    specialization: Specialization,
    consultation_fee: Decimal,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Doctor {
    pub fn new(
        id: DoctorId,
        name: impl Into<String>,
        age: u32,
        contact: impl Into<String>,
        specialization: Specialization,
        consultation_fee: Decimal,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            age,
            contact: contact.into(),
            specialization,
            consultation_fee,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &DoctorId {
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

    pub fn specialization(&self) -> Specialization {
        self.specialization
    }

    pub fn consultation_fee(&self) -> Decimal {
        self.consultation_fee
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

    pub fn set_specialization(&mut self, specialization: Specialization) {
        self.specialization = specialization;
        self.touch();
    }

    pub fn set_consultation_fee(&mut self, fee: Decimal) {
        self.consultation_fee = fee;
        self.touch();
    }

    /// Opt-in validity check; never enforced by the store
    pub fn is_valid(&self) -> bool {
        !self.id.as_str().is_empty()
            && !self.name.is_empty()
            && self.age > 0
            && self.consultation_fee > Decimal::ZERO
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Identified for Doctor {
    type Id = DoctorId;

    fn id(&self) -> &DoctorId {
        &self.id
    }
}

impl Searchable for Doctor {
    /// Case-insensitive substring match on name or specialization label,
    /// or an exact case-insensitive id match
    fn matches(&self, keyword: &str) -> bool {
        let keyword_lower = keyword.to_lowercase();
        self.name.to_lowercase().contains(&keyword_lower)
            || self
                .specialization
                .display_name()
                .to_lowercase()
                .contains(&keyword_lower)
            || self.id.as_str().eq_ignore_ascii_case(keyword)
    }
}

impl PartialEq for Doctor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Doctor {}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Doctor[ID={}, Name={}, Specialization={}, Fee={:.2}]",
            self.id, self.name, self.specialization, self.consultation_fee
        )
    }
}
