//! Strongly-typed identifiers for domain entities
//!
//! Using newtype wrappers around the generated id strings provides type
//! safety and prevents accidental mixing of different identifier kinds.
//! Ids are allocated by [`IdGenerator`] as `<PREFIX><counter>` strings
//! (`DOC1001`, `PAT2001`, ...) and never change after construction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an existing id string (e.g. one read back from CSV)
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the raw id string
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns the identifier prefix used at generation
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.0
            }
        }
    };
}

define_id!(DoctorId, "DOC");
define_id!(PatientId, "PAT");
define_id!(AppointmentId, "APT");
define_id!(BillId, "BILL");

/// The four entity kinds that receive generated identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Doctor,
    Patient,
    Appointment,
    Bill,
}

impl EntityKind {
    /// Returns the id prefix for this kind
    pub fn prefix(&self) -> &'static str {
        match self {
            EntityKind::Doctor => DoctorId::prefix(),
            EntityKind::Patient => PatientId::prefix(),
            EntityKind::Appointment => AppointmentId::prefix(),
            EntityKind::Bill => BillId::prefix(),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::Doctor => "Doctor",
            EntityKind::Patient => "Patient",
            EntityKind::Appointment => "Appointment",
            EntityKind::Bill => "Bill",
        })
    }
}

/// Process-wide id allocator
///
/// One counter per entity kind, each atomically incremented so allocation is
/// safe even under concurrent callers (the rest of the system assumes a
/// single writer, but id allocation makes no such assumption). Construct one
/// instance at startup and pass it by reference (or `Arc`) to every call site
/// that needs fresh ids; there is no hidden global.
#[derive(Debug)]
pub struct IdGenerator {
    doctor_counter: AtomicU64,
    patient_counter: AtomicU64,
    appointment_counter: AtomicU64,
    bill_counter: AtomicU64,
}

impl IdGenerator {
    /// Creates a generator with the standard counter seeds
    ///
    /// Doctors start at 1000, patients at 2000, appointments at 3000 and
    /// bills at 4000; the first allocated doctor id is therefore `DOC1001`.
    pub fn new() -> Self {
        Self {
            doctor_counter: AtomicU64::new(1000),
            patient_counter: AtomicU64::new(2000),
            appointment_counter: AtomicU64::new(3000),
            bill_counter: AtomicU64::new(4000),
        }
    }

    /// Allocates the next id for the given kind as a raw string
    pub fn next_id(&self, kind: EntityKind) -> String {
        let counter = match kind {
            EntityKind::Doctor => &self.doctor_counter,
            EntityKind::Patient => &self.patient_counter,
            EntityKind::Appointment => &self.appointment_counter,
            EntityKind::Bill => &self.bill_counter,
        };
        let value = counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{}{}", kind.prefix(), value)
    }

    /// Allocates the next doctor id
    pub fn next_doctor_id(&self) -> DoctorId {
        DoctorId::new(self.next_id(EntityKind::Doctor))
    }

    /// Allocates the next patient id
    pub fn next_patient_id(&self) -> PatientId {
        PatientId::new(self.next_id(EntityKind::Patient))
    }

    /// Allocates the next appointment id
    pub fn next_appointment_id(&self) -> AppointmentId {
        AppointmentId::new(self.next_id(EntityKind::Appointment))
    }

    /// Allocates the next bill id
    pub fn next_bill_id(&self) -> BillId {
        BillId::new(self.next_id(EntityKind::Bill))
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_ids_use_seeded_counters() {
        let ids = IdGenerator::new();
        assert_eq!(ids.next_doctor_id().as_str(), "DOC1001");
        assert_eq!(ids.next_patient_id().as_str(), "PAT2001");
        assert_eq!(ids.next_appointment_id().as_str(), "APT3001");
        assert_eq!(ids.next_bill_id().as_str(), "BILL4001");
    }

    #[test]
    fn test_counters_are_independent() {
        let ids = IdGenerator::new();
        ids.next_doctor_id();
        ids.next_doctor_id();
        assert_eq!(ids.next_doctor_id().as_str(), "DOC1003");
        // Allocating doctors never advances the patient counter
        assert_eq!(ids.next_patient_id().as_str(), "PAT2001");
    }

    #[test]
    fn test_ids_are_monotonic_per_kind() {
        let ids = IdGenerator::new();
        let mut previous = 0u64;
        for _ in 0..100 {
            let id = ids.next_id(EntityKind::Bill);
            let value: u64 = id.strip_prefix("BILL").unwrap().parse().unwrap();
            assert!(value > previous);
            previous = value;
        }
    }

    #[test]
    fn test_allocation_is_safe_across_threads() {
        use std::collections::HashSet;
        use std::sync::Arc;

        let ids = Arc::new(IdGenerator::new());
        let mut handles = Vec::new();
        for _ in 0..4 {
            let ids = Arc::clone(&ids);
            handles.push(std::thread::spawn(move || {
                (0..250)
                    .map(|_| ids.next_id(EntityKind::Appointment))
                    .collect::<Vec<_>>()
            }));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate id allocated");
            }
        }
        assert_eq!(seen.len(), 1000);
    }

    #[test]
    fn test_typed_id_display_and_conversion() {
        let id = DoctorId::new("DOC1234");
        assert_eq!(id.to_string(), "DOC1234");
        assert_eq!(DoctorId::from("DOC1234"), id);
        let raw: String = id.into();
        assert_eq!(raw, "DOC1234");
    }
}
