//! Whole-file load and save

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::CsvError;
use crate::record::CsvRecord;

/// Loads every decodable entity from the file at `path`
///
/// A missing file is an empty collection, not an error. Blank lines are
/// ignored and malformed lines are skipped with a warning; only an actual
/// read failure is fatal.
pub fn load_entities<T: CsvRecord>(path: impl AsRef<Path>) -> Result<Vec<T>, CsvError> {
    let path = path.as_ref();
    if !path.exists() {
        info!(path = %path.display(), "data file absent, starting empty");
        return Ok(Vec::new());
    }

    let contents = fs::read_to_string(path).map_err(|e| CsvError::read(path, e))?;
    let mut entities = Vec::new();
    for (number, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match T::from_record(line) {
            Some(entity) => entities.push(entity),
            None => warn!(
                path = %path.display(),
                line = number + 1,
                "skipping malformed record"
            ),
        }
    }
    info!(path = %path.display(), count = entities.len(), "loaded entities");
    Ok(entities)
}

/// Saves the entities to `path`, one record per line, creating parent
/// directories as needed and replacing any existing file
pub fn save_entities<T: CsvRecord>(path: impl AsRef<Path>, entities: &[T]) -> Result<(), CsvError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| CsvError::write(path, e))?;
        }
    }

    let mut contents = String::new();
    for entity in entities {
        contents.push_str(&entity.to_record());
        contents.push('\n');
    }
    fs::write(path, contents).map_err(|e| CsvError::write(path, e))?;
    info!(path = %path.display(), count = entities.len(), "saved entities");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_clinic::Doctor;
    use rust_decimal_macros::dec;
    use tempfile::tempdir;
    use test_utils::TestDoctorBuilder;

    #[test]
    fn test_missing_file_loads_as_empty() {
        let dir = tempdir().unwrap();
        let loaded: Vec<Doctor> = load_entities(dir.path().join("doctors.csv")).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data").join("doctors.csv");

        let doctors = vec![
            TestDoctorBuilder::new().with_id("DOC1001").build(),
            TestDoctorBuilder::new()
                .with_id("DOC1002")
                .with_name("Dr. Rohan Iyer")
                .with_consultation_fee(dec!(600))
                .build(),
        ];
        save_entities(&path, &doctors).unwrap();

        let loaded: Vec<Doctor> = load_entities(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1].name(), "Dr. Rohan Iyer");
        assert_eq!(loaded[1].consultation_fee(), dec!(600));
    }

    #[test]
    fn test_malformed_and_blank_lines_are_skipped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("doctors.csv");
        fs::write(
            &path,
            "DOC1001,Dr. Asha Mehta,45,9876543210,CARDIOLOGIST,1500\n\
             \n\
             this is not a record\n\
             DOC1002,Dr. Rohan Iyer,38,9876500001,GENERAL_PHYSICIAN,600\n",
        )
        .unwrap();

        let loaded: Vec<Doctor> = load_entities(&path).unwrap();
        assert_eq!(loaded.len(), 2);
    }
}
