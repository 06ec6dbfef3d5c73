//! CSV Persistence
//!
//! Flat-file persistence for clinic entities. Each entity kind encodes to a
//! single comma-separated line via [`CsvRecord`]; [`load_entities`] and
//! [`save_entities`] move whole collections between stores and disk.
//!
//! Decoding is deliberately forgiving at the file level: a malformed line is
//! skipped with a warning rather than failing the load, and a missing file
//! reads as an empty collection.

pub mod error;
pub mod record;
pub mod storage;

pub use error::CsvError;
pub use record::CsvRecord;
pub use storage::{load_entities, save_entities};
