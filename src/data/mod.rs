

pub mod dedupe;
pub mod medicine;
pub mod record;
pub mod store;

#[cfg(test)]
pub(crate) mod fixtures;

pub use dedupe::{dedupe_csv, DedupeStats};
pub use medicine::{Medicine, MedicineCatalog, MedicineStore, SymptomMapping};
pub use record::{Record, RecordField};
pub use store::{parse_records, RecordSet, RecordStore};
