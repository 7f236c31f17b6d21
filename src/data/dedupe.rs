use std::collections::HashSet;
use std::io::{Read, Write};

use tracing::info;

use super::record::RecordField;
use crate::core::error::{AyurgenixError, Result};


#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DedupeStats {
    pub read: usize,
    pub kept: usize,
    pub dropped: usize,
}

/// Copies a remedy CSV keeping the first row per disease. Names are compared
/// trimmed and lower-cased; every column of a kept row is written unchanged.
pub fn dedupe_csv<R: Read, W: Write>(input: R, output: W) -> Result<DedupeStats> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);
    let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(output);

    let headers = reader.headers()?.clone();
    let disease_column = RecordField::Disease.column();
    let disease_idx = headers
        .iter()
        .position(|h| h.trim() == disease_column)
        .ok_or_else(|| {
            AyurgenixError::DataLoad(format!("dataset header has no '{disease_column}' column"))
        })?;

    writer.write_record(&headers)?;

    let mut seen = HashSet::new();
    let mut stats = DedupeStats::default();
    for row in reader.records() {
        let row = row?;
        stats.read += 1;

        let key = row.get(disease_idx).unwrap_or("").trim().to_lowercase();
        if seen.insert(key) {
            writer.write_record(&row)?;
            stats.kept += 1;
        } else {
            stats.dropped += 1;
        }
    }

    writer.flush()?;
    info!("Deduplicated dataset: {} rows read, {} kept, {} dropped", stats.read, stats.kept, stats.dropped);
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::SAMPLE_CSV;
    use crate::data::store::parse_records;

    #[test]
    fn test_dedupe_sample_dataset() {
        let mut out = Vec::new();
        let stats = dedupe_csv(SAMPLE_CSV.as_bytes(), &mut out).unwrap();

        assert_eq!(stats, DedupeStats { read: 6, kept: 5, dropped: 1 });

        let records = parse_records(out.as_slice()).unwrap();
        let hypertension: Vec<_> = records.iter().filter(|r| r.disease == "Hypertension").collect();
        assert_eq!(hypertension.len(), 1);
        assert_eq!(hypertension[0].medical_history, "Family history of heart disease");
    }

    #[test]
    fn test_dedupe_normalizes_case_and_whitespace() {
        let csv = "Disease,Notes\nFlu,a\n  flu ,b\nFLU,c\nGout,d\n";
        let mut out = Vec::new();
        let stats = dedupe_csv(csv.as_bytes(), &mut out).unwrap();
        assert_eq!(stats.kept, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "Disease,Notes\nFlu,a\nGout,d\n");
    }

    #[test]
    fn test_dedupe_requires_disease_column() {
        let err = dedupe_csv("Name\nFlu\n".as_bytes(), Vec::new()).unwrap_err();
        assert!(matches!(err, AyurgenixError::DataLoad(_)));
    }
}
