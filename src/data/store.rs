use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use super::record::{Record, RecordField};
use crate::core::error::{AyurgenixError, Result};

/// Immutable, source-ordered view of the loaded dataset.
pub type RecordSet = Arc<Vec<Arc<Record>>>;

enum RecordSource {
    File(PathBuf),
    Inline(String),
    Preloaded,
}

/// Lazily loaded remedy dataset. The first `load` parses the source; every
/// concurrent caller awaits that same in-flight load.
pub struct RecordStore {
    source: RecordSource,
    records: OnceCell<RecordSet>,
    loads: AtomicUsize,
}

impl RecordStore {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            source: RecordSource::File(path.into()),
            records: OnceCell::new(),
            loads: AtomicUsize::new(0),
        }
    }

    pub fn from_csv(text: impl Into<String>) -> Self {
        Self {
            source: RecordSource::Inline(text.into()),
            records: OnceCell::new(),
            loads: AtomicUsize::new(0),
        }
    }

    /// Wraps records that are already in memory. Rows with a blank `Disease`
    /// are dropped the same way a file load drops them.
    pub fn from_records(records: Vec<Record>) -> Self {
        let set: RecordSet = Arc::new(keep_identified(records).into_iter().map(Arc::new).collect());
        Self {
            source: RecordSource::Preloaded,
            records: OnceCell::new_with(Some(set)),
            loads: AtomicUsize::new(0),
        }
    }

    pub async fn load(&self) -> Result<RecordSet> {
        let records = self
            .records
            .get_or_try_init(|| async {
                self.loads.fetch_add(1, Ordering::SeqCst);
                let parsed = match &self.source {
                    RecordSource::File(path) => {
                        let path = path.clone();
                        tokio::task::spawn_blocking(move || load_csv_file(&path))
                            .await
                            .map_err(|e| AyurgenixError::Internal(format!("dataset load task failed: {e}")))??
                    }
                    RecordSource::Inline(text) => parse_records(text.as_bytes())?,
                    RecordSource::Preloaded => Vec::new(),
                };
                info!("Remedy dataset loaded: {} records", parsed.len());
                Ok::<RecordSet, AyurgenixError>(Arc::new(parsed.into_iter().map(Arc::new).collect()))
            })
            .await?;

        Ok(Arc::clone(records))
    }

    pub fn loaded(&self) -> Option<RecordSet> {
        self.records.get().cloned()
    }

    pub fn is_loaded(&self) -> bool {
        self.records.initialized()
    }

    /// Number of times the source has actually been parsed.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    /// Forgets the cached dataset so the next `load` parses the source again.
    /// Preloaded stores keep their records.
    pub fn reset(&mut self) {
        if matches!(self.source, RecordSource::Preloaded) {
            return;
        }
        self.records.take();
    }
}

fn load_csv_file(path: &Path) -> Result<Vec<Record>> {
    info!("Loading remedy dataset from {}", path.display());
    let file = File::open(path).map_err(|e| {
        AyurgenixError::DataLoad(format!("cannot open dataset {}: {e}", path.display()))
    })?;
    parse_records(file)
}

/// Parses CSV text with a header row into records, in source order.
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(AyurgenixError::DataLoad("dataset has no header row".to_string()));
    }
    let disease_column = RecordField::Disease.column();
    if !headers.iter().any(|h| h == disease_column) {
        return Err(AyurgenixError::DataLoad(format!(
            "dataset header has no '{disease_column}' column"
        )));
    }

    // Unknown columns map to None and are ignored.
    let columns: Vec<Option<RecordField>> = headers
        .iter()
        .map(|h| RecordField::from_str(h).ok())
        .collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let mut record = Record::default();
        // Short rows leave the trailing fields empty.
        for (field, value) in columns.iter().zip(row.iter()) {
            if let Some(field) = field {
                record.set(*field, value);
            }
        }
        records.push(record);
    }

    let records = keep_identified(records);
    debug!(
        "Parsed {} remedy records ({} of {} columns recognised)",
        records.len(),
        columns.iter().filter(|c| c.is_some()).count(),
        headers.len()
    );
    Ok(records)
}

fn keep_identified(records: Vec<Record>) -> Vec<Record> {
    let total = records.len();
    let kept: Vec<Record> = records
        .into_iter()
        .filter(|r| !r.disease.trim().is_empty())
        .collect();

    let skipped = total - kept.len();
    if skipped > 0 {
        warn!("Skipped {} dataset rows with an empty Disease value", skipped);
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::SAMPLE_CSV;
    use std::io::Write;

    #[test]
    fn test_parse_preserves_order_and_skips_blank_disease() {
        let records = parse_records(SAMPLE_CSV.as_bytes()).unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.disease.as_str()).collect();
        assert_eq!(
            names,
            vec!["Hypertension", "Migraine", "Common Cold", "Asthma", "Hypertension"]
        );
        assert_eq!(records[0].hindi_name, "उच्च रक्तचाप");
        assert_eq!(records[0].symptoms, "dizziness, high blood pressure, headache");
        assert_eq!(records[0].prognosis, "");
    }

    #[test]
    fn test_parse_empty_input_is_data_load_error() {
        let err = parse_records("".as_bytes()).unwrap_err();
        assert!(matches!(err, AyurgenixError::DataLoad(_)));
    }

    #[test]
    fn test_parse_requires_disease_column() {
        let err = parse_records("Name,Symptoms\nflu,fever\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Disease"));
    }

    #[test]
    fn test_parse_tolerates_short_rows_and_blank_lines() {
        let csv = "Disease,Symptoms,Prognosis\nFlu,fever\n\nGout,joint pain,good\n";
        let records = parse_records(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].prognosis, "");
        assert_eq!(records[1].prognosis, "good");
    }

    #[test]
    fn test_parse_ignores_unknown_columns() {
        let csv = "Disease,Notes,Risk Factors\nAsthma,internal note,smoking\nGout\n";
        let records = parse_records(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].risk_factors, "smoking");
        assert_eq!(records[1].disease, "Gout");
        assert_eq!(records[1].risk_factors, "");
    }

    #[tokio::test]
    async fn test_missing_file_is_data_load_error() {
        let store = RecordStore::from_path("/nonexistent/dataset.csv");
        let err = store.load().await.unwrap_err();
        assert!(matches!(err, AyurgenixError::DataLoad(_)));
        assert!(!store.is_loaded());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_CSV.as_bytes()).unwrap();

        let store = RecordStore::from_path(file.path());
        let records = store.load().await.unwrap();
        assert_eq!(records.len(), 5);
        assert_eq!(store.load_count(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_first_access_loads_once() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_CSV.as_bytes()).unwrap();
        let store = Arc::new(RecordStore::from_path(file.path()));

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.load().await.map(|r| r.len()) })
            })
            .collect();

        for handle in futures::future::join_all(handles).await {
            assert_eq!(handle.unwrap().unwrap(), 5);
        }
        assert_eq!(store.load_count(), 1);
    }

    #[tokio::test]
    async fn test_reset_forces_reload() {
        let mut store = RecordStore::from_csv(SAMPLE_CSV);
        let first = store.load().await.unwrap();
        let second = store.load().await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(store.load_count(), 1);

        store.reset();
        assert!(!store.is_loaded());
        store.load().await.unwrap();
        assert_eq!(store.load_count(), 2);
    }

    #[tokio::test]
    async fn test_preloaded_store_never_parses() {
        let mut store = RecordStore::from_records(vec![
            Record::new("Gout", "joint pain"),
            Record::new("  ", "nothing"),
        ]);
        assert!(store.is_loaded());
        store.reset();
        let records = store.load().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(store.load_count(), 0);
    }
}
