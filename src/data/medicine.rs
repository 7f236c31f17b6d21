use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;
use tracing::{info, warn};

use crate::core::error::{AyurgenixError, Result};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medicine {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub composition: String,
    #[serde(default)]
    pub uses: Vec<String>,
    #[serde(default)]
    pub side_effects: Vec<String>,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub dosage: String,
    #[serde(default)]
    pub description: String,
}


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomMapping {
    pub symptom: String,
    #[serde(default)]
    pub medicine_ids: Vec<String>,
}


#[derive(Debug, Clone, Default)]
pub struct MedicineCatalog {
    pub medicines: Vec<Medicine>,
    pub symptoms: Vec<SymptomMapping>,
}

impl MedicineCatalog {
    /// Duplicate medicine ids keep their first occurrence.
    pub fn new(medicines: Vec<Medicine>, symptoms: Vec<SymptomMapping>) -> Self {
        let mut seen = HashSet::new();
        let total = medicines.len();
        let medicines: Vec<Medicine> = medicines
            .into_iter()
            .filter(|m| seen.insert(m.id.clone()))
            .collect();

        if medicines.len() < total {
            warn!("Dropped {} medicines with duplicate ids", total - medicines.len());
        }

        Self { medicines, symptoms }
    }

    pub fn from_json(medicines_json: &str, symptoms_json: &str) -> Result<Self> {
        let medicines: Vec<Medicine> = serde_json::from_str(medicines_json)
            .map_err(|e| AyurgenixError::DataLoad(format!("malformed medicines data: {e}")))?;
        let symptoms: Vec<SymptomMapping> = serde_json::from_str(symptoms_json)
            .map_err(|e| AyurgenixError::DataLoad(format!("malformed symptom mappings: {e}")))?;
        Ok(Self::new(medicines, symptoms))
    }

    pub fn get(&self, id: &str) -> Option<&Medicine> {
        self.medicines.iter().find(|m| m.id == id)
    }
}

enum CatalogSource {
    Files { medicines: PathBuf, symptoms: PathBuf },
    Inline { medicines: String, symptoms: String },
}


pub struct MedicineStore {
    source: CatalogSource,
    catalog: OnceCell<Arc<MedicineCatalog>>,
    loads: AtomicUsize,
}

impl MedicineStore {
    pub fn from_paths(medicines: impl Into<PathBuf>, symptoms: impl Into<PathBuf>) -> Self {
        Self::with_source(CatalogSource::Files {
            medicines: medicines.into(),
            symptoms: symptoms.into(),
        })
    }

    pub fn from_json(medicines: impl Into<String>, symptoms: impl Into<String>) -> Self {
        Self::with_source(CatalogSource::Inline {
            medicines: medicines.into(),
            symptoms: symptoms.into(),
        })
    }

    fn with_source(source: CatalogSource) -> Self {
        Self {
            source,
            catalog: OnceCell::new(),
            loads: AtomicUsize::new(0),
        }
    }

    pub async fn load(&self) -> Result<Arc<MedicineCatalog>> {
        let catalog = self
            .catalog
            .get_or_try_init(|| async {
                self.loads.fetch_add(1, Ordering::SeqCst);
                let catalog = match &self.source {
                    CatalogSource::Files { medicines, symptoms } => {
                        let medicines_json = read_source(medicines).await?;
                        let symptoms_json = read_source(symptoms).await?;
                        MedicineCatalog::from_json(&medicines_json, &symptoms_json)?
                    }
                    CatalogSource::Inline { medicines, symptoms } => {
                        MedicineCatalog::from_json(medicines, symptoms)?
                    }
                };
                info!(
                    "Medicine catalog loaded: {} medicines, {} symptom mappings",
                    catalog.medicines.len(),
                    catalog.symptoms.len()
                );
                Ok::<_, AyurgenixError>(Arc::new(catalog))
            })
            .await?;

        Ok(Arc::clone(catalog))
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn reset(&mut self) {
        self.catalog.take();
    }
}

async fn read_source(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AyurgenixError::DataLoad(format!("cannot read {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{SAMPLE_MEDICINES, SAMPLE_SYMPTOMS};

    #[test]
    fn test_catalog_from_json() {
        let catalog = MedicineCatalog::from_json(SAMPLE_MEDICINES, SAMPLE_SYMPTOMS).unwrap();
        assert_eq!(catalog.medicines.len(), 5);
        assert_eq!(catalog.symptoms.len(), 4);
        assert_eq!(catalog.get("m4").unwrap().kind, "Tablet");
        assert!(catalog.get("m9").is_none());
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let json = r#"[{"id":"x","name":"First"},{"id":"x","name":"Second"}]"#;
        let catalog = MedicineCatalog::from_json(json, "[]").unwrap();
        assert_eq!(catalog.medicines.len(), 1);
        assert_eq!(catalog.medicines[0].name, "First");
    }

    #[test]
    fn test_malformed_json_is_data_load_error() {
        let err = MedicineCatalog::from_json("{not json", "[]").unwrap_err();
        assert!(matches!(err, AyurgenixError::DataLoad(_)));
    }

    #[tokio::test]
    async fn test_missing_files_fail_and_stay_unloaded() {
        let store = MedicineStore::from_paths("/nonexistent/medicines.json", "/nonexistent/symptoms.json");
        assert!(matches!(store.load().await, Err(AyurgenixError::DataLoad(_))));
        assert!(matches!(store.load().await, Err(AyurgenixError::DataLoad(_))));
        assert_eq!(store.load_count(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_first_access_loads_once() {
        let dir = tempfile::tempdir().unwrap();
        let medicines = dir.path().join("medicines.json");
        let symptoms = dir.path().join("symptoms.json");
        std::fs::write(&medicines, SAMPLE_MEDICINES).unwrap();
        std::fs::write(&symptoms, SAMPLE_SYMPTOMS).unwrap();
        let store = Arc::new(MedicineStore::from_paths(medicines, symptoms));

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.load().await.map(|c| c.medicines.len()) })
            })
            .collect();

        for handle in futures::future::join_all(handles).await {
            assert_eq!(handle.unwrap().unwrap(), 5);
        }
        assert_eq!(store.load_count(), 1);
    }

    #[tokio::test]
    async fn test_inline_store_loads_once() {
        let mut store = MedicineStore::from_json(SAMPLE_MEDICINES, SAMPLE_SYMPTOMS);
        store.load().await.unwrap();
        store.load().await.unwrap();
        assert_eq!(store.load_count(), 1);

        store.reset();
        store.load().await.unwrap();
        assert_eq!(store.load_count(), 2);
    }
}
