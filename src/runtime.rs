use std::sync::Arc;

use lazy_static::lazy_static;
use parking_lot::RwLock;
use tracing::info;

use crate::core::config::AyurgenixConfig;
use crate::core::error::Result;
use crate::data::{Medicine, MedicineStore, Record, RecordStore};
use crate::intent::{IntentClassifier, IntentPrediction, ModelClassifier};
use crate::pipeline::{PipelineOutcome, SymptomPipeline};
use crate::search::{MedicineRetriever, RetrievalEngine};

lazy_static! {
    static ref RUNTIME: RwLock<Option<Arc<Runtime>>> = RwLock::new(None);
}

/// Everything a process needs to answer queries, built from one config.
/// Nothing is read from disk until the first query or `warm_up`.
pub struct Runtime {
    config: AyurgenixConfig,
    engine: Arc<RetrievalEngine>,
    medicines: MedicineRetriever,
    classifier: Arc<ModelClassifier>,
    pipeline: SymptomPipeline,
}

impl Runtime {
    pub fn new(config: AyurgenixConfig) -> Self {
        let store = Arc::new(RecordStore::from_path(config.dataset_path()));
        let engine = Arc::new(
            RetrievalEngine::new(store).with_cache(config.cache_capacity, config.cache_ttl),
        );
        let medicines = MedicineRetriever::new(Arc::new(MedicineStore::from_paths(
            config.medicines_path(),
            config.symptoms_path(),
        )));
        let mut classifier = ModelClassifier::from_path(config.model_path());
        if let Some(threshold) = config.intent_threshold {
            classifier = classifier.with_threshold(threshold);
        }
        let classifier = Arc::new(classifier);
        let pipeline = SymptomPipeline::new(
            Arc::clone(&classifier) as Arc<dyn IntentClassifier>,
            Arc::clone(&engine),
        );

        Self {
            config,
            engine,
            medicines,
            classifier,
            pipeline,
        }
    }

    pub fn config(&self) -> &AyurgenixConfig {
        &self.config
    }

    pub fn engine(&self) -> &Arc<RetrievalEngine> {
        &self.engine
    }

    pub fn medicines(&self) -> &MedicineRetriever {
        &self.medicines
    }

    pub fn pipeline(&self) -> &SymptomPipeline {
        &self.pipeline
    }

    /// Loads the remedy dataset and the medicine catalog concurrently.
    /// The intent model stays lazy; its absence is not an error here.
    pub async fn warm_up(&self) -> Result<()> {
        let (records, catalog) = futures::future::try_join(
            self.engine.store().load(),
            self.medicines.store().load(),
        )
        .await?;
        info!(
            "Runtime warmed up: {} records, {} medicines",
            records.len(),
            catalog.medicines.len()
        );
        Ok(())
    }

    pub async fn retrieve(&self, query: &str, limit: usize) -> Result<Vec<Arc<Record>>> {
        self.engine.retrieve(query, limit).await
    }

    pub async fn classify(&self, query: &str) -> Result<Option<IntentPrediction>> {
        self.classifier.classify(query).await
    }

    pub async fn retrieve_medicines(&self, query: &str, limit: usize) -> Result<Vec<Medicine>> {
        self.medicines.retrieve(query, limit).await
    }

    pub async fn process(&self, query: &str, limit: usize) -> Result<PipelineOutcome> {
        self.pipeline.process(query, limit).await
    }
}

/// The process-wide runtime, created from the environment on first use.
pub fn runtime() -> Arc<Runtime> {
    if let Some(runtime) = RUNTIME.read().as_ref() {
        return Arc::clone(runtime);
    }

    let mut slot = RUNTIME.write();
    let runtime = slot.get_or_insert_with(|| {
        info!("Initializing runtime from environment");
        Arc::new(Runtime::new(AyurgenixConfig::from_env()))
    });
    Arc::clone(runtime)
}

/// Replaces the process-wide runtime. Callers holding the previous one keep
/// using it until they drop it.
pub fn install(config: AyurgenixConfig) -> Arc<Runtime> {
    let runtime = Arc::new(Runtime::new(config));
    *RUNTIME.write() = Some(Arc::clone(&runtime));
    runtime
}

/// Drops the process-wide runtime and everything it cached.
pub fn reset() {
    RUNTIME.write().take();
}

pub async fn retrieve(query: &str, limit: usize) -> Result<Vec<Arc<Record>>> {
    runtime().retrieve(query, limit).await
}

pub async fn classify(query: &str) -> Result<Option<IntentPrediction>> {
    runtime().classify(query).await
}

pub async fn retrieve_medicines(query: &str, limit: usize) -> Result<Vec<Medicine>> {
    runtime().retrieve_medicines(query, limit).await
}

pub async fn process_query(query: &str, limit: usize) -> Result<PipelineOutcome> {
    runtime().process(query, limit).await
}
