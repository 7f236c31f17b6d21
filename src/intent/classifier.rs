use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;
use tracing::{debug, info};

use super::model::IntentModel;
use super::training::display_label;
use crate::core::error::{AyurgenixError, Result};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentPrediction {
    /// Human-readable form, e.g. "Common Cold".
    pub label: String,
    /// Raw intent name as stored in the model, e.g. "Common_Cold".
    pub intent: String,
    pub confidence: f64,
}

/// Maps a free-text complaint to a disease label.
///
/// `Ok(None)` means the classifier ran but recognised nothing. An absent or
/// unreadable model is `AyurgenixError::ModelUnavailable`, which callers
/// treat as a reason to degrade rather than fail.
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    async fn classify(&self, query: &str) -> Result<Option<IntentPrediction>>;

    fn name(&self) -> &str;
}


#[async_trait]
impl IntentClassifier for Arc<dyn IntentClassifier> {
    async fn classify(&self, query: &str) -> Result<Option<IntentPrediction>> {
        (**self).classify(query).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Classifier backed by a trained `IntentModel` artifact on disk.
///
/// The artifact is read on first use. A failed read is not remembered, so
/// training a model while the process runs makes it available on the next
/// call.
pub struct ModelClassifier {
    path: Option<PathBuf>,
    model: OnceCell<Arc<IntentModel>>,
    threshold: Option<f64>,
    loads: AtomicUsize,
}

impl ModelClassifier {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            model: OnceCell::new(),
            threshold: None,
            loads: AtomicUsize::new(0),
        }
    }

    pub fn from_model(model: IntentModel) -> Self {
        Self {
            path: None,
            model: OnceCell::new_with(Some(Arc::new(model))),
            threshold: None,
            loads: AtomicUsize::new(0),
        }
    }

    /// Overrides the threshold stored in the model artifact.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold.clamp(0.0, 1.0));
        self
    }

    pub fn is_loaded(&self) -> bool {
        self.model.initialized()
    }

    pub async fn model(&self) -> Result<Arc<IntentModel>> {
        let model = self
            .model
            .get_or_try_init(|| async {
                self.loads.fetch_add(1, Ordering::SeqCst);
                let path = self.path.clone().ok_or_else(|| {
                    AyurgenixError::ModelUnavailable("no model artifact configured".to_string())
                })?;
                let shown = path.display().to_string();

                let loaded = tokio::task::spawn_blocking(move || IntentModel::load(&path))
                    .await
                    .map_err(|e| load_failure(&shown, e))?
                    .map_err(|e| match e {
                        AyurgenixError::ModelUnavailable(msg) => AyurgenixError::ModelUnavailable(msg),
                        other => load_failure(&shown, other),
                    })?;

                info!(
                    "Intent model loaded from {}: {} intents, {} documents",
                    shown,
                    loaded.intent_count(),
                    loaded.document_count()
                );
                Ok::<_, AyurgenixError>(Arc::new(loaded))
            })
            .await?;

        Ok(Arc::clone(model))
    }

    /// Number of times the artifact has actually been read.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

/// Every way of failing to read the artifact leaves the caller free to degrade.
fn load_failure(path: &str, reason: impl std::fmt::Display) -> AyurgenixError {
    AyurgenixError::ModelUnavailable(format!("{path}: {reason}"))
}

#[async_trait]
impl IntentClassifier for ModelClassifier {
    async fn classify(&self, query: &str) -> Result<Option<IntentPrediction>> {
        let model = self.model().await?;
        let threshold = self.threshold.unwrap_or_else(|| model.threshold());
        let result = model.classify_with_threshold(query, threshold);

        if result.is_none() {
            debug!("No intent for '{}' (top score {:.3})", query, result.score);
            return Ok(None);
        }

        let prediction = IntentPrediction {
            label: display_label(&result.intent),
            intent: result.intent,
            confidence: result.score,
        };
        info!(
            "Classified '{}' as '{}' ({:.3})",
            query, prediction.label, prediction.confidence
        );
        Ok(Some(prediction))
    }

    fn name(&self) -> &str {
        "naive-bayes"
    }
}
