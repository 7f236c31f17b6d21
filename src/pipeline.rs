use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::error::Result;
use crate::data::Record;
use crate::intent::{IntentClassifier, IntentPrediction};
use crate::search::RetrievalEngine;


#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutcome {
    pub best_match: Option<IntentPrediction>,
    pub remedies: Vec<Arc<Record>>,
    /// True when the classifier was unavailable and the raw query was used.
    pub degraded: bool,
}

impl PipelineOutcome {
    /// The text that was handed to the retrieval engine.
    pub fn effective_query<'a>(&'a self, raw: &'a str) -> &'a str {
        self.best_match.as_ref().map_or(raw, |p| p.label.as_str())
    }
}

/// Classify, then retrieve by the predicted disease name, falling back to
/// the raw query when nothing was predicted.
///
/// A prediction is used whatever its confidence; the threshold inside the
/// classifier is the only gate.
pub struct SymptomPipeline {
    classifier: Option<Arc<dyn IntentClassifier>>,
    engine: Arc<RetrievalEngine>,
}

impl SymptomPipeline {
    pub fn new(classifier: Arc<dyn IntentClassifier>, engine: Arc<RetrievalEngine>) -> Self {
        Self {
            classifier: Some(classifier),
            engine,
        }
    }

    pub fn lexical_only(engine: Arc<RetrievalEngine>) -> Self {
        Self {
            classifier: None,
            engine,
        }
    }

    pub fn engine(&self) -> &Arc<RetrievalEngine> {
        &self.engine
    }

    pub async fn process(&self, query: &str, limit: usize) -> Result<PipelineOutcome> {
        let (best_match, degraded) = match &self.classifier {
            Some(classifier) => match classifier.classify(query).await {
                Ok(prediction) => (prediction, false),
                Err(e) if e.is_model_unavailable() => {
                    warn!("{} classifier unavailable, using lexical retrieval: {}", classifier.name(), e);
                    (None, true)
                }
                Err(e) => return Err(e),
            },
            None => (None, false),
        };

        let effective = best_match.as_ref().map_or(query, |p| p.label.as_str());
        debug!("Pipeline retrieving with '{}'", effective);
        let remedies = self.engine.retrieve(effective, limit).await?;

        Ok(PipelineOutcome {
            best_match,
            remedies,
            degraded,
        })
    }
}
