use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::info;

use super::model::IntentModel;
use crate::data::Record;
use crate::search::query::MIN_TOKEN_CHARS;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").expect("whitespace pattern is valid");
}

/// Intent names never contain whitespace: "Common Cold" trains as "Common_Cold".
pub fn intent_label(disease: &str) -> String {
    WHITESPACE.replace_all(disease.trim(), "_").into_owned()
}

pub fn display_label(intent: &str) -> String {
    intent.replace('_', " ")
}


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingExample {
    pub utterance: String,
    pub intent: String,
}

/// One example per listed symptom plus one for the disease name itself.
/// Records without symptoms contribute nothing.
pub fn training_examples(records: &[Arc<Record>]) -> Vec<TrainingExample> {
    let mut examples = Vec::new();

    for record in records {
        let disease = record.disease.trim();
        if disease.is_empty() || record.symptoms.trim().is_empty() {
            continue;
        }
        let intent = intent_label(disease);

        for symptom in record.symptoms.split(',') {
            let symptom = symptom.trim();
            if symptom.chars().count() > MIN_TOKEN_CHARS {
                examples.push(TrainingExample {
                    utterance: symptom.to_string(),
                    intent: intent.clone(),
                });
            }
        }

        examples.push(TrainingExample {
            utterance: disease.to_string(),
            intent,
        });
    }

    examples
}

pub fn train_model(records: &[Arc<Record>], threshold: f64) -> IntentModel {
    let mut model = IntentModel::new(threshold);
    let examples = training_examples(records);
    let accepted = examples
        .iter()
        .filter(|e| model.add_document(&e.utterance, &e.intent))
        .count();

    info!(
        "Trained intent model: {} intents from {} of {} examples",
        model.intent_count(),
        accepted,
        examples.len()
    );
    model
}
