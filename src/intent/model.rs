use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::error::{AyurgenixError, Result};
use crate::search::query::{MIN_TOKEN_CHARS, STOP_WORDS};

/// Intent reported when nothing clears the confidence threshold.
pub const NONE_INTENT: &str = "None";

pub const MODEL_FORMAT_VERSION: u32 = 1;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"[\p{L}\p{M}\p{N}]+").expect("word pattern is valid");
}


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentScore {
    pub intent: String,
    pub score: f64,
}


#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub intent: String,
    pub score: f64,
    /// Every known intent, best first.
    pub ranked: Vec<IntentScore>,
}

impl Classification {
    pub fn is_none(&self) -> bool {
        self.intent == NONE_INTENT
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct IntentStats {
    documents: u32,
    tokens: u32,
    token_counts: BTreeMap<String, u32>,
}

/// Multinomial naive-Bayes intent model with Laplace smoothing.
///
/// Training is incremental: every `add_document` updates the counts the
/// next `classify` reads. Posteriors are normalised across intents, so the
/// reported score is in [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentModel {
    version: u32,
    threshold: f64,
    alpha: f64,
    documents: u32,
    vocabulary: BTreeSet<String>,
    intents: BTreeMap<String, IntentStats>,
}

impl IntentModel {
    pub fn new(threshold: f64) -> Self {
        Self {
            version: MODEL_FORMAT_VERSION,
            threshold: threshold.clamp(0.0, 1.0),
            alpha: 1.0,
            documents: 0,
            vocabulary: BTreeSet::new(),
            intents: BTreeMap::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn intent_count(&self) -> usize {
        self.intents.len()
    }

    pub fn document_count(&self) -> u32 {
        self.documents
    }

    pub fn intents(&self) -> impl Iterator<Item = &str> {
        self.intents.keys().map(String::as_str)
    }

    /// Returns false when the utterance has no usable tokens.
    pub fn add_document(&mut self, utterance: &str, intent: &str) -> bool {
        let tokens = model_tokens(utterance);
        if tokens.is_empty() || intent.trim().is_empty() {
            return false;
        }

        let stats = self.intents.entry(intent.to_string()).or_default();
        stats.documents += 1;
        for token in tokens {
            stats.tokens += 1;
            *stats.token_counts.entry(token.clone()).or_insert(0) += 1;
            self.vocabulary.insert(token);
        }
        self.documents += 1;
        true
    }

    pub fn classify(&self, text: &str) -> Classification {
        self.classify_with_threshold(text, self.threshold)
    }

    pub fn classify_with_threshold(&self, text: &str, threshold: f64) -> Classification {
        let tokens: Vec<String> = model_tokens(text)
            .into_iter()
            .filter(|t| self.vocabulary.contains(t))
            .collect();

        if tokens.is_empty() || self.intents.is_empty() {
            return Classification {
                intent: NONE_INTENT.to_string(),
                score: 1.0,
                ranked: Vec::new(),
            };
        }

        let intent_total = self.intents.len() as f64;
        let vocab_size = self.vocabulary.len() as f64;
        let alpha = self.alpha;

        let log_scores: Vec<(&str, f64)> = self
            .intents
            .iter()
            .map(|(intent, stats)| {
                let prior = (stats.documents as f64 + alpha)
                    / (self.documents as f64 + alpha * intent_total);
                let denom = stats.tokens as f64 + alpha * vocab_size;
                let likelihood: f64 = tokens
                    .iter()
                    .map(|t| {
                        let count = stats.token_counts.get(t).copied().unwrap_or(0) as f64;
                        ((count + alpha) / denom).ln()
                    })
                    .sum();
                (intent.as_str(), prior.ln() + likelihood)
            })
            .collect();

        let max = log_scores
            .iter()
            .map(|(_, s)| *s)
            .fold(f64::NEG_INFINITY, f64::max);
        let exp: Vec<f64> = log_scores.iter().map(|(_, s)| (s - max).exp()).collect();
        let total: f64 = exp.iter().sum();

        let mut ranked: Vec<IntentScore> = log_scores
            .iter()
            .zip(exp)
            .map(|((intent, _), e)| IntentScore {
                intent: intent.to_string(),
                score: e / total,
            })
            .collect();
        // Stable over the sorted intent map, so equal scores stay alphabetical.
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

        let top = &ranked[0];
        let intent = if top.score >= threshold {
            top.intent.clone()
        } else {
            NONE_INTENT.to_string()
        };

        Classification {
            intent,
            score: top.score,
            ranked,
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path.as_ref())?;
        serde_json::to_writer(BufWriter::new(file), self)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let model: Self = serde_json::from_reader(BufReader::new(file))?;
        if model.version != MODEL_FORMAT_VERSION {
            return Err(AyurgenixError::ModelUnavailable(format!(
                "unsupported model format version {} (expected {})",
                model.version, MODEL_FORMAT_VERSION
            )));
        }
        Ok(model)
    }
}

fn model_tokens(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|t| t.chars().count() > MIN_TOKEN_CHARS && !STOP_WORDS.contains(t))
        .map(str::to_string)
        .collect()
}
