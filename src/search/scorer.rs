use serde::{Deserialize, Serialize};

use super::query::NormalizedQuery;
use crate::data::{Record, RecordField};

/// Fields that only contribute the flat contextual bonus.
pub const CONTEXT_FIELDS: [RecordField; 3] = [
    RecordField::DiagnosisAndTests,
    RecordField::RiskFactors,
    RecordField::MedicalHistory,
];


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub disease_phrase: u32,
    pub symptoms_phrase: u32,
    pub disease_token: u32,
    pub symptoms_token: u32,
    pub hindi_name_token: u32,
    pub marathi_name_token: u32,
    pub context_bonus: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            disease_phrase: 100,
            symptoms_phrase: 50,
            disease_token: 20,
            symptoms_token: 10,
            hindi_name_token: 15,
            marathi_name_token: 15,
            context_bonus: 5,
        }
    }
}

/// Keyword relevance between a query and one record.
///
/// Phrase hits in `Disease` and `Symptoms` come first, then every surviving
/// token is checked once against each of `Disease`, `Symptoms`, `Hindi Name`
/// and `Marathi Name`. The contextual bonus is awarded at most once per
/// record, however many tokens or context fields match.
#[derive(Debug, Clone, Default)]
pub struct LexicalScorer {
    weights: ScoringWeights,
}

impl LexicalScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn score(&self, query: &str, record: &Record) -> u32 {
        self.score_normalized(&NormalizedQuery::parse(query), record)
    }

    pub fn score_normalized(&self, query: &NormalizedQuery, record: &Record) -> u32 {
        // "".contains("") is true for every field; an empty query matches nothing.
        if query.is_empty() {
            return 0;
        }

        let w = &self.weights;
        let disease = record.disease.to_lowercase();
        let symptoms = record.symptoms.to_lowercase();
        let mut score = 0;

        if disease.contains(&query.phrase) {
            score += w.disease_phrase;
        }
        if symptoms.contains(&query.phrase) {
            score += w.symptoms_phrase;
        }

        if query.tokens.is_empty() {
            return score;
        }

        let hindi = record.hindi_name.to_lowercase();
        let marathi = record.marathi_name.to_lowercase();
        let token_fields: [(&str, u32); 4] = [
            (&disease, w.disease_token),
            (&symptoms, w.symptoms_token),
            (&hindi, w.hindi_name_token),
            (&marathi, w.marathi_name_token),
        ];

        for token in &query.tokens {
            for (text, weight) in token_fields {
                if text.contains(token.as_str()) {
                    score += weight;
                }
            }
        }

        let context: Vec<String> = CONTEXT_FIELDS
            .iter()
            .map(|f| record.get(*f).to_lowercase())
            .filter(|text| !text.is_empty())
            .collect();
        let context_hit = query
            .tokens
            .iter()
            .any(|token| context.iter().any(|text| text.contains(token.as_str())));
        if context_hit {
            score += w.context_bonus;
        }

        score
    }
}
