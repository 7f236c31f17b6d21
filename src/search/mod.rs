

pub mod engine;
pub mod medicine;
pub mod query;
pub mod scorer;

pub use engine::{RetrievalEngine, ScoredCandidate};
pub use medicine::{render_context, MedicineRetriever};
pub use query::{tokenize, NormalizedQuery, STOP_WORDS};
pub use scorer::{LexicalScorer, ScoringWeights, CONTEXT_FIELDS};
