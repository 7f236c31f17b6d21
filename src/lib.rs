

pub mod core;
pub mod data;
pub mod intent;
pub mod pipeline;
pub mod runtime;
pub mod search;
pub mod utils;

pub use utils::{format_confidence, safe_truncate_ellipsis};


pub use core::config::AyurgenixConfig;
pub use core::error::{AyurgenixError, Result};
pub use data::{Medicine, MedicineStore, Record, RecordField, RecordStore};
pub use intent::{IntentClassifier, IntentModel, IntentPrediction, ModelClassifier};
pub use pipeline::{PipelineOutcome, SymptomPipeline};
pub use runtime::{classify, install, process_query, reset, retrieve, retrieve_medicines, runtime, Runtime};
pub use search::{MedicineRetriever, RetrievalEngine};


pub const DEFAULT_DATASET_FILE: &str = "AyurGenixAI_Dataset.csv";


pub const DEFAULT_MEDICINES_FILE: &str = "medicines.json";


pub const DEFAULT_SYMPTOMS_FILE: &str = "symptoms.json";


pub const DEFAULT_MODEL_FILE: &str = "intent_model.json";


pub const DEFAULT_RETRIEVAL_LIMIT: usize = 3;


pub const DEFAULT_MEDICINE_LIMIT: usize = 5;


pub const DEFAULT_INTENT_THRESHOLD: f64 = 0.5;


pub const DEFAULT_CACHE_SIZE: usize = 1000;


pub const DEFAULT_CACHE_TTL: u64 = 300;
