pub mod classifier;
pub mod model;
pub mod training;

pub use classifier::{IntentClassifier, IntentPrediction, ModelClassifier};
pub use model::{Classification, IntentModel, IntentScore, NONE_INTENT};
pub use training::{display_label, intent_label, train_model, training_examples, TrainingExample};
