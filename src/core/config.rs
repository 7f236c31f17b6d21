

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::Result;
use crate::{
    DEFAULT_CACHE_SIZE, DEFAULT_CACHE_TTL, DEFAULT_DATASET_FILE,
    DEFAULT_MEDICINE_LIMIT, DEFAULT_MEDICINES_FILE, DEFAULT_MODEL_FILE, DEFAULT_RETRIEVAL_LIMIT,
    DEFAULT_SYMPTOMS_FILE,
};

const ENV_PREFIX: &str = "AYURGENIX";


#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AyurgenixConfig {

    pub data_dir: PathBuf,
    pub dataset_file: String,
    pub medicines_file: String,
    pub symptoms_file: String,
    pub model_file: String,


    pub default_limit: usize,
    pub medicine_limit: usize,


    /// Overrides the threshold stored in the model artifact when set.
    pub intent_threshold: Option<f64>,


    pub cache_capacity: usize,
    pub cache_ttl: u64,
}

impl AyurgenixConfig {

    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            dataset_file: DEFAULT_DATASET_FILE.to_string(),
            medicines_file: DEFAULT_MEDICINES_FILE.to_string(),
            symptoms_file: DEFAULT_SYMPTOMS_FILE.to_string(),
            model_file: DEFAULT_MODEL_FILE.to_string(),

            default_limit: DEFAULT_RETRIEVAL_LIMIT,
            medicine_limit: DEFAULT_MEDICINE_LIMIT,

            intent_threshold: None,

            cache_capacity: DEFAULT_CACHE_SIZE,
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }

    pub fn dataset_path(&self) -> PathBuf {
        self.data_dir.join(&self.dataset_file)
    }

    pub fn medicines_path(&self) -> PathBuf {
        self.data_dir.join(&self.medicines_file)
    }

    pub fn symptoms_path(&self) -> PathBuf {
        self.data_dir.join(&self.symptoms_file)
    }

    pub fn model_path(&self) -> PathBuf {
        self.data_dir.join(&self.model_file)
    }


    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Unparseable numbers keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{ENV_PREFIX}_{name}"));

        let mut config = Self::new(var("DATA_DIR").unwrap_or_else(|| "data".to_string()));

        if let Some(file) = var("DATASET_FILE") {
            config.dataset_file = file;
        }
        if let Some(file) = var("MEDICINES_FILE") {
            config.medicines_file = file;
        }
        if let Some(file) = var("SYMPTOMS_FILE") {
            config.symptoms_file = file;
        }
        if let Some(file) = var("MODEL_FILE") {
            config.model_file = file;
        }
        if let Some(limit) = var("DEFAULT_LIMIT").and_then(|v| v.parse().ok()) {
            config.default_limit = limit;
        }
        if let Some(limit) = var("MEDICINE_LIMIT").and_then(|v| v.parse().ok()) {
            config.medicine_limit = limit;
        }
        if let Some(threshold) = var("INTENT_THRESHOLD").and_then(|v| v.parse::<f64>().ok()) {
            config.intent_threshold = Some(threshold.clamp(0.0, 1.0));
        }
        if let Some(capacity) = var("CACHE_CAPACITY").and_then(|v| v.parse().ok()) {
            config.cache_capacity = capacity;
        }
        if let Some(ttl) = var("CACHE_TTL").and_then(|v| v.parse().ok()) {
            config.cache_ttl = ttl;
        }

        config
    }

    /// Layers a config file (format inferred from the extension) under
    /// `AYURGENIX_*` environment overrides.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let mut config: Self = settings.try_deserialize()?;
        config.intent_threshold = config.intent_threshold.map(|t| t.clamp(0.0, 1.0));
        Ok(config)
    }
}

impl Default for AyurgenixConfig {
    fn default() -> Self {
        Self::new("data")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AyurgenixConfig::default();
        assert_eq!(config.default_limit, 3);
        assert_eq!(config.medicine_limit, 5);
        assert_eq!(config.intent_threshold, None);
        assert_eq!(config.dataset_path(), PathBuf::from("data").join(DEFAULT_DATASET_FILE));
    }

    #[test]
    fn test_from_lookup_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("AYURGENIX_DATA_DIR", "/srv/ayur"),
            ("AYURGENIX_DEFAULT_LIMIT", "7"),
            ("AYURGENIX_INTENT_THRESHOLD", "1.8"),
            ("AYURGENIX_CACHE_TTL", "not-a-number"),
        ]);
        let config = AyurgenixConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.data_dir, PathBuf::from("/srv/ayur"));
        assert_eq!(config.default_limit, 7);
        assert_eq!(config.intent_threshold, Some(1.0));
        assert_eq!(config.cache_ttl, DEFAULT_CACHE_TTL);
        assert_eq!(config.model_path(), PathBuf::from("/srv/ayur").join(DEFAULT_MODEL_FILE));
    }

    #[test]
    fn test_from_file_fills_missing_keys_with_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "data_dir = \"fixtures\"\ndefault_limit = 10\ncache_capacity = 0").unwrap();

        let config = AyurgenixConfig::from_file(file.path()).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("fixtures"));
        assert_eq!(config.default_limit, 10);
        assert_eq!(config.cache_capacity, 0);
        assert_eq!(config.medicine_limit, DEFAULT_MEDICINE_LIMIT);
    }

    #[test]
    fn test_from_file_missing_is_config_error() {
        let err = AyurgenixConfig::from_file("/nonexistent/ayurgenix.toml").unwrap_err();
        assert!(matches!(err, crate::core::error::AyurgenixError::Config(_)));
    }
}
