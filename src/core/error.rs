

use thiserror::Error;


#[derive(Error, Debug)]
pub enum AyurgenixError {
    #[error("Dataset load error: {0}")]
    DataLoad(String),

    #[error("Intent model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AyurgenixError {
    /// True for the one failure callers are expected to absorb by falling
    /// back to lexical retrieval.
    pub fn is_model_unavailable(&self) -> bool {
        matches!(self, AyurgenixError::ModelUnavailable(_))
    }
}

impl From<csv::Error> for AyurgenixError {
    fn from(err: csv::Error) -> Self {
        AyurgenixError::DataLoad(err.to_string())
    }
}

impl From<config::ConfigError> for AyurgenixError {
    fn from(err: config::ConfigError) -> Self {
        AyurgenixError::Config(err.to_string())
    }
}


pub type Result<T> = std::result::Result<T, AyurgenixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_unavailable_flag() {
        assert!(AyurgenixError::ModelUnavailable("missing".into()).is_model_unavailable());
        assert!(!AyurgenixError::DataLoad("missing".into()).is_model_unavailable());
    }

    #[test]
    fn test_io_maps_through_from() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: AyurgenixError = io.into();
        assert!(matches!(err, AyurgenixError::Io(_)));
        assert!(err.to_string().contains("gone"));
    }
}
