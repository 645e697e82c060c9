//! Error types for the conversational engine.

use parley_core::error::ParleyError;

/// Errors from training or querying the engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("input text cannot be empty")]
    EmptyInput,
    #[error("engine has not been trained")]
    NotTrained,
    #[error("corpus error: {0}")]
    Corpus(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<EngineError> for ParleyError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Corpus(msg) => ParleyError::Corpus(msg),
            other => ParleyError::Engine(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Corpus(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_display() {
        assert_eq!(
            EngineError::EmptyInput.to_string(),
            "input text cannot be empty"
        );
        assert_eq!(
            EngineError::NotTrained.to_string(),
            "engine has not been trained"
        );
        assert_eq!(
            EngineError::Corpus("bad file".to_string()).to_string(),
            "corpus error: bad file"
        );
        assert_eq!(
            EngineError::Storage("lock poisoned".to_string()).to_string(),
            "storage error: lock poisoned"
        );
    }

    #[test]
    fn test_corpus_error_maps_to_parley_corpus() {
        let err: ParleyError = EngineError::Corpus("missing conversations".to_string()).into();
        assert!(matches!(err, ParleyError::Corpus(_)));
        assert_eq!(err.to_string(), "Corpus error: missing conversations");
    }

    #[test]
    fn test_other_errors_map_to_parley_engine() {
        let err: ParleyError = EngineError::NotTrained.into();
        assert!(matches!(err, ParleyError::Engine(_)));
        assert!(err.to_string().contains("not been trained"));
    }

    #[test]
    fn test_from_serde_json() {
        let bad: Result<serde_json::Value, _> = serde_json::from_str("[1,");
        let err: EngineError = bad.unwrap_err().into();
        assert!(matches!(err, EngineError::Corpus(_)));
    }
}
