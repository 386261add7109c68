//! Custom error types for plan-reflect
//!
//! The planner itself never fails; these errors come from the surrounding
//! configuration, IO and JSON layers.

use thiserror::Error;

/// Main error type for plan-reflect operations
#[derive(Error, Debug)]
pub enum PlanReflectError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Convenience Result type for plan-reflect operations
pub type Result<T> = std::result::Result<T, PlanReflectError>;

impl PlanReflectError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Wrap an error with additional context
    pub fn with_context<E>(context: impl Into<String>, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::WithContext {
            context: context.into(),
            source: Box::new(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = PlanReflectError::config("missing file");
        assert_eq!(err.to_string(), "Configuration error: missing file");
    }

    #[test]
    fn test_with_context_display() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = PlanReflectError::with_context("Failed to read response.json", io);
        assert_eq!(
            err.to_string(),
            "Failed to read response.json: no such file"
        );
    }

    #[test]
    fn test_json_error_from() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PlanReflectError = parse.into();
        assert!(matches!(err, PlanReflectError::Json(_)));
    }
}
