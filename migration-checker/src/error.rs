//! Checker error types
//!
//! Verdicts of any kind are never errors. These variants cover input that
//! could not be loaded and rule precondition violations bubbling up from
//! `migration_rules`.

use std::path::PathBuf;

use migration_rules::RuleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckerError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("config error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error(transparent)]
    Rule(#[from] RuleError),

    #[error("rule task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl CheckerError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Whether the error reflects a bug in the snapshot provider rather than
    /// bad user input.
    pub fn is_precondition_violation(&self) -> bool {
        matches!(self, Self::Rule(RuleError::MissingProperty { .. }))
    }
}

/// Result type for checker operations
pub type Result<T> = std::result::Result<T, CheckerError>;
