//! Error types for DDL generation.

use thiserror::Error;

use crate::dialect::LogicalType;

/// Main error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Configuration error (unknown engine, invalid YAML, missing fields, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Logical type has no mapping for the selected engine
    #[error("Unsupported type: {logical_type} has no mapping for engine '{engine}'")]
    UnsupportedType {
        engine: String,
        logical_type: LogicalType,
    },

    /// Operation cannot be expressed by the selected engine
    #[error("Unsupported operation: {operation} is not supported by engine '{engine}'")]
    UnsupportedOperation { engine: String, operation: String },

    /// Required input is missing or malformed (empty column set, missing length, etc.)
    #[error("Precondition violated: {0}")]
    Precondition(String),

    /// A generated command failed in the caller's executor
    #[error("Command {index} failed: {message}")]
    Execution { index: usize, message: String },

    /// IO error (plan and config files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ProviderError {
    /// Create an UnsupportedType error
    pub fn unsupported_type(engine: impl Into<String>, logical_type: LogicalType) -> Self {
        ProviderError::UnsupportedType {
            engine: engine.into(),
            logical_type,
        }
    }

    /// Create an UnsupportedOperation error
    pub fn unsupported_operation(engine: impl Into<String>, operation: impl Into<String>) -> Self {
        ProviderError::UnsupportedOperation {
            engine: engine.into(),
            operation: operation.into(),
        }
    }

    /// Create a Precondition error
    pub fn precondition(message: impl Into<String>) -> Self {
        ProviderError::Precondition(message.into())
    }

    /// Create an Execution error for the command at `index` (0-based)
    pub fn execution(index: usize, message: impl Into<String>) -> Self {
        ProviderError::Execution {
            index,
            message: message.into(),
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            ProviderError::Config(_) | ProviderError::Yaml(_) | ProviderError::Json(_) => 1,
            ProviderError::UnsupportedType { .. } | ProviderError::UnsupportedOperation { .. } => 2,
            ProviderError::Precondition(_) => 3,
            ProviderError::Io(_) => 7,
            ProviderError::Execution { .. } => 8,
        }
    }

    /// Format error with full details including error chain
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

/// Result type alias for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;
