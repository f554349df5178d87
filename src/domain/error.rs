use std::io;

use thiserror::Error;

/// Library-wide error type for workerkit operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The worker service template could not be read or parsed.
    #[error("Worker template '{path}' is unreadable: {details}")]
    TemplateUnreadable { path: String, details: String },

    /// A configured environment document could not be read or parsed.
    #[error("Environment '{label}' document '{path}' could not be loaded: {details}")]
    EnvironmentDocumentMissing { label: String, path: String, details: String },

    /// A merged document could not be serialized back to YAML.
    #[error("Failed to serialize '{label}' document: {details}")]
    SerializationFailure { label: String, details: String },

    /// Writing a merged document failed after zero or more documents were written.
    #[error(
        "Failed to write '{label}' document '{path}': {details} (already written: {})",
        display_completed(.completed)
    )]
    DocumentWriteFailure { label: String, path: String, completed: Vec<String>, details: String },

    /// Copying the worker source tree failed.
    #[error("Failed to copy worker template '{from}' to '{to}': {details}")]
    CopyFailure { from: String, to: String, details: String },

    /// Worker name cannot be used as a folder or service key.
    #[error(
        "Invalid worker name '{0}': must be alphanumeric with hyphens or underscores and must not start with '.'"
    )]
    InvalidWorkerName(String),

    /// Configuration values are semantically invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Path escapes the project root.
    #[error("Path '{0}' escapes the project root")]
    PathTraversal(String),

    /// Generic validation failure.
    #[error("{0}")]
    Validation(String),
}

fn display_completed(completed: &[String]) -> String {
    if completed.is_empty() { "none".to_string() } else { completed.join(", ") }
}

impl AppError {
    /// Provide an `io::ErrorKind`-like view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::TemplateUnreadable { .. } | AppError::EnvironmentDocumentMissing { .. } => {
                io::ErrorKind::NotFound
            }
            AppError::SerializationFailure { .. }
            | AppError::InvalidWorkerName(_)
            | AppError::InvalidConfig(_)
            | AppError::ParseError { .. }
            | AppError::TomlParseError(_)
            | AppError::PathTraversal(_)
            | AppError::Validation(_) => io::ErrorKind::InvalidInput,
            AppError::DocumentWriteFailure { .. } | AppError::CopyFailure { .. } => {
                io::ErrorKind::Other
            }
        }
    }
}
