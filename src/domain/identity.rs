//! Worker identity: logical (queue) name and folder name.

use serde::Serialize;

use crate::domain::AppError;

/// Suffix appended to a logical name to form its folder name.
pub const DEFAULT_FOLDER_SUFFIX: &str = "-worker";

/// Identity of a generated worker.
///
/// The logical name is what the worker consumes from the queue; the folder
/// name is what the filesystem and the compose service collection see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkerIdentity {
    logical_name: String,
    folder_name: String,
}

impl WorkerIdentity {
    /// Build an identity from an explicit pair of names.
    pub fn new(logical_name: &str, folder_name: &str) -> Result<Self, AppError> {
        if !validate_safe_path_component(logical_name) {
            return Err(AppError::InvalidWorkerName(logical_name.to_string()));
        }
        if !validate_safe_path_component(folder_name) {
            return Err(AppError::InvalidWorkerName(folder_name.to_string()));
        }
        Ok(Self { logical_name: logical_name.to_string(), folder_name: folder_name.to_string() })
    }

    /// Derive the folder name by appending `suffix` to the logical name.
    pub fn derive(logical_name: &str, suffix: &str) -> Result<Self, AppError> {
        Self::new(logical_name, &format!("{}{}", logical_name, suffix))
    }

    pub fn logical_name(&self) -> &str {
        &self.logical_name
    }

    pub fn folder_name(&self) -> &str {
        &self.folder_name
    }
}

/// Validates a name for use as a single path component and compose service key.
///
/// Checks:
/// - Non-empty
/// - Does not start with '.'
/// - No path separators or null bytes
/// - Characters are alphanumeric, '-', or '_' only
pub fn validate_safe_path_component(component: &str) -> bool {
    if component.is_empty() || component.starts_with('.') {
        return false;
    }
    if component.contains('/') || component.contains('\\') || component.contains('\0') {
        return false;
    }
    component.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}
