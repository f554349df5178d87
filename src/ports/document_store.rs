//! Project-level file operations used by worker generation.
//!
//! This port provides generic file I/O scoped to the project root. It does not
//! know about compose documents or templates; those belong to domain and app.

use std::path::PathBuf;

use crate::domain::AppError;

/// Port for reading, writing, and copying project files.
///
/// All `path` arguments are relative to the project root.
/// Implementations must reject paths that escape the root boundary.
pub trait DocumentStore {
    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &str) -> Result<String, AppError>;

    /// Write UTF-8 content to a file, creating parent directories as needed.
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Check whether a file or directory exists.
    fn file_exists(&self, path: &str) -> bool;

    /// Check whether a path is a directory.
    fn is_dir(&self, path: &str) -> bool;

    /// Copy a directory tree, overwriting files that already exist at the
    /// destination. Returns the number of files copied.
    fn copy_dir_all(&self, from: &str, to: &str) -> Result<u64, AppError>;

    /// Remove a directory and all its contents. No-op if absent.
    fn remove_dir_all(&self, path: &str) -> Result<(), AppError>;

    /// Resolve a relative path to an absolute path within the project root.
    fn resolve_path(&self, path: &str) -> PathBuf;
}
