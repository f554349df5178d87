//! `DocumentStore` implementation for `FilesystemStore`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::AppError;
use crate::ports::DocumentStore;

use super::{FilesystemStore, normalize_path};

impl DocumentStore for FilesystemStore {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        let full_path = self.resolve_path(path);
        self.validate_path_within_root(&full_path)?;
        fs::read_to_string(full_path).map_err(AppError::from)
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        self.validate_path_within_root(&full_path)?;
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(full_path, content).map_err(AppError::from)
    }

    fn file_exists(&self, path: &str) -> bool {
        let full_path = self.resolve_path(path);
        if self.validate_path_within_root(&full_path).is_err() {
            return false;
        }
        full_path.exists()
    }

    fn is_dir(&self, path: &str) -> bool {
        let full_path = self.resolve_path(path);
        if self.validate_path_within_root(&full_path).is_err() {
            return false;
        }
        full_path.is_dir()
    }

    fn copy_dir_all(&self, from: &str, to: &str) -> Result<u64, AppError> {
        let source = self.resolve_path(from);
        let destination = self.resolve_path(to);
        self.validate_path_within_root(&source)?;
        self.validate_path_within_root(&destination)?;

        if !source.is_dir() {
            return Err(AppError::Validation(format!("'{}' is not a directory", from)));
        }
        if normalize_path(&destination).starts_with(normalize_path(&source)) {
            return Err(AppError::Validation(format!(
                "cannot copy '{}' into itself ('{}')",
                from, to
            )));
        }

        copy_tree(&source, &destination)
    }

    fn remove_dir_all(&self, path: &str) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        self.validate_path_within_root(&full_path)?;
        if full_path.exists() {
            fs::remove_dir_all(full_path)?;
        }
        Ok(())
    }

    fn resolve_path(&self, path: &str) -> PathBuf {
        self.root().join(path)
    }
}

/// Recursively copy `source` into `destination`. Symlinks are followed; a link
/// to a directory enclosing `source` is rejected.
fn copy_tree(source: &Path, destination: &Path) -> Result<u64, AppError> {
    fs::create_dir_all(destination)?;
    let mut copied = 0;
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let path = entry.path();
        let target = destination.join(entry.file_name());
        if is_dir_following_links(source, &path, entry.file_type()?)? {
            copied += copy_tree(&path, &target)?;
        } else {
            fs::copy(&path, &target)?;
            debug!(file = %target.display(), "copied");
            copied += 1;
        }
    }
    Ok(copied)
}

fn is_dir_following_links(
    parent: &Path,
    path: &Path,
    file_type: fs::FileType,
) -> Result<bool, AppError> {
    if !file_type.is_symlink() {
        return Ok(file_type.is_dir());
    }
    let target = fs::canonicalize(path)?;
    if !target.is_dir() {
        return Ok(false);
    }
    if fs::canonicalize(parent)?.starts_with(&target) {
        return Err(AppError::Validation(format!(
            "symlink '{}' points to an enclosing directory",
            path.display()
        )));
    }
    Ok(true)
}
