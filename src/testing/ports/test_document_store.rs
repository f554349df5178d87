//! Test double for `DocumentStore`.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::DocumentStore;

use super::test_files::TestFiles;

/// In-memory `DocumentStore` that records writes and directory copies in call order.
#[derive(Clone, Debug)]
pub struct MockDocumentStore {
    files: TestFiles,
    writes: Arc<Mutex<Vec<(String, String)>>>,
    copies: Arc<Mutex<Vec<(String, String)>>>,
    failing_writes: Arc<Mutex<HashSet<String>>>,
    fail_copies: Arc<Mutex<bool>>,
}

impl MockDocumentStore {
    pub fn new(files: TestFiles) -> Self {
        Self {
            files,
            writes: Arc::default(),
            copies: Arc::default(),
            failing_writes: Arc::default(),
            fail_copies: Arc::default(),
        }
    }

    /// `(path, content)` of every successful write, in order.
    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.lock().unwrap().clone()
    }

    /// `(from, to)` of every directory copy, in order.
    pub fn copies(&self) -> Vec<(String, String)> {
        self.copies.lock().unwrap().clone()
    }

    /// Make writes to `path` fail with an I/O error.
    pub fn fail_writes_to(&self, path: &str) {
        self.failing_writes.lock().unwrap().insert(path.to_string());
    }

    /// Make every directory copy fail with an I/O error.
    pub fn fail_copies(&self) {
        *self.fail_copies.lock().unwrap() = true;
    }

    fn prefix(path: &str) -> String {
        if path.ends_with('/') { path.to_string() } else { format!("{}/", path) }
    }
}

impl DocumentStore for MockDocumentStore {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        self.files.get(path).ok_or_else(|| {
            AppError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "Mock file not found"))
        })
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        if self.failing_writes.lock().unwrap().contains(path) {
            return Err(AppError::from(std::io::Error::other("Mock write failure")));
        }
        self.files.add(path, content);
        self.writes.lock().unwrap().push((path.to_string(), content.to_string()));
        Ok(())
    }

    fn file_exists(&self, path: &str) -> bool {
        let files = self.files.files.lock().unwrap();
        let prefix = Self::prefix(path);
        files.contains_key(path) || files.keys().any(|k| k.starts_with(&prefix))
    }

    fn is_dir(&self, path: &str) -> bool {
        let prefix = Self::prefix(path);
        self.files.files.lock().unwrap().keys().any(|k| k.starts_with(&prefix))
    }

    fn copy_dir_all(&self, from: &str, to: &str) -> Result<u64, AppError> {
        if *self.fail_copies.lock().unwrap() {
            return Err(AppError::from(std::io::Error::other("Mock copy failure")));
        }
        self.copies.lock().unwrap().push((from.to_string(), to.to_string()));

        let source_prefix = Self::prefix(from);
        let target_prefix = Self::prefix(to);
        let mut files = self.files.files.lock().unwrap();
        let copied: Vec<(String, String)> = files
            .iter()
            .filter_map(|(key, content)| {
                key.strip_prefix(&source_prefix)
                    .map(|rest| (format!("{}{}", target_prefix, rest), content.clone()))
            })
            .collect();
        let count = copied.len() as u64;
        files.extend(copied);
        Ok(count)
    }

    fn remove_dir_all(&self, path: &str) -> Result<(), AppError> {
        let prefix = Self::prefix(path);
        self.files.files.lock().unwrap().retain(|key, _| !key.starts_with(&prefix));
        Ok(())
    }

    fn resolve_path(&self, path: &str) -> PathBuf {
        PathBuf::from(path)
    }
}
