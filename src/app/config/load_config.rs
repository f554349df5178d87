//! Generator configuration loading from the project root.

use tracing::debug;

use crate::domain::config::{self, paths::CONFIG_FILE};
use crate::domain::{AppError, GeneratorConfig};
use crate::ports::DocumentStore;

/// Load `workerkit.toml`, or the defaults when the file is absent.
pub fn load_config<S: DocumentStore>(store: &S) -> Result<GeneratorConfig, AppError> {
    if !store.file_exists(CONFIG_FILE) {
        debug!("no {} found, using defaults", CONFIG_FILE);
        return Ok(GeneratorConfig::default());
    }

    let content = store.read_file(CONFIG_FILE)?;
    config::parse::parse_config_content(&content)
}
