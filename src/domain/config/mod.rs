//! Generator configuration (`workerkit.toml`).

pub mod parse;
pub mod paths;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;
use crate::domain::environment::{EnvironmentSpec, default_environments};
use crate::domain::identity::DEFAULT_FOLDER_SUFFIX;
use crate::domain::synthesis::DEFAULT_QUEUE_KEY;

/// Configuration for worker generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Appended to a worker's logical name to form its folder name.
    #[serde(default = "default_folder_suffix")]
    pub folder_suffix: String,
    /// Environment variable that names the worker's queue.
    #[serde(default = "default_queue_key")]
    pub queue_key: String,
    /// Template locations.
    #[serde(default)]
    pub template: TemplateConfig,
    /// Environment documents, in write order.
    #[serde(default = "default_environments")]
    pub environments: Vec<EnvironmentSpec>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            folder_suffix: default_folder_suffix(),
            queue_key: default_queue_key(),
            template: TemplateConfig::default(),
            environments: default_environments(),
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.environments.is_empty() {
            return Err(AppError::InvalidConfig(
                "at least one environment must be configured".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for env in &self.environments {
            if env.label.trim().is_empty() {
                return Err(AppError::InvalidConfig("environment label must not be empty".into()));
            }
            if env.path.trim().is_empty() {
                return Err(AppError::InvalidConfig(format!(
                    "environment '{}' must have a path",
                    env.label
                )));
            }
            if !seen.insert(env.label.as_str()) {
                return Err(AppError::InvalidConfig(format!(
                    "duplicate environment label '{}'",
                    env.label
                )));
            }
        }

        if self.queue_key.is_empty() || self.queue_key.contains('=') {
            return Err(AppError::InvalidConfig(format!(
                "queue_key '{}' must be non-empty and must not contain '='",
                self.queue_key
            )));
        }

        self.template.validate()
    }
}

/// Where the worker template lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateConfig {
    /// Service stanza document.
    #[serde(default = "default_stanza_path")]
    pub stanza: String,
    /// Source tree copied for each new worker.
    #[serde(default = "default_source_dir")]
    pub source_dir: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self { stanza: default_stanza_path(), source_dir: default_source_dir() }
    }
}

impl TemplateConfig {
    fn validate(&self) -> Result<(), AppError> {
        if self.stanza.trim().is_empty() {
            return Err(AppError::InvalidConfig("template.stanza must not be empty".into()));
        }
        if self.source_dir.trim().is_empty() {
            return Err(AppError::InvalidConfig("template.source_dir must not be empty".into()));
        }
        Ok(())
    }
}

fn default_folder_suffix() -> String {
    DEFAULT_FOLDER_SUFFIX.to_string()
}

fn default_queue_key() -> String {
    DEFAULT_QUEUE_KEY.to_string()
}

fn default_stanza_path() -> String {
    "templates/yaml/worker.yml".to_string()
}

fn default_source_dir() -> String {
    "pushkin-worker".to_string()
}
