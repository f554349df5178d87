//! Compose service definitions.

use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;

/// Build section of a compose service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSpec {
    pub context: String,
    #[serde(default = "default_dockerfile")]
    pub dockerfile: String,
    /// Build keys not modelled above (`args`, `target`, ...), kept verbatim.
    #[serde(flatten)]
    pub extra: Mapping,
}

impl BuildSpec {
    pub fn new(context: &str, dockerfile: &str) -> Self {
        Self {
            context: context.to_string(),
            dockerfile: dockerfile.to_string(),
            extra: Mapping::new(),
        }
    }
}

fn default_dockerfile() -> String {
    "Dockerfile".to_string()
}

/// A compose service entry with the fields a worker uses.
///
/// Any other compose key (`restart`, `ports`, `networks`, ...) is carried in
/// `extra` and written back unchanged after the modelled fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDefinition {
    pub image: String,
    pub build: BuildSpec,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub environment: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<String>,
    #[serde(flatten)]
    pub extra: Mapping,
}

/// Worker-agnostic template of a service, as read from the template document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceStanza(ServiceDefinition);

impl ServiceStanza {
    pub fn new(definition: ServiceDefinition) -> Self {
        Self(definition)
    }

    pub fn definition(&self) -> &ServiceDefinition {
        &self.0
    }
}

/// Worker-specific service entry produced by synthesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WorkerDefinition(ServiceDefinition);

impl WorkerDefinition {
    pub(crate) fn new(definition: ServiceDefinition) -> Self {
        Self(definition)
    }

    pub fn definition(&self) -> &ServiceDefinition {
        &self.0
    }
}

/// Split a `KEY=value` assignment into its key.
pub fn env_key(assignment: &str) -> &str {
    assignment.split_once('=').map(|(key, _)| key).unwrap_or(assignment)
}

/// Split a `host:container[:mode]` volume into host path and the remainder.
pub fn split_volume(volume: &str) -> Option<(&str, &str)> {
    volume.split_once(':')
}
