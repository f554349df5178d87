//! Deployment environment documents.

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::domain::AppError;

/// Top-level key holding the service collection in a compose document.
pub const SERVICES_KEY: &str = "services";

/// One configured environment: a label and the compose file backing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentSpec {
    pub label: String,
    pub path: String,
}

impl EnvironmentSpec {
    pub fn new(label: &str, path: &str) -> Self {
        Self { label: label.to_string(), path: path.to_string() }
    }
}

/// Environments generated into when no configuration overrides them.
///
/// `docker-compose.yml` is deliberately absent; list it in `workerkit.toml`
/// to include the default environment.
pub fn default_environments() -> Vec<EnvironmentSpec> {
    vec![
        EnvironmentSpec::new("debug", "docker-compose.debug.yml"),
        EnvironmentSpec::new("production", "docker-compose.production.yml"),
    ]
}

/// A loaded environment document.
///
/// `original` is the parsed snapshot and is never modified. `document` holds
/// the merged copy once a merge step has run.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentDocument {
    pub label: String,
    pub path: String,
    pub original: Mapping,
    pub document: Option<Mapping>,
}

impl EnvironmentDocument {
    /// Parse `content` as the document for `spec`.
    ///
    /// An empty file is an empty document. A non-mapping root or a
    /// non-mapping `services` entry is rejected.
    pub fn parse(spec: &EnvironmentSpec, content: &str) -> Result<Self, AppError> {
        let missing = |details: String| AppError::EnvironmentDocumentMissing {
            label: spec.label.clone(),
            path: spec.path.clone(),
            details,
        };

        let value: Value = serde_yaml::from_str(content).map_err(|err| missing(err.to_string()))?;
        let original = match value {
            Value::Null => Mapping::new(),
            Value::Mapping(mapping) => mapping,
            _ => return Err(missing("document root is not a mapping".to_string())),
        };
        match original.get(SERVICES_KEY) {
            None | Some(Value::Mapping(_)) | Some(Value::Null) => {}
            Some(_) => return Err(missing(format!("'{}' is not a mapping", SERVICES_KEY))),
        }

        Ok(Self { label: spec.label.clone(), path: spec.path.clone(), original, document: None })
    }

    /// The merged document, falling back to the original when no merge ran.
    pub fn current(&self) -> &Mapping {
        self.document.as_ref().unwrap_or(&self.original)
    }

    /// Serialize the merged document to YAML.
    pub fn render(&self) -> Result<String, AppError> {
        serde_yaml::to_string(self.current()).map_err(|err| AppError::SerializationFailure {
            label: self.label.clone(),
            details: err.to_string(),
        })
    }
}

/// Environment documents in declared order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvironmentDocuments {
    documents: Vec<EnvironmentDocument>,
}

impl EnvironmentDocuments {
    pub fn new(documents: Vec<EnvironmentDocument>) -> Self {
        Self { documents }
    }

    pub fn get(&self, label: &str) -> Option<&EnvironmentDocument> {
        self.documents.iter().find(|doc| doc.label == label)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.documents.iter().map(|doc| doc.label.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnvironmentDocument> {
        self.documents.iter()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl IntoIterator for EnvironmentDocuments {
    type Item = EnvironmentDocument;
    type IntoIter = std::vec::IntoIter<EnvironmentDocument>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.into_iter()
    }
}

impl FromIterator<EnvironmentDocument> for EnvironmentDocuments {
    fn from_iter<I: IntoIterator<Item = EnvironmentDocument>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
