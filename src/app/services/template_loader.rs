//! Load the worker service template.

use tracing::debug;

use crate::domain::{AppError, ServiceStanza};
use crate::ports::DocumentStore;

/// Read and parse the service stanza at `path`. No substitution is performed.
pub fn load_template<S: DocumentStore>(store: &S, path: &str) -> Result<ServiceStanza, AppError> {
    let unreadable =
        |details: String| AppError::TemplateUnreadable { path: path.to_string(), details };

    let content = store.read_file(path).map_err(|err| unreadable(err.to_string()))?;
    let stanza: ServiceStanza =
        serde_yaml::from_str(&content).map_err(|err| unreadable(err.to_string()))?;

    debug!(path, image = %stanza.definition().image, "loaded worker template");
    Ok(stanza)
}
