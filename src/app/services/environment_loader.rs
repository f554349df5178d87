//! Load the configured environment documents.

use tracing::debug;

use crate::domain::{AppError, EnvironmentDocument, EnvironmentDocuments, EnvironmentSpec};
use crate::ports::DocumentStore;

/// Read and parse every environment in `specs`, in order.
///
/// The first environment that cannot be read or parsed aborts the load; no
/// environment is skipped.
pub fn load_documents<S: DocumentStore>(
    store: &S,
    specs: &[EnvironmentSpec],
) -> Result<EnvironmentDocuments, AppError> {
    specs
        .iter()
        .map(|spec| {
            let content =
                store.read_file(&spec.path).map_err(|err| AppError::EnvironmentDocumentMissing {
                    label: spec.label.clone(),
                    path: spec.path.clone(),
                    details: err.to_string(),
                })?;
            let document = EnvironmentDocument::parse(spec, &content)?;
            debug!(label = %spec.label, path = %spec.path, "loaded environment document");
            Ok(document)
        })
        .collect::<Result<Vec<_>, AppError>>()
        .map(EnvironmentDocuments::new)
}
