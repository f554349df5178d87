//! Insert and remove worker services in environment documents.

use serde_yaml::{Mapping, Value};

use crate::domain::AppError;
use crate::domain::environment::{EnvironmentDocuments, SERVICES_KEY};
use crate::domain::service::WorkerDefinition;

/// Merge `worker` into every document under the key `folder_name`.
///
/// Each document's `document` becomes a copy of its `original` with the worker
/// inserted into `services`. An existing entry under the same key is replaced
/// in place, so repeated generation yields the same key set.
pub fn merge_into(
    documents: EnvironmentDocuments,
    worker: &WorkerDefinition,
    folder_name: &str,
) -> Result<EnvironmentDocuments, AppError> {
    let entry = serde_yaml::to_value(worker).map_err(|err| AppError::SerializationFailure {
        label: folder_name.to_string(),
        details: err.to_string(),
    })?;

    Ok(documents
        .into_iter()
        .map(|mut doc| {
            let mut merged = doc.original.clone();
            let services = merged.entry(Value::from(SERVICES_KEY)).or_insert(Value::Null);
            if !services.is_mapping() {
                *services = Value::Mapping(Mapping::new());
            }
            if let Value::Mapping(services) = services {
                services.insert(Value::from(folder_name), entry.clone());
            }
            doc.document = Some(merged);
            doc
        })
        .collect())
}

/// Remove the service keyed by `folder_name` from every document.
///
/// Returns the documents and the labels of those that contained the key.
/// Documents without the key get an unchanged copy as their `document`.
pub fn detach_from(
    documents: EnvironmentDocuments,
    folder_name: &str,
) -> (EnvironmentDocuments, Vec<String>) {
    let mut touched = Vec::new();
    let documents = documents
        .into_iter()
        .map(|mut doc| {
            let mut detached = doc.original.clone();
            if let Some(Value::Mapping(services)) = detached.get_mut(SERVICES_KEY)
                && services.shift_remove(folder_name).is_some()
            {
                touched.push(doc.label.clone());
            }
            doc.document = Some(detached);
            doc
        })
        .collect();
    (documents, touched)
}

/// Service keys of a document in document order.
pub fn service_keys(document: &Mapping) -> Vec<String> {
    match document.get(SERVICES_KEY) {
        Some(Value::Mapping(services)) => {
            services.keys().filter_map(|key| key.as_str().map(str::to_string)).collect()
        }
        _ => Vec::new(),
    }
}
