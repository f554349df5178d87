//! Remove a worker's service entry from every environment document.

use tracing::info;

use crate::app::AppContext;
use crate::app::commands::generate::{RenderedDocument, write_documents};
use crate::app::services::load_documents;
use crate::domain::{AppError, WorkerIdentity, detach_from};
use crate::ports::DocumentStore;

/// Options for the remove command.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveOptions {
    /// Also delete the worker's folder.
    pub purge: bool,
}

/// Outcome of a remove run.
#[derive(Debug)]
pub struct RemoveOutcome {
    pub identity: WorkerIdentity,
    /// Labels of the documents that contained the worker and were rewritten.
    pub updated: Vec<String>,
    /// Whether the worker folder was deleted.
    pub purged: bool,
}

/// Execute the remove command for `logical_name`.
///
/// Documents that do not contain the worker are left untouched on disk.
pub fn execute<S: DocumentStore>(
    ctx: &AppContext<S>,
    logical_name: &str,
    options: RemoveOptions,
) -> Result<RemoveOutcome, AppError> {
    let config = ctx.config();
    let identity = WorkerIdentity::derive(logical_name, &config.folder_suffix)?;

    let documents = load_documents(ctx.store(), &config.environments)?;
    let (documents, updated) = detach_from(documents, identity.folder_name());

    let rendered = documents
        .iter()
        .filter(|doc| updated.contains(&doc.label))
        .map(|doc| {
            Ok(RenderedDocument {
                label: doc.label.clone(),
                path: doc.path.clone(),
                content: doc.render()?,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;
    write_documents(ctx.store(), &rendered)?;

    let purged = options.purge && ctx.store().is_dir(identity.folder_name());
    if purged {
        ctx.store().remove_dir_all(identity.folder_name())?;
        info!(folder = identity.folder_name(), "deleted worker folder");
    }

    Ok(RemoveOutcome { identity, updated, purged })
}

#[cfg(test)]
mod tests {
    use serde_yaml::Value;

    use super::*;
    use crate::app::commands::generate::{self, GenerateOptions};
    use crate::domain::GeneratorConfig;
    use crate::testing::fixtures::pushkin_project;
    use crate::testing::{MockDocumentStore, TestFiles};

    fn context(files: TestFiles) -> (MockDocumentStore, AppContext<MockDocumentStore>) {
        let store = MockDocumentStore::new(files);
        let ctx = AppContext::new(store.clone(), GeneratorConfig::default());
        (store, ctx)
    }

    #[test]
    fn removes_a_generated_worker() {
        let files = pushkin_project();
        let (store, ctx) = context(files.clone());
        generate::execute(&ctx, "test", GenerateOptions::default()).unwrap();

        let outcome = execute(&ctx, "test", RemoveOptions::default()).unwrap();

        assert_eq!(outcome.updated, vec!["debug", "production"]);
        assert!(!outcome.purged);
        let debug: Value =
            serde_yaml::from_str(&files.get("docker-compose.debug.yml").unwrap()).unwrap();
        assert!(debug["services"].get("test-worker").is_none());
        assert_eq!(debug["services"]["debug-service"], Value::from("debug"));
        assert!(files.get("test-worker/Dockerfile").is_some());
        assert_eq!(store.writes().len(), 4);
    }

    #[test]
    fn leaves_documents_without_the_worker_untouched() {
        let (store, ctx) = context(pushkin_project());

        let outcome = execute(&ctx, "ghost", RemoveOptions::default()).unwrap();

        assert!(outcome.updated.is_empty());
        assert!(store.writes().is_empty());
    }

    #[test]
    fn purge_deletes_the_worker_folder() {
        let files = pushkin_project();
        let (_store, ctx) = context(files.clone());
        generate::execute(&ctx, "apple", GenerateOptions::default()).unwrap();

        let outcome = execute(&ctx, "apple", RemoveOptions { purge: true }).unwrap();

        assert!(outcome.purged);
        assert!(files.get("apple-worker/Dockerfile").is_none());
        assert!(files.get("pushkin-worker/Dockerfile").is_some());
    }
}
