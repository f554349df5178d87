//! Generate a worker: merge its service into every environment document and
//! copy the template source tree into its folder.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::app::AppContext;
use crate::app::services::{load_documents, load_template};
use crate::domain::{
    AppError, EnvironmentDocument, EnvironmentDocuments, WorkerDefinition, WorkerIdentity,
    merge_into, synthesize,
};
use crate::ports::DocumentStore;

/// Options for the generate command.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Render documents without writing them or copying the template tree.
    pub dry_run: bool,
}

/// Loaded and merged state of one generation run, before anything is written.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    pub identity: WorkerIdentity,
    pub definition: WorkerDefinition,
    pub documents: EnvironmentDocuments,
}

/// A merged document serialized for its environment file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    pub label: String,
    pub path: String,
    pub content: String,
}

/// Result of copying the template source tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopiedTree {
    pub from: String,
    pub to: String,
    pub files: u64,
}

/// Outcome of a generation run whose inputs loaded successfully.
///
/// The document and copy steps are reported separately; one failing does not
/// hide the other.
#[derive(Debug)]
pub struct GenerateOutcome {
    pub identity: WorkerIdentity,
    pub definition: WorkerDefinition,
    pub dry_run: bool,
    /// Rendered documents; written to disk unless `dry_run`.
    pub documents: Result<Vec<RenderedDocument>, AppError>,
    /// Template copy result; `None` on a dry run.
    pub copy: Option<Result<CopiedTree, AppError>>,
}

impl GenerateOutcome {
    pub fn is_success(&self) -> bool {
        self.documents.is_ok() && !matches!(self.copy, Some(Err(_)))
    }

    /// Every step failure, documents first.
    pub fn failures(&self) -> Vec<&AppError> {
        let mut failures = Vec::new();
        if let Err(err) = &self.documents {
            failures.push(err);
        }
        if let Some(Err(err)) = &self.copy {
            failures.push(err);
        }
        failures
    }

    /// Serializable summary of the run.
    pub fn report(&self) -> GenerateReport {
        GenerateReport {
            logical_name: self.identity.logical_name().to_string(),
            folder_name: self.identity.folder_name().to_string(),
            dry_run: self.dry_run,
            success: self.is_success(),
            definition: self.definition.clone(),
            documents: match &self.documents {
                Ok(docs) => StepReport::ok(docs.iter().map(|d| d.path.clone()).collect()),
                Err(err) => StepReport::failed(err),
            },
            copy: self.copy.as_ref().map(|copy| match copy {
                Ok(tree) => StepReport::ok(vec![tree.to.clone()]),
                Err(err) => StepReport::failed(err),
            }),
        }
    }
}

/// JSON view of a `GenerateOutcome`.
#[derive(Debug, Serialize)]
pub struct GenerateReport {
    pub logical_name: String,
    pub folder_name: String,
    pub dry_run: bool,
    pub success: bool,
    pub definition: WorkerDefinition,
    pub documents: StepReport,
    pub copy: Option<StepReport>,
}

#[derive(Debug, Serialize)]
pub struct StepReport {
    pub ok: bool,
    pub paths: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StepReport {
    fn ok(paths: Vec<String>) -> Self {
        Self { ok: true, paths, error: None }
    }

    fn failed(err: &AppError) -> Self {
        Self { ok: false, paths: Vec::new(), error: Some(err.to_string()) }
    }
}

/// Execute the generate command for `logical_name`.
///
/// Loading failures (name, environment documents, template) are returned as
/// `Err` before anything is written or copied.
pub fn execute<S: DocumentStore>(
    ctx: &AppContext<S>,
    logical_name: &str,
    options: GenerateOptions,
) -> Result<GenerateOutcome, AppError> {
    execute_with(ctx, logical_name, options, EnvironmentDocument::render)
}

fn execute_with<S, R>(
    ctx: &AppContext<S>,
    logical_name: &str,
    options: GenerateOptions,
    serialize: R,
) -> Result<GenerateOutcome, AppError>
where
    S: DocumentStore,
    R: Fn(&EnvironmentDocument) -> Result<String, AppError>,
{
    let GenerationPlan { identity, definition, documents } = plan(ctx, logical_name)?;

    let rendered = render_with(&documents, serialize);
    if options.dry_run {
        return Ok(GenerateOutcome {
            identity,
            definition,
            dry_run: true,
            documents: rendered,
            copy: None,
        });
    }

    let documents = rendered.and_then(|rendered| {
        write_documents(ctx.store(), &rendered)?;
        Ok(rendered)
    });
    if let Err(err) = &documents {
        warn!(error = %err, "environment documents were not fully written");
    }

    let copy = copy_template(ctx, &identity);
    if let Err(err) = &copy {
        warn!(error = %err, "worker template was not copied");
    }

    Ok(GenerateOutcome { identity, definition, dry_run: false, documents, copy: Some(copy) })
}

/// Derive the identity, load inputs, synthesize, and merge.
pub fn plan<S: DocumentStore>(
    ctx: &AppContext<S>,
    logical_name: &str,
) -> Result<GenerationPlan, AppError> {
    let config = ctx.config();
    let identity = WorkerIdentity::derive(logical_name, &config.folder_suffix)?;

    let documents = load_documents(ctx.store(), &config.environments)?;
    info!(environments = ?documents.labels(), "loaded environment documents");

    let stanza = load_template(ctx.store(), &config.template.stanza)?;
    let definition = synthesize(&stanza, &identity, &config.queue_key);
    debug!(folder = identity.folder_name(), "synthesized worker definition");

    let documents = merge_into(documents, &definition, identity.folder_name())?;
    Ok(GenerationPlan { identity, definition, documents })
}

/// Serialize every merged document. Fails on the first document that cannot
/// be serialized, before anything is written.
pub fn render(documents: &EnvironmentDocuments) -> Result<Vec<RenderedDocument>, AppError> {
    render_with(documents, EnvironmentDocument::render)
}

fn render_with<R>(
    documents: &EnvironmentDocuments,
    serialize: R,
) -> Result<Vec<RenderedDocument>, AppError>
where
    R: Fn(&EnvironmentDocument) -> Result<String, AppError>,
{
    documents
        .iter()
        .map(|doc| {
            Ok(RenderedDocument {
                label: doc.label.clone(),
                path: doc.path.clone(),
                content: serialize(doc)?,
            })
        })
        .collect()
}

/// Write rendered documents in order, one write per environment.
///
/// Returns the labels written. A failed write reports the labels that were
/// already written before it.
pub fn write_documents<S: DocumentStore>(
    store: &S,
    rendered: &[RenderedDocument],
) -> Result<Vec<String>, AppError> {
    let mut completed = Vec::with_capacity(rendered.len());
    for doc in rendered {
        store.write_file(&doc.path, &doc.content).map_err(|err| {
            AppError::DocumentWriteFailure {
                label: doc.label.clone(),
                path: doc.path.clone(),
                completed: completed.clone(),
                details: err.to_string(),
            }
        })?;
        info!(label = %doc.label, path = %doc.path, "wrote environment document");
        completed.push(doc.label.clone());
    }
    Ok(completed)
}

/// Copy the template source tree into the worker's folder.
pub fn copy_template<S: DocumentStore>(
    ctx: &AppContext<S>,
    identity: &WorkerIdentity,
) -> Result<CopiedTree, AppError> {
    let from = ctx.config().template.source_dir.as_str();
    let to = identity.folder_name();
    let files = ctx.store().copy_dir_all(from, to).map_err(|err| AppError::CopyFailure {
        from: from.to_string(),
        to: to.to_string(),
        details: err.to_string(),
    })?;
    info!(from, to, files, "copied worker template");
    Ok(CopiedTree { from: from.to_string(), to: to.to_string(), files })
}
