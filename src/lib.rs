//! workerkit: scaffold queue workers into docker-compose environment files.
//!
//! Runs against the project in the current directory. Concurrent runs on the
//! same project are not isolated from each other (last writer wins); callers
//! that need concurrent generation must serialize calls themselves.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use adapters::FilesystemStore;
use app::AppContext;
use app::commands::{generate, remove};

pub use app::commands::generate::{
    CopiedTree, GenerateOptions, GenerateOutcome, GenerateReport, GenerationPlan, RenderedDocument,
};
pub use app::commands::remove::{RemoveOptions, RemoveOutcome};
pub use domain::{AppError, GeneratorConfig, WorkerIdentity};

fn current_context() -> Result<AppContext<FilesystemStore>, AppError> {
    let store = FilesystemStore::current()?;
    let config = app::config::load_config(&store)?;
    Ok(AppContext::new(store, config))
}

/// Generate a worker named `name` in the current project.
///
/// Returns `Err` when configuration, an environment document, or the worker
/// template cannot be loaded; nothing is written in that case. Otherwise the
/// outcome reports the document writes and the template copy separately.
pub fn generate(name: &str, options: GenerateOptions) -> Result<GenerateOutcome, AppError> {
    let ctx = current_context()?;
    generate::execute(&ctx, name, options)
}

/// Remove the worker named `name` from every environment document.
pub fn remove(name: &str, options: RemoveOptions) -> Result<RemoveOutcome, AppError> {
    let ctx = current_context()?;
    remove::execute(&ctx, name, options)
}
