use crate::app::commands::remove::RemoveOptions;
use crate::domain::AppError;

pub(super) fn run_remove(name: &str, purge: bool) -> Result<(), AppError> {
    let outcome = crate::remove(name, RemoveOptions { purge })?;

    if outcome.updated.is_empty() {
        println!("No environment contains {}", outcome.identity.folder_name());
    }
    for label in &outcome.updated {
        println!("✅ Removed {} from {}", outcome.identity.folder_name(), label);
    }
    if outcome.purged {
        println!("✅ Deleted {}/", outcome.identity.folder_name());
    }
    Ok(())
}
