use dialoguer::Input;

use crate::app::commands::generate::GenerateOptions;
use crate::domain::AppError;
use crate::domain::identity::validate_safe_path_component;

pub(super) fn run_generate(name: Option<String>, dry_run: bool, json: bool) -> Result<i32, AppError> {
    let name = match name {
        Some(name) => name,
        None => prompt_worker_name()?,
    };

    let outcome = crate::generate(&name, GenerateOptions { dry_run })?;

    if json {
        let report = serde_json::to_string_pretty(&outcome.report()).map_err(|err| {
            AppError::Validation(format!("Failed to serialize generate report: {}", err))
        })?;
        println!("{}", report);
    } else {
        match &outcome.documents {
            Ok(documents) if outcome.dry_run => {
                for doc in documents {
                    println!("# {} ({})", doc.path, doc.label);
                    print!("{}", doc.content);
                }
            }
            Ok(documents) => {
                for doc in documents {
                    println!("✅ Added {} to {}", outcome.identity.folder_name(), doc.path);
                }
            }
            Err(err) => eprintln!("❌ {}", err),
        }
        match &outcome.copy {
            Some(Ok(tree)) => {
                println!("✅ Copied {} to {}/ ({} files)", tree.from, tree.to, tree.files)
            }
            Some(Err(err)) => eprintln!("❌ {}", err),
            None => {}
        }
    }

    Ok(if outcome.is_success() { 0 } else { 1 })
}

fn prompt_worker_name() -> Result<String, AppError> {
    Input::<String>::new()
        .with_prompt("Worker name")
        .validate_with(|input: &String| -> Result<(), &str> {
            if validate_safe_path_component(input) {
                Ok(())
            } else {
                Err("Use alphanumeric characters, hyphens, or underscores.")
            }
        })
        .interact_text()
        .map_err(|err| AppError::Validation(format!("Failed to read worker name: {}", err)))
}
