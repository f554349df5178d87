//! CLI Adapter.

mod generate;
mod remove;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "workerkit")]
#[command(version)]
#[command(
    about = "Scaffold queue workers into docker-compose environment files",
    long_about = None
)]
struct Cli {
    /// Log pipeline steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a worker service to every environment and copy the worker template
    #[clap(visible_alias = "g")]
    Generate {
        /// Worker name (also the queue it consumes); prompted for when omitted
        name: Option<String>,
        /// Print the merged documents without writing or copying anything
        #[arg(long)]
        dry_run: bool,
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove a worker service from every environment
    #[clap(visible_alias = "rm")]
    Remove {
        /// Worker name
        name: String,
        /// Also delete the worker folder
        #[arg(long)]
        purge: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<i32, AppError> = match cli.command {
        Commands::Generate { name, dry_run, json } => generate::run_generate(name, dry_run, json),
        Commands::Remove { name, purge } => remove::run_remove(&name, purge).map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
