//! code-validation CLI tool.
//!
//! Usage:
//! ```bash
//! code-validation [OPTIONS] <PATH>
//! code-validation list-checks
//! code-validation init
//! ```

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Validates Python sources against style guidelines and writes one
/// markdown report per file
#[derive(Parser)]
#[command(name = "code-validation")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory to write reports to
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Report template to use instead of the built-in one
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Summary format printed after the run
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Directory containing the Python files to validate
    paths: Vec<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List available checks
    ListChecks,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for the run summary.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::ListChecks) => {
            commands::list_checks::run();
            Ok(())
        }
        Some(Commands::Init { force }) => commands::init::run(force),
        None => {
            let [path] = cli.paths.as_slice() else {
                bail!("Please provide a path.");
            };
            let source = config_resolver::resolve(path, cli.config.as_deref());
            commands::check::run(
                path,
                &source,
                commands::check::Overrides {
                    output_dir: cli.output_dir,
                    template: cli.template,
                },
                cli.format,
            )
        }
    }
}
