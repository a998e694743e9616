//! Check command implementation.

use anyhow::{Context, Result};
use codeval_checks::default_checks;
use codeval_core::{Analyzer, Config};
use codeval_python::PythonParser;
use std::path::{Path, PathBuf};

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Command-line settings that take precedence over the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    /// Report directory.
    pub output_dir: Option<PathBuf>,
    /// Report template.
    pub template: Option<PathBuf>,
}

/// Loads the configuration a [`ConfigSource`] points at.
pub fn load_config(source: &ConfigSource) -> Result<Config> {
    match source {
        ConfigSource::Default => Ok(Config::default()),
        other => {
            // Invariant: non-Default variants always have a path
            let p = other.path().context("resolved config has no path")?;
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            Config::from_file(p).with_context(|| format!("Failed to load config: {}", p.display()))
        }
    }
}

/// Runs the check command.
pub fn run(
    path: &Path,
    source: &ConfigSource,
    overrides: Overrides,
    format: OutputFormat,
) -> Result<()> {
    let config = load_config(source)?;

    let mut builder = Analyzer::builder()
        .root(path)
        .parser(PythonParser::new())
        .config(config);

    if let Some(dir) = overrides.output_dir {
        builder = builder.output_dir(dir);
    }
    if let Some(template) = overrides.template {
        builder = builder.template(template);
    }
    for check in default_checks() {
        builder = builder.check_box(check);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!(
        "Validating {} with {} checks, writing reports to {}",
        path.display(),
        analyzer.check_count(),
        analyzer.output_dir().display()
    );

    let summary = analyzer.analyze();

    super::output::print(&summary, analyzer.output_dir(), format)?;

    if summary.has_failures() {
        std::process::exit(1);
    }

    Ok(())
}
