//! Core analyzer for orchestrating per-file validation.

use crate::check::{Check, CheckBox};
use crate::config::Config;
use crate::context::{FileContext, SourceFile};
use crate::report::{ReportError, ReportModel, ReportRenderer};
use crate::structure::{ParserBox, SourceParser};
use crate::types::{FileFailure, FileOutcome, FileReport, RunSummary, ViolationSet};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

/// Name of the report directory created next to the executable.
pub const OUTPUT_DIR_NAME: &str = "code_validation_output";

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The root to analyze is not a directory.
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// No source parser was registered.
    #[error("No source parser configured")]
    MissingParser,

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Template or report output error.
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Result of running every check over one in-memory file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Whether the file parsed; structural checks ran only if it did.
    pub parsed: bool,
    /// Violations found.
    pub violations: ViolationSet,
}

/// Returns the default report directory: `code_validation_output/` next to
/// the running executable, or in the working directory if that is unknown.
#[must_use]
pub fn default_output_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(OUTPUT_DIR_NAME)))
        .unwrap_or_else(|| PathBuf::from(OUTPUT_DIR_NAME))
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    parser: Option<ParserBox>,
    checks: Vec<CheckBox>,
    exclude_patterns: Vec<String>,
    config: Option<Config>,
    output_dir: Option<PathBuf>,
    template: Option<PathBuf>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory to analyze.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Sets the source parser.
    #[must_use]
    pub fn parser<P: SourceParser + 'static>(mut self, parser: P) -> Self {
        self.parser = Some(Box::new(parser));
        self
    }

    /// Adds a check to the analyzer.
    #[must_use]
    pub fn check<C: Check + 'static>(mut self, check: C) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Adds a boxed check to the analyzer.
    #[must_use]
    pub fn check_box(mut self, check: CheckBox) -> Self {
        self.checks.push(check);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets the report directory, overriding the configuration.
    #[must_use]
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(path.into());
        self
    }

    /// Sets the report template file, overriding the configuration.
    #[must_use]
    pub fn template(mut self, path: impl Into<PathBuf>) -> Self {
        self.template = Some(path.into());
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if the root is not a directory, no parser was set,
    /// an exclude pattern is invalid, or the report template is missing or
    /// does not fit the report model.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let config = self.config.unwrap_or_default();
        let parser = self.parser.ok_or(AnalyzerError::MissingParser)?;

        let root = self.root.unwrap_or_else(|| PathBuf::from("."));
        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };
        if !root.is_dir() {
            return Err(AnalyzerError::NotADirectory(root));
        }

        let exclude = self
            .exclude_patterns
            .iter()
            .chain(&config.analyzer.exclude)
            .map(|p| glob::Pattern::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        let renderer = match self.template.or_else(|| config.report.template.clone()) {
            Some(path) => ReportRenderer::from_file(&path)?,
            None => ReportRenderer::builtin()?,
        };

        let output_dir = self
            .output_dir
            .or_else(|| config.report.output_dir.clone())
            .unwrap_or_else(default_output_dir);

        Ok(Analyzer {
            root,
            parser,
            checks: self.checks,
            exclude,
            config,
            renderer,
            output_dir,
        })
    }
}

/// The main analyzer: discovers files and validates them one at a time.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    root: PathBuf,
    parser: ParserBox,
    checks: Vec<CheckBox>,
    exclude: Vec<glob::Pattern>,
    config: Config,
    renderer: ReportRenderer,
    output_dir: PathBuf,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root directory being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the directory reports are written to.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Returns the number of registered checks.
    #[must_use]
    pub fn check_count(&self) -> usize {
        self.checks.len()
    }

    /// Validates every discovered file, writing one report per non-empty file.
    ///
    /// A failure in one file is logged and recorded in the summary; the run
    /// continues with the next file.
    #[must_use]
    pub fn analyze(&self) -> RunSummary {
        info!("Starting analysis at {}", self.root.display());

        let files = self.discover_files();
        info!(
            "Found {} {} file(s) to analyze",
            files.len(),
            self.parser.language_id()
        );

        let mut summary = RunSummary::new();
        for path in files {
            match self.analyze_file(&path) {
                Ok(FileOutcome::Written(report)) => summary.reports.push(report),
                Ok(FileOutcome::Skipped) => {
                    debug!("Skipping empty file: {}", path.display());
                    summary.skipped.push(path);
                }
                Err(e) => {
                    error!("Failed to process {}: {}", path.display(), e);
                    summary.failures.push(FileFailure {
                        path,
                        message: e.to_string(),
                    });
                }
            }
        }

        info!(
            "Analysis complete: {} violation(s) in {} report(s), {} failure(s)",
            summary.total_violations(),
            summary.reports.len(),
            summary.failures.len()
        );

        summary
    }

    /// Validates a single file and writes its report.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the report cannot be
    /// written.
    pub fn analyze_file(&self, path: &Path) -> Result<FileOutcome, AnalyzerError> {
        debug!("Analyzing: {}", path.display());

        let source = SourceFile::read(path)?;
        if source.is_empty() {
            return Ok(FileOutcome::Skipped);
        }

        let Evaluation { parsed, violations } = self.evaluate(&source);
        let model = ReportModel::new(
            source.base_name(),
            parsed,
            &violations,
            &self.config.thresholds,
        );
        let output = self.renderer.write(&model, &self.output_dir)?;

        Ok(FileOutcome::Written(FileReport {
            source: path.to_path_buf(),
            output,
            parsed,
            violations,
        }))
    }

    /// Parses a loaded file once and runs every enabled check over it.
    #[must_use]
    pub fn evaluate(&self, source: &SourceFile) -> Evaluation {
        let tree = match self.parser.parse(source) {
            Ok(tree) => Some(tree),
            Err(err) => {
                warn!("{err}: {}; structural checks skipped", err.label());
                debug!("{:?}", miette::Report::new(err));
                None
            }
        };

        let ctx = FileContext::new(source, &self.root, &self.config.thresholds);
        let mut violations = ViolationSet::new();

        for check in &self.checks {
            if !self.config.is_check_enabled(check.name()) {
                debug!("Skipping disabled check: {}", check.name());
                continue;
            }
            if check.is_structural() && tree.is_none() {
                debug!(
                    "Skipping structural check {} for {}",
                    check.name(),
                    ctx.relative_path.display()
                );
                continue;
            }

            for finding in check.check(&ctx, tree.as_ref()) {
                debug!("[{}] {}: {}", check.code(), ctx.relative_path.display(), finding);
                violations.record(finding);
            }
        }

        Evaluation {
            parsed: tree.is_some(),
            violations,
        }
    }

    /// Discovers every file the parser handles, sorted by path.
    fn discover_files(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {e}");
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file() || !self.parser.handles(path) {
                continue;
            }
            if self.should_exclude(path) {
                debug!("Excluding: {}", path.display());
                continue;
            }

            files.push(entry.into_path());
        }

        files
    }

    /// Checks if a path matches an exclude pattern, either as given or
    /// relative to the root.
    fn should_exclude(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        self.exclude
            .iter()
            .any(|pattern| pattern.matches_path(path) || pattern.matches_path(relative))
    }
}
