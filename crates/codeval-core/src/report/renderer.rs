//! Handlebars rendering of report models into markdown files.

use handlebars::Handlebars;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::model::ReportModel;
use crate::config::Thresholds;
use crate::types::ViolationSet;

/// The built-in report template.
pub const DEFAULT_TEMPLATE: &str = include_str!("validation_output.md.hbs");

const TEMPLATE_NAME: &str = "validation_output";

/// Errors raised while loading templates or writing reports.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The configured template file does not exist.
    #[error("report template not found: {}", .path.display())]
    MissingTemplate {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The template file exists but could not be read.
    #[error("failed to read report template {}: {source}", .path.display())]
    ReadTemplate {
        /// Template path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The template is not valid Handlebars.
    #[error("invalid report template: {0}")]
    Template(#[from] handlebars::TemplateError),

    /// The template references a field the report model does not have.
    #[error("failed to render report: {0}")]
    Render(#[from] handlebars::RenderError),

    /// The report could not be written.
    #[error("failed to write report {}: {source}", .path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

/// Renders [`ReportModel`]s through a compiled template.
///
/// Strict mode is on and HTML escaping is off: every placeholder must name a
/// model field, and values are inserted verbatim.
pub struct ReportRenderer {
    registry: Handlebars<'static>,
}

impl std::fmt::Debug for ReportRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportRenderer").finish_non_exhaustive()
    }
}

impl ReportRenderer {
    /// Compiles `template` and verifies it against the report model.
    ///
    /// # Errors
    ///
    /// Returns an error if the template does not compile or references a
    /// placeholder the model does not provide.
    pub fn new(template: &str) -> Result<Self, ReportError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);
        registry.register_template_string(TEMPLATE_NAME, template)?;

        let renderer = Self { registry };
        let probe = ReportModel::new("probe.py", true, &ViolationSet::new(), &Thresholds::default());
        renderer.render(&probe)?;
        Ok(renderer)
    }

    /// Renderer for the built-in template.
    ///
    /// # Errors
    ///
    /// Returns an error only if the built-in template is broken.
    pub fn builtin() -> Result<Self, ReportError> {
        Self::new(DEFAULT_TEMPLATE)
    }

    /// Loads and compiles a template file.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::MissingTemplate`] if the file does not exist,
    /// or any error from [`ReportRenderer::new`].
    pub fn from_file(path: &Path) -> Result<Self, ReportError> {
        if !path.is_file() {
            return Err(ReportError::MissingTemplate {
                path: path.to_path_buf(),
            });
        }
        let template = std::fs::read_to_string(path).map_err(|source| ReportError::ReadTemplate {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded report template from {}", path.display());
        Self::new(&template)
    }

    /// Renders a model to markdown.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render(&self, model: &ReportModel) -> Result<String, ReportError> {
        Ok(self.registry.render(TEMPLATE_NAME, model)?)
    }

    /// Renders a model and writes it into `output_dir`, creating the
    /// directory if needed. Returns the path written.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or writing fails.
    pub fn write(&self, model: &ReportModel, output_dir: &Path) -> Result<PathBuf, ReportError> {
        let rendered = self.render(model)?;

        std::fs::create_dir_all(output_dir).map_err(|source| ReportError::Write {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let path = output_dir.join(model.output_file_name());
        std::fs::write(&path, rendered).map_err(|source| ReportError::Write {
            path: path.clone(),
            source,
        })?;

        debug!("Wrote {}", path.display());
        Ok(path)
    }
}
