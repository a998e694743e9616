//! Configuration types for code-validation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Limits applied by the checks.
    #[serde(default)]
    pub thresholds: Thresholds,

    /// Report output configuration.
    #[serde(default)]
    pub report: ReportConfig,

    /// Per-check configurations, keyed by check name.
    #[serde(default)]
    pub checks: HashMap<String, CheckConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// Relative report paths are resolved against the file's directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut config = Self::parse(&content)?;
        if let Some(dir) = path.parent() {
            config.report.rebase(dir);
        }
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a check is enabled. Checks are enabled unless configured off.
    #[must_use]
    pub fn is_check_enabled(&self, check_name: &str) -> bool {
        self.checks
            .get(check_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Glob patterns to exclude from analysis.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            exclude: vec![
                "**/__pycache__/**".to_string(),
                "**/.venv/**".to_string(),
            ],
        }
    }
}

/// Limits enforced by the checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Maximum raw lines per file.
    pub max_file_lines: usize,
    /// Maximum characters per line, trailing comment excluded.
    pub max_line_length: usize,
    /// Maximum characters in an assigned identifier.
    pub max_variable_length: usize,
    /// Maximum lines in a function body.
    pub max_function_lines: usize,
}

impl Thresholds {
    /// Default maximum raw lines per file.
    pub const MAX_FILE_LINES: usize = 2000;
    /// Default maximum characters per line.
    pub const MAX_LINE_LENGTH: usize = 150;
    /// Default maximum identifier length.
    pub const MAX_VARIABLE_LENGTH: usize = 25;
    /// Default maximum function body lines.
    pub const MAX_FUNCTION_LINES: usize = 40;
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            max_file_lines: Self::MAX_FILE_LINES,
            max_line_length: Self::MAX_LINE_LENGTH,
            max_variable_length: Self::MAX_VARIABLE_LENGTH,
            max_function_lines: Self::MAX_FUNCTION_LINES,
        }
    }
}

/// Where reports go and which template renders them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Directory receiving the markdown reports.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Custom report template; the built-in one is used when unset.
    #[serde(default)]
    pub template: Option<PathBuf>,
}

impl ReportConfig {
    /// Joins relative `output_dir` and `template` paths onto `dir`.
    pub fn rebase(&mut self, dir: &Path) {
        for path in [&mut self.output_dir, &mut self.template].into_iter().flatten() {
            if path.is_relative() {
                *path = dir.join(&*path);
            }
        }
    }
}

/// Per-check configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Whether this check is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.thresholds.max_file_lines, 2000);
        assert_eq!(config.thresholds.max_line_length, 150);
        assert_eq!(config.thresholds.max_variable_length, 25);
        assert_eq!(config.thresholds.max_function_lines, 40);
        assert!(config.checks.is_empty());
        assert!(config.report.output_dir.is_none());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[analyzer]
exclude = ["**/migrations/**"]

[thresholds]
max_line_length = 120

[report]
output_dir = "reports"

[checks.wildcard-imports]
enabled = false
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.analyzer.exclude, vec!["**/migrations/**"]);
        assert_eq!(config.thresholds.max_line_length, 120);
        // unspecified thresholds keep their defaults
        assert_eq!(config.thresholds.max_function_lines, 40);
        assert_eq!(config.report.output_dir, Some(PathBuf::from("reports")));
        assert!(!config.is_check_enabled("wildcard-imports"));
        assert!(config.is_check_enabled("line-length"));
    }

    #[test]
    fn test_parse_error() {
        let err = Config::parse("[thresholds]\nmax_line_length = \"wide\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_report_paths_follow_config_file() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("scripts");
        std::fs::create_dir(&dir).unwrap();
        let path = dir.join("code-validation.toml");
        std::fs::write(&path, "[report]\noutput_dir = \"out\"\ntemplate = \"t.md\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.report.output_dir, Some(dir.join("out")));
        assert_eq!(config.report.template, Some(dir.join("t.md")));
    }

    #[test]
    fn test_absolute_report_paths_are_kept() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("reports");
        let path = tmp.path().join("nested").join("code-validation.toml");
        std::fs::create_dir(tmp.path().join("nested")).unwrap();
        let toml = format!("[report]\noutput_dir = {:?}\n", out.display().to_string());
        std::fs::write(&path, toml).unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.report.output_dir, Some(out));
        assert!(config.report.template.is_none());
    }
}
