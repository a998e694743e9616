//! Source files and the context handed to checks.

use std::path::{Path, PathBuf};

use crate::config::Thresholds;

/// A source file loaded into memory.
///
/// Lines are stored without their terminators (`\n` or `\r\n`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    text: String,
    lines: Vec<String>,
}

impl SourceFile {
    /// Creates a source file from already-loaded text.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        let text = text.into();
        let lines = text.lines().map(str::to_owned).collect();
        Self {
            path: path.into(),
            text,
            lines,
        }
    }

    /// Reads a source file from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid UTF-8.
    pub fn read(path: &Path) -> std::io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::new(path, text))
    }

    /// Path the file was loaded from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Full file contents.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// All lines, in order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Line at a 0-indexed row.
    #[must_use]
    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(String::as_str)
    }

    /// Number of lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the file has no lines at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Base name of the file (`module.py`).
    #[must_use]
    pub fn base_name(&self) -> String {
        self.path
            .file_name()
            .map_or_else(String::new, |n| n.to_string_lossy().into_owned())
    }
}

/// Context provided to every check.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// The file being checked.
    pub source: &'a SourceFile,
    /// Path relative to the analyzed root.
    pub relative_path: PathBuf,
    /// Limits in force for this run.
    pub thresholds: &'a Thresholds,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(source: &'a SourceFile, root: &Path, thresholds: &'a Thresholds) -> Self {
        let relative_path = source
            .path()
            .strip_prefix(root)
            .map_or_else(|_| source.path().to_path_buf(), Path::to_path_buf);

        Self {
            source,
            relative_path,
            thresholds,
        }
    }

    /// Shorthand for the file's lines.
    #[must_use]
    pub fn lines(&self) -> &'a [String] {
        self.source.lines()
    }
}
