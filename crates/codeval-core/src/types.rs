//! Core types for check findings and run results.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single style-guideline violation reported by a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Finding {
    /// The file has neither a leading comment nor a module docstring.
    MissingFileHeader,
    /// The file has more lines than allowed.
    OversizedFile {
        /// Raw line count of the file.
        lines: usize,
    },
    /// A `from <module> import *` statement.
    WildcardImport {
        /// The module imported from.
        module: String,
    },
    /// A line longer than allowed once its trailing comment is removed.
    LongLine {
        /// Line number (1-indexed).
        line: usize,
    },
    /// A class with neither a docstring nor a comment header.
    HeadlessClass {
        /// Class name.
        name: String,
    },
    /// A function with neither a docstring nor a comment header.
    HeadlessFunction {
        /// Function name.
        name: String,
    },
    /// A function whose body has more lines than allowed.
    LongFunction {
        /// Function name.
        name: String,
        /// Counted body lines.
        lines: usize,
    },
    /// An assigned identifier longer than allowed.
    LongVariable {
        /// Line number (1-indexed).
        line: usize,
        /// The offending identifier.
        name: String,
    },
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFileHeader => write!(f, "file has no header comment or docstring"),
            Self::OversizedFile { lines } => write!(f, "file has {lines} lines"),
            Self::WildcardImport { module } => write!(f, "wildcard import from `{module}`"),
            Self::LongLine { line } => write!(f, "line {line} is too long"),
            Self::HeadlessClass { name } => write!(f, "class `{name}` has no header"),
            Self::HeadlessFunction { name } => write!(f, "function `{name}` has no header"),
            Self::LongFunction { name, lines } => {
                write!(f, "function `{name}` has {lines} body lines")
            }
            Self::LongVariable { line, name } => {
                write!(f, "identifier `{name}` on line {line} is too long")
            }
        }
    }
}

/// Per-file violations, grouped by category.
///
/// A fresh set is built for every file; nothing carries over between files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationSet {
    /// The file starts with a comment or a module docstring.
    pub file_header_exists: bool,
    /// The file is within the line-count limit.
    pub acceptable_file_size: bool,
    /// Modules imported with `import *`.
    pub invalid_imports: Vec<String>,
    /// Line numbers (1-indexed) of overly long lines.
    pub lengthy_lines: Vec<usize>,
    /// Classes missing a header.
    pub headless_classes: Vec<String>,
    /// Functions missing a header.
    pub headless_functions: Vec<String>,
    /// Functions with too many body lines.
    pub lengthy_functions: Vec<String>,
    /// Line numbers (1-indexed) assigning an overly long identifier.
    pub lengthy_variables: Vec<usize>,
}

impl Default for ViolationSet {
    fn default() -> Self {
        Self {
            file_header_exists: true,
            acceptable_file_size: true,
            invalid_imports: Vec::new(),
            lengthy_lines: Vec::new(),
            headless_classes: Vec::new(),
            headless_functions: Vec::new(),
            lengthy_functions: Vec::new(),
            lengthy_variables: Vec::new(),
        }
    }
}

impl ViolationSet {
    /// Creates an empty set where every check passes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from the findings of all checks, preserving their order.
    #[must_use]
    pub fn from_findings<I>(findings: I) -> Self
    where
        I: IntoIterator<Item = Finding>,
    {
        let mut set = Self::new();
        for finding in findings {
            set.record(finding);
        }
        set
    }

    /// Files a single finding under its category.
    pub fn record(&mut self, finding: Finding) {
        match finding {
            Finding::MissingFileHeader => self.file_header_exists = false,
            Finding::OversizedFile { .. } => self.acceptable_file_size = false,
            Finding::WildcardImport { module } => self.invalid_imports.push(module),
            Finding::LongLine { line } => self.lengthy_lines.push(line),
            Finding::HeadlessClass { name } => self.headless_classes.push(name),
            Finding::HeadlessFunction { name } => self.headless_functions.push(name),
            Finding::LongFunction { name, .. } => self.lengthy_functions.push(name),
            Finding::LongVariable { line, .. } => self.lengthy_variables.push(line),
        }
    }

    /// Total number of violations across all categories.
    #[must_use]
    pub fn violation_count(&self) -> usize {
        usize::from(!self.file_header_exists)
            + usize::from(!self.acceptable_file_size)
            + self.invalid_imports.len()
            + self.lengthy_lines.len()
            + self.headless_classes.len()
            + self.headless_functions.len()
            + self.lengthy_functions.len()
            + self.lengthy_variables.len()
    }

    /// Returns true if every check passed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violation_count() == 0
    }
}

/// A report written for one source file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    /// The analyzed source file.
    pub source: PathBuf,
    /// The markdown report that was written.
    pub output: PathBuf,
    /// Whether the source parsed; structural checks only ran if it did.
    pub parsed: bool,
    /// Violations found in the file.
    pub violations: ViolationSet,
}

/// A file whose processing failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileFailure {
    /// The file that failed.
    pub path: PathBuf,
    /// Rendered error chain.
    pub message: String,
}

/// Result of processing a single file.
#[derive(Debug, Clone)]
pub enum FileOutcome {
    /// A report was written.
    Written(FileReport),
    /// The file has no lines; no report is produced.
    Skipped,
}

/// Result of a whole run over a directory.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RunSummary {
    /// Reports written, in processing order.
    pub reports: Vec<FileReport>,
    /// Empty files that produced no report.
    pub skipped: Vec<PathBuf>,
    /// Files whose processing failed.
    pub failures: Vec<FileFailure>,
}

impl RunSummary {
    /// Creates an empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of files that were read, whatever their outcome.
    #[must_use]
    pub fn files_seen(&self) -> usize {
        self.reports.len() + self.skipped.len() + self.failures.len()
    }

    /// Returns true if any file failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Number of reported files that could not be parsed.
    #[must_use]
    pub fn parse_errors(&self) -> usize {
        self.reports.iter().filter(|r| !r.parsed).count()
    }

    /// Total violations over every written report.
    #[must_use]
    pub fn total_violations(&self) -> usize {
        self.reports
            .iter()
            .map(|r| r.violations.violation_count())
            .sum()
    }

    /// Number of written reports with at least one violation.
    #[must_use]
    pub fn files_with_violations(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| !r.violations.is_clean())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(parsed: bool, violations: ViolationSet) -> FileReport {
        FileReport {
            source: PathBuf::from("pkg/mod.py"),
            output: PathBuf::from("out/mod.py_validation_output.md"),
            parsed,
            violations,
        }
    }

    #[test]
    fn default_set_is_clean() {
        let set = ViolationSet::new();
        assert!(set.file_header_exists);
        assert!(set.acceptable_file_size);
        assert!(set.is_clean());
    }

    #[test]
    fn findings_land_in_their_category_in_order() {
        let set = ViolationSet::from_findings([
            Finding::LongLine { line: 9 },
            Finding::WildcardImport {
                module: "os".into(),
            },
            Finding::LongLine { line: 3 },
            Finding::LongFunction {
                name: "run".into(),
                lines: 52,
            },
        ]);
        assert_eq!(set.lengthy_lines, vec![9, 3]);
        assert_eq!(set.invalid_imports, vec!["os"]);
        assert_eq!(set.lengthy_functions, vec!["run"]);
        assert!(set.headless_classes.is_empty());
        assert_eq!(set.violation_count(), 4);
    }

    #[test]
    fn boolean_findings_flip_flags() {
        let set = ViolationSet::from_findings([
            Finding::MissingFileHeader,
            Finding::OversizedFile { lines: 2001 },
        ]);
        assert!(!set.file_header_exists);
        assert!(!set.acceptable_file_size);
        assert_eq!(set.violation_count(), 2);
    }

    #[test]
    fn finding_display() {
        let f = Finding::LongVariable {
            line: 4,
            name: "a_really_long_identifier_name".into(),
        };
        assert_eq!(
            f.to_string(),
            "identifier `a_really_long_identifier_name` on line 4 is too long"
        );
    }

    #[test]
    fn summary_counts() {
        let mut summary = RunSummary::new();
        summary.reports.push(report(true, ViolationSet::new()));
        summary.reports.push(report(
            false,
            ViolationSet::from_findings([Finding::LongLine { line: 1 }]),
        ));
        summary.skipped.push(PathBuf::from("empty.py"));
        summary.failures.push(FileFailure {
            path: PathBuf::from("binary.py"),
            message: "stream did not contain valid UTF-8".into(),
        });

        assert_eq!(summary.files_seen(), 4);
        assert_eq!(summary.parse_errors(), 1);
        assert_eq!(summary.total_violations(), 1);
        assert_eq!(summary.files_with_violations(), 1);
        assert!(summary.has_failures());
    }
}
