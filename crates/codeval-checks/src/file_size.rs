//! Check that files stay within the line budget.

use codeval_core::{Check, FileContext, Finding, ModuleTree};

/// Check code for file-size.
pub const CODE: &str = "CV005";

/// Check name for file-size.
pub const NAME: &str = "file-size";

/// Flags files with more lines than `max_file_lines`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSize;

impl FileSize {
    /// Creates the check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Check for FileSize {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Files are at most max_file_lines lines long"
    }

    fn check(&self, ctx: &FileContext, _tree: Option<&ModuleTree>) -> Vec<Finding> {
        let lines = ctx.source.line_count();
        if lines > ctx.thresholds.max_file_lines {
            vec![Finding::OversizedFile { lines }]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::run_with;
    use codeval_core::Thresholds;

    fn limit(max_file_lines: usize) -> Thresholds {
        Thresholds {
            max_file_lines,
            ..Thresholds::default()
        }
    }

    #[test]
    fn at_limit_passes() {
        assert!(run_with(&FileSize, "a = 1\nb = 2\nc = 3\n", &limit(3)).is_empty());
    }

    #[test]
    fn over_limit_fails() {
        assert_eq!(
            run_with(&FileSize, "a = 1\nb = 2\nc = 3\nd = 4\n", &limit(3)),
            vec![Finding::OversizedFile { lines: 4 }]
        );
    }

    #[test]
    fn blank_and_comment_lines_count() {
        let src = "# one\n\n# three\n\n";
        assert_eq!(
            run_with(&FileSize, src, &limit(3)),
            vec![Finding::OversizedFile { lines: 4 }]
        );
    }
}
