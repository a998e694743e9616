//! Check that code lines stay within the character budget.
//!
//! Whole-line comments are exempt. On other lines everything from the first
//! `#` onward is ignored, so a trailing comment never makes a line too long.
//! Length is measured in characters, not bytes.

use codeval_core::utils::{is_comment_line, strip_trailing_comment};
use codeval_core::{Check, FileContext, Finding, ModuleTree};

/// Check code for line-length.
pub const CODE: &str = "CV006";

/// Check name for line-length.
pub const NAME: &str = "line-length";

/// Flags lines longer than `max_line_length`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineLength;

impl LineLength {
    /// Creates the check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Length of the code part of a line.
    #[must_use]
    pub fn code_length(line: &str) -> usize {
        strip_trailing_comment(line).chars().count()
    }
}

impl Check for LineLength {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Code lines are at most max_line_length characters long"
    }

    fn check(&self, ctx: &FileContext, _tree: Option<&ModuleTree>) -> Vec<Finding> {
        let max = ctx.thresholds.max_line_length;

        ctx.lines()
            .iter()
            .enumerate()
            .filter(|(_, line)| !is_comment_line(line))
            .filter(|(_, line)| Self::code_length(line) > max)
            .map(|(idx, _)| Finding::LongLine { line: idx + 1 })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{run, run_unparsed};

    fn assignment(width: usize) -> String {
        let value = "a".repeat(width - 4);
        format!("x = {value}")
    }

    #[test]
    fn exactly_at_limit_passes() {
        let line = assignment(150);
        assert_eq!(line.len(), 150);
        assert!(run(&LineLength, &line).is_empty());
    }

    #[test]
    fn one_over_limit_is_flagged() {
        let src = format!("import os\n{}\n", assignment(151));
        assert_eq!(run(&LineLength, &src), vec![Finding::LongLine { line: 2 }]);
    }

    #[test]
    fn whole_line_comments_are_exempt() {
        let src = format!("#{}\n    # {}\n", "c".repeat(300), "c".repeat(300));
        assert!(run(&LineLength, &src).is_empty());
    }

    #[test]
    fn trailing_comment_is_not_measured() {
        let src = format!("x = 1  # {}\n", "c".repeat(300));
        assert!(run(&LineLength, &src).is_empty());
    }

    #[test]
    fn measures_characters_not_bytes() {
        let line = format!("s = '{}'", "é".repeat(145));
        assert_eq!(LineLength::code_length(&line), 151);
        assert_eq!(run(&LineLength, &line), vec![Finding::LongLine { line: 1 }]);
    }

    #[test]
    fn runs_without_a_parse_tree() {
        let src = format!("def broken(:\n{}\n", assignment(200));
        assert_eq!(
            run_unparsed(&LineLength, &src),
            vec![Finding::LongLine { line: 2 }]
        );
    }

    #[test]
    fn line_terminator_is_excluded() {
        let src = format!("{}\r\n", assignment(150));
        assert!(run(&LineLength, &src).is_empty());
    }
}
