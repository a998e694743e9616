//! Check that functions stay within the body-line budget.
//!
//! # Counting
//!
//! The function's rows run from the `def` line through the last body line.
//! Comment-only rows anywhere in the body and trailing blank rows are dropped.
//! The text of triple-quoted blocks (docstrings included) is then removed and
//! the remaining newlines are counted, giving the number of lines after the
//! signature line. A block's emptied row still counts as one line, so a
//! docstring costs one line however long it is.
//!
//! Functions whose name starts with `__` are exempt.

use codeval_core::utils::is_comment_line;
use codeval_core::{Check, FileContext, Finding, ModuleTree, StructuralUnit};
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

/// Check code for function-length.
pub const CODE: &str = "CV004";

/// Check name for function-length.
pub const NAME: &str = "function-length";

#[allow(clippy::expect_used)]
static TRIPLE_QUOTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)""".*?"""|'''.*?'''"#).expect("triple-quote pattern is valid")
});

/// Flags functions longer than `max_function_lines`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FunctionLength;

impl FunctionLength {
    /// Creates the check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Counts the body lines of `unit` within `lines`.
    #[must_use]
    pub fn body_lines(unit: &StructuralUnit, lines: &[String]) -> usize {
        let end = unit.end_line.min(lines.len().saturating_sub(1));
        let Some(rows) = lines.get(unit.start_line..=end) else {
            return 0;
        };

        // row 0 is the signature and always stays
        let mut rows: Vec<&str> = rows
            .iter()
            .enumerate()
            .filter(|(i, row)| *i == 0 || !is_comment_line(row))
            .map(|(_, row)| row.as_str())
            .collect();
        while rows.len() > 1 && rows.last().is_some_and(|row| row.trim().is_empty()) {
            rows.pop();
        }

        let joined = rows.join("\n");
        TRIPLE_QUOTED
            .replace_all(&joined, "")
            .matches('\n')
            .count()
    }
}

impl Check for FunctionLength {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Functions have at most max_function_lines body lines"
    }

    fn is_structural(&self) -> bool {
        true
    }

    fn check(&self, ctx: &FileContext, tree: Option<&ModuleTree>) -> Vec<Finding> {
        let Some(tree) = tree else {
            return Vec::new();
        };
        let max = ctx.thresholds.max_function_lines;

        tree.functions()
            .filter(|unit| !unit.is_reserved())
            .filter_map(|unit| {
                let lines = Self::body_lines(unit, ctx.lines());
                trace!("`{}` has {} body lines (max {})", unit.name, lines, max);
                (lines > max).then(|| Finding::LongFunction {
                    name: unit.name.clone(),
                    lines,
                })
            })
            .collect()
    }
}
