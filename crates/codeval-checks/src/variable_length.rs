//! Check that assigned identifiers stay within the length budget.
//!
//! The first identifier on a line that is followed by a single `=` is taken
//! as the assigned name. Comparison operators (`==`, `<=`, `>=`, `!=`) never
//! match. Names written entirely in upper case are constants and exempt.

use codeval_core::{Check, FileContext, Finding, ModuleTree};
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

/// Check code for variable-length.
pub const CODE: &str = "CV007";

/// Check name for variable-length.
pub const NAME: &str = "variable-length";

#[allow(clippy::expect_used)]
static ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\w+)\s*=(?:[^=]|$)").expect("assignment pattern is valid")
});

/// Flags assignments to identifiers longer than `max_variable_length`.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariableLength;

impl VariableLength {
    /// Creates the check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// The identifier assigned on `line`, if any.
    #[must_use]
    pub fn assigned_name(line: &str) -> Option<&str> {
        ASSIGNMENT
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    fn is_constant(name: &str) -> bool {
        name.to_uppercase() == name
    }
}

impl Check for VariableLength {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Assigned identifiers are at most max_variable_length characters long"
    }

    fn check(&self, ctx: &FileContext, _tree: Option<&ModuleTree>) -> Vec<Finding> {
        let max = ctx.thresholds.max_variable_length;

        ctx.lines()
            .iter()
            .enumerate()
            .filter_map(|(idx, line)| {
                let name = Self::assigned_name(line)?;
                if Self::is_constant(name) || name.chars().count() <= max {
                    return None;
                }
                trace!(
                    "{}:{}: `{}` is over {} characters",
                    ctx.relative_path.display(),
                    idx + 1,
                    name,
                    max
                );
                Some(Finding::LongVariable {
                    line: idx + 1,
                    name: name.to_owned(),
                })
            })
            .collect()
    }
}
