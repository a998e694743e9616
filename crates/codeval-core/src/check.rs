//! Check trait for defining style checks.

use crate::context::FileContext;
use crate::structure::ModuleTree;
use crate::types::Finding;

/// A per-file style check.
///
/// Checks receive the raw file through [`FileContext`] and, when the file
/// parsed, its [`ModuleTree`]. Text checks ignore the tree; structural checks
/// report nothing when it is absent.
///
/// # Example
///
/// ```ignore
/// use codeval_core::{Check, FileContext, Finding, ModuleTree};
///
/// pub struct NoTabs;
///
/// impl Check for NoTabs {
///     fn name(&self) -> &'static str { "no-tabs" }
///     fn code(&self) -> &'static str { "CV100" }
///
///     fn check(&self, ctx: &FileContext, _tree: Option<&ModuleTree>) -> Vec<Finding> {
///         ctx.lines()
///             .iter()
///             .enumerate()
///             .filter(|(_, l)| l.contains('\t'))
///             .map(|(i, _)| Finding::LongLine { line: i + 1 })
///             .collect()
///     }
/// }
/// ```
pub trait Check: Send + Sync {
    /// Returns the kebab-case name of this check (e.g., "line-length").
    fn name(&self) -> &'static str;

    /// Returns the check code (e.g., "CV005").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this check verifies.
    fn description(&self) -> &'static str {
        ""
    }

    /// Whether this check needs the parsed [`ModuleTree`].
    fn is_structural(&self) -> bool {
        false
    }

    /// Checks a single file and returns any findings, in source order.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The file and the thresholds in force
    /// * `tree` - The parsed structure, or `None` if the file failed to parse
    fn check(&self, ctx: &FileContext, tree: Option<&ModuleTree>) -> Vec<Finding>;
}

/// Type alias for boxed Check trait objects.
pub type CheckBox = Box<dyn Check>;
