//! Checks that classes and functions carry a header.
//!
//! A definition has a header when its body opens with a docstring or when
//! the line directly above the `class`/`def` line is a comment:
//!
//! ```python
//! # Represents a point on the grid.
//! class Point:
//!     ...
//! ```
//!
//! A blank line between the comment and the definition breaks the header.
//! Functions whose name starts with `__` are exempt.

use codeval_core::utils::has_comment_header;
use codeval_core::{Check, FileContext, Finding, ModuleTree, StructuralUnit};

/// Check code for class-headers.
pub const CLASS_CODE: &str = "CV002";

/// Check name for class-headers.
pub const CLASS_NAME: &str = "class-headers";

/// Check code for function-headers.
pub const FUNCTION_CODE: &str = "CV003";

/// Check name for function-headers.
pub const FUNCTION_NAME: &str = "function-headers";

fn has_header(unit: &StructuralUnit, lines: &[String]) -> bool {
    unit.has_docstring || has_comment_header(lines, unit.start_line)
}

/// Requires a docstring or comment header on every class.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassHeaders;

impl ClassHeaders {
    /// Creates the check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Check for ClassHeaders {
    fn name(&self) -> &'static str {
        CLASS_NAME
    }

    fn code(&self) -> &'static str {
        CLASS_CODE
    }

    fn description(&self) -> &'static str {
        "Classes have a docstring or a comment header"
    }

    fn is_structural(&self) -> bool {
        true
    }

    fn check(&self, ctx: &FileContext, tree: Option<&ModuleTree>) -> Vec<Finding> {
        let Some(tree) = tree else {
            return Vec::new();
        };

        tree.classes()
            .filter(|unit| !has_header(unit, ctx.lines()))
            .map(|unit| Finding::HeadlessClass {
                name: unit.name.clone(),
            })
            .collect()
    }
}

/// Requires a docstring or comment header on every function.
#[derive(Debug, Clone, Copy, Default)]
pub struct FunctionHeaders;

impl FunctionHeaders {
    /// Creates the check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Check for FunctionHeaders {
    fn name(&self) -> &'static str {
        FUNCTION_NAME
    }

    fn code(&self) -> &'static str {
        FUNCTION_CODE
    }

    fn description(&self) -> &'static str {
        "Functions have a docstring or a comment header"
    }

    fn is_structural(&self) -> bool {
        true
    }

    fn check(&self, ctx: &FileContext, tree: Option<&ModuleTree>) -> Vec<Finding> {
        let Some(tree) = tree else {
            return Vec::new();
        };

        tree.functions()
            .filter(|unit| !unit.is_reserved())
            .filter(|unit| !has_header(unit, ctx.lines()))
            .map(|unit| Finding::HeadlessFunction {
                name: unit.name.clone(),
            })
            .collect()
    }
}
