//! Check that every file opens with a header.
//!
//! A header is either a comment on the first line or a module docstring as
//! the first statement. When the file did not parse only the comment form is
//! recognised.

use codeval_core::utils::is_comment_line;
use codeval_core::{Check, FileContext, Finding, ModuleTree};

/// Check code for file-header.
pub const CODE: &str = "CV001";

/// Check name for file-header.
pub const NAME: &str = "file-header";

/// Requires a leading comment or module docstring.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileHeader;

impl FileHeader {
    /// Creates the check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Check for FileHeader {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Files start with a comment or a module docstring"
    }

    fn check(&self, ctx: &FileContext, tree: Option<&ModuleTree>) -> Vec<Finding> {
        let commented = ctx.lines().first().is_some_and(|l| is_comment_line(l));
        let documented = tree.is_some_and(|t| t.has_docstring);

        if commented || documented {
            Vec::new()
        } else {
            vec![Finding::MissingFileHeader]
        }
    }
}
