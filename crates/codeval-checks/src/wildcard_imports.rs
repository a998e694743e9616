//! Check for `from <module> import *` statements.

use codeval_core::{Check, FileContext, Finding, ModuleTree};
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

/// Check code for wildcard-imports.
pub const CODE: &str = "CV008";

/// Check name for wildcard-imports.
pub const NAME: &str = "wildcard-imports";

#[allow(clippy::expect_used)]
static FROM_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"from\s(.*)\simport\s").expect("from-import pattern is valid")
});

/// Flags modules imported with `*`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WildcardImports;

impl WildcardImports {
    /// Creates the check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// The module a line imports everything from, if any.
    #[must_use]
    pub fn wildcard_module(line: &str) -> Option<&str> {
        if line.trim_start().starts_with("import") || !line.contains("import *") {
            return None;
        }
        FROM_IMPORT
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
    }
}

impl Check for WildcardImports {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Modules are not imported with `from module import *`"
    }

    fn check(&self, ctx: &FileContext, _tree: Option<&ModuleTree>) -> Vec<Finding> {
        ctx.lines()
            .iter()
            .filter_map(|line| Self::wildcard_module(line))
            .inspect(|module| {
                trace!(
                    "{}: wildcard import from `{}`",
                    ctx.relative_path.display(),
                    module
                );
            })
            .map(|module| Finding::WildcardImport {
                module: module.to_owned(),
            })
            .collect()
    }
}
