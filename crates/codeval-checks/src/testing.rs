//! Helpers shared by the check unit tests.

use codeval_core::{Check, FileContext, Finding, SourceFile, SourceParser, Thresholds};
use codeval_python::PythonParser;
use std::path::Path;

/// Runs `check` over `src` with default thresholds.
pub fn run(check: &dyn Check, src: &str) -> Vec<Finding> {
    run_with(check, src, &Thresholds::default())
}

/// Runs `check` over `src`, parsing it first the way the analyzer does.
pub fn run_with(check: &dyn Check, src: &str, thresholds: &Thresholds) -> Vec<Finding> {
    let file = SourceFile::new("sample.py", src);
    let tree = PythonParser::new().parse(&file).ok();
    let ctx = FileContext::new(&file, Path::new("."), thresholds);
    check.check(&ctx, tree.as_ref())
}

/// Runs `check` as if `src` failed to parse.
pub fn run_unparsed(check: &dyn Check, src: &str) -> Vec<Finding> {
    let thresholds = Thresholds::default();
    let file = SourceFile::new("sample.py", src);
    let ctx = FileContext::new(&file, Path::new("."), &thresholds);
    check.check(&ctx, None)
}
