//! # codeval-checks
//!
//! Built-in style checks for code-validation.
//!
//! ## Available Checks
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | CV001 | `file-header` | Files start with a comment or module docstring |
//! | CV002 | `class-headers` | Classes have a docstring or comment header |
//! | CV003 | `function-headers` | Functions have a docstring or comment header |
//! | CV004 | `function-length` | Functions have at most 40 body lines |
//! | CV005 | `file-size` | Files are at most 2000 lines long |
//! | CV006 | `line-length` | Code lines are at most 150 characters long |
//! | CV007 | `variable-length` | Assigned identifiers are at most 25 characters long |
//! | CV008 | `wildcard-imports` | No `from module import *` |
//!
//! The limits above are the defaults; they come from the
//! [`Thresholds`](codeval_core::Thresholds) in force for a run.
//!
//! ## Usage
//!
//! ```ignore
//! use codeval_checks::default_checks;
//! use codeval_core::Analyzer;
//! use codeval_python::PythonParser;
//!
//! let mut builder = Analyzer::builder().root("./scripts").parser(PythonParser::new());
//! for check in default_checks() {
//!     builder = builder.check_box(check);
//! }
//! let summary = builder.build()?.analyze();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod definition_headers;
mod file_header;
mod file_size;
mod function_length;
mod line_length;
mod presets;
mod variable_length;
mod wildcard_imports;

#[cfg(test)]
mod testing;

pub use definition_headers::{ClassHeaders, FunctionHeaders};
pub use file_header::FileHeader;
pub use file_size::FileSize;
pub use function_length::FunctionLength;
pub use line_length::LineLength;
pub use presets::default_checks;
pub use variable_length::VariableLength;
pub use wildcard_imports::WildcardImports;

/// Re-export core types for convenience.
pub use codeval_core::{Check, CheckBox, Finding};
