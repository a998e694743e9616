//! # codeval-core
//!
//! Core framework for Python style validation.
//!
//! This crate provides the foundational traits and types shared by the
//! parser front end, the checks and the CLI. It includes:
//!
//! - [`SourceParser`] trait turning source text into a [`ModuleTree`]
//! - [`Check`] trait for per-file checks
//! - [`Analyzer`] for orchestrating discovery, checks and report output
//! - [`ViolationSet`] and [`ReportModel`] for per-file results
//! - [`ReportRenderer`] for the markdown report template
//!
//! ## Example
//!
//! ```ignore
//! use codeval_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./scripts")
//!     .parser(PythonParser::new())
//!     .check(LineLength)
//!     .build()?;
//!
//! let summary = analyzer.analyze();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod check;
mod config;
mod context;
mod structure;
mod types;

/// Markdown report aggregation and rendering.
pub mod report;

/// Utility modules for check implementations.
pub mod utils;

pub use analyzer::{
    default_output_dir, Analyzer, AnalyzerBuilder, AnalyzerError, Evaluation, OUTPUT_DIR_NAME,
};
pub use check::{Check, CheckBox};
pub use config::{AnalyzerConfig, CheckConfig, Config, ConfigError, ReportConfig, Thresholds};
pub use context::{FileContext, SourceFile};
pub use report::{ReportError, ReportModel, ReportRenderer};
pub use structure::{ModuleTree, ParseError, ParserBox, SourceParser, StructuralUnit, UnitKind};
pub use types::{FileFailure, FileOutcome, FileReport, Finding, RunSummary, ViolationSet};
