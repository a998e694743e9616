//! Language-agnostic structural tree and the parser trait.
//!
//! `SourceParser` is the extension point for language front ends. A parser
//! turns a [`SourceFile`] into a [`ModuleTree`]: every class and function
//! definition with its line span and docstring presence. The tree is built
//! once per file and shared read-only with every structural check.

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::Path;

use crate::context::SourceFile;

/// Kind of definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    /// `class Foo:`
    Class,
    /// `def foo():` or `async def foo():`
    Function,
}

/// A class or function definition found in a source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralUnit {
    /// Kind of definition.
    pub kind: UnitKind,
    /// Identifier name.
    pub name: String,
    /// Row holding the `class`/`def` keyword (0-indexed).
    pub start_line: usize,
    /// Last row inside the body (0-indexed, never before `start_line`).
    pub end_line: usize,
    /// The body opens with a string-literal statement.
    pub has_docstring: bool,
}

impl StructuralUnit {
    /// Creates a unit, clamping `end_line` so the span is never inverted.
    #[must_use]
    pub fn new(
        kind: UnitKind,
        name: impl Into<String>,
        start_line: usize,
        end_line: usize,
        has_docstring: bool,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            start_line,
            end_line: end_line.max(start_line),
            has_docstring,
        }
    }

    /// Rows covered by the definition (0-indexed, inclusive).
    #[must_use]
    pub fn line_span(&self) -> RangeInclusive<usize> {
        self.start_line..=self.end_line
    }

    /// Whether the name uses the reserved double-underscore convention
    /// (`__init__`, `__eq__`, name-mangled `__helper`).
    #[must_use]
    pub fn is_reserved(&self) -> bool {
        self.name.starts_with("__")
    }
}

/// Parsed structure of one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleTree {
    /// The first top-level statement is a docstring.
    pub has_docstring: bool,
    /// Every class and function, nested ones included, in source order.
    pub units: Vec<StructuralUnit>,
}

impl ModuleTree {
    /// Iterates over class definitions.
    pub fn classes(&self) -> impl Iterator<Item = &StructuralUnit> {
        self.units.iter().filter(|u| u.kind == UnitKind::Class)
    }

    /// Iterates over function definitions.
    pub fn functions(&self) -> impl Iterator<Item = &StructuralUnit> {
        self.units.iter().filter(|u| u.kind == UnitKind::Function)
    }
}

/// The source is not syntactically valid.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("syntax error in {file} at line {line}")]
#[diagnostic(
    code(codeval::parse),
    help("structural checks are skipped for this file; text checks still run")
)]
pub struct ParseError {
    /// Display name of the file.
    pub file: String,
    /// Line of the first error (1-indexed).
    pub line: usize,
    #[source_code]
    src: NamedSource<String>,
    #[label("{label}")]
    span: SourceSpan,
    label: String,
}

impl ParseError {
    /// Creates a parse error pointing at `offset..offset + length` in `source`.
    #[must_use]
    pub fn new(
        path: &Path,
        source: &str,
        offset: usize,
        length: usize,
        line: usize,
        label: impl Into<String>,
    ) -> Self {
        let file = path.display().to_string();
        Self {
            src: NamedSource::new(file.clone(), source.to_owned()),
            file,
            line,
            span: SourceSpan::from((offset, length)),
            label: label.into(),
        }
    }

    /// Short description of what went wrong at the error location.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Trait for language-specific structural parsing.
///
/// Implement this to add support for a new language. The parser receives a
/// loaded [`SourceFile`] and returns the language-agnostic [`ModuleTree`].
pub trait SourceParser: Send + Sync {
    /// Language identifier (e.g., `"python"`).
    fn language_id(&self) -> &'static str;

    /// File extensions this parser handles (e.g., `&[".py"]`).
    fn extensions(&self) -> &'static [&'static str];

    /// Returns true if `path` has one of the handled extensions.
    fn handles(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| self.extensions().iter().any(|ext| name.ends_with(ext)))
    }

    /// Parses the file into its structural tree.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the source is not syntactically valid.
    fn parse(&self, source: &SourceFile) -> Result<ModuleTree, ParseError>;
}

/// Type alias for boxed `SourceParser` trait objects.
pub type ParserBox = Box<dyn SourceParser>;
