//! # codeval-python
//!
//! Tree-sitter front end for Python sources.
//!
//! [`PythonParser`] implements [`codeval_core::SourceParser`]: it parses a
//! file once and returns every class and function definition (methods,
//! nested and `async` definitions included) with its line span and whether
//! the body opens with a docstring.
//!
//! ```ignore
//! use codeval_core::{SourceFile, SourceParser};
//! use codeval_python::PythonParser;
//!
//! let tree = PythonParser::new().parse(&SourceFile::new("a.py", "def f():\n    pass\n"))?;
//! assert_eq!(tree.units[0].name, "f");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod parser;

pub use parser::PythonParser;
