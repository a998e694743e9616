//! Utility functions for check implementations.

pub mod comments;

// Re-export commonly used utilities for check implementations
#[doc(inline)]
pub use comments::{has_comment_header, is_comment_line, strip_trailing_comment};
