//! Comment-line helpers shared by the text and structural checks.

/// The line-comment marker.
pub const COMMENT_MARKER: char = '#';

/// Returns true if the whole line is a comment (leading whitespace ignored).
#[must_use]
pub fn is_comment_line(line: &str) -> bool {
    line.trim().starts_with(COMMENT_MARKER)
}

/// Cuts a line at its first comment marker.
///
/// Markers inside string literals are not special-cased, so
/// `url = "http://host/#frag"` is cut at the `#`.
#[must_use]
pub fn strip_trailing_comment(line: &str) -> &str {
    line.find(COMMENT_MARKER).map_or(line, |idx| &line[..idx])
}

/// Checks whether the definition at `start_line` (0-indexed) is directly
/// preceded by one or more comment lines.
///
/// A header is a run of comment lines ending right above the definition, so
/// only the line directly above decides. A blank line breaks the header.
/// A definition on the first line has no header.
///
/// # Examples
///
/// ```ignore
/// let lines = ["# Represents a point", "class Point:", "    pass"];
/// assert!(has_comment_header(&lines, 1));
/// ```
#[must_use]
pub fn has_comment_header<S: AsRef<str>>(lines: &[S], start_line: usize) -> bool {
    lines
        .get(..start_line)
        .and_then(|above| above.last())
        .is_some_and(|line| is_comment_line(line.as_ref()))
}
