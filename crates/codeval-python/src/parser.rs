//! Python source parser using Tree-sitter.

use codeval_core::{ModuleTree, ParseError, SourceFile, SourceParser, StructuralUnit, UnitKind};
use tracing::trace;
use tree_sitter::{Language, Node, Parser, Tree};

/// Extracts class and function definitions from Python source.
pub struct PythonParser {
    language: Language,
}

impl PythonParser {
    /// Creates a new Python parser.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_python::LANGUAGE.into(),
        }
    }

    fn text<'a>(node: &Node<'_>, src: &'a [u8]) -> &'a str {
        std::str::from_utf8(&src[node.start_byte()..node.end_byte()]).unwrap_or("")
    }

    fn syntax_tree(&self, source: &SourceFile) -> Result<Tree, ParseError> {
        let mut parser = Parser::new();
        if let Err(e) = parser.set_language(&self.language) {
            return Err(ParseError::new(
                source.path(),
                source.text(),
                0,
                0,
                1,
                format!("unsupported grammar: {e}"),
            ));
        }

        parser.parse(source.text(), None).ok_or_else(|| {
            ParseError::new(
                source.path(),
                source.text(),
                0,
                0,
                1,
                "parser produced no syntax tree",
            )
        })
    }

    /// Locates the first `ERROR` or missing node, in source order.
    fn first_error(root: Node<'_>) -> Option<Node<'_>> {
        let mut cursor = root.walk();
        loop {
            let node = cursor.node();
            if node.is_error() || node.is_missing() {
                return Some(node);
            }
            if node.has_error() && cursor.goto_first_child() {
                continue;
            }
            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return None;
                }
            }
        }
    }

    fn syntax_error(source: &SourceFile, root: Node<'_>) -> ParseError {
        let node = Self::first_error(root).unwrap_or(root);
        let label = if node.is_missing() {
            format!("expected `{}`", node.kind())
        } else {
            "invalid syntax".to_owned()
        };
        ParseError::new(
            source.path(),
            source.text(),
            node.start_byte(),
            node.end_byte().saturating_sub(node.start_byte()),
            node.start_position().row + 1,
            label,
        )
    }

    /// Locates the first Python 2 `print`/`exec` statement, which the
    /// grammar accepts but Python 3 does not.
    fn first_legacy_statement(root: Node<'_>) -> Option<Node<'_>> {
        let mut cursor = root.walk();
        loop {
            let node = cursor.node();
            if matches!(node.kind(), "print_statement" | "exec_statement") {
                return Some(node);
            }
            if cursor.goto_first_child() {
                continue;
            }
            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return None;
                }
            }
        }
    }

    fn legacy_statement_error(source: &SourceFile, node: Node<'_>) -> ParseError {
        let keyword = node.kind().trim_end_matches("_statement");
        ParseError::new(
            source.path(),
            source.text(),
            node.start_byte(),
            node.end_byte().saturating_sub(node.start_byte()),
            node.start_position().row + 1,
            format!("Python 2 `{keyword}` statement"),
        )
    }

    /// First statement of a module or block, skipping comments.
    fn first_statement(node: Node<'_>) -> Option<Node<'_>> {
        let mut cursor = node.walk();
        let first = node
            .named_children(&mut cursor)
            .find(|child| child.kind() != "comment");
        first
    }

    /// A plain `str` literal: no `f` or `b` prefix and no interpolation.
    fn is_plain_string(node: &Node<'_>, src: &[u8]) -> bool {
        let mut cursor = node.walk();
        let mut plain = true;
        for child in node.named_children(&mut cursor) {
            match child.kind() {
                "interpolation" => plain = false,
                "string_start" => {
                    if Self::text(&child, src).contains(['f', 'F', 'b', 'B']) {
                        plain = false;
                    }
                }
                _ => {}
            }
        }
        plain
    }

    /// An expression statement consisting of a single string literal.
    fn is_docstring(statement: &Node<'_>, src: &[u8]) -> bool {
        if statement.kind() != "expression_statement" || statement.named_child_count() != 1 {
            return false;
        }
        let Some(expr) = statement.named_child(0) else {
            return false;
        };

        match expr.kind() {
            "string" => Self::is_plain_string(&expr, src),
            "concatenated_string" => {
                let mut cursor = expr.walk();
                let plain = expr
                    .named_children(&mut cursor)
                    .all(|part| part.kind() == "string" && Self::is_plain_string(&part, src));
                plain
            }
            _ => false,
        }
    }

    fn extract_unit(node: &Node<'_>, kind: UnitKind, src: &[u8]) -> Option<StructuralUnit> {
        let name = Self::text(&node.child_by_field_name("name")?, src).to_owned();

        let has_docstring = node
            .child_by_field_name("body")
            .and_then(Self::first_statement)
            .is_some_and(|stmt| Self::is_docstring(&stmt, src));

        let start = node.start_position();
        let end = node.end_position();
        // a node ending at column 0 stops on the previous row
        let end_line = if end.column == 0 && end.row > start.row {
            end.row - 1
        } else {
            end.row
        };

        Some(StructuralUnit::new(
            kind,
            name,
            start.row,
            end_line,
            has_docstring,
        ))
    }

    /// Collects every class and function definition in pre-order.
    fn collect_units(root: Node<'_>, src: &[u8]) -> Vec<StructuralUnit> {
        let mut units = Vec::new();
        let mut cursor = root.walk();

        loop {
            let node = cursor.node();
            let kind = match node.kind() {
                "class_definition" => Some(UnitKind::Class),
                "function_definition" => Some(UnitKind::Function),
                _ => None,
            };
            if let Some(unit) = kind.and_then(|k| Self::extract_unit(&node, k, src)) {
                trace!(
                    "{:?} `{}` spans rows {}..={}",
                    unit.kind,
                    unit.name,
                    unit.start_line,
                    unit.end_line
                );
                units.push(unit);
            }

            if cursor.goto_first_child() {
                continue;
            }
            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return units;
                }
            }
        }
    }
}

impl Default for PythonParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceParser for PythonParser {
    fn language_id(&self) -> &'static str {
        "python"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".py"]
    }

    fn parse(&self, source: &SourceFile) -> Result<ModuleTree, ParseError> {
        let tree = self.syntax_tree(source)?;
        let root = tree.root_node();
        if root.has_error() {
            return Err(Self::syntax_error(source, root));
        }
        if let Some(node) = Self::first_legacy_statement(root) {
            return Err(Self::legacy_statement_error(source, node));
        }

        let src = source.text().as_bytes();
        let has_docstring =
            Self::first_statement(root).is_some_and(|stmt| Self::is_docstring(&stmt, src));

        Ok(ModuleTree {
            has_docstring,
            units: Self::collect_units(root, src),
        })
    }
}
