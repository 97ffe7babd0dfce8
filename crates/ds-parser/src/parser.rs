//! ast-grep wrapper for Go sources.
//!
//! tree-sitter always produces a tree, even for broken input. `parse_go`
//! turns that tolerance back into a hard failure so a malformed file is
//! reported instead of silently yielding partial declarations.

use std::path::Path;

use ast_grep_core::Node;
use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;

use crate::error::ParserError;

/// The concrete AST tree type returned by `parse_go`.
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

const SNIPPET_MAX_CHARS: usize = 40;

/// Whether a path names a Go source file.
#[must_use]
pub fn is_go_source(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "go")
}

/// Parse Go source into an ast-grep tree.
///
/// # Errors
/// Returns [`ParserError::Syntax`] when the tree contains an error or a
/// missing token, and [`ParserError::MissingPackageClause`] when the file
/// does not start with a `package` clause.
pub fn parse_go(source: &str) -> Result<AstTree, ParserError> {
    use ast_grep_language::LanguageExt;

    let tree = SupportLang::Go.ast_grep(source);
    check_tree(&tree.root())?;
    Ok(tree)
}

fn check_tree<D: ast_grep_core::Doc>(root: &Node<D>) -> Result<(), ParserError> {
    if let Some(bad) = find_syntax_error(root) {
        return Err(ParserError::Syntax {
            line: bad.start_pos().line() + 1,
            snippet: describe(&bad),
        });
    }

    if !root
        .children()
        .any(|c| c.kind().as_ref() == "package_clause")
    {
        return Err(ParserError::MissingPackageClause);
    }

    Ok(())
}

/// Read and parse a Go file.
///
/// # Errors
/// Returns [`ParserError::Io`] when the file cannot be read, otherwise the
/// errors of [`parse_go`].
pub fn parse_go_file(path: &Path) -> Result<AstTree, ParserError> {
    let source = std::fs::read_to_string(path)?;
    parse_go(&source)
}

/// First `ERROR` node or missing token in pre-order, skipping the root.
fn find_syntax_error<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>) -> Option<Node<'r, D>> {
    for child in node.children() {
        if is_syntax_error(&child) {
            return Some(child);
        }
        if let Some(found) = find_syntax_error(&child) {
            return Some(found);
        }
    }
    None
}

/// tree-sitter marks unparseable spans as `ERROR` and inserts zero-width
/// leaves for tokens it had to assume.
fn is_syntax_error<D: ast_grep_core::Doc>(node: &Node<D>) -> bool {
    node.kind().as_ref() == "ERROR"
        || (node.range().is_empty() && node.children().next().is_none())
}

fn describe<D: ast_grep_core::Doc>(node: &Node<D>) -> String {
    if node.range().is_empty() {
        return format!("missing `{}`", node.kind());
    }
    let text = node.text();
    let first_line = text.lines().next().unwrap_or_default().trim();
    let snippet: String = first_line.chars().take(SNIPPET_MAX_CHARS).collect();
    format!("unexpected `{snippet}`")
}
