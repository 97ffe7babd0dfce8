//! Parser error types for ds-parser.

/// Errors that can occur while turning Go source into a syntax tree.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("syntax error at line {line}: {snippet}")]
    Syntax { line: usize, snippet: String },

    #[error("expected 'package' clause")]
    MissingPackageClause,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
