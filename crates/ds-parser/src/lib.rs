//! # ds-parser
//!
//! ast-grep-based discovery of Go struct declarations and rendering of
//! their field types.
//!
//! The crate is split along the pipeline:
//! - [`parser`]: parse Go source and reject trees with syntax errors
//! - [`lower`]: convert tree-sitter type nodes into [`TypeExpr`]
//! - [`render`]: turn a [`TypeExpr`] into its canonical text
//! - [`scanner`]: find every struct declaration in a parsed file
//!
//! Nothing here writes to stdout or exits the process; callers own the
//! output stream (see the `Display` impls on [`StructDecl`]).

pub mod error;
pub mod lower;
pub mod parser;
pub mod render;
pub mod scanner;
pub mod types;

pub use error::ParserError;
pub use parser::{AstTree, is_go_source, parse_go, parse_go_file};
pub use render::render;
pub use scanner::scan;
pub use types::{FieldDescriptor, StructDecl, TypeExpr};
