//! Data types produced by the scanner and consumed by the renderer.

mod struct_decl;
mod type_expr;

pub use struct_decl::{FieldDescriptor, StructDecl};
pub use type_expr::TypeExpr;
