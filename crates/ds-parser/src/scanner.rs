//! Struct declaration discovery using `KindMatcher` over type specs.
//!
//! Every `type_spec` and `type_alias` in the file is visited in pre-order,
//! including those nested in function bodies. Specs whose type is a
//! `struct_type` become [`StructDecl`]s with one [`FieldDescriptor`] per
//! `field_declaration`.

use std::path::Path;

use ast_grep_core::Node;
use ast_grep_core::matcher::KindMatcher;
use ast_grep_core::ops::Any;
use ast_grep_language::SupportLang;

use crate::lower::lower;
use crate::render::render;
use crate::types::{FieldDescriptor, StructDecl, TypeExpr};

mod comments;

const TYPE_SPEC_KINDS: &[&str] = &["type_spec", "type_alias"];

/// Find every struct declaration in a parsed Go file.
///
/// `path` is recorded verbatim on each declaration; callers pass the
/// absolute path of the file the tree came from.
pub fn scan<D: ast_grep_core::Doc<Lang = SupportLang>>(
    root: &ast_grep_core::AstGrep<D>,
    path: &Path,
) -> Vec<StructDecl> {
    let matchers: Vec<KindMatcher> = TYPE_SPEC_KINDS
        .iter()
        .map(|k| KindMatcher::new(k, SupportLang::Go))
        .collect();
    let matcher = Any::new(matchers);

    let mut decls = Vec::new();
    for spec in root.root().find_all(&matcher) {
        if let Some(decl) = process_type_spec(&spec, path) {
            tracing::debug!(name = %decl.name, line = decl.line, fields = decl.fields.len(), "found struct");
            decls.push(decl);
        }
    }
    decls
}

fn process_type_spec<D: ast_grep_core::Doc>(node: &Node<D>, path: &Path) -> Option<StructDecl> {
    let body = node.field("type")?;
    if body.kind().as_ref() != "struct_type" {
        return None;
    }
    let name = node.field("name")?.text().to_string();

    Some(StructDecl {
        name,
        path: path.to_path_buf(),
        line: node.start_pos().line() + 1,
        fields: extract_fields(&body),
    })
}

fn extract_fields<D: ast_grep_core::Doc>(struct_type: &Node<D>) -> Vec<FieldDescriptor> {
    let Some(list) = struct_type
        .children()
        .find(|c| c.kind().as_ref() == "field_declaration_list")
    else {
        return Vec::new();
    };

    list.children()
        .filter(|c| c.kind().as_ref() == "field_declaration")
        .map(|field| process_field(&field))
        .collect()
}

fn process_field<D: ast_grep_core::Doc>(field: &Node<D>) -> FieldDescriptor {
    let names = field
        .children()
        .filter(|c| c.kind().as_ref() == "field_identifier")
        .map(|c| c.text().to_string())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string();

    let tag = field
        .field("tag")
        .map(|t| t.text().to_string())
        .unwrap_or_default();

    let comment = comments::trailing_comment(field)
        .map(|text| format!("/* {text} */"))
        .unwrap_or_default();

    FieldDescriptor {
        names,
        type_text: render(&field_type(field)),
        tag,
        comment,
    }
}

/// Embedded pointers (`*Logger`) put the star directly on the field rather
/// than inside a `pointer_type`, so it is reattached here.
fn field_type<D: ast_grep_core::Doc>(field: &Node<D>) -> TypeExpr {
    let Some(ty) = field.field("type") else {
        return TypeExpr::plain("");
    };
    let lowered = lower(&ty);
    if field.children().any(|c| c.kind().as_ref() == "*") {
        TypeExpr::pointer(lowered)
    } else {
        lowered
    }
}

#[cfg(test)]
mod tests;
