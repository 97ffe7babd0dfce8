//! Canonical text for a [`TypeExpr`].
//!
//! The output follows a few fixed conventions that downstream consumers of
//! the listing rely on:
//! - arrays and slices both render as `[]T`; lengths are dropped
//! - interfaces render as `interface{}` whatever their method set
//! - a function without results keeps a trailing space (`func() `), while
//!   one with results parenthesizes them (`func() (error)`)
//! - map keys and qualifier packages are emitted as written, not recursed

use crate::types::TypeExpr;

/// Text used when a node yields no source text at all.
pub const PLACEHOLDER: &str = "TODO";

/// Render a type expression. Never fails and never returns an empty string.
#[must_use]
pub fn render(expr: &TypeExpr) -> String {
    let mut out = String::new();
    render_into(&mut out, expr);
    out
}

fn render_into(out: &mut String, expr: &TypeExpr) {
    match expr {
        TypeExpr::Function { params, results } => {
            out.push_str("func(");
            render_list(out, params);
            out.push_str(") ");
            if let Some(results) = results {
                out.push('(');
                render_list(out, results);
                out.push(')');
            }
        }
        TypeExpr::Map { key, value } => {
            out.push_str("map[");
            out.push_str(key);
            out.push(']');
            render_into(out, value);
        }
        TypeExpr::Array(element) => {
            out.push_str("[]");
            render_into(out, element);
        }
        TypeExpr::Interface => out.push_str("interface{}"),
        TypeExpr::Qualified { package, member } => {
            out.push_str(package);
            out.push('.');
            out.push_str(member);
        }
        TypeExpr::Pointer(pointee) => {
            out.push('*');
            render_into(out, pointee);
        }
        TypeExpr::Plain(text) if text.is_empty() => out.push_str(PLACEHOLDER),
        TypeExpr::Plain(text) => out.push_str(text),
    }
}

fn render_list(out: &mut String, items: &[TypeExpr]) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        render_into(out, item);
    }
}
