//! Conversion of tree-sitter Go type nodes into [`TypeExpr`].

use ast_grep_core::Node;

use crate::types::TypeExpr;

/// Lower a type node. Unknown kinds, and known kinds missing an expected
/// child, fall back to [`TypeExpr::Plain`] with the node's own text.
pub fn lower<D: ast_grep_core::Doc>(node: &Node<D>) -> TypeExpr {
    let kind = node.kind();
    match kind.as_ref() {
        "function_type" => lower_function(node),
        "map_type" => match (node.field("key"), node.field("value")) {
            (Some(key), Some(value)) => TypeExpr::map(source_text(&key), lower(&value)),
            _ => plain(node),
        },
        "slice_type" | "array_type" | "implicit_length_array_type" => node
            .field("element")
            .map_or_else(|| plain(node), |element| TypeExpr::array(lower(&element))),
        "interface_type" => TypeExpr::Interface,
        "pointer_type" => node
            .children()
            .find(|c| !matches!(c.kind().as_ref(), "*" | "comment"))
            .map_or_else(|| plain(node), |pointee| TypeExpr::pointer(lower(&pointee))),
        "qualified_type" => match (node.field("package"), node.field("name")) {
            (Some(package), Some(member)) => TypeExpr::Qualified {
                package: source_text(&package),
                member: source_text(&member),
            },
            _ => plain(node),
        },
        _ => plain(node),
    }
}

/// Node text with every whitespace run collapsed to a single space.
pub fn source_text<D: ast_grep_core::Doc>(node: &Node<D>) -> String {
    node.text().split_whitespace().collect::<Vec<_>>().join(" ")
}

fn plain<D: ast_grep_core::Doc>(node: &Node<D>) -> TypeExpr {
    TypeExpr::Plain(source_text(node))
}

fn lower_function<D: ast_grep_core::Doc>(node: &Node<D>) -> TypeExpr {
    let params = node
        .field("parameters")
        .map(|list| lower_parameter_list(&list))
        .unwrap_or_default();
    let results = node.field("result").map(|result| {
        if result.kind().as_ref() == "parameter_list" {
            lower_parameter_list(&result)
        } else {
            vec![lower(&result)]
        }
    });
    TypeExpr::Function { params, results }
}

/// One entry per declaration group: `(a, b int, s string)` yields two.
fn lower_parameter_list<D: ast_grep_core::Doc>(list: &Node<D>) -> Vec<TypeExpr> {
    list.children()
        .filter_map(|decl| match decl.kind().as_ref() {
            "parameter_declaration" => Some(
                decl.field("type")
                    .map_or_else(|| plain(&decl), |ty| lower(&ty)),
            ),
            "variadic_parameter_declaration" => Some(variadic(&decl)),
            _ => None,
        })
        .collect()
}

/// `args ...string` keeps its ellipsis and drops the name.
fn variadic<D: ast_grep_core::Doc>(decl: &Node<D>) -> TypeExpr {
    match decl.field("type") {
        Some(ty) => TypeExpr::Plain(format!("...{}", source_text(&ty))),
        None => plain(decl),
    }
}
