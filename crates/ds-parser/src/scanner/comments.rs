//! Trailing line comments on struct fields.
//!
//! A field's trailing comment is the group of comments that starts on the
//! line where the field ends, each one starting on the line where the
//! previous one ended. The group only counts when nothing but a terminator
//! follows it on its last line. After an explicit `;` the group is taken
//! from behind the semicolon instead, so `A int /* x */; B int` leaves `A`
//! without a comment and a group closed by `}` on the same line is dropped.

use ast_grep_core::{Doc, Node};

/// Text of the field's trailing comment group, markers stripped and
/// trimmed. `None` when the field has no trailing comment.
pub(super) fn trailing_comment<D: Doc>(field: &Node<D>) -> Option<String> {
    let mut children: Vec<Node<D>> = field.children().collect();
    let last_code = children
        .iter()
        .rposition(|c| c.kind().as_ref() != "comment")?;
    let end_row = children[last_code].end_pos().line();
    let inner = children.split_off(last_code + 1);
    let mut tokens = inner
        .into_iter()
        .chain(std::iter::successors(field.next(), |n| n.next()));

    let (mut group, mut group_end, mut next) = comment_group(&mut tokens, end_row);
    if next.as_ref().is_some_and(|n| n.kind().as_ref() == ";") {
        let semicolon_row = next.as_ref().map_or(group_end, |n| n.end_pos().line());
        (group, group_end, next) = comment_group(&mut tokens, semicolon_row);
    }

    if group.is_empty() || !ends_line(next.as_ref(), group_end) {
        return None;
    }
    Some(group_text(&group).trim().to_string())
}

/// Comments chained onto `row`, the row the last one ends on and the first
/// node after them.
fn comment_group<'r, D: Doc>(
    tokens: &mut impl Iterator<Item = Node<'r, D>>,
    mut row: usize,
) -> (Vec<String>, usize, Option<Node<'r, D>>) {
    let mut group = Vec::new();
    for node in tokens.by_ref() {
        if node.kind().as_ref() != "comment" || node.start_pos().line() != row {
            return (group, row, Some(node));
        }
        row = node.end_pos().line();
        group.push(node.text().to_string());
    }
    (group, row, None)
}

/// Whether `next` closes the line a comment group ended on.
fn ends_line<D: Doc>(next: Option<&Node<D>>, row: usize) -> bool {
    next.is_none_or(|n| {
        matches!(n.kind().as_ref(), ";" | "\n") || n.start_pos().line() != row
    })
}

/// Comment group text: markers removed along with the first space of a
/// line comment, compiler directives dropped, trailing whitespace
/// removed, blank lines collapsed and stripped at both ends.
fn group_text(comments: &[String]) -> String {
    let mut lines: Vec<&str> = Vec::new();
    for comment in comments {
        let body = if let Some(rest) = comment.strip_prefix("//") {
            if is_directive(rest) {
                continue;
            }
            rest.strip_prefix(' ').unwrap_or(rest)
        } else {
            comment
                .strip_prefix("/*")
                .and_then(|rest| rest.strip_suffix("*/"))
                .unwrap_or(comment)
        };
        lines.extend(body.split('\n').map(str::trim_end));
    }

    let mut kept: Vec<&str> = Vec::with_capacity(lines.len());
    for line in lines {
        let previous_blank = kept.last().is_none_or(|l| l.is_empty());
        if !line.is_empty() || !previous_blank {
            kept.push(line);
        }
    }
    while kept.last().is_some_and(|l| l.is_empty()) {
        kept.pop();
    }
    kept.join("\n")
}

/// `//go:embed`, `//line file:1`, `//export Name` and friends.
fn is_directive(text: &str) -> bool {
    if ["line ", "extern ", "export "]
        .iter()
        .any(|prefix| text.starts_with(prefix))
    {
        return true;
    }

    let bytes = text.as_bytes();
    let Some(colon) = text.find(':') else {
        return false;
    };
    if colon == 0 || colon + 1 >= bytes.len() {
        return false;
    }
    bytes[..=colon + 1]
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != colon)
        .all(|(_, b)| b.is_ascii_lowercase() || b.is_ascii_digit())
}
