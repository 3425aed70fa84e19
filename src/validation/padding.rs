//! Padding Analysis
//!
//! Pure functions deciding whether a block-like node is padded by a
//! blank line at its top and bottom edges. A node counts as padded on
//! an edge when the delimiter's line and the nearest substantive line
//! differ by at least two, which means at least one fully blank line
//! sits between them. Comments sharing a line with the delimiter are
//! transparent; comments on any other line count as ordinary content.

use crate::parser::ast::{Block, Switch};
use crate::parser::stream::TokenStream;

/// A node whose interior can be padded: a statement block or a switch
/// construct's case list
#[derive(Debug, Clone, Copy)]
pub enum BlockLike<'a> {
    Block(&'a Block),
    Switch(&'a Switch),
}

impl BlockLike<'_> {
    /// True when there is nothing between the delimiters to pad
    pub fn is_empty(&self) -> bool {
        match self {
            BlockLike::Block(b) => b.stmts.is_empty(),
            BlockLike::Switch(s) => s.cases.is_empty(),
        }
    }

    /// Index of the node's first token, where top-edge diagnostics point
    pub fn start_token(&self) -> usize {
        match self {
            BlockLike::Block(b) => b.open,
            BlockLike::Switch(s) => s.keyword,
        }
    }

    /// Index of the node's last token (its closing delimiter)
    pub fn last_token(&self) -> usize {
        match self {
            BlockLike::Block(b) => b.close,
            BlockLike::Switch(s) => s.close,
        }
    }

    /// Index of the node's opening delimiter. For a block this is its
    /// opening brace; for a switch it is the code token immediately
    /// preceding the first case clause. Callers filter empty nodes
    /// before invoking, so a switch here always has a case clause.
    pub fn opening_delimiter(&self, stream: &TokenStream) -> usize {
        match self {
            BlockLike::Block(b) => b.open,
            BlockLike::Switch(s) => {
                match stream.prev_code_token(s.cases[0].first) {
                    Some(i) => i,
                    None => unreachable!("a case clause is always preceded by code tokens"),
                }
            }
        }
    }
}

/// Whether a blank line separates the node's opening delimiter from its
/// first substantive token
pub fn is_top_padded(node: BlockLike<'_>, stream: &TokenStream) -> bool {
    let open = node.opening_delimiter(stream);
    let open_line = stream.get(open).span.start_line;

    let mut idx = open;
    loop {
        idx = match stream.next_token_or_comment(idx) {
            Some(next) => next,
            None => unreachable!("a non-empty node has tokens after its opening delimiter"),
        };
        let tok = stream.get(idx);
        // Comments on the delimiter's own line are transparent
        if tok.kind.is_comment() && tok.span.start_line == open_line {
            continue;
        }
        return tok.span.start_line >= open_line + 2;
    }
}

/// Whether a blank line separates the node's last substantive token
/// from its closing delimiter
pub fn is_bottom_padded(node: BlockLike<'_>, stream: &TokenStream) -> bool {
    let close = node.last_token();
    let close_line = stream.get(close).span.end_line;

    let mut idx = close;
    loop {
        idx = match stream.prev_token_or_comment(idx) {
            Some(prev) => prev,
            None => unreachable!("a non-empty node has tokens before its closing delimiter"),
        };
        let tok = stream.get(idx);
        // Trailing comments on the closing delimiter's line are transparent
        if tok.kind.is_comment() && tok.span.end_line == close_line {
            continue;
        }
        return tok.span.end_line + 2 <= close_line;
    }
}
