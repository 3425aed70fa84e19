//! Token Stream Navigation
//!
//! Owns the lexed token sequence and answers adjacency queries over it.
//! Comments are first-class members of the stream: `next_token_or_comment`
//! and `prev_token_or_comment` step through them rather than skipping
//! them, which is what the padding analysis relies on.

use crate::parser::lexer::Token;

/// An ordered, gap-free sequence of tokens and comments
#[derive(Debug, Clone, PartialEq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn get(&self, idx: usize) -> &Token {
        &self.tokens[idx]
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The token or comment immediately after `idx` in source order
    pub fn next_token_or_comment(&self, idx: usize) -> Option<usize> {
        let next = idx + 1;
        (next < self.tokens.len()).then_some(next)
    }

    /// The token or comment immediately before `idx` in source order
    pub fn prev_token_or_comment(&self, idx: usize) -> Option<usize> {
        idx.checked_sub(1)
    }

    /// The nearest non-comment token before `idx`; used to resolve a
    /// switch construct's opening delimiter (the code token preceding
    /// its first case clause)
    pub fn prev_code_token(&self, idx: usize) -> Option<usize> {
        let mut i = idx;
        while i > 0 {
            i -= 1;
            if !self.tokens[i].kind.is_comment() {
                return Some(i);
            }
        }
        None
    }
}
