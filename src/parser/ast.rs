//! Abstract Syntax Tree
//!
//! Clean, minimal types representing the block structure of a source
//! file. Nodes reference the token stream by index, so the validation
//! layer can navigate from a node to its surrounding tokens and
//! comments. No validation logic lives here - pure data representation.

use crate::parser::lexer::{Token, TokenKind};

/// A parsed source file
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub stmts: Vec<Stmt>,
}

/// A statement at any nesting level
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// A brace-delimited statement block
    Block(Block),
    /// A switch construct with case clauses
    Switch(Switch),
    /// Any other run of tokens, terminated by ";" or a structural token
    Simple(Simple),
}

/// A brace-delimited block: "{ ... }"
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Index of the opening brace token
    pub open: usize,
    /// Index of the block's last token (the closing brace, or the last
    /// available token when the block is unclosed)
    pub close: usize,
    pub stmts: Vec<Stmt>,
}

/// A switch construct: "switch (expr) { case ...: ... }"
#[derive(Debug, Clone, PartialEq)]
pub struct Switch {
    /// Index of the "switch" keyword token
    pub keyword: usize,
    /// Index of the construct's last token (the closing brace, or the
    /// last available token when unclosed)
    pub close: usize,
    pub cases: Vec<CaseClause>,
}

/// One "case expr:" or "default:" clause with its statements
#[derive(Debug, Clone, PartialEq)]
pub struct CaseClause {
    /// Index of the clause's "case"/"default" keyword token
    pub first: usize,
    pub stmts: Vec<Stmt>,
}

/// A non-structural statement
#[derive(Debug, Clone, PartialEq)]
pub struct Simple {
    pub first: usize,
    pub last: usize,
}

/// Parse a token stream into a Program
///
/// The parser is lenient: it never fails. Unclosed blocks and switches
/// close at the last available token, and stray tokens are absorbed
/// into simple statements or skipped.
pub fn parse_tokens(tokens: &[Token]) -> Program {
    let mut parser = Parser { tokens, pos: 0 };
    parser.parse_program()
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl Parser<'_> {
    /// Index of the next non-comment token, if any
    fn peek_code(&self) -> Option<usize> {
        let mut i = self.pos;
        while i < self.tokens.len() {
            if self.tokens[i].kind.is_comment() {
                i += 1;
            } else {
                return Some(i);
            }
        }
        None
    }

    /// Consume and return the next non-comment token's index
    fn bump_code(&mut self) -> Option<usize> {
        let i = self.peek_code()?;
        self.pos = i + 1;
        Some(i)
    }

    fn is_punct(&self, idx: usize, ch: char) -> bool {
        let tok = &self.tokens[idx];
        tok.kind == TokenKind::Punct && tok.text.len() == 1 && tok.text.starts_with(ch)
    }

    fn is_word(&self, idx: usize, word: &str) -> bool {
        let tok = &self.tokens[idx];
        tok.kind == TokenKind::Word && tok.text == word
    }

    fn is_case_keyword(&self, idx: usize) -> bool {
        self.is_word(idx, "case") || self.is_word(idx, "default")
    }

    /// Index of the stream's last token; used to close unterminated
    /// constructs. Callers only reach this after consuming at least one
    /// token, so the stream is never empty here.
    fn last_index(&self) -> usize {
        self.tokens.len() - 1
    }

    fn parse_program(&mut self) -> Program {
        let mut stmts = Vec::new();
        while let Some(i) = self.peek_code() {
            if self.is_punct(i, '}') {
                // Stray closing brace at top level; skip it
                self.pos = i + 1;
                continue;
            }
            stmts.push(self.parse_stmt(false));
        }
        Program { stmts }
    }

    /// Parse one statement. The caller guarantees the next code token
    /// exists and is not a closing brace.
    fn parse_stmt(&mut self, stop_at_case: bool) -> Stmt {
        match self.peek_code() {
            Some(i) if self.is_punct(i, '{') => Stmt::Block(self.parse_block()),
            Some(i) if self.is_word(i, "switch") => Stmt::Switch(self.parse_switch()),
            _ => Stmt::Simple(self.parse_simple(stop_at_case)),
        }
    }

    fn parse_block(&mut self) -> Block {
        let open = match self.bump_code() {
            Some(i) => i,
            None => unreachable!("parse_block is only entered at an opening brace"),
        };
        let mut stmts = Vec::new();
        let close = loop {
            match self.peek_code() {
                None => break self.last_index(),
                Some(i) if self.is_punct(i, '}') => {
                    self.pos = i + 1;
                    break i;
                }
                Some(_) => stmts.push(self.parse_stmt(false)),
            }
        };
        Block { open, close, stmts }
    }

    fn parse_switch(&mut self) -> Switch {
        let keyword = match self.bump_code() {
            Some(i) => i,
            None => unreachable!("parse_switch is only entered at a 'switch' keyword"),
        };

        // Optional parenthesized discriminant, consumed with balanced
        // paren counting
        if let Some(i) = self.peek_code() {
            if self.is_punct(i, '(') {
                self.pos = i + 1;
                let mut depth = 1usize;
                while depth > 0 {
                    match self.bump_code() {
                        None => break,
                        Some(j) if self.is_punct(j, '(') => depth += 1,
                        Some(j) if self.is_punct(j, ')') => depth -= 1,
                        Some(_) => {}
                    }
                }
            }
        }

        // Opening brace of the case body
        if let Some(i) = self.peek_code() {
            if self.is_punct(i, '{') {
                self.pos = i + 1;
            }
        }

        let mut cases = Vec::new();
        let close = loop {
            match self.peek_code() {
                None => break self.last_index(),
                Some(i) if self.is_punct(i, '}') => {
                    self.pos = i + 1;
                    break i;
                }
                Some(i) if self.is_case_keyword(i) => {
                    cases.push(self.parse_case_clause());
                }
                Some(i) => {
                    // Stray token before the first case; skip it
                    self.pos = i + 1;
                }
            }
        };
        Switch {
            keyword,
            close,
            cases,
        }
    }

    fn parse_case_clause(&mut self) -> CaseClause {
        let first = match self.bump_code() {
            Some(i) => i,
            None => unreachable!("parse_case_clause is only entered at a case keyword"),
        };

        // Consume the test expression through the ":" that ends it
        while let Some(i) = self.peek_code() {
            if self.is_punct(i, ':') {
                self.pos = i + 1;
                break;
            }
            if self.is_punct(i, '{') || self.is_punct(i, '}') || self.is_case_keyword(i) {
                break;
            }
            self.pos = i + 1;
        }

        let mut stmts = Vec::new();
        while let Some(i) = self.peek_code() {
            if self.is_punct(i, '}') || self.is_case_keyword(i) {
                break;
            }
            stmts.push(self.parse_stmt(true));
        }
        CaseClause { first, stmts }
    }

    fn parse_simple(&mut self, stop_at_case: bool) -> Simple {
        let first = match self.bump_code() {
            Some(i) => i,
            None => unreachable!("parse_simple is only entered with a code token pending"),
        };
        let mut last = first;
        while let Some(i) = self.peek_code() {
            if self.is_punct(i, ';') {
                self.pos = i + 1;
                last = i;
                break;
            }
            if self.is_punct(i, '{') || self.is_punct(i, '}') {
                break;
            }
            if stop_at_case && self.is_case_keyword(i) {
                break;
            }
            self.pos = i + 1;
            last = i;
        }
        Simple { first, last }
    }
}
