//! Source Parser
//!
//! Tokenization, AST construction, and token-stream navigation.
//! Focused solely on turning source text into data the validation
//! layer can analyze.

pub mod ast;
pub mod lexer;
pub mod stream;

pub use ast::{parse_tokens, Block, CaseClause, Program, Simple, Stmt, Switch};
pub use lexer::{tokenize, Span, Token, TokenKind};
pub use stream::TokenStream;

/// Parse source text into its token stream and block structure
///
/// This is the main entry point for parsing. The stream keeps comments
/// in source order; the program's nodes index into it.
pub fn parse_source(source: &str) -> (TokenStream, Program) {
    let stream = TokenStream::new(tokenize(source));
    let program = parse_tokens(stream.tokens());
    (stream, program)
}
