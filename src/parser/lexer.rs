//! Source Lexer
//!
//! Tokenizes brace-language source text into a single ordered stream of
//! code tokens and comments, each carrying its line/column span.
//! Focus: extract tokens quickly with minimal allocations; the lexer is
//! lenient and never fails on malformed input.

/// Token types in the source stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifier or keyword like "foo", "switch", "case"
    Word,
    /// Numeric literal like "1" or "10.5"
    Number,
    /// Quoted string literal
    Str,
    /// A single punctuation character like "{" or ";"
    Punct,
    /// Line comment ("// ..." to end of line)
    LineComment,
    /// Block comment ("/* ... */", possibly spanning lines)
    BlockComment,
}

impl TokenKind {
    pub fn is_comment(self) -> bool {
        matches!(self, TokenKind::LineComment | TokenKind::BlockComment)
    }
}

/// Source range of a token. Lines are 1-based, columns 0-based, and the
/// end column is exclusive (one past the token's last character).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start_line: usize,
    pub start_col: usize,
    pub end_line: usize,
    pub end_col: usize,
}

/// A token with its text content and source span
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

/// Character cursor that tracks line and column while scanning
struct Cursor<'a> {
    chars: std::str::Chars<'a>,
    line: usize,
    col: usize,
}

impl<'a> Cursor<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars(),
            line: 1,
            col: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.clone().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.chars.clone().nth(1)
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        if ch == '\n' {
            self.line += 1;
            self.col = 0;
        } else {
            self.col += 1;
        }
        Some(ch)
    }
}

/// Tokenize an entire source text into tokens and comments
///
/// Comments are ordinary members of the returned stream, in source
/// order alongside code tokens. Whitespace is skipped but still
/// advances positions.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut cur = Cursor::new(source);

    while let Some(ch) = cur.peek() {
        // Skip whitespace
        if ch.is_whitespace() {
            cur.bump();
            continue;
        }

        let start_line = cur.line;
        let start_col = cur.col;
        let mut text = String::new();

        let kind = match ch {
            // Line comment: consume to end of line (newline excluded)
            '/' if cur.peek_second() == Some('/') => {
                while let Some(c) = cur.peek() {
                    if c == '\n' {
                        break;
                    }
                    text.push(c);
                    cur.bump();
                }
                TokenKind::LineComment
            }

            // Block comment: consume through "*/", or to end of input
            // when unterminated
            '/' if cur.peek_second() == Some('*') => {
                text.push(cur.bump().unwrap_or('/'));
                text.push(cur.bump().unwrap_or('*'));
                let mut prev = '\0';
                while let Some(c) = cur.bump() {
                    text.push(c);
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
                TokenKind::BlockComment
            }

            // Identifier or keyword
            c if c.is_ascii_alphabetic() || c == '_' => {
                while let Some(c) = cur.peek() {
                    if c.is_ascii_alphanumeric() || c == '_' {
                        text.push(c);
                        cur.bump();
                    } else {
                        break;
                    }
                }
                TokenKind::Word
            }

            // Numeric literal (digits and dots; no validation here)
            c if c.is_ascii_digit() => {
                while let Some(c) = cur.peek() {
                    if c.is_ascii_digit() || c == '.' {
                        text.push(c);
                        cur.bump();
                    } else {
                        break;
                    }
                }
                TokenKind::Number
            }

            // String literal with backslash escapes; an unterminated
            // string runs to end of line
            quote @ ('"' | '\'') => {
                text.push(cur.bump().unwrap_or(quote));
                while let Some(c) = cur.peek() {
                    if c == '\n' {
                        break;
                    }
                    text.push(c);
                    cur.bump();
                    if c == '\\' {
                        if let Some(escaped) = cur.peek() {
                            text.push(escaped);
                            cur.bump();
                        }
                    } else if c == quote {
                        break;
                    }
                }
                TokenKind::Str
            }

            // Any other character is a single-character punctuation token
            c => {
                text.push(c);
                cur.bump();
                TokenKind::Punct
            }
        };

        tokens.push(Token {
            kind,
            text,
            span: Span {
                start_line,
                start_col,
                end_line: cur.line,
                end_col: cur.col,
            },
        });
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_tokenize_simple_block() {
        let tokens = tokenize("{ foo(); }");

        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Punct,
                TokenKind::Word,
                TokenKind::Punct,
                TokenKind::Punct,
                TokenKind::Punct,
                TokenKind::Punct,
            ]
        );
        assert_eq!(tokens[1].text, "foo");
    }

    #[test]
    fn test_spans_track_lines_and_columns() {
        let tokens = tokenize("{\n    foo();\n}");

        // Opening brace on line 1, column 0
        assert_eq!(tokens[0].span.start_line, 1);
        assert_eq!(tokens[0].span.start_col, 0);
        // "foo" on line 2, column 4
        assert_eq!(tokens[1].span.start_line, 2);
        assert_eq!(tokens[1].span.start_col, 4);
        assert_eq!(tokens[1].span.end_col, 7);
        // Closing brace on line 3
        let close = tokens.last().unwrap();
        assert_eq!(close.span.start_line, 3);
        assert_eq!(close.span.end_col, 1);
    }

    #[test]
    fn test_line_comment() {
        let tokens = tokenize("foo; // trailing\nbar;");

        assert_eq!(tokens[2].kind, TokenKind::LineComment);
        assert_eq!(tokens[2].text, "// trailing");
        assert_eq!(tokens[2].span.start_line, 1);
        assert_eq!(tokens[2].span.end_line, 1);
        assert_eq!(tokens[3].text, "bar");
        assert_eq!(tokens[3].span.start_line, 2);
    }

    #[test]
    fn test_block_comment_spans_lines() {
        let tokens = tokenize("/* a\n   b */ foo");

        assert_eq!(tokens[0].kind, TokenKind::BlockComment);
        assert_eq!(tokens[0].span.start_line, 1);
        assert_eq!(tokens[0].span.end_line, 2);
        assert_eq!(tokens[1].text, "foo");
    }

    #[test]
    fn test_unterminated_block_comment() {
        let tokens = tokenize("/* never closed\nfoo");

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::BlockComment);
        assert_eq!(tokens[0].span.end_line, 2);
    }

    #[test]
    fn test_string_literal() {
        let tokens = tokenize(r#"x = "hi // not a comment";"#);

        assert_eq!(tokens[2].kind, TokenKind::Str);
        assert_eq!(tokens[2].text, r#""hi // not a comment""#);
        assert_eq!(tokens[3].kind, TokenKind::Punct);
    }

    #[test]
    fn test_number_literal() {
        let tokens = tokenize("case 10.5:");

        assert_eq!(tokens[1].kind, TokenKind::Number);
        assert_eq!(tokens[1].text, "10.5");
    }

    #[test]
    fn test_empty_source() {
        assert!(tokenize("   \n\t\n").is_empty());
    }
}
