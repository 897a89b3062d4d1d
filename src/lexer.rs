use std::fmt;

use crate::ast::{RelationOp, Token, TokenKind};

/// SQL keywords recognised by the tokeniser.
///
/// Most of these are only ever tokenised; the parser consumes `select`,
/// `from`, `where`, `and`, and `explain` and rejects the rest wherever a
/// specific construct is required.
const RESERVED: [&str; 12] = [
    "select", "from", "where", "order", "group", "by", "limit", "and", "or", "like", "null",
    "explain",
];

/// Errors raised while scanning a statement string.
///
/// Both are fatal: no partial token sequence is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// An escape other than `\t` or `\s` appeared inside a quoted string
    UnsupportedEscape { escape: char, position: usize },

    /// Input ran out before a quoted string was closed
    UnterminatedString { start: usize },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnsupportedEscape { escape, position } => write!(
                f,
                "Syntax Error: unsupported escape sequence '\\{}' at position {}",
                escape, position
            ),
            LexError::UnterminatedString { start } => write!(
                f,
                "Parse Error: unterminated string literal starting at position {}",
                start
            ),
        }
    }
}

impl std::error::Error for LexError {}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    /// Scan the whole input into an ordered token sequence.
    ///
    /// Whitespace and `;` flush the pending word and are themselves
    /// discarded; `,` flushes and then stands as its own identifier token;
    /// `'` hands off to the quoted-string scanner. Any other character
    /// accumulates into the pending word. A word still buffered when the
    /// input ends is dropped without a flush, so a statement missing its
    /// terminating `;` loses its final token.
    pub fn tokenise(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        let mut buffer = String::new();

        while let Some(ch) = self.current_char() {
            match ch {
                '\'' => {
                    buffer.clear();
                    let start = self.position;
                    self.advance();
                    tokens.push(self.read_string(start)?);
                }
                c if c.is_whitespace() || c == ';' => {
                    flush(&mut buffer, &mut tokens);
                    self.advance();
                }
                ',' => {
                    flush(&mut buffer, &mut tokens);
                    tokens.push(Token::identifier(","));
                    self.advance();
                }
                c => {
                    buffer.push(c);
                    self.advance();
                }
            }
        }

        Ok(tokens)
    }

    /// Scan a quoted string, the opening `'` already consumed.
    ///
    /// Characters accumulate verbatim until the matching quote; `\t` (tab)
    /// and `\s` (space) are the only escapes. A backslash with nothing
    /// after it means the string cannot close, reported as unterminated.
    fn read_string(&mut self, start: usize) -> Result<Token, LexError> {
        let mut buffer = String::new();

        while let Some(ch) = self.current_char() {
            match ch {
                '\'' => {
                    self.advance();
                    return Ok(Token::literal(buffer));
                }
                '\\' => {
                    let position = self.position;
                    self.advance();
                    match self.current_char() {
                        Some('t') => buffer.push('\t'),
                        Some('s') => buffer.push(' '),
                        Some(escape) => {
                            return Err(LexError::UnsupportedEscape { escape, position });
                        }
                        None => return Err(LexError::UnterminatedString { start }),
                    }
                    self.advance();
                }
                _ => {
                    buffer.push(ch);
                    self.advance();
                }
            }
        }

        Err(LexError::UnterminatedString { start })
    }
}

/// Classify and emit the buffered word: reserved words first, then relation
/// operators, then identifiers. An empty buffer emits nothing.
fn flush(buffer: &mut String, tokens: &mut Vec<Token>) {
    if buffer.is_empty() {
        return;
    }

    let kind = if RESERVED.contains(&buffer.as_str()) {
        TokenKind::Reserved
    } else if RelationOp::parse(buffer).is_some() {
        TokenKind::Relation
    } else {
        TokenKind::Identifier
    };

    tokens.push(Token {
        kind,
        text: std::mem::take(buffer),
    });
}

#[test]
fn test_simple_statement() {
    let tokens = Lexer::new("select * from test;").tokenise().unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::reserved("select"),
            Token::identifier("*"),
            Token::reserved("from"),
            Token::identifier("test"),
        ]
    );
}

#[test]
fn test_relation_classification() {
    let tokens = Lexer::new("where a >= 10 ;").tokenise().unwrap();
    assert_eq!(tokens[1], Token::identifier("a"));
    assert_eq!(tokens[2], Token::relation(">="));
}

#[test]
fn test_quoted_string() {
    let tokens = Lexer::new("'Hello,\\sWorld!' ;").tokenise().unwrap();
    assert_eq!(tokens, vec![Token::literal("Hello, World!")]);
}
