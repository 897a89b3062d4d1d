use std::fmt;

use crate::ast::{
    Batch, Clause, Expression, RelationOp, SelectStatement, Statement, Token, TokenKind,
};

/// Errors raised while parsing a token sequence.
///
/// Every structural expectation violation is fatal: there is no recovery or
/// resynchronization, so one malformed statement aborts the whole parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A specific keyword or token kind was required, something else was found
    UnexpectedToken { expected: String, found: String },

    /// Input ended while a construct was still incomplete
    UnexpectedEnd { expected: String },

    /// A statement opened with a keyword the grammar does not know
    UnknownStatement(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken { expected, found } => {
                write!(f, "Parse Error: expected {}, found '{}'", expected, found)
            }
            ParseError::UnexpectedEnd { expected } => {
                write!(f, "Parse Error: expected {}, found end of input", expected)
            }
            ParseError::UnknownStatement(keyword) => {
                write!(f, "Parse Error: unexpected '{}'", keyword)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Recursive-descent parser over the tokeniser's output.
///
/// Tokens are consumed front to back through a cursor with one-token
/// pushback. Each grammar method takes exactly the tokens its construct
/// owns and pushes back the first token that belongs to the caller, so the
/// top-level loop always lands on a statement boundary.
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            position: 0,
        }
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position).cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    /// Undo the most recent `next`. Only valid straight after a successful
    /// pop; grammar methods never push back more than one token.
    fn push_back(&mut self) {
        self.position -= 1;
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn is_exhausted(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Build the error for a missing construct from whatever the cursor is
    /// looking at.
    fn expected(&self, expected: &str) -> ParseError {
        match self.peek() {
            Some(token) => ParseError::UnexpectedToken {
                expected: expected.into(),
                found: token.text.clone(),
            },
            None => ParseError::UnexpectedEnd {
                expected: expected.into(),
            },
        }
    }

    /// Parse every statement in the sequence into a [`Batch`].
    ///
    /// Dispatches on the leading keyword of each statement; an empty token
    /// sequence parses to an empty batch rather than an error.
    pub fn parse(&mut self) -> Result<Batch, ParseError> {
        let mut batch = Batch::default();

        while let Some(head) = self.next() {
            let statement = if head.text == "explain" {
                self.parse_explain()?
            } else if head.text == "select" {
                self.parse_select(false)?
            } else {
                return Err(ParseError::UnknownStatement(head.text));
            };
            batch.statements.push(statement);
        }

        Ok(batch)
    }

    /// `explain` has been consumed; the statement it modifies must follow.
    fn parse_explain(&mut self) -> Result<Statement, ParseError> {
        match self.next() {
            Some(token) if token.text == "select" => self.parse_select(true),
            Some(token) => Err(ParseError::UnexpectedToken {
                expected: "'select' after 'explain'".into(),
                found: token.text,
            }),
            None => Err(ParseError::UnexpectedEnd {
                expected: "'select' after 'explain'".into(),
            }),
        }
    }

    /// `select` has been consumed. Fields and a `from` target are
    /// mandatory; the filter runs only if tokens remain, so a statement at
    /// the end of input may stop after its table name.
    fn parse_select(&mut self, explain: bool) -> Result<Statement, ParseError> {
        let fields = self.parse_fields()?;
        let from = self.parse_from()?;

        let where_clauses = if self.is_exhausted() {
            Vec::new()
        } else {
            self.parse_where()?
        };

        Ok(Statement::Select(SelectStatement {
            fields,
            from,
            where_clauses,
            explain,
        }))
    }

    /// Collect the projection list: identifier tokens with `,` separators
    /// skipped, ending at the first token of any other kind (pushed back
    /// for the caller). At least one field is required.
    fn parse_fields(&mut self) -> Result<Vec<Token>, ParseError> {
        let mut fields = Vec::new();

        while let Some(token) = self.next() {
            if token.kind != TokenKind::Identifier {
                self.push_back();
                break;
            }
            if token.text == "," {
                continue;
            }
            fields.push(token);
        }

        if fields.is_empty() {
            return Err(self.expected("at least one field or '*'"));
        }

        Ok(fields)
    }

    /// The `from` keyword followed by the table reference.
    fn parse_from(&mut self) -> Result<Token, ParseError> {
        match self.next() {
            Some(token) if token.text == "from" => {}
            Some(token) => {
                return Err(ParseError::UnexpectedToken {
                    expected: "'from'".into(),
                    found: token.text,
                });
            }
            None => {
                return Err(ParseError::UnexpectedEnd {
                    expected: "'from'".into(),
                });
            }
        }

        match self.parse_operand() {
            Some(table) => Ok(table),
            None => Err(self.expected("table name")),
        }
    }

    /// Pop the next operand (column name or quoted literal).
    ///
    /// `and` separators are transparent here, which makes clauses
    /// implicitly conjunctive instead of a binary tree; a leading `and`
    /// before the first clause is a no-op. A token of any other kind is
    /// pushed back and reported as `None`.
    fn parse_operand(&mut self) -> Option<Token> {
        match self.next() {
            Some(token) if token.kind == TokenKind::Reserved && token.text == "and" => {
                self.parse_operand()
            }
            Some(token) if token.is_operand() => Some(token),
            Some(_) => {
                self.push_back();
                None
            }
            None => None,
        }
    }

    fn parse_relation(&mut self) -> Result<RelationOp, ParseError> {
        match self.next() {
            Some(token) if token.kind == TokenKind::Relation => RelationOp::parse(&token.text)
                .ok_or_else(|| ParseError::UnexpectedToken {
                    expected: "relation operator".into(),
                    found: token.text.clone(),
                }),
            Some(token) => Err(ParseError::UnexpectedToken {
                expected: "relation operator".into(),
                found: token.text,
            }),
            None => Err(ParseError::UnexpectedEnd {
                expected: "relation operator".into(),
            }),
        }
    }

    /// One `lval rel rval` comparison. Yields `None` when no operand opens
    /// an expression at the cursor, which is how clause collection ends;
    /// once an lval is in hand, the operator and rval are mandatory.
    fn parse_expression(&mut self) -> Result<Option<Expression>, ParseError> {
        let Some(lval) = self.parse_operand() else {
            return Ok(None);
        };

        let rel = self.parse_relation()?;

        let rval = match self.parse_operand() {
            Some(token) => token,
            None => return Err(self.expected("column name or literal")),
        };

        Ok(Some(Expression { lval, rel, rval }))
    }

    fn parse_clause(&mut self) -> Result<Option<Clause>, ParseError> {
        Ok(self
            .parse_expression()?
            .map(|expression| Clause { expression }))
    }

    /// Collect filter clauses until [`Parser::parse_clause`] signals there
    /// are no more. The leading `where` keyword is optional only because a
    /// caller may already be positioned past it; when present it is
    /// consumed, otherwise the token is pushed back untouched.
    fn parse_where(&mut self) -> Result<Vec<Clause>, ParseError> {
        if let Some(token) = self.next() {
            if token.text != "where" {
                self.push_back();
            }
        }

        let mut clauses = Vec::new();
        while let Some(clause) = self.parse_clause()? {
            clauses.push(clause);
        }

        Ok(clauses)
    }
}
