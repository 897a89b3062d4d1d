//! # sqldoc
//!
//! Translates a constrained subset of SQL `select` statements into
//! document-store query descriptors: a collection name, a field
//! projection, and a filter predicate tree.
//!
//! The pipeline has three stages, each usable on its own:
//!
//! ```text
//! raw text -> Lexer -> tokens -> Parser -> Batch -> translate -> Translation
//! ```
//!
//! [`translate_sql`] runs all three over one input string:
//!
//! ```
//! use sqldoc::{translate_sql, Predicate, Translation, Value};
//!
//! let translation = translate_sql("select name from users where age > 21;").unwrap();
//! let Translation::One(descriptor) = translation else {
//!     panic!("one statement collapses to one descriptor");
//! };
//!
//! assert_eq!(descriptor.collection, "users");
//! assert_eq!(descriptor.filter["age"], Predicate::Gt(Value::Integer(21)));
//! ```
//!
//! The pipeline is synchronous and purely functional: no shared state, no
//! I/O, and every error is a value. One malformed statement aborts the
//! whole call with no partial result.

pub mod ast;
#[cfg(feature = "cli")]
pub mod cli;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod translate;
pub mod value;

pub use ast::{Batch, Clause, Expression, RelationOp, SelectStatement, Statement, Token, TokenKind};
pub use lexer::{LexError, Lexer};
pub use output::{to_json, to_json_pretty};
pub use parser::{ParseError, Parser};
pub use translate::{translate, CompileError, Predicate, QueryDescriptor, Translation};
pub use value::Value;

use std::fmt;

/// Any error the pipeline can raise, one variant per stage.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Tokeniser error
    Lex(LexError),
    /// Parser error
    Parse(ParseError),
    /// Translator error
    Compile(CompileError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // stage errors already carry their kind prefix
        match self {
            Error::Lex(e) => write!(f, "{}", e),
            Error::Parse(e) => write!(f, "{}", e),
            Error::Compile(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Lex(e) => Some(e),
            Error::Parse(e) => Some(e),
            Error::Compile(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Error::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}

impl From<CompileError> for Error {
    fn from(e: CompileError) -> Self {
        Error::Compile(e)
    }
}

/// Run the whole pipeline over one input string.
///
/// Tokenises, parses, and translates every `;`-terminated statement in
/// `input`. Exactly one statement yields [`Translation::One`]; zero or
/// several yield [`Translation::Many`].
pub fn translate_sql(input: &str) -> Result<Translation, Error> {
    let tokens = Lexer::new(input).tokenise()?;
    let batch = Parser::new(tokens).parse()?;
    Ok(translate(&batch)?)
}
