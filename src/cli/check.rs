//! Validate statement syntax without translating

use super::CliError;
use crate::{Error, Lexer, Parser};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The `;`-terminated statements to validate
    pub statements: String,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Tokenising and parsing both passed
    SyntaxValid,
}

/// Tokenise and parse the statements, reporting the first error found.
///
/// Stops before translation, so operators the translator rejects still
/// pass a check.
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let tokens = Lexer::new(&options.statements)
        .tokenise()
        .map_err(Error::Lex)?;
    Parser::new(tokens).parse().map_err(Error::Parse)?;

    Ok(CheckResult::SyntaxValid)
}
