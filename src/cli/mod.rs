//! CLI support for sqldoc
//!
//! Provides programmatic access to the CLI commands so they can be
//! embedded in other tools and tested without a terminal.

mod check;
mod translate;

pub use check::{execute_check, CheckOptions, CheckResult};
pub use translate::{execute_translate, TranslateOptions};

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// The pipeline rejected the input
    Pipeline(crate::Error),
    /// IO error
    Io(io::Error),
    /// No input provided
    NoInput,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // pipeline errors carry their own kind prefix
            CliError::Pipeline(e) => write!(f, "{}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NoInput => {
                write!(
                    f,
                    "No input provided. Pass statements as an argument or pipe them to stdin."
                )
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Pipeline(e) => Some(e),
            CliError::Io(e) => Some(e),
            CliError::NoInput => None,
        }
    }
}

impl From<crate::Error> for CliError {
    fn from(e: crate::Error) -> Self {
        CliError::Pipeline(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
