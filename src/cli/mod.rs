//! CLI support for ctestep
//!
//! Provides programmatic access to the CLI functionality so the same
//! operations can be embedded in other tools or driven from tests.

mod run;
mod sample;

pub use run::{RunOptions, execute_run, execute_show};
pub use sample::execute_sample;

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Pipeline text could not be parsed into allocated clauses
    Parse(crate::ParseError),
    /// Invalid prefix count or unpatchable tail clause
    Prefix(crate::PrefixError),
    /// Database connection or execution error
    Db(postgres::Error),
    /// IO error
    Io(io::Error),
    /// No pipeline text provided
    NoPipeline,
    /// Unknown difficulty preset
    UnknownDifficulty(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Parse(e) => write!(f, "Pipeline error: {}", e),
            CliError::Prefix(e) => write!(f, "Prefix error: {}", e),
            CliError::Db(e) => write!(f, "Database error: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NoPipeline => {
                write!(f, "No pipeline provided. Use --file or pipe SQL to stdin.")
            }
            CliError::UnknownDifficulty(d) => {
                write!(f, "Unknown difficulty: '{}'. Use easy, medium or hard.", d)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Parse(e) => Some(e),
            CliError::Prefix(e) => Some(e),
            CliError::Db(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<crate::ParseError> for CliError {
    fn from(e: crate::ParseError) -> Self {
        CliError::Parse(e)
    }
}

impl From<crate::PrefixError> for CliError {
    fn from(e: crate::PrefixError) -> Self {
        CliError::Prefix(e)
    }
}

impl From<postgres::Error> for CliError {
    fn from(e: postgres::Error) -> Self {
        CliError::Db(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
