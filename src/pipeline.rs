use std::fmt;

use crate::allocate::{AllocError, allocate};
use crate::prefix::{PrefixError, select_prefix};
use crate::split::{SplitError, split};
use crate::value::ArgValue;

/// The positional placeholder marker used throughout pipeline text.
pub const PLACEHOLDER: &str = "%s";

/// One logical pipeline stage: a named CTE definition, or the terminal
/// select.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    /// The stage's text, exactly as it appears in the pipeline
    pub text: String,

    /// Number of [`PLACEHOLDER`] markers in `text`
    pub placeholders: usize,

    /// The argument values those markers consume, in order;
    /// always `placeholders` long
    pub arguments: Vec<ArgValue>,
}

/// Errors from building a [`Pipeline`] out of raw text and arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The text could not be split into clauses
    Split(SplitError),

    /// The argument list does not line up with the placeholders
    Alloc(AllocError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Split(e) => write!(f, "{}", e),
            ParseError::Alloc(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Split(e) => Some(e),
            ParseError::Alloc(e) => Some(e),
        }
    }
}

impl From<SplitError> for ParseError {
    fn from(e: SplitError) -> Self {
        ParseError::Split(e)
    }
}

impl From<AllocError> for ParseError {
    fn from(e: AllocError) -> Self {
        ParseError::Alloc(e)
    }
}

/// An ordered sequence of pipeline clauses with their arguments.
///
/// Built once from raw pipeline text and a flat argument list, then
/// queried for prefixes; never mutated. The clause texts concatenated
/// in order reproduce the input text exactly, and the per-clause
/// argument lists concatenated in order reproduce the input argument
/// list exactly.
///
/// # Examples
///
/// ```
/// use ctestep::{ArgValue, Pipeline};
///
/// let text = "WITH a(x) AS (SELECT %s), b AS (SELECT x FROM a LIMIT %s) SELECT * FROM b";
/// let arguments = [ArgValue::Int(1), ArgValue::Int(10)];
///
/// let pipeline = Pipeline::parse(text, &arguments).unwrap();
/// assert_eq!(pipeline.clause_count(), 3);
///
/// // No truncation: everything comes back verbatim.
/// let (sql, args) = pipeline.prefix(0).unwrap();
/// assert_eq!(sql, text);
/// assert_eq!(args.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Pipeline {
    clauses: Vec<Clause>,
}

impl Pipeline {
    /// Split `text` into clauses and allocate `arguments` across them.
    pub fn parse(text: &str, arguments: &[ArgValue]) -> Result<Self, ParseError> {
        let texts = split(text)?;
        let clauses = allocate(texts, arguments)?;
        Ok(Pipeline { clauses })
    }

    /// The clauses in source order.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// How many clauses the pipeline has, terminal select included.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// Truncate to the first `prefix_count` clauses; see
    /// [`select_prefix`](crate::prefix::select_prefix).
    pub fn prefix(&self, prefix_count: usize) -> Result<(String, Vec<ArgValue>), PrefixError> {
        select_prefix(&self.clauses, prefix_count)
    }
}
