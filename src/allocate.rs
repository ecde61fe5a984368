use std::fmt;

use crate::pipeline::{Clause, PLACEHOLDER};
use crate::value::ArgValue;

/// Errors from lining the argument list up with clause placeholders.
#[derive(Debug, Clone, PartialEq)]
pub enum AllocError {
    /// A clause needs more arguments than remain unclaimed
    ShortArguments {
        clause: usize,
        needed: usize,
        remaining: usize,
    },

    /// Arguments left over after every clause took its share
    UnclaimedArguments { claimed: usize, provided: usize },
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocError::ShortArguments {
                clause,
                needed,
                remaining,
            } => write!(
                f,
                "clause {} expects {} argument(s) but only {} remain",
                clause, needed, remaining
            ),
            AllocError::UnclaimedArguments { claimed, provided } => write!(
                f,
                "placeholders claim {} argument(s) but {} were provided",
                claimed, provided
            ),
        }
    }
}

impl std::error::Error for AllocError {}

/// Assign each clause the contiguous slice of arguments its
/// placeholders consume.
///
/// Walks a read cursor over `arguments` without mutating it: for each
/// clause text in order, the number of `%s` markers it contains
/// decides how many values it takes from the cursor position.
///
/// Fails if any clause would read past the end of the list, or if
/// values remain unclaimed once the last clause has taken its share.
/// Both directions of mismatch are arity errors; neither is recoverable.
pub fn allocate(texts: Vec<String>, arguments: &[ArgValue]) -> Result<Vec<Clause>, AllocError> {
    let mut cursor = 0;
    let mut clauses = Vec::with_capacity(texts.len());

    for (index, text) in texts.into_iter().enumerate() {
        let needed = text.matches(PLACEHOLDER).count();
        if cursor + needed > arguments.len() {
            return Err(AllocError::ShortArguments {
                clause: index,
                needed,
                remaining: arguments.len() - cursor,
            });
        }
        let assigned = arguments[cursor..cursor + needed].to_vec();
        cursor += needed;
        clauses.push(Clause {
            text,
            placeholders: needed,
            arguments: assigned,
        });
    }

    if cursor < arguments.len() {
        return Err(AllocError::UnclaimedArguments {
            claimed: cursor,
            provided: arguments.len(),
        });
    }

    Ok(clauses)
}
