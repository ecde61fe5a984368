use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::assemble::assemble;
use crate::pipeline::Clause;
use crate::value::ArgValue;

/// Errors from selecting a pipeline prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefixError {
    /// Prefix count of 1, or larger than the clause count
    ///
    /// A single kept clause is just the `WITH` header; it cannot stand
    /// alone as executable SQL, so the smallest truncation is 2.
    InvalidCount { given: usize, total: usize },

    /// The tail clause has no droppable projection head to patch out
    PatchNotFound { clause: usize },
}

impl fmt::Display for PrefixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefixError::InvalidCount { given, total } => write!(
                f,
                "prefix count must be 0 or between 2 and {}, got {}",
                total, given
            ),
            PrefixError::PatchNotFound { clause } => {
                write!(f, "clause {} has no patchable projection head", clause)
            }
        }
    }
}

impl std::error::Error for PrefixError {}

/// Truncate an allocated pipeline to its first `prefix_count` clauses.
///
/// Returns the standalone query text and the argument values belonging
/// to the clauses that survive, in order.
///
/// # Prefix counts
///
/// - `0` means no truncation: the original text (clause texts
///   concatenated with no separator) and the full argument list come
///   back verbatim.
/// - `1` is rejected; see [`PrefixError::InvalidCount`].
/// - `2..=clauses.len()` keeps that many leading clauses. The last
///   kept clause (the tail) becomes the terminal statement of the
///   truncated query.
///
/// # Tail patching
///
/// When at least one clause is discarded, the tail still reads as a
/// CTE definition: `, name AS ( body )`. Its leading
/// comma-name-`AS` run is deleted up to the opening parenthesis of the
/// body, turning the clause into a bare parenthesized select that the
/// remaining `WITH` chain can terminate on. If the deletion leaves a
/// closing parenthesis at the end of the clause with no matching
/// opener, that one character is stripped as well.
///
/// When `prefix_count` equals the clause count nothing is discarded
/// and the tail is left untouched, so the output differs from the
/// original only in the single-space joins between clauses.
///
/// # Examples
///
/// ```
/// use ctestep::Pipeline;
///
/// let text = "WITH a(x) AS (SELECT 1), b AS (SELECT x FROM a) SELECT * FROM b";
/// let pipeline = Pipeline::parse(text, &[]).unwrap();
///
/// let (sql, _) = pipeline.prefix(2).unwrap();
/// assert_eq!(sql, "WITH a(x) AS (SELECT 1) (SELECT x FROM a)");
/// ```
pub fn select_prefix(
    clauses: &[Clause],
    prefix_count: usize,
) -> Result<(String, Vec<ArgValue>), PrefixError> {
    if prefix_count == 0 {
        return Ok(assemble(clauses, ""));
    }
    if prefix_count == 1 || prefix_count > clauses.len() {
        return Err(PrefixError::InvalidCount {
            given: prefix_count,
            total: clauses.len(),
        });
    }

    let kept = &clauses[..prefix_count];
    if prefix_count == clauses.len() {
        // Nothing discarded, nothing to patch.
        return Ok(assemble(kept, " "));
    }

    let tail_index = prefix_count - 1;
    let tail = &kept[tail_index];
    let patched = patch_tail(&tail.text).ok_or(PrefixError::PatchNotFound {
        clause: tail_index,
    })?;

    let (mut text, mut arguments) = assemble(&kept[..tail_index], " ");
    text.push(' ');
    text.push_str(&patched);
    arguments.extend(tail.arguments.iter().cloned());

    Ok((text, arguments))
}

/// Leading `, name AS (` shape of every non-terminal clause after the
/// first: a comma, a run of anything but parentheses, an opener.
fn intro_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r",[^(]+\(").expect("pattern is valid"))
}

/// Delete the tail clause's dangling projection head.
///
/// Finds the leftmost comma-reference-parenthesis span and removes it
/// up to, but not including, the opening parenthesis. Returns `None`
/// when the clause contains no such span.
fn patch_tail(text: &str) -> Option<String> {
    let matched = intro_pattern().find(text)?;

    let mut patched = String::with_capacity(text.len());
    patched.push_str(&text[..matched.start()]);
    patched.push_str(&text[matched.end() - 1..]);

    if patched.ends_with(')') && paren_balance(&patched) < 0 {
        patched.pop();
    }

    Some(patched)
}

fn paren_balance(text: &str) -> i64 {
    text.chars().fold(0, |depth, ch| match ch {
        '(' => depth + 1,
        ')' => depth - 1,
        _ => depth,
    })
}
