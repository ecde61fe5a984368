use std::fmt;

use postgres::types::ToSql;
use uuid::Uuid;

/// One positional argument value for a pipeline placeholder.
///
/// Pipeline arguments arrive as flat text (command-line flags or a
/// caller-supplied list) but have to be bound to PostgreSQL with their
/// real types, so the tool keeps them typed from the moment they are
/// read.
///
/// # Type Inference
///
/// [`ArgValue::infer`] tries the narrowest interpretation first:
/// UUID, then integer, then float, then plain text. `15` therefore
/// binds as `BIGINT`, `0.7` as `DOUBLE PRECISION`, and
/// `8f6bd1e4-fbe1-4f50-aa9b-94c450ec0f11` as `UUID`.
///
/// # Examples
///
/// ```
/// use ctestep::ArgValue;
///
/// assert_eq!(ArgValue::infer("15"), ArgValue::Int(15));
/// assert_eq!(ArgValue::infer("0.7"), ArgValue::Float(0.7));
/// assert_eq!(ArgValue::infer("similar"), ArgValue::Text("similar".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    /// A UUID (artist MBIDs and the like)
    Uuid(Uuid),

    /// A signed integer (limits, row counts)
    Int(i64),

    /// A floating-point number (rank bounds)
    Float(f64),

    /// Anything that parses as none of the above
    Text(String),
}

impl ArgValue {
    /// Infer a typed value from raw text.
    ///
    /// Inference order: UUID, integer, float, text. UUID must come
    /// before text and integer before float, since every UUID is valid
    /// text and every integer is a valid float.
    pub fn infer(raw: &str) -> Self {
        if let Ok(id) = Uuid::parse_str(raw) {
            return ArgValue::Uuid(id);
        }
        if let Ok(n) = raw.parse::<i64>() {
            return ArgValue::Int(n);
        }
        if let Ok(n) = raw.parse::<f64>() {
            return ArgValue::Float(n);
        }
        ArgValue::Text(raw.to_string())
    }

    /// Borrow the value as a `postgres` bind parameter.
    pub fn as_sql(&self) -> &(dyn ToSql + Sync) {
        match self {
            ArgValue::Uuid(id) => id,
            ArgValue::Int(n) => n,
            ArgValue::Float(n) => n,
            ArgValue::Text(s) => s,
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Uuid(id) => write!(f, "'{}'", id),
            ArgValue::Int(n) => write!(f, "{}", n),
            ArgValue::Float(n) => write!(f, "{}", n),
            ArgValue::Text(s) => write!(f, "'{}'", s),
        }
    }
}
