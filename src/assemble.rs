use crate::pipeline::Clause;
use crate::value::ArgValue;

/// Join clause texts with `separator` and concatenate their argument
/// lists, in order. Carries no truncation logic; the selector decides
/// what goes in, this only strings it together.
pub fn assemble(clauses: &[Clause], separator: &str) -> (String, Vec<ArgValue>) {
    let text = clauses
        .iter()
        .map(|clause| clause.text.as_str())
        .collect::<Vec<_>>()
        .join(separator);
    let arguments = clauses
        .iter()
        .flat_map(|clause| clause.arguments.iter().cloned())
        .collect();
    (text, arguments)
}
