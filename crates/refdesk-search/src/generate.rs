//! Canonical query text generation.

use crate::builder::QueryBuilderState;
use crate::field;

/// Serialize a builder state back to canonical query text.
///
/// Per term: the value is wrapped in double quotes iff it contains a space
/// or a comma, and prefixed with `prefix:` unless the field is the default
/// all-fields tag. Terms are joined with the match-type combinator; a
/// single term carries no combinator and an empty state yields "".
pub(crate) fn generate_query(state: &QueryBuilderState) -> String {
    let parts: Vec<String> = state
        .terms
        .iter()
        .map(|term| {
            let value = if needs_quoting(&term.value) {
                format!("\"{}\"", term.value)
            } else {
                term.value.clone()
            };
            let prefix = field::prefix_for(state.source, term.field);
            if prefix.is_empty() {
                value
            } else {
                format!("{}:{}", prefix, value)
            }
        })
        .collect();

    parts.join(&format!(" {} ", state.match_type.as_str()))
}

fn needs_quoting(value: &str) -> bool {
    value.contains(' ') || value.contains(',')
}
