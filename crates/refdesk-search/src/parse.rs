//! Clause splitting and term parsing.
//!
//! Both stages scan with an explicit in-quote flag: a double quote toggles
//! the flag, and there is no escape sequence for quotes within quotes.
//! Both stages are total — malformed input (unbalanced quotes, unknown
//! prefixes) falls back to bare all-fields values instead of failing.

use lazy_static::lazy_static;
use regex::Regex;

use crate::builder::{MatchType, QueryTerm};
use crate::field;
use crate::{SearchField, SearchSource};

lazy_static! {
    /// A `word:` shape marking quoted input as a field-qualified query that
    /// was wrapped in quotes as a whole.
    static ref FIELD_LIKE: Regex = Regex::new(r"[A-Za-z][A-Za-z0-9]*:").unwrap();
}

const AND_TOKEN: &str = " AND ";
const OR_TOKEN: &str = " OR ";

/// Split a raw query into trimmed clauses and resolve the match type.
///
/// Combinators are matched outside quoted spans only, as the literal
/// ` AND ` / ` OR ` (case-sensitive). The first combinator fixes the match
/// type for the whole query; later combinators of either kind still act as
/// split points. Clauses that trim to empty are dropped, so empty or
/// whitespace-only input yields no clauses.
pub(crate) fn split_clauses(raw: &str) -> (MatchType, Vec<String>) {
    let repaired = repair_outer_quotes(raw.trim());

    let mut match_type: Option<MatchType> = None;
    let mut clauses = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;
    let mut i = 0;

    while i < repaired.len() {
        let rest = &repaired[i..];
        if !in_quotes {
            let split = if rest.starts_with(AND_TOKEN) {
                Some((MatchType::All, AND_TOKEN.len()))
            } else if rest.starts_with(OR_TOKEN) {
                Some((MatchType::Any, OR_TOKEN.len()))
            } else {
                None
            };
            if let Some((combinator, len)) = split {
                match_type.get_or_insert(combinator);
                push_clause(&mut clauses, &repaired[start..i]);
                i += len;
                start = i;
                continue;
            }
        }
        let Some(c) = rest.chars().next() else { break };
        if c == '"' {
            in_quotes = !in_quotes;
        }
        i += c.len_utf8();
    }
    push_clause(&mut clauses, &repaired[start..]);

    (match_type.unwrap_or_default(), clauses)
}

fn push_clause(clauses: &mut Vec<String>, raw: &str) {
    let clause = raw.trim();
    if !clause.is_empty() {
        clauses.push(clause.to_string());
    }
}

/// Strip one outer quote layer from input like `"author: Clark, Susan"`.
///
/// Only applies when the quoted interior itself looks field-qualified;
/// a genuinely quoted phrase such as `"dark matter"` is left alone.
fn repair_outer_quotes(trimmed: &str) -> &str {
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        let interior = &trimmed[1..trimmed.len() - 1];
        if FIELD_LIKE.is_match(interior) {
            return interior;
        }
    }
    trimmed
}

/// Parse one clause into a term.
///
/// The candidate prefix before the first unquoted `:` is resolved against
/// the source's registry. Unknown prefixes (and clauses without an unquoted
/// colon) keep the whole clause as an all-fields value. The value loses
/// leading whitespace and one wrapping pair of double quotes.
pub(crate) fn parse_term(clause: &str, source: SearchSource) -> QueryTerm {
    if let Some(colon) = find_unquoted_colon(clause) {
        if let Some(field) = field::field_for(source, &clause[..colon]) {
            let value = clause[colon + 1..].trim_start();
            return QueryTerm::new(field, strip_outer_quotes(value));
        }
    }
    QueryTerm::new(SearchField::All, strip_outer_quotes(clause))
}

fn find_unquoted_colon(clause: &str) -> Option<usize> {
    let mut in_quotes = false;
    for (i, c) in clause.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ':' if !in_quotes => return Some(i),
            _ => {}
        }
    }
    None
}

fn strip_outer_quotes(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_single_clause() {
        let (match_type, clauses) = split_clauses("author:Einstein");
        assert_eq!(match_type, MatchType::All);
        assert_eq!(clauses, vec!["author:Einstein"]);
    }

    #[test]
    fn split_on_and() {
        let (match_type, clauses) = split_clauses("author:Einstein AND title:relativity");
        assert_eq!(match_type, MatchType::All);
        assert_eq!(clauses, vec!["author:Einstein", "title:relativity"]);
    }

    #[test]
    fn split_on_or() {
        let (match_type, clauses) = split_clauses("author:Einstein OR author:Bohr");
        assert_eq!(match_type, MatchType::Any);
        assert_eq!(clauses, vec!["author:Einstein", "author:Bohr"]);
    }

    #[test]
    fn combinator_inside_quotes_is_literal() {
        let (_, clauses) = split_clauses("title:\"war AND peace\"");
        assert_eq!(clauses, vec!["title:\"war AND peace\""]);
    }

    #[test]
    fn first_combinator_wins() {
        let (match_type, clauses) = split_clauses("a OR b AND c");
        assert_eq!(match_type, MatchType::Any);
        assert_eq!(clauses, vec!["a", "b", "c"]);
    }

    #[test]
    fn combinators_are_case_sensitive() {
        let (match_type, clauses) = split_clauses("black and white");
        assert_eq!(match_type, MatchType::All);
        assert_eq!(clauses, vec!["black and white"]);
    }

    #[test]
    fn empty_input_has_no_clauses() {
        assert_eq!(split_clauses("").1, Vec::<String>::new());
        assert_eq!(split_clauses("   ").1, Vec::<String>::new());
    }

    #[test]
    fn empty_clauses_are_dropped() {
        let (_, clauses) = split_clauses("a AND  AND b");
        assert_eq!(clauses, vec!["a", "b"]);
    }

    #[test]
    fn outer_quote_repair() {
        let (_, clauses) = split_clauses("\"author: Clark, Susan\"");
        assert_eq!(clauses, vec!["author: Clark, Susan"]);
    }

    #[test]
    fn quoted_phrase_is_not_repaired() {
        let (_, clauses) = split_clauses("\"dark matter\"");
        assert_eq!(clauses, vec!["\"dark matter\""]);
    }

    #[test]
    fn lone_quote_is_one_clause() {
        let (_, clauses) = split_clauses("\"");
        assert_eq!(clauses, vec!["\""]);
    }

    #[test]
    fn parse_prefixed_term() {
        let term = parse_term("author:Einstein", SearchSource::Ads);
        assert_eq!(term.field, SearchField::Author);
        assert_eq!(term.value, "Einstein");
    }

    #[test]
    fn parse_trims_leading_whitespace_after_colon() {
        let term = parse_term("author: Einstein", SearchSource::Ads);
        assert_eq!(term.field, SearchField::Author);
        assert_eq!(term.value, "Einstein");
    }

    #[test]
    fn parse_prefix_is_case_insensitive() {
        let term = parse_term("AUTHOR:Einstein", SearchSource::Ads);
        assert_eq!(term.field, SearchField::Author);
    }

    #[test]
    fn unknown_prefix_keeps_whole_clause() {
        let term = parse_term("keyword: gravity", SearchSource::Ads);
        assert_eq!(term.field, SearchField::All);
        assert_eq!(term.value, "keyword: gravity");
    }

    #[test]
    fn no_colon_is_all_fields() {
        let term = parse_term("dark matter", SearchSource::Ads);
        assert_eq!(term.field, SearchField::All);
        assert_eq!(term.value, "dark matter");
    }

    #[test]
    fn quoted_value_is_unwrapped() {
        let term = parse_term("author:\"Clark, Susan\"", SearchSource::Ads);
        assert_eq!(term.field, SearchField::Author);
        assert_eq!(term.value, "Clark, Susan");
    }

    #[test]
    fn colon_inside_quotes_is_not_a_prefix() {
        let term = parse_term("\"note: draft\"", SearchSource::Ads);
        assert_eq!(term.field, SearchField::All);
        assert_eq!(term.value, "note: draft");
    }

    #[test]
    fn quoted_colon_after_prefix() {
        let term = parse_term("title:\"Part: One\"", SearchSource::Ads);
        assert_eq!(term.field, SearchField::Title);
        assert_eq!(term.value, "Part: One");
    }

    #[test]
    fn unbalanced_quote_is_kept_verbatim() {
        let term = parse_term("author:\"Clark", SearchSource::Ads);
        assert_eq!(term.field, SearchField::Author);
        assert_eq!(term.value, "\"Clark");
    }

    #[test]
    fn source_vocabulary_applies() {
        // "au" is arXiv's author prefix, unknown to ADS
        let term = parse_term("au:Smith", SearchSource::Arxiv);
        assert_eq!(term.field, SearchField::Author);
        let term = parse_term("au:Smith", SearchSource::Ads);
        assert_eq!(term.field, SearchField::All);
        assert_eq!(term.value, "au:Smith");
    }
}
