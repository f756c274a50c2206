//! Query model: match type, terms, and the builder state facade.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseMatchTypeError;
use crate::{generate, parse};
use crate::{SearchField, SearchSource};

/// Boolean combinator joining the terms of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Enum))]
pub enum MatchType {
    /// All terms must match (`AND`)
    #[default]
    All,
    /// Any term may match (`OR`)
    Any,
}

impl MatchType {
    /// The textual combinator emitted between clauses.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::All => "AND",
            MatchType::Any => "OR",
        }
    }

    /// Display name for the UI match-type toggle.
    pub fn display_name(&self) -> &'static str {
        match self {
            MatchType::All => "All",
            MatchType::Any => "Any",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchType {
    type Err = ParseMatchTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "and" => Ok(MatchType::All),
            "any" | "or" => Ok(MatchType::Any),
            other => Err(ParseMatchTypeError(other.to_string())),
        }
    }
}

/// One field-qualified search term.
///
/// The value is stored unquoted; quoting is applied on generation when the
/// value contains a space or comma.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct QueryTerm {
    pub field: SearchField,
    pub value: String,
}

impl QueryTerm {
    pub fn new(field: SearchField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

/// Parsed form of one search query against a single source.
///
/// Terms keep the order in which clauses appeared in the original text (or
/// UI insertion order). The match type is meaningful once there is more
/// than one term; it is stored either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct QueryBuilderState {
    pub source: SearchSource,
    pub match_type: MatchType,
    pub terms: Vec<QueryTerm>,
}

impl QueryBuilderState {
    /// Empty state for building a query in the UI.
    pub fn new(source: SearchSource) -> Self {
        Self::with_terms(source, MatchType::default(), Vec::new())
    }

    pub fn with_terms(source: SearchSource, match_type: MatchType, terms: Vec<QueryTerm>) -> Self {
        Self {
            source,
            match_type,
            terms,
        }
    }

    /// Parse a raw query string into a builder state.
    ///
    /// Total: malformed input degrades to all-fields terms, never an error.
    /// Empty or whitespace-only input yields a state with no terms.
    pub fn parse(raw: &str, source: SearchSource) -> Self {
        let (match_type, clauses) = parse::split_clauses(raw);
        let terms = clauses
            .iter()
            .map(|clause| parse::parse_term(clause, source))
            .collect();
        Self::with_terms(source, match_type, terms)
    }

    /// Regenerate the canonical query string for this state.
    pub fn generate_query(&self) -> String {
        generate::generate_query(self)
    }

    /// Whether the state has no search terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Parse a raw query string for a source.
#[cfg(feature = "native")]
#[uniffi::export]
pub fn parse_query(raw: String, source: SearchSource) -> QueryBuilderState {
    QueryBuilderState::parse(&raw, source)
}

/// Generate the canonical query string for a state.
#[cfg(feature = "native")]
#[uniffi::export]
pub fn generate_query(state: QueryBuilderState) -> String {
    state.generate_query()
}
