//! refdesk-search: Bidirectional search query model, parsing, and generation.
//!
//! Translates between the structured query form shown in the search UI
//! (source + match type + ordered field:value terms) and the textual query
//! syntax sent to external bibliographic search APIs.
//!
//! # Grammar
//!
//! ```text
//! author:"Clark, Susan" AND title:relativity AND dark
//! ```
//!
//! - Clauses are joined by one combinator, `AND` (match all) or `OR` (match
//!   any); the first combinator in the input decides for the whole query.
//! - A clause is `prefix:value` for a prefix registered by the source, or a
//!   bare value searched across all fields.
//! - Values containing a space or comma are wrapped in double quotes.
//!   Quotes toggle verbatim spans and have no escape sequence.
//!
//! Parsing and generation are total: malformed input degrades to bare
//! all-fields terms instead of failing, and one parse/generate pass reaches
//! a canonical fixed point.

#[cfg(feature = "native")]
uniffi::setup_scaffolding!();

pub mod builder;
pub mod error;
pub mod field;
mod generate;
mod parse;
pub mod source;

pub use builder::{MatchType, QueryBuilderState, QueryTerm};
#[cfg(feature = "native")]
pub use builder::{generate_query, parse_query};
pub use error::{ParseMatchTypeError, ParseSourceError};
pub use field::{field_for, fields_for, prefix_for, SearchField};
pub use source::SearchSource;
