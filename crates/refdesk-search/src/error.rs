//! Error types for decoding persisted query metadata.
//!
//! Parsing and generating query text never fails; only the identifiers
//! stored alongside a saved search (source id, match type) can be invalid.

use thiserror::Error;

/// Unknown search source identifier in a saved-search record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search source: {0}")]
pub struct ParseSourceError(pub String);

/// Unknown match type identifier in a saved-search record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown match type: {0}")]
pub struct ParseMatchTypeError(pub String);
