//! Search field tags and the per-source prefix registry.
//!
//! Each source registers its own closed set of field tags with their textual
//! prefixes. A tag that is not registered for a source behaves like the
//! default all-fields tag there: empty prefix, never matched on lookup.

use serde::{Deserialize, Serialize};

use crate::SearchSource;

/// A queryable field tag.
///
/// `All` is the distinguished default: no field restriction, empty prefix.
/// Which of the remaining tags are valid for a source is decided by that
/// source's registry table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Enum))]
pub enum SearchField {
    /// No field restriction (matches all fields)
    #[default]
    All,
    Author,
    Title,
    Abstract,
    Object,
    Year,
    Bibcode,
    Doi,
    Category,
    Journal,
    ReportNumber,
    Identifier,
}

impl SearchField {
    /// Display name for the UI field picker.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::All => "Any Field",
            Self::Author => "Author",
            Self::Title => "Title",
            Self::Abstract => "Abstract",
            Self::Object => "Object",
            Self::Year => "Year",
            Self::Bibcode => "Bibcode",
            Self::Doi => "DOI",
            Self::Category => "Category",
            Self::Journal => "Journal",
            Self::ReportNumber => "Report Number",
            Self::Identifier => "Identifier",
        }
    }
}

/// ADS query prefixes (Solr field syntax).
const ADS_FIELDS: &[(SearchField, &str)] = &[
    (SearchField::Author, "author"),
    (SearchField::Title, "title"),
    (SearchField::Abstract, "abs"),
    (SearchField::Object, "object"),
    (SearchField::Year, "year"),
    (SearchField::Bibcode, "bibcode"),
    (SearchField::Doi, "doi"),
];

/// arXiv API query prefixes.
const ARXIV_FIELDS: &[(SearchField, &str)] = &[
    (SearchField::Author, "au"),
    (SearchField::Title, "ti"),
    (SearchField::Abstract, "abs"),
    (SearchField::Category, "cat"),
    (SearchField::Journal, "jr"),
    (SearchField::ReportNumber, "rn"),
    (SearchField::Identifier, "id"),
    (SearchField::Doi, "doi"),
];

fn table(source: SearchSource) -> &'static [(SearchField, &'static str)] {
    match source {
        SearchSource::Ads => ADS_FIELDS,
        SearchSource::Arxiv => ARXIV_FIELDS,
    }
}

/// Textual prefix for a field under a source.
///
/// Empty for `SearchField::All` and for tags not registered for the source.
pub fn prefix_for(source: SearchSource, field: SearchField) -> &'static str {
    table(source)
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, p)| *p)
        .unwrap_or("")
}

/// Resolve a prefix token to a field tag.
///
/// Case-insensitive; surrounding whitespace is ignored. Returns `None` for
/// prefixes the source does not register.
pub fn field_for(source: SearchSource, token: &str) -> Option<SearchField> {
    let token = token.trim();
    table(source)
        .iter()
        .find(|(_, p)| p.eq_ignore_ascii_case(token))
        .map(|(f, _)| *f)
}

/// Field tags available for a source, default tag first (UI picker order).
pub fn fields_for(source: SearchSource) -> Vec<SearchField> {
    let mut fields = vec![SearchField::All];
    fields.extend(table(source).iter().map(|(f, _)| *f));
    fields
}
