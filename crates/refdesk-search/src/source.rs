//! Search source identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseSourceError;

/// An external search provider with its own field vocabulary and prefix
/// syntax. Saved searches record the source id alongside the query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Enum))]
pub enum SearchSource {
    /// NASA ADS bibliographic database
    Ads,
    /// arXiv preprint server
    Arxiv,
}

impl SearchSource {
    /// Stable identifier used in saved-search records.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Ads => "ads",
            Self::Arxiv => "arxiv",
        }
    }

    /// Display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Ads => "NASA ADS",
            Self::Arxiv => "arXiv",
        }
    }

    /// All available sources, in UI picker order.
    pub fn all() -> &'static [SearchSource] {
        &[Self::Ads, Self::Arxiv]
    }
}

impl fmt::Display for SearchSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SearchSource {
    type Err = ParseSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ads" => Ok(Self::Ads),
            "arxiv" => Ok(Self::Arxiv),
            other => Err(ParseSourceError(other.to_string())),
        }
    }
}
