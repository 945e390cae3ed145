//! Normalizer — turns a raw [`SearchRequest`] into canonical [`SearchCriteria`].
//!
//! Raw requests arrive as loosely-typed strings from a transport (HTTP body,
//! CLI flags). Normalization runs before any matching work:
//!
//! - `query` is trimmed; an empty or whitespace-only query becomes "no text
//!   filter".
//! - A filter list of length 0 is the same as no list. It never means "match
//!   nothing".
//! - OS and pricing values must name a variant exactly (`"macOS"`, not
//!   `"macos"`). Anything else fails with [`SearchError::InvalidCriteria`].
//! - Feature strings are open-ended and never rejected.

use crate::types::{OperatingSystem, PricingModel};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Wire shape
// ---------------------------------------------------------------------------

/// Search input as supplied by a caller, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free text matched against name and description.
    #[serde(default)]
    pub query: Option<String>,
    /// Any-of filter on supported platforms.
    #[serde(default)]
    pub supported_os: Option<Vec<String>>,
    /// Any-of filter on pricing model.
    #[serde(default)]
    pub pricing_model: Option<Vec<String>>,
    /// Any-of filter on key features.
    #[serde(default)]
    pub features: Option<Vec<String>>,
    /// Result ordering: `name` (default), `newest`, or `catalog`.
    #[serde(default)]
    pub sort: Option<String>,
}

// ---------------------------------------------------------------------------
// Canonical shape
// ---------------------------------------------------------------------------

/// Validated, canonical criteria. Every `Some` here is an active dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub query: Option<TextQuery>,
    pub tags: Option<BTreeSet<OperatingSystem>>,
    pub categories: Option<BTreeSet<PricingModel>>,
    pub features: Option<BTreeSet<String>>,
    pub sort: SortOrder,
}

impl SearchCriteria {
    /// Number of active filter dimensions (0 means "return everything").
    pub fn active_dimensions(&self) -> usize {
        usize::from(self.query.is_some())
            + usize::from(self.tags.is_some())
            + usize::from(self.categories.is_some())
            + usize::from(self.features.is_some())
    }
}

/// A trimmed, non-empty text query with its case-folded form precomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextQuery {
    text: String,
    folded: String,
}

impl TextQuery {
    /// `None` when `raw` is empty after trimming.
    pub fn new(raw: &str) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self { text: text.to_string(), folded: fold(text) })
    }

    /// The query as the caller typed it, trimmed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lower-cased form used for matching.
    pub fn folded(&self) -> &str {
        &self.folded
    }
}

/// Locale-independent case folding shared by query and haystack.
///
/// Lowercases one `char` at a time. `str::to_lowercase` picks a final-sigma
/// form from the surrounding word, so a query and a longer name holding it
/// could fold differently.
pub(crate) fn fold(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// How matching records are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// `name` ascending (ordinal, case-sensitive), ties by `id`.
    #[default]
    Name,
    /// `created_at` descending, ties by `id`.
    Newest,
    /// Snapshot order as returned by the store.
    Catalog,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Name => "name",
            SortOrder::Newest => "newest",
            SortOrder::Catalog => "catalog",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = crate::types::UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortOrder::Name),
            "newest" => Ok(SortOrder::Newest),
            "catalog" => Ok(SortOrder::Catalog),
            other => Err(crate::types::UnknownVariant(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Which filter axis a criterion belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Text,
    Os,
    Pricing,
    Feature,
    Sort,
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::Text => write!(f, "query"),
            Dimension::Os => write!(f, "supported_os"),
            Dimension::Pricing => write!(f, "pricing_model"),
            Dimension::Feature => write!(f, "features"),
            Dimension::Sort => write!(f, "sort"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// A closed-domain value was not one of its enumerated variants.
    #[error("invalid criteria: {dimension} does not accept {value:?}")]
    InvalidCriteria { dimension: Dimension, value: String },
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Validate `request` and produce canonical criteria.
pub fn normalize(request: &SearchRequest) -> Result<SearchCriteria, SearchError> {
    let criteria = SearchCriteria {
        query: request.query.as_deref().and_then(TextQuery::new),
        tags: closed_set(request.supported_os.as_deref(), Dimension::Os)?,
        categories: closed_set(request.pricing_model.as_deref(), Dimension::Pricing)?,
        features: open_set(request.features.as_deref()),
        sort: match request.sort.as_deref() {
            None => SortOrder::default(),
            Some(raw) => parse(raw, Dimension::Sort)?,
        },
    };

    tracing::debug!(
        query = criteria.query.as_ref().map(TextQuery::text),
        tags = ?criteria.tags,
        categories = ?criteria.categories,
        features = ?criteria.features,
        sort = %criteria.sort,
        "criteria normalized"
    );

    Ok(criteria)
}

fn closed_set<T>(values: Option<&[String]>, dimension: Dimension) -> Result<Option<BTreeSet<T>>, SearchError>
where
    T: FromStr + Ord,
{
    match values {
        None | Some([]) => Ok(None),
        Some(values) => values
            .iter()
            .map(|v| parse(v, dimension))
            .collect::<Result<BTreeSet<T>, _>>()
            .map(Some),
    }
}

fn open_set(values: Option<&[String]>) -> Option<BTreeSet<String>> {
    match values {
        None | Some([]) => None,
        Some(values) => Some(values.iter().cloned().collect()),
    }
}

fn parse<T: FromStr>(raw: &str, dimension: Dimension) -> Result<T, SearchError> {
    raw.parse().map_err(|_| SearchError::InvalidCriteria {
        dimension,
        value: raw.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
