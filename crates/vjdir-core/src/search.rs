//! Search layer — multi-criteria filter over a catalog snapshot.
//!
//! A record matches when every active dimension matches (AND across
//! dimensions). Inside a dimension any one of the requested values is enough
//! (OR within). An unset dimension is vacuously true, so empty criteria
//! return the whole catalog.
//!
//! The engine is a pure function of `(records, criteria)`. It holds no state
//! and performs no I/O, so it can be called concurrently against the same
//! snapshot without synchronization.

use crate::normalizer::{self, fold, SearchCriteria, SearchError, SearchRequest, SortOrder, TextQuery};
use crate::store::CatalogStore;
use crate::types::{OperatingSystem, PricingModel, Software};
use std::cmp::Ordering;
use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Dimension matchers
// ---------------------------------------------------------------------------

/// Case-insensitive substring of `name` or `description`.
pub fn matches_text(record: &Software, query: Option<&TextQuery>) -> bool {
    let Some(query) = query else { return true };
    let needle = query.folded();
    fold(&record.name).contains(needle) || fold(&record.description).contains(needle)
}

/// Record's OS set shares at least one value with the filter.
pub fn matches_tags(record: &Software, filter: Option<&BTreeSet<OperatingSystem>>) -> bool {
    match filter {
        None => true,
        Some(wanted) => !record.supported_os.is_disjoint(wanted),
    }
}

/// Record's pricing model is one of the requested ones.
pub fn matches_category(record: &Software, filter: Option<&BTreeSet<PricingModel>>) -> bool {
    filter.map_or(true, |wanted| wanted.contains(&record.pricing_model))
}

/// Record carries at least one requested feature (exact, case-sensitive).
pub fn matches_features(record: &Software, filter: Option<&BTreeSet<String>>) -> bool {
    match filter {
        None => true,
        Some(wanted) => record.key_features.iter().any(|f| wanted.contains(f)),
    }
}

/// All active dimensions must hold. Cheap set checks run before the text scan.
pub fn matches(record: &Software, criteria: &SearchCriteria) -> bool {
    matches_category(record, criteria.categories.as_ref())
        && matches_tags(record, criteria.tags.as_ref())
        && matches_features(record, criteria.features.as_ref())
        && matches_text(record, criteria.query.as_ref())
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Filter `records` by `criteria` and order the survivors.
///
/// Returns borrowed records so callers decide whether to clone.
pub fn evaluate<'a>(records: &'a [Software], criteria: &SearchCriteria) -> Vec<&'a Software> {
    let mut hits: Vec<&Software> = records.iter().filter(|r| matches(r, criteria)).collect();
    sort(&mut hits, criteria.sort);

    tracing::debug!(
        scanned = records.len(),
        matched = hits.len(),
        active = criteria.active_dimensions(),
        "search evaluated"
    );
    hits
}

/// Order records in place. Every order is total so output is deterministic.
pub fn sort(records: &mut [&Software], order: SortOrder) {
    match order {
        SortOrder::Name => records.sort_by(|a, b| by_name(a, b)),
        SortOrder::Newest => records.sort_by(|a, b| {
            b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id))
        }),
        SortOrder::Catalog => {}
    }
}

fn by_name(a: &Software, b: &Software) -> Ordering {
    a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id))
}

/// Normalize `request` and evaluate it against `records`.
///
/// Fails only with [`SearchError::InvalidCriteria`], before any record is
/// inspected.
pub fn search(records: &[Software], request: &SearchRequest) -> Result<Vec<Software>, SearchError> {
    let criteria = normalizer::normalize(request)?;
    Ok(evaluate(records, &criteria).into_iter().cloned().collect())
}

// ---------------------------------------------------------------------------
// Engine over a store
// ---------------------------------------------------------------------------

/// Binds the pure search functions to a [`CatalogStore`].
///
/// Each call takes one snapshot from the store, so a search never observes a
/// half-applied write.
pub struct SearchEngine<S> {
    store: S,
}

impl<S: CatalogStore> SearchEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn search(&self, request: &SearchRequest) -> Result<Vec<Software>, SearchError> {
        let criteria = normalizer::normalize(request)?;
        let snapshot = self.store.all();
        Ok(evaluate(&snapshot, &criteria).into_iter().cloned().collect())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
