//! Domain-specific assertion macros for vjdir harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear which search invariant was violated.

use vjdir_core::Software;

/// Names of `results`, in order.
pub fn names(results: &[Software]) -> Vec<&str> {
    results.iter().map(|s| s.name.as_str()).collect()
}

/// Assert that a result set contains exactly these names, in this order.
///
/// ```rust
/// assert_names!(results, ["Hydra", "TouchDesigner"]);
/// ```
#[macro_export]
macro_rules! assert_names {
    ($results:expr, [$($name:expr),* $(,)?]) => {{
        let results: &[vjdir_core::Software] = &$results;
        let expected: Vec<&str> = vec![$($name),*];
        pretty_assertions::assert_eq!($crate::common::names(results), expected);
    }};
}

/// Assert that every entry in a result set satisfies a predicate.
///
/// ```rust
/// assert_results_all!(results, |s| s.pricing_model == PricingModel::Free);
/// ```
#[macro_export]
macro_rules! assert_results_all {
    ($results:expr, $pred:expr) => {{
        let results: &[vjdir_core::Software] = &$results;
        let pred = $pred;
        let failing: Vec<&str> = results
            .iter()
            .filter(|s| !pred(*s))
            .map(|s| s.name.as_str())
            .collect();
        if !failing.is_empty() {
            panic!(
                "assert_results_all! failed: {} of {} entries did not satisfy predicate: {:?}",
                failing.len(),
                results.len(),
                failing
            );
        }
    }};
}

/// Assert that a result set is a subset of the catalog it was drawn from
/// (search must never fabricate records).
pub fn assert_subset_of(results: &[Software], catalog: &[Software]) {
    for hit in results {
        assert!(
            catalog.iter().any(|s| s == hit),
            "result {:?} (id {}) is not in the catalog",
            hit.name,
            hit.id
        );
    }
}
