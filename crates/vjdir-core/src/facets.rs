//! Read-only projections over a catalog snapshot for filter panels.
//!
//! Nothing here takes part in matching. These views only describe which
//! values exist so a client can offer them as filter choices.

use crate::types::{OperatingSystem, PricingModel, Software};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Every feature present in `records`, sorted and de-duplicated.
pub fn distinct_features(records: &[Software]) -> BTreeSet<String> {
    records
        .iter()
        .flat_map(|r| r.key_features.iter().cloned())
        .collect()
}

/// How many records carry each filterable value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    pub operating_systems: BTreeMap<OperatingSystem, usize>,
    pub pricing_models: BTreeMap<PricingModel, usize>,
    pub features: BTreeMap<String, usize>,
}

impl Facets {
    /// Count values over `records`. Every OS and pricing variant is present,
    /// with 0 when no record has it; features only appear when used.
    pub fn collect(records: &[Software]) -> Self {
        let mut facets = Facets {
            operating_systems: OperatingSystem::ALL.into_iter().map(|os| (os, 0)).collect(),
            pricing_models: PricingModel::ALL.into_iter().map(|p| (p, 0)).collect(),
            features: BTreeMap::new(),
        };

        for record in records {
            for os in &record.supported_os {
                *facets.operating_systems.entry(*os).or_default() += 1;
            }
            *facets.pricing_models.entry(record.pricing_model).or_default() += 1;
            // A feature listed twice on one record still counts that record once.
            let unique: BTreeSet<&String> = record.key_features.iter().collect();
            for feature in unique {
                *facets.features.entry(feature.clone()).or_default() += 1;
            }
        }
        facets
    }
}
