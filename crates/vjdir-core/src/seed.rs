//! Catalog seeding: the built-in demo catalog and JSON seed files.
//!
//! A seed file is a JSON array of [`NewSoftware`] objects. Ids and timestamps
//! are assigned by the store when the seed is loaded.

use crate::store::MemoryStore;
use crate::types::NewSoftware;
use anyhow::Context;
use std::path::Path;

const DEMO_CATALOG: &str = include_str!("../data/demo_catalog.json");

/// The demo catalog shipped with the binary.
pub fn demo_catalog() -> anyhow::Result<Vec<NewSoftware>> {
    serde_json::from_str(DEMO_CATALOG).context("built-in demo catalog is malformed")
}

/// Read a seed file from disk.
pub fn load_seed_file(path: &Path) -> anyhow::Result<Vec<NewSoftware>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading seed file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing seed file {}", path.display()))
}

/// Build a store from `path` if given, otherwise from the demo catalog.
pub fn open_store(path: Option<&Path>) -> anyhow::Result<MemoryStore> {
    let (seed, origin) = match path {
        Some(p) => (load_seed_file(p)?, p.display().to_string()),
        None => (demo_catalog()?, "built-in demo catalog".to_string()),
    };
    let store = MemoryStore::seeded(seed).with_context(|| format!("invalid record in {origin}"))?;
    tracing::info!(records = store.len(), origin = %origin, "catalog loaded");
    Ok(store)
}
