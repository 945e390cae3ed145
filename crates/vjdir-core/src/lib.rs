//! vjdir-core — catalog model and search engine for vjdir.
//!
//! This crate exposes the catalog layers as public modules, plus the shared
//! record types used across all of them.
//!
//! # Architecture
//!
//! ```text
//! Seed ──► Store ──► Search ──► Transport (HTTP / CLI)
//!            │          ▲
//!            │      Normalizer
//!            └──► Facets
//! ```
//!
//! The store hands out immutable snapshots; the search layer is a pure
//! function over a snapshot and a normalized set of criteria.

pub mod config;
pub mod facets;
pub mod normalizer;
pub mod search;
pub mod seed;
pub mod store;
pub mod types;
pub mod validate;

pub use normalizer::{SearchCriteria, SearchError, SearchRequest, SortOrder};
pub use search::SearchEngine;
pub use store::{CatalogStore, MemoryStore, Snapshot};
pub use types::{
    NewSoftware, OperatingSystem, PricingModel, SocialLinks, Software, SoftwareId, SoftwareUpdate,
};
pub use validate::ValidationError;
