//! Record validation for the write side of the catalog.
//!
//! Search never calls into this module. It guards
//! [`MemoryStore::create`](crate::store::MemoryStore::create) and
//! [`MemoryStore::update`](crate::store::MemoryStore::update) so that every
//! record the engine sees already satisfies the data-model invariants.

use crate::types::{NewSoftware, SocialLinks, SoftwareUpdate};

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { field: field.into(), reason: reason.into() }
    }
}

/// Validate a full record before insertion.
pub fn validate_new(input: &NewSoftware) -> Result<(), ValidationError> {
    non_empty("name", &input.name, "Name is required")?;
    non_empty("description", &input.description, "Description is required")?;
    if input.supported_os.is_empty() {
        return Err(ValidationError::new(
            "supported_os",
            "At least one OS must be supported",
        ));
    }
    features(&input.key_features)?;
    optional_url("icon_url", input.icon_url.as_deref())?;
    optional_url("official_website", input.official_website.as_deref())?;
    optional_url("github_url", input.github_url.as_deref())?;
    social_links(&input.social_links)
}

/// Validate only the fields a patch carries.
pub fn validate_update(patch: &SoftwareUpdate) -> Result<(), ValidationError> {
    if let Some(name) = &patch.name {
        non_empty("name", name, "Name is required")?;
    }
    if let Some(description) = &patch.description {
        non_empty("description", description, "Description is required")?;
    }
    if patch.supported_os.as_ref().is_some_and(|os| os.is_empty()) {
        return Err(ValidationError::new(
            "supported_os",
            "At least one OS must be supported",
        ));
    }
    if let Some(list) = &patch.key_features {
        features(list)?;
    }
    if let Some(url) = &patch.icon_url {
        optional_url("icon_url", url.as_deref())?;
    }
    if let Some(url) = &patch.official_website {
        optional_url("official_website", url.as_deref())?;
    }
    if let Some(url) = &patch.github_url {
        optional_url("github_url", url.as_deref())?;
    }
    if let Some(links) = &patch.social_links {
        social_links(links)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Field rules
// ---------------------------------------------------------------------------

fn non_empty(field: &str, value: &str, reason: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::new(field, reason))
    } else {
        Ok(())
    }
}

fn features(list: &[String]) -> Result<(), ValidationError> {
    if list.is_empty() {
        return Err(ValidationError::new(
            "key_features",
            "At least one key feature is required",
        ));
    }
    match list.iter().position(String::is_empty) {
        Some(i) => Err(ValidationError::new(
            format!("key_features[{i}]"),
            "feature must not be empty",
        )),
        None => Ok(()),
    }
}

fn optional_url(field: &str, value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        None => Ok(()),
        Some(raw) => url::Url::parse(raw)
            .map(|_| ())
            .map_err(|e| ValidationError::new(field, format!("invalid url {raw:?}: {e}"))),
    }
}

fn social_links(links: &SocialLinks) -> Result<(), ValidationError> {
    for (network, url) in links.iter() {
        optional_url(&format!("social_links.{network}"), Some(url))?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
