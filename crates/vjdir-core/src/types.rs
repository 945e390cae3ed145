//! Core types for vjdir-core.
//!
//! This module defines the catalog record ([`Software`]), its two closed
//! enumerations ([`OperatingSystem`] and [`PricingModel`]), and the input
//! shapes used to create and patch records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

/// Stable identifier assigned by the store.
pub type SoftwareId = i64;

/// A catalog entry. Immutable once handed to the search engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Software {
    pub id: SoftwareId,
    pub name: String,
    pub icon_url: Option<String>,
    pub description: String,
    /// Platforms the software runs on. Matched by set membership.
    #[serde(default)]
    pub supported_os: BTreeSet<OperatingSystem>,
    /// Free-form feature labels, in the order they were entered. Case-sensitive.
    #[serde(default)]
    pub key_features: Vec<String>,
    pub pricing_model: PricingModel,
    /// Human-readable price note, e.g. "$99 one-time".
    pub price_details: Option<String>,
    pub official_website: Option<String>,
    pub github_url: Option<String>,
    #[serde(default)]
    pub social_links: SocialLinks,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Optional links to the project's social media presence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
}

impl SocialLinks {
    /// `(network, url)` pairs for every link that is set.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("youtube", self.youtube.as_deref()),
            ("twitter", self.twitter.as_deref()),
            ("instagram", self.instagram.as_deref()),
            ("facebook", self.facebook.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, url)| url.map(|u| (name, u)))
    }
}

// ---------------------------------------------------------------------------
// Closed enumerations
// ---------------------------------------------------------------------------

/// Supported platform. The filter panel's "tag" dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OperatingSystem {
    Windows,
    #[serde(rename = "macOS")]
    MacOs,
    Linux,
}

impl OperatingSystem {
    pub const ALL: [OperatingSystem; 3] =
        [OperatingSystem::Windows, OperatingSystem::MacOs, OperatingSystem::Linux];

    /// Canonical wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            OperatingSystem::Windows => "Windows",
            OperatingSystem::MacOs => "macOS",
            OperatingSystem::Linux => "Linux",
        }
    }
}

impl std::fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperatingSystem {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|os| os.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// Pricing classification. The "category" dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PricingModel {
    Free,
    Paid,
    Subscription,
    Freemium,
}

impl PricingModel {
    pub const ALL: [PricingModel; 4] = [
        PricingModel::Free,
        PricingModel::Paid,
        PricingModel::Subscription,
        PricingModel::Freemium,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PricingModel::Free => "Free",
            PricingModel::Paid => "Paid",
            PricingModel::Subscription => "Subscription",
            PricingModel::Freemium => "Freemium",
        }
    }
}

impl std::fmt::Display for PricingModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PricingModel {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// A string that names no variant of a closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown value {0:?}")]
pub struct UnknownVariant(pub String);

// ---------------------------------------------------------------------------
// Write-side inputs
// ---------------------------------------------------------------------------

/// Everything needed to create a [`Software`] record; the store assigns the
/// id and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSoftware {
    pub name: String,
    #[serde(default)]
    pub icon_url: Option<String>,
    pub description: String,
    pub supported_os: BTreeSet<OperatingSystem>,
    pub key_features: Vec<String>,
    pub pricing_model: PricingModel,
    #[serde(default)]
    pub price_details: Option<String>,
    #[serde(default)]
    pub official_website: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub social_links: SocialLinks,
}

/// Partial update. `None` leaves a field untouched; for nullable fields
/// `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SoftwareUpdate {
    /// Taken from the URL path when the patch arrives over HTTP.
    #[serde(default)]
    pub id: SoftwareId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub icon_url: Option<Option<String>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub supported_os: Option<BTreeSet<OperatingSystem>>,
    #[serde(default)]
    pub key_features: Option<Vec<String>>,
    #[serde(default)]
    pub pricing_model: Option<PricingModel>,
    #[serde(default, deserialize_with = "nullable")]
    pub price_details: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub official_website: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub github_url: Option<Option<String>>,
    #[serde(default)]
    pub social_links: Option<SocialLinks>,
}

/// Distinguishes an explicit `null` (clear) from a missing key (keep).
fn nullable<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl Software {
    /// Materialise a record from validated input.
    pub fn from_new(id: SoftwareId, input: NewSoftware, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name,
            icon_url: input.icon_url,
            description: input.description,
            supported_os: input.supported_os,
            key_features: input.key_features,
            pricing_model: input.pricing_model,
            price_details: input.price_details,
            official_website: input.official_website,
            github_url: input.github_url,
            social_links: input.social_links,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply the fields present in `patch` and stamp `updated_at`.
    pub fn apply(&mut self, patch: SoftwareUpdate, now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(icon_url) = patch.icon_url {
            self.icon_url = icon_url;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(os) = patch.supported_os {
            self.supported_os = os;
        }
        if let Some(features) = patch.key_features {
            self.key_features = features;
        }
        if let Some(pricing) = patch.pricing_model {
            self.pricing_model = pricing;
        }
        if let Some(details) = patch.price_details {
            self.price_details = details;
        }
        if let Some(site) = patch.official_website {
            self.official_website = site;
        }
        if let Some(github) = patch.github_url {
            self.github_url = github;
        }
        if let Some(links) = patch.social_links {
            self.social_links = links;
        }
        self.updated_at = now;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn os_wire_names_round_trip() {
        for os in OperatingSystem::ALL {
            assert_eq!(os.as_str().parse::<OperatingSystem>(), Ok(os));
            let json = serde_json::to_string(&os).unwrap();
            assert_eq!(json, format!("\"{}\"", os.as_str()));
        }
    }

    #[test]
    fn enum_parsing_is_case_sensitive() {
        assert!("macos".parse::<OperatingSystem>().is_err());
        assert!("free".parse::<PricingModel>().is_err());
        assert_eq!("Freemium".parse::<PricingModel>(), Ok(PricingModel::Freemium));
    }

    #[test]
    fn update_distinguishes_null_from_missing() {
        let patch: SoftwareUpdate =
            serde_json::from_str(r#"{"id":3,"github_url":null}"#).unwrap();
        assert_eq!(patch.github_url, Some(None));
        assert_eq!(patch.icon_url, None);
    }

    #[test]
    fn social_links_iter_skips_unset() {
        let links = SocialLinks {
            twitter: Some("https://twitter.com/x".into()),
            ..Default::default()
        };
        let set: Vec<_> = links.iter().collect();
        assert_eq!(set, vec![("twitter", "https://twitter.com/x")]);
    }
}
