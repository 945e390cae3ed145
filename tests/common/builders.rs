//! Test builders — ergonomic constructors for `Software` records and search
//! requests.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use chrono::{DateTime, Duration, TimeZone, Utc};
use vjdir_core::{NewSoftware, OperatingSystem, PricingModel, SearchRequest, SocialLinks, Software};

// ---------------------------------------------------------------------------
// SoftwareBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Software`] test fixtures.
///
/// # Example
///
/// ```rust
/// let hydra = SoftwareBuilder::new(13, "Hydra")
///     .os(&[OperatingSystem::Linux])
///     .pricing(PricingModel::Free)
///     .features(&["JavaScript", "OSC"])
///     .build();
/// ```
pub struct SoftwareBuilder {
    id: i64,
    name: String,
    description: String,
    supported_os: Vec<OperatingSystem>,
    key_features: Vec<String>,
    pricing_model: PricingModel,
    created_at: DateTime<Utc>,
}

impl SoftwareBuilder {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: "Realtime visuals".to_string(),
            supported_os: Vec::new(),
            key_features: Vec::new(),
            pricing_model: PricingModel::Free,
            created_at: epoch() + Duration::days(id),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn os(mut self, os: &[OperatingSystem]) -> Self {
        self.supported_os = os.to_vec();
        self
    }

    pub fn pricing(mut self, pricing: PricingModel) -> Self {
        self.pricing_model = pricing;
        self
    }

    pub fn features(mut self, features: &[&str]) -> Self {
        self.key_features = features.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn created_at(mut self, ts: DateTime<Utc>) -> Self {
        self.created_at = ts;
        self
    }

    pub fn build(self) -> Software {
        Software {
            id: self.id,
            name: self.name,
            icon_url: None,
            description: self.description,
            supported_os: self.supported_os.into_iter().collect(),
            key_features: self.key_features,
            pricing_model: self.pricing_model,
            price_details: None,
            official_website: None,
            github_url: None,
            social_links: SocialLinks::default(),
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }

    /// The same record as store input (id and timestamps dropped).
    pub fn build_new(self) -> NewSoftware {
        let s = self.build();
        NewSoftware {
            name: s.name,
            icon_url: s.icon_url,
            description: s.description,
            supported_os: s.supported_os,
            key_features: s.key_features,
            pricing_model: s.pricing_model,
            price_details: s.price_details,
            official_website: s.official_website,
            github_url: s.github_url,
            social_links: s.social_links,
        }
    }
}

/// Fixed base timestamp so fixtures are deterministic.
pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()
}

// ---------------------------------------------------------------------------
// RequestBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`SearchRequest`].
#[derive(Default)]
pub struct RequestBuilder(SearchRequest);

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, q: &str) -> Self {
        self.0.query = Some(q.to_string());
        self
    }

    pub fn os(mut self, values: &[&str]) -> Self {
        self.0.supported_os = Some(strings(values));
        self
    }

    pub fn pricing(mut self, values: &[&str]) -> Self {
        self.0.pricing_model = Some(strings(values));
        self
    }

    pub fn features(mut self, values: &[&str]) -> Self {
        self.0.features = Some(strings(values));
        self
    }

    pub fn sort(mut self, key: &str) -> Self {
        self.0.sort = Some(key.to_string());
        self
    }

    pub fn build(self) -> SearchRequest {
        self.0
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
