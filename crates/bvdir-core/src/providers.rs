use serde::{Deserialize, Serialize};

/// One physical presence of a provider on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
    /// Human-readable place name, e.g. `"Germany"`.
    pub label: String,
    /// Country/region code used for aggregate counting, e.g. `"DE"`.
    pub code: String,
}

/// A hosting provider as shipped in the static dataset.
///
/// Tag fields keep their stored order for display; filtering only cares
/// about membership. `coordinates` and `locations` are sourced
/// independently and need not line up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderRecord {
    pub name: String,
    pub url: String,
    pub categories: Vec<String>,
    pub regions: Vec<String>,
    pub locations: Vec<String>,
    pub coordinates: Vec<Coordinate>,
    pub company_country: String,
    pub payments: Vec<String>,
    pub tor_friendly: bool,
    pub features: Vec<String>,
    pub description: String,
    /// `true` when `url` is an affiliate link.
    pub aff: bool,
}

impl ProviderRecord {
    /// Locations joined the way the search box and detail view show them.
    #[must_use]
    pub fn locations_display(&self) -> String {
        self.locations.join(", ")
    }

    #[must_use]
    pub fn has_category(&self, tag: &str) -> bool {
        self.categories.iter().any(|c| c == tag)
    }

    #[must_use]
    pub fn has_region(&self, tag: &str) -> bool {
        self.regions.iter().any(|r| r == tag)
    }

    #[must_use]
    pub fn has_payment(&self, tag: &str) -> bool {
        self.payments.iter().any(|p| p == tag)
    }
}

/// Minimal record builder shared by the unit tests of every module.
#[cfg(test)]
pub(crate) fn test_provider(name: &str) -> ProviderRecord {
    ProviderRecord {
        name: name.to_string(),
        url: format!("https://{}.example", name.to_lowercase()),
        categories: vec![],
        regions: vec![],
        locations: vec![],
        coordinates: vec![],
        company_country: String::new(),
        payments: vec![],
        tor_friendly: false,
        features: vec![],
        description: String::new(),
        aff: false,
    }
}

#[cfg(test)]
pub(crate) fn test_coordinate(lat: f64, lng: f64, code: &str) -> Coordinate {
    Coordinate {
        lat,
        lng,
        label: code.to_string(),
        code: code.to_string(),
    }
}
