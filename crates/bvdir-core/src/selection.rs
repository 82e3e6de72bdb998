//! Selection state and the provider detail view model.

use serde::Serialize;

use crate::providers::ProviderRecord;

/// Which provider the detail overlay shows, and whether it is open.
///
/// Dismissing hides the overlay but keeps the reference.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SelectionState<'a> {
    pub selected: Option<&'a ProviderRecord>,
    pub visible: bool,
}

impl<'a> SelectionState<'a> {
    #[must_use]
    pub fn select(self, record: &'a ProviderRecord) -> Self {
        tracing::debug!(provider = %record.name, "selected provider");
        Self {
            selected: Some(record),
            visible: true,
        }
    }

    #[must_use]
    pub fn dismiss(self) -> Self {
        Self {
            visible: false,
            ..self
        }
    }

    /// The detail view model, when the overlay is open.
    #[must_use]
    pub fn detail(&self) -> Option<ProviderDetail> {
        match self.selected {
            Some(record) if self.visible => Some(ProviderDetail::from_provider(record)),
            _ => None,
        }
    }
}

/// Every field of one provider, with display fallbacks applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderDetail {
    pub name: String,
    pub categories: Vec<String>,
    pub region: String,
    pub company: String,
    pub tor_friendly: &'static str,
    pub affiliate: &'static str,
    pub locations: String,
    pub payments: String,
    pub features: String,
    pub description: Option<String>,
    pub url: String,
}

fn join_or(items: &[String], fallback: &str) -> String {
    if items.is_empty() {
        fallback.to_string()
    } else {
        items.join(", ")
    }
}

impl ProviderDetail {
    #[must_use]
    pub fn from_provider(record: &ProviderRecord) -> Self {
        Self {
            name: record.name.clone(),
            categories: record.categories.clone(),
            region: join_or(&record.regions, "Worldwide"),
            company: if record.company_country.is_empty() {
                "Unknown".to_string()
            } else {
                record.company_country.clone()
            },
            tor_friendly: if record.tor_friendly { "Yes" } else { "No" },
            affiliate: if record.aff { "Yes" } else { "No (direct link)" },
            locations: join_or(&record.locations, "Not specified"),
            payments: join_or(&record.payments, "Not specified"),
            features: join_or(&record.features, "None detected"),
            description: Some(record.description.clone()).filter(|d| !d.is_empty()),
            url: record.url.clone(),
        }
    }

    /// Label/value pairs in overlay order. The description row is omitted
    /// when there is none.
    #[must_use]
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![
            ("Region", self.region.as_str()),
            ("Company", self.company.as_str()),
            ("Tor Friendly", self.tor_friendly),
            ("Affiliate Link", self.affiliate),
            ("Locations", self.locations.as_str()),
            ("Payments", self.payments.as_str()),
            ("Features", self.features.as_str()),
        ];
        if let Some(description) = &self.description {
            fields.push(("Description", description.as_str()));
        }
        fields.push(("Website", self.url.as_str()));
        fields
    }
}
