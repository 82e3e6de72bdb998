//! Filter engine: free-text search plus four facet selectors.
//!
//! Every change to the criteria re-evaluates the whole dataset. At directory
//! scale (hundreds of records) there is no incremental path.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::providers::ProviderRecord;

/// Tri-state Tor selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TorFilter {
    #[default]
    Any,
    /// Only Tor-friendly providers.
    Yes,
    /// Only providers that are not Tor-friendly.
    No,
}

impl TorFilter {
    #[must_use]
    pub fn matches(self, tor_friendly: bool) -> bool {
        match self {
            TorFilter::Any => true,
            TorFilter::Yes => tor_friendly,
            TorFilter::No => !tor_friendly,
        }
    }
}

impl FromStr for TorFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" | "any" => Ok(TorFilter::Any),
            "true" | "yes" => Ok(TorFilter::Yes),
            "false" | "no" => Ok(TorFilter::No),
            _ => Err(ParseError::TorFilter(s.to_string())),
        }
    }
}

impl std::fmt::Display for TorFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TorFilter::Any => write!(f, "all"),
            TorFilter::Yes => write!(f, "true"),
            TorFilter::No => write!(f, "false"),
        }
    }
}

/// Parse a facet selector value. `all` (any case) and blank mean
/// "no constraint"; anything else is taken verbatim as the tag.
#[must_use]
pub fn parse_facet_selector(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Current filter inputs. The default value constrains nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub query: String,
    pub category: Option<String>,
    pub region: Option<String>,
    pub payment: Option<String>,
    pub tor: TorFilter,
}

/// A single user input against the filter strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    SetQuery(String),
    SetCategory(Option<String>),
    SetRegion(Option<String>),
    SetPayment(Option<String>),
    SetTor(TorFilter),
    Reset,
}

impl FilterCriteria {
    /// Return the criteria that result from applying `action`.
    #[must_use]
    pub fn reduce(self, action: FilterAction) -> Self {
        match action {
            FilterAction::SetQuery(query) => Self { query, ..self },
            FilterAction::SetCategory(category) => Self { category, ..self },
            FilterAction::SetRegion(region) => Self { region, ..self },
            FilterAction::SetPayment(payment) => Self { payment, ..self },
            FilterAction::SetTor(tor) => Self { tor, ..self },
            FilterAction::Reset => Self::default(),
        }
    }

    /// `true` when no predicate can reject a record.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.query.trim().is_empty()
            && self.category.is_none()
            && self.region.is_none()
            && self.payment.is_none()
            && self.tor == TorFilter::Any
    }

    /// Evaluate all five predicates against one record.
    #[must_use]
    pub fn matches(&self, record: &ProviderRecord) -> bool {
        let needle = self.query.to_lowercase();
        matches_with_needle(self, needle.trim(), record)
    }
}

fn matches_text(needle: &str, record: &ProviderRecord) -> bool {
    if needle.is_empty() {
        return true;
    }
    record.name.to_lowercase().contains(needle)
        || record.locations_display().to_lowercase().contains(needle)
        || record.description.to_lowercase().contains(needle)
}

fn matches_with_needle(criteria: &FilterCriteria, needle: &str, record: &ProviderRecord) -> bool {
    matches_text(needle, record)
        && criteria
            .category
            .as_deref()
            .is_none_or(|c| record.has_category(c))
        && criteria
            .region
            .as_deref()
            .is_none_or(|r| record.has_region(r))
        && criteria
            .payment
            .as_deref()
            .is_none_or(|p| record.has_payment(p))
        && criteria.tor.matches(record.tor_friendly)
}

/// Return the records that satisfy every active predicate, in input order.
#[must_use]
pub fn apply<'a>(records: &'a [ProviderRecord], criteria: &FilterCriteria) -> Vec<&'a ProviderRecord> {
    let needle = criteria.query.to_lowercase();
    let needle = needle.trim();
    let filtered: Vec<&ProviderRecord> = records
        .iter()
        .filter(|p| matches_with_needle(criteria, needle, p))
        .collect();
    tracing::debug!(
        total = records.len(),
        visible = filtered.len(),
        "applied filter criteria"
    );
    filtered
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
