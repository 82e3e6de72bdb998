//! Facet value extraction.
//!
//! Derived once from the full dataset at load time and fed to the filter
//! selectors. Category/region/payment facets are sorted for display; the
//! country code set keeps first-occurrence order since it is only counted.

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use crate::providers::ProviderRecord;

fn distinct_sorted<'a, F, I>(records: &'a [ProviderRecord], field: F) -> Vec<String>
where
    F: Fn(&'a ProviderRecord) -> I,
    I: IntoIterator<Item = &'a String>,
{
    records
        .iter()
        .flat_map(field)
        .map(String::as_str)
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[must_use]
pub fn distinct_categories(records: &[ProviderRecord]) -> Vec<String> {
    distinct_sorted(records, |p| &p.categories)
}

#[must_use]
pub fn distinct_regions(records: &[ProviderRecord]) -> Vec<String> {
    distinct_sorted(records, |p| &p.regions)
}

#[must_use]
pub fn distinct_payments(records: &[ProviderRecord]) -> Vec<String> {
    distinct_sorted(records, |p| &p.payments)
}

/// Distinct `coordinates[].code` values in order of first occurrence.
#[must_use]
pub fn distinct_country_codes(records: &[ProviderRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut codes = Vec::new();
    for coord in records.iter().flat_map(|p| &p.coordinates) {
        if seen.insert(coord.code.as_str()) {
            codes.push(coord.code.clone());
        }
    }
    codes
}

/// The selector values offered by the filter strip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    pub categories: Vec<String>,
    pub regions: Vec<String>,
    pub payments: Vec<String>,
}

impl Facets {
    #[must_use]
    pub fn from_providers(records: &[ProviderRecord]) -> Self {
        Self {
            categories: distinct_categories(records),
            regions: distinct_regions(records),
            payments: distinct_payments(records),
        }
    }
}

/// Header counts shown above the directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DirectorySummary {
    pub providers: usize,
    pub countries: usize,
    pub categories: usize,
}

impl DirectorySummary {
    #[must_use]
    pub fn from_providers(records: &[ProviderRecord]) -> Self {
        Self {
            providers: records.len(),
            countries: distinct_country_codes(records).len(),
            categories: distinct_categories(records).len(),
        }
    }
}
