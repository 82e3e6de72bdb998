//! Table projection: sort state, stable sorting and the row view model.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::collate;
use crate::error::ParseError;
use crate::providers::ProviderRecord;

/// Shown in place of the table when the filtered set is empty.
pub const EMPTY_MESSAGE: &str = "No providers match your filters";

/// Locations shown in a row before the remainder collapses into `+N`.
const MAX_ROW_LOCATIONS: usize = 3;
/// Features shown in a row; the detail view lists them all.
const MAX_ROW_FEATURES: usize = 3;

/// A sortable column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Categories,
    Regions,
    Locations,
    Payments,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Name,
        SortKey::Categories,
        SortKey::Regions,
        SortKey::Locations,
        SortKey::Payments,
    ];

    /// Column header text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Categories => "Category",
            SortKey::Regions => "Region",
            SortKey::Locations => "Locations",
            SortKey::Payments => "Payments",
        }
    }

    /// The string a record is ordered by under this key.
    ///
    /// Tag keys join the stored order with `","`, so `["VPS","Domain"]` and
    /// `["Domain","VPS"]` sort differently.
    #[must_use]
    pub fn sort_value(self, record: &ProviderRecord) -> String {
        match self {
            SortKey::Name => record.name.to_lowercase(),
            SortKey::Categories => record.categories.join(","),
            SortKey::Regions => record.regions.join(","),
            SortKey::Locations => record.locations.join(","),
            SortKey::Payments => record.payments.join(","),
        }
    }
}

impl FromStr for SortKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "categories" | "category" => Ok(SortKey::Categories),
            "regions" | "region" => Ok(SortKey::Regions),
            "locations" | "location" => Ok(SortKey::Locations),
            "payments" | "payment" => Ok(SortKey::Payments),
            _ => Err(ParseError::SortKey(s.to_string())),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SortKey::Name => "name",
            SortKey::Categories => "categories",
            SortKey::Regions => "regions",
            SortKey::Locations => "locations",
            SortKey::Payments => "payments",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Header arrow for the active column.
    #[must_use]
    pub fn arrow(self) -> char {
        match self {
            SortDirection::Asc => '\u{2191}',
            SortDirection::Desc => '\u{2193}',
        }
    }
}

/// Active sort column and direction. Defaults to name ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortState {
    /// Header click: the active key flips direction, any other key becomes
    /// active in ascending order.
    #[must_use]
    pub fn toggle(self, key: SortKey) -> Self {
        if self.key == key {
            Self {
                key,
                direction: self.direction.flipped(),
            }
        } else {
            Self {
                key,
                direction: SortDirection::Asc,
            }
        }
    }

    /// Header text for `key`, with an arrow when it is the active column.
    #[must_use]
    pub fn header(&self, key: SortKey) -> String {
        if self.key == key {
            format!("{} {}", key.label(), self.direction.arrow())
        } else {
            key.label().to_string()
        }
    }
}

/// Stable sort of `records` by `key`.
///
/// Descending negates the comparison instead of reversing the output, so rows
/// with equal keys keep their input order in both directions.
#[must_use]
pub fn sort<'a>(
    records: &[&'a ProviderRecord],
    key: SortKey,
    direction: SortDirection,
) -> Vec<&'a ProviderRecord> {
    let mut keyed: Vec<(String, &'a ProviderRecord)> = records
        .iter()
        .map(|record| (key.sort_value(record), *record))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| {
        let ord = collate::compare(a, b);
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });

    keyed.into_iter().map(|(_, record)| record).collect()
}

/// Shorthand for sorting with a [`SortState`].
#[must_use]
pub fn sort_by_state<'a>(records: &[&'a ProviderRecord], state: SortState) -> Vec<&'a ProviderRecord> {
    sort(records, state.key, state.direction)
}

/// One rendered table row.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow<'a> {
    pub provider: &'a ProviderRecord,
    pub name: String,
    pub url: String,
    pub categories: Vec<String>,
    pub regions: String,
    /// At most three locations, then ` +N` for the rest.
    pub locations: String,
    /// Every location; the hover title of the locations cell.
    pub locations_title: String,
    pub payments: Vec<String>,
    pub tor_badge: bool,
    pub features: Vec<String>,
}

impl<'a> TableRow<'a> {
    #[must_use]
    pub fn from_provider(provider: &'a ProviderRecord) -> Self {
        Self {
            provider,
            name: provider.name.clone(),
            url: provider.url.clone(),
            categories: provider.categories.clone(),
            regions: provider.regions.join(", "),
            locations: truncated_locations(&provider.locations),
            locations_title: provider.locations_display(),
            payments: provider.payments.clone(),
            tor_badge: provider.tor_friendly,
            features: provider
                .features
                .iter()
                .take(MAX_ROW_FEATURES)
                .cloned()
                .collect(),
        }
    }

    /// Payment badges, with a trailing `Tor` badge for Tor-friendly providers.
    #[must_use]
    pub fn payment_badges(&self) -> Vec<&str> {
        let mut badges: Vec<&str> = self.payments.iter().map(String::as_str).collect();
        if self.tor_badge {
            badges.push("Tor");
        }
        badges
    }
}

fn truncated_locations(locations: &[String]) -> String {
    if locations.len() <= MAX_ROW_LOCATIONS {
        locations.join(", ")
    } else {
        format!(
            "{} +{}",
            locations[..MAX_ROW_LOCATIONS].join(", "),
            locations.len() - MAX_ROW_LOCATIONS
        )
    }
}

/// Either the empty-state message or the sorted rows. An empty table is
/// never rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum TableView<'a> {
    Empty,
    Rows(Vec<TableRow<'a>>),
}

impl<'a> TableView<'a> {
    /// Sort the filtered records by `state` and build their rows.
    #[must_use]
    pub fn build(records: &[&'a ProviderRecord], state: SortState) -> Self {
        if records.is_empty() {
            return TableView::Empty;
        }
        let rows = sort_by_state(records, state)
            .into_iter()
            .map(TableRow::from_provider)
            .collect();
        TableView::Rows(rows)
    }

    #[must_use]
    pub fn rows(&self) -> &[TableRow<'a>] {
        match self {
            TableView::Empty => &[],
            TableView::Rows(rows) => rows,
        }
    }

    /// The empty-state message, if this view is empty.
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        match self {
            TableView::Empty => Some(EMPTY_MESSAGE),
            TableView::Rows(_) => None,
        }
    }
}

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;
