//! Map projection: filtered providers to jittered plot points, plus the
//! marker model the renderer backends lay those points out into.
//!
//! Projection is backend-agnostic. A backend only decides how points are
//! grouped into markers; see [`backend`].

pub mod backend;

use std::collections::HashSet;

use rand::Rng;

use crate::providers::ProviderRecord;

pub use backend::{ClusterMap, Globe, MapBackend, MapBackendKind};

/// Maximum jitter, in degrees, applied independently to each axis.
///
/// Separates providers that share a datacenter city.
pub const JITTER: f64 = 0.25;

/// Distinct provider names listed in a cluster tooltip.
pub const MAX_CLUSTER_NAMES: usize = 5;

/// One provider presence at a (jittered) position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint<'a> {
    pub lat: f64,
    pub lng: f64,
    pub provider: &'a ProviderRecord,
    pub label: &'a str,
}

/// Project records onto plot points using thread-local randomness.
///
/// One point per coordinate, in record order then coordinate order.
#[must_use]
pub fn project<'a>(records: &[&'a ProviderRecord]) -> Vec<PlotPoint<'a>> {
    project_with_rng(records, &mut rand::rng())
}

/// Like [`project`], drawing jitter from `rng`.
pub fn project_with_rng<'a, R>(records: &[&'a ProviderRecord], rng: &mut R) -> Vec<PlotPoint<'a>>
where
    R: Rng + ?Sized,
{
    let mut points = Vec::with_capacity(records.iter().map(|p| p.coordinates.len()).sum());
    for &provider in records {
        for coord in &provider.coordinates {
            points.push(PlotPoint {
                lat: coord.lat + rng.random_range(-JITTER..JITTER),
                lng: coord.lng + rng.random_range(-JITTER..JITTER),
                provider,
                label: &coord.label,
            });
        }
    }
    tracing::debug!(
        providers = records.len(),
        points = points.len(),
        "projected providers onto map"
    );
    points
}

/// Cluster icon size class, by point count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterSize {
    Small,
    Medium,
    Large,
}

impl ClusterSize {
    #[must_use]
    pub fn for_count(count: usize) -> Self {
        if count >= 50 {
            ClusterSize::Large
        } else if count >= 10 {
            ClusterSize::Medium
        } else {
            ClusterSize::Small
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ClusterSize::Small => "small",
            ClusterSize::Medium => "medium",
            ClusterSize::Large => "large",
        }
    }
}

/// What a cluster marker shows: its point count, a size class and a
/// short list of the providers inside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterSummary {
    pub count: usize,
    /// First distinct provider names in point order, at most five.
    pub names: Vec<String>,
    /// Distinct names not listed in `names`.
    pub overflow: usize,
    pub size: ClusterSize,
}

impl ClusterSummary {
    #[must_use]
    pub fn from_points(points: &[PlotPoint<'_>]) -> Self {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        for point in points {
            let name = point.provider.name.as_str();
            if seen.insert(name) && names.len() < MAX_CLUSTER_NAMES {
                names.push(name.to_string());
            }
        }
        Self {
            count: points.len(),
            overflow: seen.len().saturating_sub(MAX_CLUSTER_NAMES),
            names,
            size: ClusterSize::for_count(points.len()),
        }
    }

    /// Names one per line, then `... +N more` when names were cut.
    #[must_use]
    pub fn tooltip(&self) -> String {
        let mut tooltip = self.names.join("\n");
        if self.overflow > 0 {
            tooltip.push_str(&format!("\n... +{} more", self.overflow));
        }
        tooltip
    }
}

/// A rendered map marker.
#[derive(Debug, Clone, PartialEq)]
pub enum Marker<'a> {
    Single(PlotPoint<'a>),
    Cluster {
        lat: f64,
        lng: f64,
        points: Vec<PlotPoint<'a>>,
        summary: ClusterSummary,
    },
}

impl<'a> Marker<'a> {
    /// Group `points` into one marker. A lone point stays a single marker.
    #[must_use]
    pub fn from_group(points: Vec<PlotPoint<'a>>) -> Option<Self> {
        match points.as_slice() {
            [] => None,
            [point] => Some(Marker::Single(*point)),
            _ => {
                #[allow(clippy::cast_precision_loss)]
                let n = points.len() as f64;
                let lat = points.iter().map(|p| p.lat).sum::<f64>() / n;
                let lng = points.iter().map(|p| p.lng).sum::<f64>() / n;
                let summary = ClusterSummary::from_points(&points);
                Some(Marker::Cluster {
                    lat,
                    lng,
                    points,
                    summary,
                })
            }
        }
    }

    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        match self {
            Marker::Single(point) => (point.lat, point.lng),
            Marker::Cluster { lat, lng, .. } => (*lat, *lng),
        }
    }

    /// Number of plot points behind this marker.
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            Marker::Single(_) => 1,
            Marker::Cluster { points, .. } => points.len(),
        }
    }

    /// Hover text.
    #[must_use]
    pub fn tooltip(&self) -> String {
        match self {
            Marker::Single(point) => point.provider.name.clone(),
            Marker::Cluster { summary, .. } => summary.tooltip(),
        }
    }

    /// The provider a click selects. Clusters zoom instead of selecting.
    #[must_use]
    pub fn provider(&self) -> Option<&'a ProviderRecord> {
        match self {
            Marker::Single(point) => Some(point.provider),
            Marker::Cluster { .. } => None,
        }
    }
}

#[cfg(test)]
#[path = "map_test.rs"]
mod tests;
