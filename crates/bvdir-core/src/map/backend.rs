//! Interchangeable map renderers.
//!
//! Both backends take the same projected points. [`ClusterMap`] merges points
//! that would overlap on a Web-Mercator tile map at its zoom level;
//! [`Globe`] draws every point on its own.

use std::f64::consts::PI;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Marker, PlotPoint};
use crate::error::ParseError;

/// Width of one Web-Mercator tile in pixels.
const TILE_SIZE: f64 = 256.0;
/// Latitude limit of the Web-Mercator projection.
const MAX_MERCATOR_LAT: f64 = 85.051_128_78;

/// Lays out projected points as markers.
pub trait MapBackend {
    fn name(&self) -> &'static str;

    /// Turn points into markers. Every input point lands in exactly one
    /// marker.
    fn layout<'a>(&self, points: &[PlotPoint<'a>]) -> Vec<Marker<'a>>;
}

/// Tile map with proximity clustering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterMap {
    zoom: u8,
    radius_px: u32,
}

impl ClusterMap {
    /// Initial view center as `(lat, lng)`.
    pub const CENTER: (f64, f64) = (30.0, 0.0);
    pub const MIN_ZOOM: u8 = 2;
    pub const MAX_ZOOM: u8 = 10;
    pub const DEFAULT_ZOOM: u8 = 2;
    pub const DEFAULT_RADIUS_PX: u32 = 40;

    /// `zoom` is clamped to the supported range.
    #[must_use]
    pub fn new(zoom: u8, radius_px: u32) -> Self {
        Self {
            zoom: zoom.clamp(Self::MIN_ZOOM, Self::MAX_ZOOM),
            radius_px,
        }
    }

    #[must_use]
    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    #[must_use]
    pub fn radius_px(&self) -> u32 {
        self.radius_px
    }

    /// Pixel position of `(lat, lng)` on the world map at this zoom.
    fn pixel_position(&self, lat: f64, lng: f64) -> (f64, f64) {
        let world = TILE_SIZE * 2f64.powi(i32::from(self.zoom));
        let lat = lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT).to_radians();
        let x = (lng + 180.0) / 360.0 * world;
        let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * world;
        (x, y)
    }
}

impl Default for ClusterMap {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ZOOM, Self::DEFAULT_RADIUS_PX)
    }
}

impl MapBackend for ClusterMap {
    fn name(&self) -> &'static str {
        "cluster"
    }

    /// Greedy clustering in point order: each point joins the first group
    /// whose seed lies within `radius_px`, otherwise it seeds a new group.
    fn layout<'a>(&self, points: &[PlotPoint<'a>]) -> Vec<Marker<'a>> {
        let radius = f64::from(self.radius_px);
        let mut seeds: Vec<(f64, f64)> = Vec::new();
        let mut groups: Vec<Vec<PlotPoint<'a>>> = Vec::new();

        for point in points {
            let (x, y) = self.pixel_position(point.lat, point.lng);
            let existing = seeds
                .iter()
                .position(|(sx, sy)| (sx - x).hypot(sy - y) <= radius);
            match existing {
                Some(i) => groups[i].push(*point),
                None => {
                    seeds.push((x, y));
                    groups.push(vec![*point]);
                }
            }
        }

        let markers: Vec<Marker<'a>> = groups.into_iter().filter_map(Marker::from_group).collect();
        tracing::debug!(
            zoom = self.zoom,
            points = points.len(),
            markers = markers.len(),
            "clustered map points"
        );
        markers
    }
}

/// 3D globe. No aggregation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Globe;

impl MapBackend for Globe {
    fn name(&self) -> &'static str {
        "globe"
    }

    fn layout<'a>(&self, points: &[PlotPoint<'a>]) -> Vec<Marker<'a>> {
        points.iter().copied().map(Marker::Single).collect()
    }
}

/// Configured backend choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapBackendKind {
    #[default]
    Cluster,
    Globe,
}

impl MapBackendKind {
    /// Build the backend. `zoom` and `radius_px` only affect [`ClusterMap`].
    #[must_use]
    pub fn backend(self, zoom: u8, radius_px: u32) -> Box<dyn MapBackend> {
        match self {
            MapBackendKind::Cluster => Box::new(ClusterMap::new(zoom, radius_px)),
            MapBackendKind::Globe => Box::new(Globe),
        }
    }
}

impl FromStr for MapBackendKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cluster" | "leaflet" | "tile" => Ok(MapBackendKind::Cluster),
            "globe" => Ok(MapBackendKind::Globe),
            _ => Err(ParseError::MapBackend(s.to_string())),
        }
    }
}

impl std::fmt::Display for MapBackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapBackendKind::Cluster => write!(f, "cluster"),
            MapBackendKind::Globe => write!(f, "globe"),
        }
    }
}
