//! `map` command: project the filtered providers and print the markers the
//! configured backend lays out.

use bvdir_core::{
    AppConfig, ClusterMap, Dataset, DirectoryView, MapBackendKind, Marker, PlotPoint,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::directory::{print_detail, truncate};
use crate::filters::FilterArgs;

/// Map flags layered over the configured defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct MapOptions {
    pub backend: Option<MapBackendKind>,
    pub zoom: Option<u8>,
    pub seed: Option<u64>,
    /// 1-based marker number to open.
    pub select: Option<usize>,
}

/// Print the marker list, then optionally the detail of one single marker.
///
/// # Errors
///
/// Returns an error if `select` is out of range or names a cluster marker.
pub(crate) fn run_map(
    dataset: &Dataset,
    config: &AppConfig,
    filters: &FilterArgs,
    options: MapOptions,
) -> anyhow::Result<()> {
    let mut view = DirectoryView::new(dataset);
    filters.apply(&mut view);

    let kind = options.backend.unwrap_or(config.map_backend);
    let zoom = options.zoom.unwrap_or(config.map_zoom);
    let backend = kind.backend(zoom, config.cluster_radius_px);

    let points: Vec<PlotPoint<'_>> = match options.seed {
        Some(seed) => view.points_with_rng(&mut StdRng::seed_from_u64(seed)),
        None => view.points(),
    };
    let markers = backend.layout(&points);

    match kind {
        MapBackendKind::Cluster => {
            let (lat, lng) = ClusterMap::CENTER;
            println!(
                "Backend: {} (zoom {}, center {lat:.1}, {lng:.1}, radius {} px)",
                backend.name(),
                zoom.clamp(ClusterMap::MIN_ZOOM, ClusterMap::MAX_ZOOM),
                config.cluster_radius_px
            );
        }
        MapBackendKind::Globe => println!("Backend: {}", backend.name()),
    }
    println!(
        "Showing {} providers: {} points in {} markers",
        view.status(),
        points.len(),
        markers.len()
    );
    println!();

    if markers.is_empty() {
        println!("No providers to plot");
    } else {
        println!(
            "{:<4}{:<10}{:<10}{:<8}{:<8}TOOLTIP",
            "#", "LAT", "LNG", "POINTS", "SIZE"
        );
        for (i, marker) in markers.iter().enumerate() {
            print_marker(i + 1, marker);
        }
    }

    if let Some(n) = options.select {
        let marker = n
            .checked_sub(1)
            .and_then(|i| markers.get(i))
            .ok_or_else(|| {
                anyhow::anyhow!("marker {n} is out of range; the map has {} markers", markers.len())
            })?;
        let provider = marker.provider().ok_or_else(|| {
            anyhow::anyhow!(
                "marker {n} is a cluster of {} points; raise --zoom to select a provider",
                marker.count()
            )
        })?;
        view.select(provider);
        if let Some(detail) = view.selection().detail() {
            println!();
            print_detail(&detail);
        }
    }

    Ok(())
}

fn print_marker(n: usize, marker: &Marker<'_>) {
    let (lat, lng) = marker.position();
    let (size, tooltip) = match marker {
        Marker::Single(point) => ("", format!("{} ({})", marker.tooltip(), point.label)),
        Marker::Cluster { summary, .. } => (
            summary.size.as_str(),
            summary.tooltip().replace('\n', ", "),
        ),
    };
    println!(
        "{:<4}{:<10.3}{:<10.3}{:<8}{:<8}{}",
        n,
        lat,
        lng,
        marker.count(),
        size,
        truncate(&tooltip, 70)
    );
}
