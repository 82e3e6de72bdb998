use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;
use crate::error::ParseError;
use crate::providers::{test_coordinate, test_provider};

fn located(name: &str, coords: &[(f64, f64)]) -> ProviderRecord {
    let mut p = test_provider(name);
    p.coordinates = coords
        .iter()
        .map(|(lat, lng)| test_coordinate(*lat, *lng, "XX"))
        .collect();
    p
}

/// Exact (un-jittered) points for layout tests.
fn exact_points(records: &[ProviderRecord]) -> Vec<PlotPoint<'_>> {
    records
        .iter()
        .flat_map(|p| {
            p.coordinates.iter().map(move |c| PlotPoint {
                lat: c.lat,
                lng: c.lng,
                provider: p,
                label: &c.label,
            })
        })
        .collect()
}

#[test]
fn one_point_per_coordinate_in_record_order() {
    let records = [
        located("Alpha", &[(52.5, 13.4), (48.8, 2.3)]),
        located("Beta", &[]),
        located("Gamma", &[(35.7, 139.7)]),
    ];
    let refs: Vec<&ProviderRecord> = records.iter().collect();
    let points = project_with_rng(&refs, &mut StdRng::seed_from_u64(7));
    let owners: Vec<&str> = points.iter().map(|p| p.provider.name.as_str()).collect();
    assert_eq!(owners, vec!["Alpha", "Alpha", "Gamma"]);
    assert!(std::ptr::eq(points[2].provider, &records[2]));
    assert_eq!(points[2].label, "XX");
}

#[test]
fn same_seed_gives_same_jitter() {
    let records = [located("Alpha", &[(52.5, 13.4), (48.8, 2.3)])];
    let refs: Vec<&ProviderRecord> = records.iter().collect();
    let a = project_with_rng(&refs, &mut StdRng::seed_from_u64(42));
    let b = project_with_rng(&refs, &mut StdRng::seed_from_u64(42));
    assert_eq!(a, b);
}

#[test]
fn unseeded_projection_stays_within_jitter() {
    let records = [located("Alpha", &[(0.0, 0.0); 20])];
    let refs: Vec<&ProviderRecord> = records.iter().collect();
    for point in project(&refs) {
        assert!((-JITTER..JITTER).contains(&point.lat));
        assert!((-JITTER..JITTER).contains(&point.lng));
    }
}

#[test]
fn summary_lists_five_names_then_overflow() {
    let records: Vec<ProviderRecord> = (1..=7)
        .map(|i| located(&format!("P{i}"), &[(0.0, 0.0)]))
        .collect();
    let points = exact_points(&records);
    let summary = ClusterSummary::from_points(&points);
    assert_eq!(summary.count, 7);
    assert_eq!(summary.names, vec!["P1", "P2", "P3", "P4", "P5"]);
    assert_eq!(summary.overflow, 2);
    assert_eq!(summary.tooltip(), "P1\nP2\nP3\nP4\nP5\n... +2 more");
}

#[test]
fn summary_counts_points_but_dedups_names() {
    let records = [
        located("Alpha", &[(0.0, 0.0), (0.1, 0.1), (0.2, 0.2)]),
        located("Beta", &[(0.0, 0.0)]),
    ];
    let points = exact_points(&records);
    let summary = ClusterSummary::from_points(&points);
    assert_eq!(summary.count, 4);
    assert_eq!(summary.names, vec!["Alpha", "Beta"]);
    assert_eq!(summary.overflow, 0);
    assert_eq!(summary.tooltip(), "Alpha\nBeta");
}

#[test]
fn size_class_thresholds() {
    assert_eq!(ClusterSize::for_count(2), ClusterSize::Small);
    assert_eq!(ClusterSize::for_count(9), ClusterSize::Small);
    assert_eq!(ClusterSize::for_count(10), ClusterSize::Medium);
    assert_eq!(ClusterSize::for_count(49), ClusterSize::Medium);
    assert_eq!(ClusterSize::for_count(50), ClusterSize::Large);
}

#[test]
fn single_marker_selects_and_cluster_does_not() {
    let records = [located("Alpha", &[(1.0, 2.0)]), located("Beta", &[(1.0, 2.0)])];
    let points = exact_points(&records);

    let single = Marker::from_group(vec![points[0]]).unwrap();
    assert_eq!(single.provider().map(|p| p.name.as_str()), Some("Alpha"));
    assert_eq!(single.tooltip(), "Alpha");
    assert_eq!(single.position(), (1.0, 2.0));

    let cluster = Marker::from_group(points.clone()).unwrap();
    assert!(cluster.provider().is_none());
    assert_eq!(cluster.count(), 2);
    assert_eq!(cluster.tooltip(), "Alpha\nBeta");

    assert!(Marker::from_group(Vec::new()).is_none());
}

#[test]
fn cluster_map_merges_nearby_points_at_world_zoom() {
    let records = [
        located("Alpha", &[(52.5, 13.4)]),
        located("Beta", &[(52.3, 13.1)]),
        located("Gamma", &[(35.7, 139.7)]),
    ];
    let points = exact_points(&records);
    let markers = ClusterMap::default().layout(&points);
    assert_eq!(markers.len(), 2);
    assert_eq!(markers[0].count(), 2);
    assert_eq!(markers[0].tooltip(), "Alpha\nBeta");
    assert_eq!(markers[1].provider().map(|p| p.name.as_str()), Some("Gamma"));
}

#[test]
fn cluster_map_splits_points_when_zoomed_in() {
    let records = [located("Alpha", &[(52.5, 13.4)]), located("Beta", &[(52.0, 13.9)])];
    let points = exact_points(&records);
    let markers = ClusterMap::new(ClusterMap::MAX_ZOOM, 40).layout(&points);
    assert_eq!(markers.len(), 2);
    assert!(markers.iter().all(|m| m.provider().is_some()));
}

#[test]
fn cluster_map_clamps_zoom() {
    assert_eq!(ClusterMap::new(0, 40).zoom(), ClusterMap::MIN_ZOOM);
    assert_eq!(ClusterMap::new(18, 40).zoom(), ClusterMap::MAX_ZOOM);
    assert_eq!(ClusterMap::default().radius_px(), 40);
    assert_eq!(ClusterMap::CENTER, (30.0, 0.0));
}

#[test]
fn globe_draws_every_point() {
    let records = [located("Alpha", &[(52.5, 13.4), (52.5, 13.4)])];
    let points = exact_points(&records);
    let markers = Globe.layout(&points);
    assert_eq!(markers.len(), 2);
    assert!(markers.iter().all(|m| matches!(m, Marker::Single(_))));
}

#[test]
fn backend_kind_parses_and_builds() {
    assert_eq!("cluster".parse::<MapBackendKind>().unwrap(), MapBackendKind::Cluster);
    assert_eq!(" Globe ".parse::<MapBackendKind>().unwrap(), MapBackendKind::Globe);
    assert_eq!(
        "mapbox".parse::<MapBackendKind>().unwrap_err(),
        ParseError::MapBackend("mapbox".to_string())
    );
    assert_eq!(MapBackendKind::default().backend(2, 40).name(), "cluster");
    assert_eq!(MapBackendKind::Globe.backend(2, 40).name(), "globe");
}

// -- Property tests --

fn arb_records() -> impl Strategy<Value = Vec<ProviderRecord>> {
    prop::collection::vec(
        prop::collection::vec((-80.0f64..80.0, -179.0f64..179.0), 0..5),
        0..8,
    )
    .prop_map(|coord_lists| {
        coord_lists
            .iter()
            .enumerate()
            .map(|(i, coords)| located(&format!("P{i}"), coords))
            .collect()
    })
}

proptest! {
    #[test]
    fn point_count_matches_coordinates_and_jitter_is_bounded(
        records in arb_records(),
        seed in any::<u64>(),
    ) {
        let refs: Vec<&ProviderRecord> = records.iter().collect();
        let points = project_with_rng(&refs, &mut StdRng::seed_from_u64(seed));
        let expected: usize = records.iter().map(|p| p.coordinates.len()).sum();
        prop_assert_eq!(points.len(), expected);

        let originals = records.iter().flat_map(|p| &p.coordinates);
        for (point, coord) in points.iter().zip(originals) {
            prop_assert!((point.lat - coord.lat).abs() <= JITTER);
            prop_assert!((point.lng - coord.lng).abs() <= JITTER);
        }
    }

    #[test]
    fn every_backend_keeps_every_point(records in arb_records(), zoom in 2u8..=10) {
        let points = exact_points(&records);
        for kind in [MapBackendKind::Cluster, MapBackendKind::Globe] {
            let markers = kind.backend(zoom, 40).layout(&points);
            let total: usize = markers.iter().map(Marker::count).sum();
            prop_assert_eq!(total, points.len());
        }
    }
}
