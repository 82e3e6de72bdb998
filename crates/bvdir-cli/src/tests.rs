use std::path::Path;

use bvdir_core::{Dataset, DirectoryView, FilterAction, TorFilter};

use super::*;

/// The dataset shipped in `data/providers.json`.
pub(crate) fn sample_dataset() -> Dataset {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("data")
        .join("providers.json");
    bvdir_core::load_providers(&path).expect("sample dataset should load")
}

/// Test-environment config with the default map settings.
pub(crate) fn test_config() -> bvdir_core::AppConfig {
    bvdir_core::AppConfig {
        env: bvdir_core::Environment::Test,
        data_path: PathBuf::from("unused"),
        base_path: "/".to_string(),
        log_level: "info".to_string(),
        map_backend: MapBackendKind::Cluster,
        map_zoom: 2,
        cluster_radius_px: 40,
    }
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["bvdir"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
    assert!(cli.data.is_none());
}

#[test]
fn parses_summary_with_global_data_flag() {
    let cli = Cli::try_parse_from(["bvdir", "summary", "--data", "/tmp/p.json"])
        .expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Summary)));
    assert_eq!(cli.data, Some(PathBuf::from("/tmp/p.json")));
}

#[test]
fn parses_list_defaults() {
    let cli = Cli::try_parse_from(["bvdir", "list"]).unwrap();
    match cli.command {
        Some(Commands::List {
            filters,
            sort,
            select,
        }) => {
            assert_eq!(filters, FilterArgs::default());
            assert!(sort.is_empty());
            assert!(select.is_none());
        }
        other => panic!("expected list, got {other:?}"),
    }
}

#[test]
fn parses_list_filters_and_repeated_sort() {
    let cli = Cli::try_parse_from([
        "bvdir",
        "list",
        "-s",
        "tokyo",
        "--category",
        "VPS",
        "--tor",
        "false",
        "--sort",
        "payments",
        "--sort",
        "payments",
        "--select",
        "2",
    ])
    .unwrap();
    match cli.command {
        Some(Commands::List {
            filters,
            sort,
            select,
        }) => {
            assert_eq!(filters.search.as_deref(), Some("tokyo"));
            assert_eq!(filters.category.as_deref(), Some("VPS"));
            assert_eq!(filters.tor, TorFilter::No);
            assert_eq!(sort, vec![SortKey::Payments, SortKey::Payments]);
            assert_eq!(select, Some(2));
        }
        other => panic!("expected list, got {other:?}"),
    }
}

#[test]
fn rejects_unknown_tor_and_sort_values() {
    assert!(Cli::try_parse_from(["bvdir", "list", "--tor", "maybe"]).is_err());
    assert!(Cli::try_parse_from(["bvdir", "list", "--sort", "price"]).is_err());
}

#[test]
fn parses_map_options() {
    let cli = Cli::try_parse_from([
        "bvdir", "map", "--backend", "globe", "--zoom", "4", "--seed", "7",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Map {
            backend: Some(MapBackendKind::Globe),
            zoom: Some(4),
            seed: Some(7),
            select: None,
            ..
        })
    ));
}

#[test]
fn map_zoom_out_of_range_is_rejected() {
    assert!(Cli::try_parse_from(["bvdir", "map", "--zoom", "1"]).is_err());
    assert!(Cli::try_parse_from(["bvdir", "map", "--zoom", "11"]).is_err());
}

#[test]
fn parses_show_name() {
    let cli = Cli::try_parse_from(["bvdir", "show", "Proton Mail"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Show { ref name }) if name == "Proton Mail"));
}

#[test]
fn export_requires_out() {
    assert!(Cli::try_parse_from(["bvdir", "export"]).is_err());
    let cli = Cli::try_parse_from(["bvdir", "export", "--out", "dist/directory.json"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Export { ref out, .. }) if out == Path::new("dist/directory.json")));
}

#[test]
fn filter_args_translate_all_to_unconstrained() {
    let args = FilterArgs {
        search: Some("  ".to_string()),
        category: Some("all".to_string()),
        region: Some("Europe".to_string()),
        payment: None,
        tor: TorFilter::Yes,
    };
    assert_eq!(
        args.actions(),
        vec![
            FilterAction::SetQuery("  ".to_string()),
            FilterAction::SetCategory(None),
            FilterAction::SetRegion(Some("Europe".to_string())),
            FilterAction::SetPayment(None),
            FilterAction::SetTor(TorFilter::Yes),
        ]
    );
}

#[test]
fn filter_args_narrow_the_view() {
    let dataset = sample_dataset();
    let mut view = DirectoryView::new(&dataset);
    let args = FilterArgs {
        region: Some("Asia".to_string()),
        ..FilterArgs::default()
    };
    args.apply(&mut view);
    let names: Vec<&str> = view.visible().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Tokyo Cloud"]);
}

#[test]
fn run_show_rejects_unknown_provider() {
    let dataset = sample_dataset();
    let err = directory::run_show(&dataset, "Nonexistent Host").unwrap_err();
    assert!(err.to_string().contains("Nonexistent Host"));
    assert!(directory::run_show(&dataset, "njalla").is_ok());
}

#[test]
fn run_list_rejects_out_of_range_row() {
    let dataset = sample_dataset();
    let args = FilterArgs {
        region: Some("Asia".to_string()),
        ..FilterArgs::default()
    };
    assert!(directory::run_list(&dataset, &args, &[], Some(1)).is_ok());
    assert!(directory::run_list(&dataset, &args, &[], Some(2)).is_err());
    assert!(directory::run_list(&dataset, &args, &[], Some(0)).is_err());
}

#[test]
fn run_map_rejects_cluster_selection() {
    let dataset = sample_dataset();
    let config = test_config();
    // Everything in Europe at world zoom collapses into shared markers; the
    // first marker is a cluster.
    let args = FilterArgs {
        region: Some("Europe".to_string()),
        ..FilterArgs::default()
    };
    let options = MapOptions {
        seed: Some(1),
        select: Some(1),
        ..MapOptions::default()
    };
    let err = map::run_map(&dataset, &config, &args, options).unwrap_err();
    assert!(err.to_string().contains("cluster"));

    let globe = MapOptions {
        backend: Some(MapBackendKind::Globe),
        ..options
    };
    assert!(map::run_map(&dataset, &config, &args, globe).is_ok());
}

#[test]
fn truncate_marks_cut_text() {
    assert_eq!(directory::truncate("Servers Guru", 20), "Servers Guru");
    assert_eq!(directory::truncate("Servers Guru", 8), "Serve...");
}
