use std::path::PathBuf;

use anyhow::Context;
use bvdir_core::{MapBackendKind, SortKey};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod directory;
mod export;
mod filters;
mod map;

use filters::FilterArgs;
use map::MapOptions;

#[derive(Debug, Parser)]
#[command(name = "bvdir")]
#[command(about = "Browse the directory of hosting providers that accept Bitcoin")]
struct Cli {
    /// Provider dataset JSON file (overrides `BVDIR_DATA_PATH`)
    #[arg(long, global = true, value_name = "PATH")]
    data: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show provider, country and category counts
    Summary,
    /// List the values each filter accepts
    Facets,
    /// Show the filtered provider table
    List {
        #[command(flatten)]
        filters: FilterArgs,
        /// Click a column header; repeat to toggle direction or change column
        #[arg(long = "sort", value_name = "KEY")]
        sort: Vec<SortKey>,
        /// Open the detail view for this table row (1-based)
        #[arg(long, value_name = "ROW")]
        select: Option<usize>,
    },
    /// Show the filtered providers as map markers
    Map {
        #[command(flatten)]
        filters: FilterArgs,
        /// Map renderer: cluster or globe (overrides `BVDIR_MAP_BACKEND`)
        #[arg(long)]
        backend: Option<MapBackendKind>,
        /// Cluster map zoom level (overrides `BVDIR_MAP_ZOOM`)
        #[arg(long, value_parser = clap::value_parser!(u8).range(2..=10))]
        zoom: Option<u8>,
        /// Seed the position jitter for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Open the detail view for this marker (1-based)
        #[arg(long, value_name = "MARKER")]
        select: Option<usize>,
    },
    /// Show every detail of one provider
    Show {
        /// Provider name (case-insensitive)
        name: String,
    },
    /// Write the filtered directory as a static JSON bundle
    Export {
        /// Output file
        #[arg(long, value_name = "FILE")]
        out: PathBuf,
        #[command(flatten)]
        filters: FilterArgs,
        /// Click a column header; repeat to toggle direction or change column
        #[arg(long = "sort", value_name = "KEY")]
        sort: Vec<SortKey>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bvdir_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let data_path = cli.data.unwrap_or_else(|| config.data_path.clone());
    let dataset = bvdir_core::load_providers(&data_path)
        .with_context(|| format!("failed to load providers from {}", data_path.display()))?;
    tracing::debug!(env = %config.env, backend = %config.map_backend, "configuration loaded");

    match cli.command {
        None | Some(Commands::Summary) => directory::run_summary(&dataset),
        Some(Commands::Facets) => directory::run_facets(&dataset),
        Some(Commands::List {
            filters,
            sort,
            select,
        }) => directory::run_list(&dataset, &filters, &sort, select)?,
        Some(Commands::Map {
            filters,
            backend,
            zoom,
            seed,
            select,
        }) => map::run_map(
            &dataset,
            &config,
            &filters,
            MapOptions {
                backend,
                zoom,
                seed,
                select,
            },
        )?,
        Some(Commands::Show { name }) => directory::run_show(&dataset, &name)?,
        Some(Commands::Export { out, filters, sort }) => {
            export::run_export(&dataset, &config, &out, &filters, &sort)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;
