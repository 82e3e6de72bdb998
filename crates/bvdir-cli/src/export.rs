//! `export` command: write the filtered, sorted directory as one JSON bundle
//! for a static deployment.

use std::path::Path;

use anyhow::Context;
use bvdir_core::{
    AppConfig, Dataset, DirectorySummary, DirectoryView, Environment, Facets, FilterCriteria,
    FilterStatus, ProviderRecord, SortKey, SortState,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::filters::FilterArgs;

#[derive(Debug, Serialize)]
pub(crate) struct ExportBundle<'a> {
    pub base_path: &'a str,
    pub generated_at: DateTime<Utc>,
    pub summary: DirectorySummary,
    pub status: FilterStatus,
    pub facets: &'a Facets,
    pub criteria: &'a FilterCriteria,
    pub sort: SortState,
    pub providers: Vec<&'a ProviderRecord>,
}

impl<'a> ExportBundle<'a> {
    pub(crate) fn from_view(
        view: &'a DirectoryView<'a>,
        base_path: &'a str,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            base_path,
            generated_at,
            summary: view.summary(),
            status: view.status(),
            facets: view.facets(),
            criteria: view.criteria(),
            sort: view.sort_state(),
            providers: view.sorted(),
        }
    }
}

/// Build the filtered, sorted view and write it to `out`.
///
/// # Errors
///
/// Returns an error if the bundle cannot be serialized or written.
pub(crate) fn run_export(
    dataset: &Dataset,
    config: &AppConfig,
    out: &Path,
    filters: &FilterArgs,
    sort: &[SortKey],
) -> anyhow::Result<()> {
    let mut view = DirectoryView::new(dataset);
    filters.apply(&mut view);
    for key in sort {
        view.toggle_sort(*key);
    }
    let bundle = ExportBundle::from_view(&view, &config.base_path, Utc::now());
    write_bundle(out, &bundle, config.env)?;
    println!(
        "exported {} providers to {}",
        bundle.providers.len(),
        out.display()
    );
    Ok(())
}

/// Serialize `bundle` as JSON to `out`, replacing any existing file.
///
/// Production output is compact; other environments get pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub(crate) fn write_bundle(
    out: &Path,
    bundle: &ExportBundle<'_>,
    env: Environment,
) -> anyhow::Result<()> {
    let json = if env.minify_output() {
        serde_json::to_string(bundle)
    } else {
        serde_json::to_string_pretty(bundle)
    }
    .context("failed to serialize export bundle")?;
    std::fs::write(out, json).with_context(|| format!("failed to write {}", out.display()))?;
    tracing::info!(
        path = %out.display(),
        providers = bundle.providers.len(),
        env = %env,
        "wrote export bundle"
    );
    Ok(())
}
