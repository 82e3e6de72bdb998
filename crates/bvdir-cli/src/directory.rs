//! Summary, facet, table and detail command handlers.
//!
//! All output goes to stdout; tracing goes to stderr.

use bvdir_core::{
    Dataset, DirectoryView, ProviderDetail, SortKey, SortState, TableRow, TableView,
};

use crate::filters::FilterArgs;

/// Cut `s` to `max` characters, marking the cut with `...`.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        format!("{}...", s.chars().take(max.saturating_sub(3)).collect::<String>())
    } else {
        s.to_string()
    }
}

/// Print the header counts.
pub(crate) fn run_summary(dataset: &Dataset) {
    let view = DirectoryView::new(dataset);
    let summary = view.summary();
    println!("Providers:  {}", summary.providers);
    println!("Countries:  {}", summary.countries);
    println!("Categories: {}", summary.categories);
}

/// Print the values each control-strip selector offers.
pub(crate) fn run_facets(dataset: &Dataset) {
    let view = DirectoryView::new(dataset);
    let facets = view.facets();
    println!("Categories: {}", facets.categories.join(", "));
    println!("Regions:    {}", facets.regions.join(", "));
    println!("Payments:   {}", facets.payments.join(", "));
    println!("Tor:        all, true, false");
}

/// Print the filtered, sorted table, then optionally the detail of one row.
///
/// `sort_clicks` are applied in order as header clicks on the default
/// name-ascending state. `select` is a 1-based row number.
///
/// # Errors
///
/// Returns an error if `select` does not name a row of the table.
pub(crate) fn run_list(
    dataset: &Dataset,
    filters: &FilterArgs,
    sort_clicks: &[SortKey],
    select: Option<usize>,
) -> anyhow::Result<()> {
    let mut view = DirectoryView::new(dataset);
    filters.apply(&mut view);
    for key in sort_clicks {
        view.toggle_sort(*key);
    }

    println!("Showing {} providers", view.status());
    println!();
    let table = view.table();
    print_table(&table, view.sort_state());

    if let Some(n) = select {
        let row = n
            .checked_sub(1)
            .and_then(|i| table.rows().get(i))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "row {n} is out of range; the table has {} rows",
                    table.rows().len()
                )
            })?;
        view.select(row.provider);
        if let Some(detail) = view.selection().detail() {
            println!();
            print_detail(&detail);
        }
    }

    Ok(())
}

/// Print the detail overlay for the provider called `name`.
///
/// # Errors
///
/// Returns an error if no provider has that name.
pub(crate) fn run_show(dataset: &Dataset, name: &str) -> anyhow::Result<()> {
    let record = dataset
        .find_by_name(name)
        .ok_or_else(|| anyhow::anyhow!("provider '{name}' not found; run `bvdir list` to see names"))?;
    let mut view = DirectoryView::new(dataset);
    view.select(record);
    if let Some(detail) = view.selection().detail() {
        print_detail(&detail);
    }
    Ok(())
}

fn print_table(table: &TableView<'_>, sort: SortState) {
    if let Some(message) = table.message() {
        println!("{message}");
        return;
    }

    println!(
        "{:<4}{:<18}{:<26}{:<22}{:<34}{:<30}FEATURES",
        "#",
        sort.header(SortKey::Name).to_uppercase(),
        sort.header(SortKey::Categories).to_uppercase(),
        sort.header(SortKey::Regions).to_uppercase(),
        sort.header(SortKey::Locations).to_uppercase(),
        sort.header(SortKey::Payments).to_uppercase(),
    );
    for (i, row) in table.rows().iter().enumerate() {
        print_row(i + 1, row);
    }
}

fn print_row(n: usize, row: &TableRow<'_>) {
    println!(
        "{:<4}{:<18}{:<26}{:<22}{:<34}{:<30}{}",
        n,
        truncate(&row.name, 17),
        truncate(&row.categories.join(", "), 25),
        truncate(&row.regions, 21),
        truncate(&row.locations, 33),
        truncate(&row.payment_badges().join(" "), 29),
        row.features.join(", "),
    );
}

pub(crate) fn print_detail(detail: &ProviderDetail) {
    println!("{}", detail.name);
    if !detail.categories.is_empty() {
        let badges: Vec<String> = detail.categories.iter().map(|c| format!("[{c}]")).collect();
        println!("{}", badges.join(" "));
    }
    println!();
    for (label, value) in detail.fields() {
        println!("{:<16}{}", format!("{label}:"), value);
    }
}
