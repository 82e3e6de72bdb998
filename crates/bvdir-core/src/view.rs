//! The directory page state: filter criteria, sort state and selection over
//! one loaded dataset, with the derived visible set kept in step.

use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::dataset::Dataset;
use crate::facets::{DirectorySummary, Facets};
use crate::filter::{self, FilterAction, FilterCriteria};
use crate::map::{self, PlotPoint};
use crate::providers::ProviderRecord;
use crate::selection::SelectionState;
use crate::table::{self, SortKey, SortState, TableView};

/// `visible / total` counter shown in the control strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterStatus {
    pub visible: usize,
    pub total: usize,
}

impl fmt::Display for FilterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.visible, self.total)
    }
}

#[derive(Debug, Clone)]
pub struct DirectoryView<'a> {
    dataset: &'a Dataset,
    facets: Facets,
    summary: DirectorySummary,
    criteria: FilterCriteria,
    sort: SortState,
    selection: SelectionState<'a>,
    visible: Vec<&'a ProviderRecord>,
}

impl<'a> DirectoryView<'a> {
    /// Facets and header counts are derived here, once per dataset.
    #[must_use]
    pub fn new(dataset: &'a Dataset) -> Self {
        let records = dataset.providers();
        let criteria = FilterCriteria::default();
        let visible = filter::apply(records, &criteria);
        Self {
            dataset,
            facets: Facets::from_providers(records),
            summary: DirectorySummary::from_providers(records),
            criteria,
            sort: SortState::default(),
            selection: SelectionState::default(),
            visible,
        }
    }

    /// Apply one control-strip input and recompute the visible set.
    pub fn dispatch(&mut self, action: FilterAction) {
        self.criteria = std::mem::take(&mut self.criteria).reduce(action);
        self.visible = filter::apply(self.dataset.providers(), &self.criteria);
    }

    /// Header click on column `key`.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort = self.sort.toggle(key);
    }

    pub fn select(&mut self, record: &'a ProviderRecord) {
        self.selection = self.selection.select(record);
    }

    pub fn dismiss(&mut self) {
        self.selection = self.selection.dismiss();
    }

    #[must_use]
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    #[must_use]
    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    #[must_use]
    pub fn selection(&self) -> SelectionState<'a> {
        self.selection
    }

    #[must_use]
    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    #[must_use]
    pub fn summary(&self) -> DirectorySummary {
        self.summary
    }

    /// Filtered records in dataset order.
    #[must_use]
    pub fn visible(&self) -> &[&'a ProviderRecord] {
        &self.visible
    }

    #[must_use]
    pub fn status(&self) -> FilterStatus {
        FilterStatus {
            visible: self.visible.len(),
            total: self.dataset.len(),
        }
    }

    /// Filtered records in the current sort order.
    #[must_use]
    pub fn sorted(&self) -> Vec<&'a ProviderRecord> {
        table::sort_by_state(&self.visible, self.sort)
    }

    #[must_use]
    pub fn table(&self) -> TableView<'a> {
        TableView::build(&self.visible, self.sort)
    }

    /// Map points for the visible set, jittered with thread-local randomness.
    #[must_use]
    pub fn points(&self) -> Vec<PlotPoint<'a>> {
        map::project(&self.visible)
    }

    pub fn points_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<PlotPoint<'a>> {
        map::project_with_rng(&self.visible, rng)
    }
}
