//! The control strip as command-line flags.

use bvdir_core::{parse_facet_selector, DirectoryView, FilterAction, TorFilter};
use clap::Args;

/// Filter flags shared by `list`, `map` and `export`.
///
/// Facet flags take a tag verbatim; `all` or an empty value means no
/// constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct FilterArgs {
    /// Search provider name, locations and description
    #[arg(long, short = 's', value_name = "QUERY")]
    pub search: Option<String>,
    /// Only providers offering this category (e.g. VPS)
    #[arg(long)]
    pub category: Option<String>,
    /// Only providers serving this region (e.g. Europe)
    #[arg(long)]
    pub region: Option<String>,
    /// Only providers accepting this payment method (e.g. XMR)
    #[arg(long)]
    pub payment: Option<String>,
    /// Tor-friendliness: all, true or false
    #[arg(long, default_value = "all")]
    pub tor: TorFilter,
}

impl FilterArgs {
    /// The control-strip inputs these flags stand for, in strip order.
    pub(crate) fn actions(&self) -> Vec<FilterAction> {
        let facet = |raw: Option<&str>| raw.and_then(parse_facet_selector);
        vec![
            FilterAction::SetQuery(self.search.clone().unwrap_or_default()),
            FilterAction::SetCategory(facet(self.category.as_deref())),
            FilterAction::SetRegion(facet(self.region.as_deref())),
            FilterAction::SetPayment(facet(self.payment.as_deref())),
            FilterAction::SetTor(self.tor),
        ]
    }

    pub(crate) fn apply(&self, view: &mut DirectoryView<'_>) {
        for action in self.actions() {
            view.dispatch(action);
        }
    }
}
