pub mod app_config;
pub mod collate;
pub mod config;
pub mod dataset;
pub mod error;
pub mod facets;
pub mod filter;
pub mod map;
pub mod providers;
pub mod selection;
pub mod table;
pub mod view;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use dataset::{load_providers, parse_providers, Dataset};
pub use error::{ConfigError, DatasetError, ParseError};
pub use facets::{DirectorySummary, Facets};
pub use filter::{parse_facet_selector, FilterAction, FilterCriteria, TorFilter};
pub use map::{
    project, project_with_rng, ClusterMap, ClusterSize, ClusterSummary, Globe, MapBackend,
    MapBackendKind, Marker, PlotPoint,
};
pub use providers::{Coordinate, ProviderRecord};
pub use selection::{ProviderDetail, SelectionState};
pub use table::{SortDirection, SortKey, SortState, TableRow, TableView};
pub use view::{DirectoryView, FilterStatus};
