use thiserror::Error;

/// Errors raised while loading the provider dataset.
///
/// Any of these aborts the load: the dataset is either fully valid or absent.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset {context}: {source}")]
    Parse {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid provider at index {index}: {reason}")]
    Validation { index: usize, reason: String },
}

/// Errors raised while building [`crate::AppConfig`] from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Errors raised while parsing user-facing selector values (facets, tor,
/// sort keys, backends).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown tor filter '{0}'; expected all, true, or false")]
    TorFilter(String),

    #[error("unknown sort key '{0}'; expected name, categories, regions, locations, or payments")]
    SortKey(String),

    #[error("unknown map backend '{0}'; expected cluster or globe")]
    MapBackend(String),
}
