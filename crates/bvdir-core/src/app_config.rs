use std::path::PathBuf;

use crate::map::MapBackendKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl Environment {
    /// Production builds write minified artifacts.
    #[must_use]
    pub fn minify_output(self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub env: Environment,
    /// Provider dataset JSON file.
    pub data_path: PathBuf,
    /// Path prefix the static site is served under, e.g. `/bitcoin-vps`.
    pub base_path: String,
    pub log_level: String,
    pub map_backend: MapBackendKind,
    pub map_zoom: u8,
    pub cluster_radius_px: u32,
}
