use std::path::PathBuf;

use crate::app_config::{AppConfig, Environment};
use crate::map::{ClusterMap, MapBackendKind};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a working
/// development config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let env = parse_environment(&or_default("BVDIR_ENV", "development"))?;
    let data_path = PathBuf::from(or_default("BVDIR_DATA_PATH", "./data/providers.json"));
    let log_level = or_default("BVDIR_LOG_LEVEL", "info");

    let base_path = or_default("BVDIR_BASE_PATH", "/bitcoin-vps");
    if !base_path.starts_with('/') {
        return Err(invalid(
            "BVDIR_BASE_PATH",
            format!("'{base_path}' must start with '/'"),
        ));
    }
    let base_path = normalize_base_path(&base_path);

    let map_backend = or_default("BVDIR_MAP_BACKEND", "cluster")
        .parse::<MapBackendKind>()
        .map_err(|e| invalid("BVDIR_MAP_BACKEND", e.to_string()))?;

    let map_zoom = or_default("BVDIR_MAP_ZOOM", "2")
        .parse::<u8>()
        .map_err(|e| invalid("BVDIR_MAP_ZOOM", e.to_string()))?;
    if !(ClusterMap::MIN_ZOOM..=ClusterMap::MAX_ZOOM).contains(&map_zoom) {
        return Err(invalid(
            "BVDIR_MAP_ZOOM",
            format!(
                "{map_zoom} is outside {}..={}",
                ClusterMap::MIN_ZOOM,
                ClusterMap::MAX_ZOOM
            ),
        ));
    }

    let cluster_radius_px = or_default("BVDIR_CLUSTER_RADIUS_PX", "40")
        .parse::<u32>()
        .map_err(|e| invalid("BVDIR_CLUSTER_RADIUS_PX", e.to_string()))?;
    if cluster_radius_px == 0 {
        return Err(invalid(
            "BVDIR_CLUSTER_RADIUS_PX",
            "must be greater than zero".to_string(),
        ));
    }

    Ok(AppConfig {
        env,
        data_path,
        base_path,
        log_level,
        map_backend,
        map_zoom,
        cluster_radius_px,
    })
}

/// `/` stays as is; any other prefix loses trailing slashes.
fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything but `development`,
/// `test` or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "BVDIR_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
