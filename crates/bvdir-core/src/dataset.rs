//! Read-only access to the static provider dataset.
//!
//! The dataset is a single JSON array produced ahead of time. It is read once
//! per process; any malformed entry rejects the whole artifact.

use std::path::Path;

use crate::error::DatasetError;
use crate::providers::ProviderRecord;

/// The loaded provider collection. Immutable after construction.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    providers: Vec<ProviderRecord>,
}

impl Dataset {
    /// Wrap an already validated provider list.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Validation`] if any record breaks a dataset
    /// invariant (e.g. an empty name).
    pub fn new(providers: Vec<ProviderRecord>) -> Result<Self, DatasetError> {
        validate_providers(&providers)?;
        Ok(Self { providers })
    }

    #[must_use]
    pub fn providers(&self) -> &[ProviderRecord] {
        &self.providers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Case-insensitive exact lookup by provider name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&ProviderRecord> {
        let needle = name.trim().to_lowercase();
        self.providers
            .iter()
            .find(|p| p.name.to_lowercase() == needle)
    }
}

/// Load and validate the provider dataset from a JSON file.
///
/// # Errors
///
/// Returns `DatasetError` if the file cannot be read, parsed, or fails validation.
pub fn load_providers(path: &Path) -> Result<Dataset, DatasetError> {
    let content = std::fs::read_to_string(path).map_err(|e| DatasetError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let dataset = parse_providers(&content, &path.display().to_string())?;
    tracing::info!(
        providers = dataset.len(),
        path = %path.display(),
        "loaded provider dataset"
    );
    Ok(dataset)
}

/// Parse and validate a dataset from an in-memory JSON string.
///
/// `context` names the source in error messages.
///
/// # Errors
///
/// Returns `DatasetError::Parse` for invalid JSON or missing fields and
/// `DatasetError::Validation` for records that parse but break an invariant.
pub fn parse_providers(content: &str, context: &str) -> Result<Dataset, DatasetError> {
    let providers: Vec<ProviderRecord> =
        serde_json::from_str(content).map_err(|e| DatasetError::Parse {
            context: context.to_string(),
            source: e,
        })?;
    Dataset::new(providers)
}

fn validate_providers(providers: &[ProviderRecord]) -> Result<(), DatasetError> {
    for (index, provider) in providers.iter().enumerate() {
        if provider.name.trim().is_empty() {
            return Err(DatasetError::Validation {
                index,
                reason: "provider name must be non-empty".to_string(),
            });
        }
        for coord in &provider.coordinates {
            if !coord.lat.is_finite() || !coord.lng.is_finite() {
                return Err(DatasetError::Validation {
                    index,
                    reason: format!(
                        "provider '{}' has a non-finite coordinate for '{}'",
                        provider.name, coord.label
                    ),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "dataset_test.rs"]
mod tests;
