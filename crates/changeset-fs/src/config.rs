//! Format-agnostic configuration loading

use serde::de::DeserializeOwned;

use crate::{Error, NormalizedPath, Result, io};

/// Format-agnostic configuration store.
///
/// Detects the format from the file extension and deserializes into any
/// `serde` type.
#[derive(Debug, Default)]
pub struct ConfigStore;

impl ConfigStore {
    /// Create a new ConfigStore.
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let extension = path.extension().unwrap_or("");
        let format = match extension.to_lowercase().as_str() {
            "toml" => "TOML",
            "json" => "JSON",
            "yaml" | "yml" => "YAML",
            _ => {
                return Err(Error::UnsupportedFormat {
                    extension: extension.to_string(),
                });
            }
        };

        let content = io::read_text(path)?;
        let parsed = match format {
            "TOML" => toml::from_str(&content).map_err(|e| e.to_string()),
            "JSON" => serde_json::from_str(&content).map_err(|e| e.to_string()),
            _ => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
        };

        parsed.map_err(|message| Error::ConfigParse {
            path: path.to_native(),
            format: format.into(),
            message,
        })
    }

    /// Load configuration if the file exists, `None` otherwise.
    pub fn load_optional<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<Option<T>> {
        if !path.is_file() {
            tracing::debug!(path = %path, "No config file found, skipping");
            return Ok(None);
        }
        tracing::debug!(path = %path, "Loading config");
        self.load(path).map(Some)
    }
}
