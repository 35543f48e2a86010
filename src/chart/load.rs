//! Loading chart metadata from `Chart.yaml`.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::metadata::Metadata;

/// File name of the metadata document inside a chart directory.
pub const CHART_FILE: &str = "Chart.yaml";

/// Resolve the metadata file for `path`.
///
/// A directory resolves to `<dir>/Chart.yaml`; anything else is taken to be
/// the metadata file itself.
pub fn chart_file_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(CHART_FILE)
    } else {
        path.to_path_buf()
    }
}

impl Metadata {
    /// Parse a `Chart.yaml` document.
    ///
    /// Returns `Ok(None)` for a blank document (empty, whitespace or comments
    /// only), which validation reports as missing metadata.
    pub fn parse(content: &str) -> Result<Option<Self>> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).context("Failed to parse chart metadata YAML")?;

        if value.is_null() {
            return Ok(None);
        }

        let metadata: Metadata =
            serde_yaml::from_value(value).context("Failed to decode chart metadata")?;

        Ok(Some(metadata))
    }

    /// Load metadata from a chart directory or a `Chart.yaml` path.
    ///
    /// A chart directory with no `Chart.yaml` yields `Ok(None)`.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let file = chart_file_path(path);

        if path.is_dir() && !file.exists() {
            tracing::debug!(chart = %path.display(), "no {} in chart directory", CHART_FILE);
            return Ok(None);
        }

        let content = fs::read_to_string(&file)
            .with_context(|| format!("Failed to read chart metadata from {}", file.display()))?;

        tracing::debug!(file = %file.display(), bytes = content.len(), "loaded chart metadata");

        Self::parse(&content).with_context(|| format!("Invalid metadata in {}", file.display()))
    }
}
