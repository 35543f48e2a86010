//! Configuration management for chartlint.
//!
//! Two optional YAML files are merged, project over global:
//! 1. Global config (`~/.config/chartlint/config.yaml`)
//! 2. Project config (`.chartlint.yaml` in the working directory)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;
pub mod validation;

pub use defaults::*;

/// File name of the project config in the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".chartlint.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub lint: LintConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration with full merge semantics.
    pub fn load() -> Result<Self> {
        Self::load_merged_from(
            global_config_path().as_deref(),
            Some(Path::new(PROJECT_CONFIG_FILE)),
        )
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config = PartialConfig::parse(content)?.merge_with(PartialConfig::default());
        config.validate()?;
        Ok(config)
    }

    /// Load merged configuration from the given global and project paths.
    /// Missing files are skipped; project values override global values.
    pub fn load_merged_from(global_path: Option<&Path>, project_path: Option<&Path>) -> Result<Self> {
        let global_config = global_path
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        let project_config = project_path
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        let config = global_config.merge_with(project_config);
        config.validate()?;

        tracing::debug!(
            strict = config.lint.strict,
            format = %config.output.format,
            "loaded configuration"
        );

        Ok(config)
    }
}

/// Returns the path to the global config file at ~/.config/chartlint/config.yaml
pub fn global_config_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config/chartlint/config.yaml"))
}

/// Partial config for merging - all fields optional
#[derive(Debug, Deserialize, Default)]
struct PartialConfig {
    pub lint: Option<PartialLintConfig>,
    pub output: Option<PartialOutputConfig>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialLintConfig {
    pub strict: Option<bool>,
    pub disable: Option<Vec<String>>,
    pub paths: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialOutputConfig {
    pub format: Option<OutputFormat>,
}

impl PartialConfig {
    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        // An empty file is a valid, empty config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let partial: Option<Self> =
            serde_yaml::from_str(content).context("Failed to parse config YAML")?;
        Ok(partial.unwrap_or_default())
    }

    /// Merge this global config with a project config, returning the merged result.
    /// Values from the project config take precedence over global.
    fn merge_with(self, project: PartialConfig) -> Config {
        let global_lint = self.lint.unwrap_or_default();
        let project_lint = project.lint.unwrap_or_default();
        let global_output = self.output.unwrap_or_default();
        let project_output = project.output.unwrap_or_default();

        Config {
            lint: LintConfig {
                // Project value > global value > default
                strict: project_lint.strict.or(global_lint.strict).unwrap_or(false),
                disable: project_lint
                    .disable
                    .or(global_lint.disable)
                    .unwrap_or_default(),
                paths: project_lint
                    .paths
                    .or(global_lint.paths)
                    .unwrap_or_else(defaults::default_paths),
            },
            output: OutputConfig {
                format: project_output
                    .format
                    .or(global_output.format)
                    .unwrap_or_default(),
            },
        }
    }
}
