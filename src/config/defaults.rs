//! Configuration structs and their default values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

default_fn!(default_paths, Vec<String>, vec![".".to_string()]);

/// Lint behaviour
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LintConfig {
    /// Treat warnings as failures
    #[serde(default)]
    pub strict: bool,
    /// Advisory rule names to skip
    #[serde(default)]
    pub disable: Vec<String>,
    /// Charts to lint when none are given on the command line (default: ["."])
    #[serde(default = "default_paths")]
    pub paths: Vec<String>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            strict: false,
            disable: Vec::new(),
            paths: default_paths(),
        }
    }
}

impl LintConfig {
    /// Returns true if the named advisory rule is enabled.
    pub fn is_enabled(&self, rule: &str) -> bool {
        !self.disable.iter().any(|r| r == rule)
    }
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}
