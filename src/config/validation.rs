//! Validation of loaded configuration.

use anyhow::Result;

use super::{Config, LintConfig};
use crate::lint::RULE_NAMES;

impl Config {
    /// Validate the merged configuration
    pub fn validate(&self) -> Result<()> {
        self.lint.validate()
    }
}

impl LintConfig {
    /// Validate lint configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(unknown) = self.disable.iter().find(|r| !RULE_NAMES.contains(&r.as_str())) {
            anyhow::bail!(
                "lint.disable contains unknown rule \"{}\" (known rules: {})",
                unknown,
                RULE_NAMES.join(", ")
            );
        }

        if self.paths.is_empty() {
            anyhow::bail!("lint.paths must not be empty");
        }

        Ok(())
    }
}
