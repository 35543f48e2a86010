//! `chartlint show`: print parsed chart metadata.

use anyhow::{Context, Result};
use std::path::Path;

use chartlint::chart::{chart_file_path, Metadata};

pub fn cmd_show(path: &Path) -> Result<()> {
    let metadata = Metadata::load(path)?.with_context(|| {
        format!(
            "No chart metadata found at {}",
            chart_file_path(path).display()
        )
    })?;

    let yaml = serde_yaml::to_string(&metadata).context("Failed to render chart metadata")?;
    print!("{}", yaml);

    Ok(())
}
