//! `chartlint lint`: validate and lint charts.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::process::ExitCode;

use chartlint::config::{Config, OutputFormat};
use chartlint::lint::lint_charts;
use chartlint::ui;

/// Lint the given charts, falling back to `lint.paths` from config when none
/// are given. Command-line flags override config.
pub fn cmd_lint(
    paths: &[PathBuf],
    strict: bool,
    format: Option<OutputFormat>,
    quiet: bool,
) -> Result<ExitCode> {
    let mut config = Config::load().context("Failed to load chartlint configuration")?;
    config.lint.strict |= strict;
    let format = format.unwrap_or(config.output.format);
    let quiet = quiet || ui::is_quiet();

    let paths: Vec<PathBuf> = if paths.is_empty() {
        config.lint.paths.iter().map(PathBuf::from).collect()
    } else {
        paths.to_vec()
    };

    let summary = lint_charts(&paths, &config.lint);

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                summary
                    .to_json()
                    .context("Failed to serialize lint results")?
            );
        }
        OutputFormat::Text => {
            summary.display_charts(quiet);
            if !quiet || !summary.is_valid() {
                summary.display_summary();
            }
        }
    }

    if summary.is_valid() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}
