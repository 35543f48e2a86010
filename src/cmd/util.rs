//! `version`, `completion` and `man`: output derived from the clap command.
//!
//! The binary name and version come from [`Cli::command`], so completions,
//! the man page file and the version banner always agree with the parser.

use anyhow::{Context, Result};
use clap::{Command, CommandFactory};
use clap_complete::{generate, Shell};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::Cli;

/// Man page section for user commands.
const MAN_SECTION: &str = "1";

/// Print `<name> <version>`, plus commit and build date when verbose.
pub fn cmd_version(verbose: bool) -> Result<()> {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or(env!("CARGO_PKG_VERSION"));
    println!("{} {}", cmd.get_name(), version);

    if verbose {
        println!("commit: {}", env!("GIT_SHA"));
        println!("built: {}", env!("BUILD_DATE"));
    }

    Ok(())
}

/// File name of the rendered man page, e.g. `chartlint.1`.
fn man_filename(cmd: &Command) -> String {
    format!("{}.{}", cmd.get_name(), MAN_SECTION)
}

/// Render the man page into `out_dir` (default: current directory).
pub fn cmd_man(out_dir: Option<&Path>) -> Result<PathBuf> {
    let cmd = Cli::command();
    let man_path = out_dir.unwrap_or(Path::new(".")).join(man_filename(&cmd));

    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd)
        .section(MAN_SECTION)
        .render(&mut buffer)
        .context("Failed to render man page")?;

    if let Some(dir) = man_path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    fs::write(&man_path, buffer)
        .with_context(|| format!("Failed to write {}", man_path.display()))?;

    println!("Man page written to: {}", man_path.display());
    Ok(man_path)
}

/// Write a completion script for `shell` to stdout.
pub fn cmd_completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
    Ok(())
}
