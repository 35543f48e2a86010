//! CLI entry point for chartlint.

mod cmd;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use chartlint::config::OutputFormat;

#[derive(Parser)]
#[command(name = "chartlint")]
#[command(version)]
#[command(about = "Validate chart metadata before packaging or publishing", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate and lint one or more charts
    Lint {
        /// Chart directories or Chart.yaml files (default: lint.paths from config)
        paths: Vec<PathBuf>,
        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Only show charts with problems
        #[arg(long, short)]
        quiet: bool,
    },
    /// Print the parsed metadata of a chart
    Show {
        /// Chart directory or Chart.yaml file
        #[arg(default_value = ".")]
        path: PathBuf,
    },
    /// Show version information (with -v, include build information)
    Version,
    /// Generate shell completions
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Generate the man page
    Man {
        /// Output directory (default: current directory)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

fn init_tracing(verbose: u8) {
    // CHARTLINT_LOG wins over -v when set
    let filter = EnvFilter::try_from_env("CHARTLINT_LOG").unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let verbose = cli.verbose > 0;

    match cli.command {
        Commands::Lint {
            paths,
            strict,
            format,
            quiet,
        } => cmd::lint::cmd_lint(&paths, strict, format, quiet),
        Commands::Show { path } => cmd::show::cmd_show(&path).map(|_| ExitCode::SUCCESS),
        Commands::Version => {
            cmd::util::cmd_version(verbose).map(|_| ExitCode::SUCCESS)
        }
        Commands::Completion { shell } => {
            cmd::util::cmd_completion(shell).map(|_| ExitCode::SUCCESS)
        }
        Commands::Man { out_dir } => {
            cmd::util::cmd_man(out_dir.as_deref()).map(|_| ExitCode::SUCCESS)
        }
    }
}
