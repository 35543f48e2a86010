//! Common helpers for chartlint integration tests

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub fn get_chartlint_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_chartlint"))
}

/// Run chartlint in `dir` with an isolated HOME and colors disabled.
pub fn run_chartlint(dir: &Path, args: &[&str]) -> Output {
    Command::new(get_chartlint_binary())
        .args(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env("NO_COLOR", "1")
        .env_remove("CHARTLINT_QUIET")
        .env_remove("CHARTLINT_LOG")
        .output()
        .expect("Failed to run chartlint")
}

/// Create `<root>/<name>/Chart.yaml` with the given content and return the chart dir.
pub fn write_chart(root: &Path, name: &str, content: &str) -> PathBuf {
    let dir = root.join(name);
    fs::create_dir_all(&dir).expect("Failed to create chart dir");
    fs::write(dir.join("Chart.yaml"), content).expect("Failed to write Chart.yaml");
    dir
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
