//! Lint results and their presentation.
//!
//! Collects per-chart issues into a [`LintSummary`] and renders it either as
//! colored terminal output or as JSON.

use colored::Colorize;
use serde::Serialize;

use crate::ui;

/// Severity level for lint issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message
    Info,
    /// Warning - should be addressed but not critical
    Warning,
    /// Error - must be fixed
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// A single lint issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintIssue {
    pub severity: Severity,
    /// Rule that produced the issue (`metadata`, `load`, or an advisory rule)
    pub rule: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl LintIssue {
    pub fn new(severity: Severity, rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            rule: rule.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Add a suggestion to this issue
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Display the issue with colored output
    pub fn display(&self) {
        println!(
            "  {} [{}] {}",
            ui::severity_icon(self.severity),
            self.rule.cyan(),
            self.message
        );

        if let Some(ref suggestion) = self.suggestion {
            println!("      {} {}", "→".cyan(), suggestion);
        }
    }
}

/// Outcome of linting one chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartStatus {
    Passed,
    Warned,
    Failed,
}

/// Issues found for a single chart
#[derive(Debug, Clone, Serialize)]
pub struct ChartReport {
    /// Path the chart was loaded from
    pub chart: String,
    /// Chart name, when metadata could be read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub issues: Vec<LintIssue>,
}

impl ChartReport {
    pub fn new(chart: impl Into<String>) -> Self {
        Self {
            chart: chart.into(),
            name: None,
            issues: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    pub fn has_warnings(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Warning)
    }

    /// Status of this chart; in strict mode warnings fail the chart.
    pub fn status(&self, strict: bool) -> ChartStatus {
        if self.has_errors() || (strict && self.has_warnings()) {
            ChartStatus::Failed
        } else if self.has_warnings() {
            ChartStatus::Warned
        } else {
            ChartStatus::Passed
        }
    }
}

/// Result of linting a set of charts
#[derive(Debug, Serialize)]
pub struct LintSummary {
    pub strict: bool,
    pub total: usize,
    pub passed: usize,
    pub warned: usize,
    pub failed: usize,
    pub charts: Vec<ChartReport>,
}

impl LintSummary {
    pub fn new(strict: bool) -> Self {
        Self {
            strict,
            total: 0,
            passed: 0,
            warned: 0,
            failed: 0,
            charts: Vec::new(),
        }
    }

    /// Record a chart report and update the counters
    pub fn add(&mut self, report: ChartReport) {
        self.total += 1;
        match report.status(self.strict) {
            ChartStatus::Passed => self.passed += 1,
            ChartStatus::Warned => self.warned += 1,
            ChartStatus::Failed => self.failed += 1,
        }
        self.charts.push(report);
    }

    /// Check if every chart passed
    pub fn is_valid(&self) -> bool {
        self.failed == 0
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.charts
            .iter()
            .flat_map(|c| &c.issues)
            .filter(|i| i.severity == severity)
            .count()
    }

    /// Render as pretty JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Display each chart and its issues. Passing charts are omitted in quiet mode.
    pub fn display_charts(&self, quiet: bool) {
        for report in &self.charts {
            let status = report.status(self.strict);
            if quiet && status == ChartStatus::Passed {
                continue;
            }

            let label = match &report.name {
                Some(name) => format!("{} ({})", name, report.chart),
                None => report.chart.clone(),
            };
            println!("{} {}", ui::status_icon(status), label.bold());

            for issue in &report.issues {
                if quiet && issue.severity == Severity::Info {
                    continue;
                }
                issue.display();
            }
        }
    }

    /// Display a summary of the lint run
    pub fn display_summary(&self) {
        println!();
        println!("{}", "━".repeat(60).cyan());

        let status_icon = if self.is_valid() {
            "✓".green()
        } else {
            "✗".red()
        };

        print!("{} Lint: ", status_icon);

        if self.total > 0 {
            print!(
                "{} {} linted",
                self.total,
                if self.total == 1 { "chart" } else { "charts" }
            );

            if self.passed > 0 {
                print!(", {} {}", self.passed, "passed".green());
            }
            if self.warned > 0 {
                print!(", {} {}", self.warned, "warned".yellow());
            }
            if self.failed > 0 {
                print!(", {} {}", self.failed, "failed".red());
            }
            println!();
        } else {
            println!("no charts to lint");
        }

        let error_count = self.error_count();
        let warning_count = self.warning_count();

        if error_count > 0 || warning_count > 0 {
            print!("  ");
            if error_count > 0 {
                print!(
                    "{} {}",
                    error_count,
                    if error_count == 1 { "error" } else { "errors" }.red()
                );
            }
            if error_count > 0 && warning_count > 0 {
                print!(", ");
            }
            if warning_count > 0 {
                print!(
                    "{} {}",
                    warning_count,
                    if warning_count == 1 {
                        "warning"
                    } else {
                        "warnings"
                    }
                    .yellow()
                );
            }
            println!();
        }

        println!("{}", "━".repeat(60).cyan());
    }
}
