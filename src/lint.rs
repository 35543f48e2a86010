//! Chart linting: core metadata validation plus advisory rules.
//!
//! Each chart yields at most one error from [`Metadata::validate`]. Advisory
//! rules only run once the metadata is valid and can be switched off by name
//! through `lint.disable`.

use std::path::Path;

use crate::chart::{validate_metadata, Metadata, ValidationError, API_VERSIONS};
use crate::config::LintConfig;
use crate::report::{ChartReport, LintIssue, LintSummary, Severity};

/// Rule name for core metadata validation failures.
pub const RULE_METADATA: &str = "metadata";
/// Rule name for charts whose metadata could not be read or parsed.
pub const RULE_LOAD: &str = "load";

pub const RULE_ICON: &str = "icon";
pub const RULE_DEPRECATED: &str = "deprecated";
pub const RULE_API_VERSION: &str = "api-version";

/// Advisory rules that may be disabled in config.
pub const RULE_NAMES: &[&str] = &[RULE_ICON, RULE_DEPRECATED, RULE_API_VERSION];

/// Lint already-loaded metadata.
pub fn lint_metadata(metadata: Option<&Metadata>, config: &LintConfig) -> Vec<LintIssue> {
    if let Err(err) = validate_metadata(metadata) {
        return vec![validation_issue(&err)];
    }

    let Some(metadata) = metadata else {
        return Vec::new();
    };

    let mut issues = Vec::new();

    if config.is_enabled(RULE_ICON) && metadata.icon.is_empty() {
        issues.push(
            LintIssue::new(Severity::Info, RULE_ICON, "icon is recommended")
                .with_suggestion("Add an `icon` URL to Chart.yaml"),
        );
    }

    if config.is_enabled(RULE_DEPRECATED) && metadata.deprecated {
        issues.push(LintIssue::new(
            Severity::Warning,
            RULE_DEPRECATED,
            "chart is deprecated",
        ));
    }

    if config.is_enabled(RULE_API_VERSION)
        && !API_VERSIONS.contains(&metadata.api_version.as_str())
    {
        issues.push(
            LintIssue::new(
                Severity::Warning,
                RULE_API_VERSION,
                format!(
                    "chart.metadata.apiVersion \"{}\" is not a known chart API version",
                    metadata.api_version
                ),
            )
            .with_suggestion(format!("Use one of: {}", API_VERSIONS.join(", "))),
        );
    }

    for issue in &issues {
        tracing::debug!(rule = %issue.rule, severity = %issue.severity, "advisory issue");
    }

    issues
}

/// Load and lint the chart at `path` (a chart directory or a Chart.yaml file).
pub fn lint_chart(path: &Path, config: &LintConfig) -> ChartReport {
    let mut report = ChartReport::new(path.display().to_string());

    match Metadata::load(path) {
        Ok(metadata) => {
            report.name = metadata
                .as_ref()
                .map(|m| m.name.clone())
                .filter(|n| !n.is_empty());
            report.issues = lint_metadata(metadata.as_ref(), config);
        }
        Err(err) => {
            tracing::debug!(chart = %path.display(), error = %err, "failed to load chart");
            report
                .issues
                .push(LintIssue::new(Severity::Error, RULE_LOAD, format!("{:#}", err)));
        }
    }

    report
}

/// Lint every chart in `paths`; one failing chart never stops the others.
pub fn lint_charts<P: AsRef<Path>>(paths: &[P], config: &LintConfig) -> LintSummary {
    let mut summary = LintSummary::new(config.strict);

    for path in paths {
        let path = path.as_ref();
        tracing::debug!(chart = %path.display(), "linting chart");
        summary.add(lint_chart(path, config));
    }

    summary
}

fn validation_issue(err: &ValidationError) -> LintIssue {
    let issue = LintIssue::new(Severity::Error, RULE_METADATA, err.to_string());

    match err {
        ValidationError::MissingMetadata => {
            issue.with_suggestion("Add a Chart.yaml to the chart directory")
        }
        ValidationError::MissingField(field) => {
            issue.with_suggestion(format!("Set `{}` in Chart.yaml", field))
        }
        ValidationError::InvalidType(value) => issue.with_suggestion(format!(
            "Replace type \"{}\" with application or library, or remove it",
            value
        )),
        ValidationError::DisallowedCharacters { .. } => {
            issue.with_suggestion("Use only letters, digits, '-' and '_' in the alias")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{Dependency, CHART_FILE};
    use std::fs;
    use tempfile::TempDir;

    fn complete() -> Metadata {
        let mut md = Metadata::new("web", "v2", "1.0.0").with_type("application");
        md.icon = "https://example.com/icon.png".to_string();
        md
    }

    #[test]
    fn test_clean_chart_has_no_issues() {
        assert!(lint_metadata(Some(&complete()), &LintConfig::default()).is_empty());
    }

    #[test]
    fn test_missing_metadata_is_single_error() {
        let issues = lint_metadata(None, &LintConfig::default());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].rule, RULE_METADATA);
        assert_eq!(issues[0].message, "chart.metadata is required");
    }

    #[test]
    fn test_validation_error_suppresses_advisories() {
        let mut md = Metadata::new("web", "v2", "").with_type("application");
        md.deprecated = true;

        let issues = lint_metadata(Some(&md), &LintConfig::default());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "chart.metadata.version is required");
    }

    #[test]
    fn test_bad_alias_is_reported() {
        let md = complete().with_dependency(Dependency::new("bad").with_alias("illegal alias"));
        let issues = lint_metadata(Some(&md), &LintConfig::default());
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("\"bad\""));
    }

    #[test]
    fn test_advisory_rules() {
        let mut md = Metadata::new("web", "v3", "1.0.0");
        md.deprecated = true;

        let issues = lint_metadata(Some(&md), &LintConfig::default());
        let rules: Vec<_> = issues.iter().map(|i| i.rule.as_str()).collect();
        assert_eq!(rules, vec![RULE_ICON, RULE_DEPRECATED, RULE_API_VERSION]);
        assert_eq!(issues[0].severity, Severity::Info);
        assert_eq!(issues[1].severity, Severity::Warning);
        assert!(issues[2].message.contains("\"v3\""));
    }

    #[test]
    fn test_disabled_rules_are_skipped() {
        let mut md = Metadata::new("web", "v2", "1.0.0");
        md.deprecated = true;
        let config = LintConfig {
            disable: vec![RULE_ICON.to_string(), RULE_DEPRECATED.to_string()],
            ..Default::default()
        };

        assert!(lint_metadata(Some(&md), &config).is_empty());
    }

    #[test]
    fn test_lint_chart_directory() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CHART_FILE),
            "apiVersion: v2\nname: demo\nversion: 0.1.0\ntype: library\n",
        )
        .unwrap();

        let report = lint_chart(tmp.path(), &LintConfig::default());
        assert_eq!(report.name.as_deref(), Some("demo"));
        assert!(!report.has_errors());
    }

    #[test]
    fn test_lint_chart_malformed_yaml() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CHART_FILE), "name: [oops").unwrap();

        let report = lint_chart(tmp.path(), &LintConfig::default());
        assert!(report.has_errors());
        assert_eq!(report.issues[0].rule, RULE_LOAD);
        assert!(report.name.is_none());
    }

    #[test]
    fn test_lint_charts_continues_after_failure() {
        let tmp = TempDir::new().unwrap();
        let good = tmp.path().join("good");
        let empty = tmp.path().join("empty");
        fs::create_dir_all(&good).unwrap();
        fs::create_dir_all(&empty).unwrap();
        fs::write(
            good.join(CHART_FILE),
            "apiVersion: v2\nname: good\nversion: 1.0.0\nicon: x.png\n",
        )
        .unwrap();

        let summary = lint_charts(&[empty, good], &LintConfig::default());
        assert_eq!(summary.total, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.passed, 1);
        assert_eq!(
            summary.charts[0].issues[0].message,
            "chart.metadata is required"
        );
    }
}
