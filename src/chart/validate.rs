//! Metadata and dependency validation.
//!
//! Checks run as a fixed-order guard chain and stop at the first failure, so
//! exactly one [`ValidationError`] is reported per call.

use std::fmt;
use thiserror::Error;

use super::metadata::{Dependency, Metadata, CHART_TYPES};

/// Required metadata field that was found empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataField {
    ApiVersion,
    Name,
    Version,
}

impl fmt::Display for MetadataField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataField::ApiVersion => write!(f, "apiVersion"),
            MetadataField::Name => write!(f, "name"),
            MetadataField::Version => write!(f, "version"),
        }
    }
}

/// A single chart metadata validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No metadata document was supplied.
    #[error("chart.metadata is required")]
    MissingMetadata,

    /// A required identity field is empty.
    #[error("chart.metadata.{0} is required")]
    MissingField(MetadataField),

    /// `type` is set to something other than a known chart type.
    #[error("chart.metadata.type must be application or library")]
    InvalidType(String),

    /// A dependency alias contains characters outside `[A-Za-z0-9_-]`.
    #[error("dependency {dependency:?} has disallowed characters in the alias")]
    DisallowedCharacters { dependency: String },
}

/// Validate an optional metadata value.
///
/// `None` models a chart with no metadata document at all and always yields
/// [`ValidationError::MissingMetadata`].
pub fn validate_metadata(metadata: Option<&Metadata>) -> Result<(), ValidationError> {
    metadata
        .ok_or(ValidationError::MissingMetadata)?
        .validate()
}

impl Metadata {
    /// Validate this metadata, returning the first failure found.
    ///
    /// Order: `apiVersion`, `name`, `version`, `type`, then each dependency in
    /// declaration order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_version.is_empty() {
            return Err(ValidationError::MissingField(MetadataField::ApiVersion));
        }
        if self.name.is_empty() {
            return Err(ValidationError::MissingField(MetadataField::Name));
        }
        if self.version.is_empty() {
            return Err(ValidationError::MissingField(MetadataField::Version));
        }
        if !self.r#type.is_empty() && !is_valid_chart_type(&self.r#type) {
            return Err(ValidationError::InvalidType(self.r#type.clone()));
        }

        for dependency in &self.dependencies {
            validate_dependency(dependency)?;
        }

        Ok(())
    }
}

/// Validate a single dependency's alias.
pub fn validate_dependency(dependency: &Dependency) -> Result<(), ValidationError> {
    if is_valid_alias(&dependency.alias) {
        Ok(())
    } else {
        Err(ValidationError::DisallowedCharacters {
            dependency: dependency.name.clone(),
        })
    }
}

/// Returns true if every character of `alias` is a letter, digit, `-` or `_`.
///
/// The empty alias is valid (no alias set).
pub fn is_valid_alias(alias: &str) -> bool {
    alias.chars().all(is_alias_char)
}

fn is_alias_char(c: char) -> bool {
    matches!(c, 'A'..='Z' | 'a'..='z' | '0'..='9' | '-' | '_')
}

fn is_valid_chart_type(chart_type: &str) -> bool {
    CHART_TYPES.contains(&chart_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_app() -> Metadata {
        Metadata::new("test", "v2", "1.0").with_type("application")
    }

    #[test]
    fn test_validate_table() {
        let cases: Vec<(Option<Metadata>, Result<(), ValidationError>)> = vec![
            (None, Err(ValidationError::MissingMetadata)),
            (
                Some(Metadata::new("test", "", "1.0")),
                Err(ValidationError::MissingField(MetadataField::ApiVersion)),
            ),
            (
                Some(Metadata::new("", "v2", "1.0")),
                Err(ValidationError::MissingField(MetadataField::Name)),
            ),
            (
                Some(Metadata::new("test", "v2", "")),
                Err(ValidationError::MissingField(MetadataField::Version)),
            ),
            (
                Some(Metadata::new("test", "v2", "1.0").with_type("test")),
                Err(ValidationError::InvalidType("test".to_string())),
            ),
            (Some(valid_app()), Ok(())),
            (
                Some(valid_app().with_dependency(
                    Dependency::new("dependency").with_alias("legal-alias"),
                )),
                Ok(()),
            ),
            (
                Some(valid_app().with_dependency(Dependency::new("bad").with_alias("illegal alias"))),
                Err(ValidationError::DisallowedCharacters {
                    dependency: "bad".to_string(),
                }),
            ),
        ];

        for (metadata, expected) in cases {
            assert_eq!(
                validate_metadata(metadata.as_ref()),
                expected,
                "metadata: {:?}",
                metadata
            );
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::MissingMetadata.to_string(),
            "chart.metadata is required"
        );
        assert_eq!(
            ValidationError::MissingField(MetadataField::ApiVersion).to_string(),
            "chart.metadata.apiVersion is required"
        );
        assert_eq!(
            ValidationError::MissingField(MetadataField::Name).to_string(),
            "chart.metadata.name is required"
        );
        assert_eq!(
            ValidationError::MissingField(MetadataField::Version).to_string(),
            "chart.metadata.version is required"
        );
        assert_eq!(
            ValidationError::InvalidType("test".into()).to_string(),
            "chart.metadata.type must be application or library"
        );
        assert_eq!(
            ValidationError::DisallowedCharacters {
                dependency: "bad".into()
            }
            .to_string(),
            "dependency \"bad\" has disallowed characters in the alias"
        );
    }

    #[test]
    fn test_api_version_checked_before_name() {
        let md = Metadata::new("", "", "");
        assert_eq!(
            md.validate(),
            Err(ValidationError::MissingField(MetadataField::ApiVersion))
        );
    }

    #[test]
    fn test_library_type_is_valid() {
        let md = Metadata::new("common", "v2", "0.1.0").with_type("library");
        assert!(md.validate().is_ok());
    }

    #[test]
    fn test_empty_type_is_valid() {
        let md = Metadata::new("test", "v1", "1.0");
        assert!(md.validate().is_ok());
    }

    #[test]
    fn test_type_is_case_sensitive() {
        let md = Metadata::new("test", "v2", "1.0").with_type("Application");
        assert!(matches!(md.validate(), Err(ValidationError::InvalidType(_))));
    }

    #[test]
    fn test_field_checks_precede_dependency_checks() {
        let md = Metadata::new("test", "v2", "1.0")
            .with_type("test")
            .with_dependency(Dependency::new("bad").with_alias("bad alias"));
        assert_eq!(
            md.validate(),
            Err(ValidationError::InvalidType("test".to_string()))
        );
    }

    #[test]
    fn test_first_bad_dependency_is_reported() {
        let md = valid_app()
            .with_dependency(Dependency::new("ok").with_alias("fine"))
            .with_dependency(Dependency::new("first").with_alias("a b"))
            .with_dependency(Dependency::new("second").with_alias("c$d"));
        assert_eq!(
            md.validate(),
            Err(ValidationError::DisallowedCharacters {
                dependency: "first".to_string()
            })
        );
    }

    #[test]
    fn test_validate_dependency_aliases() {
        let cases = [
            ("abcdefghijklmenopQRSTUVWXYZ-0123456780_", false),
            ("-okay", false),
            ("_okay", false),
            ("", false),
            ("- bad", true),
            (" bad", true),
            ("bad\nvalue", true),
            ("bad ", true),
            ("bad$", true),
            ("bad.alias", true),
            ("ünicode", true),
        ];

        for (alias, should_fail) in cases {
            let dep = Dependency::new("example").with_alias(alias);
            let result = validate_dependency(&dep);
            assert_eq!(result.is_err(), should_fail, "case {:?}", alias);
        }
    }

    #[test]
    fn test_dependency_error_names_dependency() {
        let dep = Dependency::new("postgresql").with_alias("db!");
        let err = validate_dependency(&dep).unwrap_err();
        assert!(err.to_string().contains("\"postgresql\""));
    }

    #[test]
    fn test_dependency_name_is_escaped_in_message() {
        let dep = Dependency::new("say \"hi\"\nthere").with_alias("a b");
        let err = validate_dependency(&dep).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"dependency "say \"hi\"\nthere" has disallowed characters in the alias"#
        );
    }

    #[test]
    fn test_validation_is_repeatable() {
        let md = Metadata::new("test", "", "1.0");
        assert_eq!(md.validate(), md.validate());
    }
}
