//! Chart metadata model, loading and validation.

pub mod load;
pub mod metadata;
pub mod validate;

pub use load::{chart_file_path, CHART_FILE};
pub use metadata::{Dependency, Maintainer, Metadata, API_VERSIONS, CHART_TYPES};
pub use validate::{
    is_valid_alias, validate_dependency, validate_metadata, MetadataField, ValidationError,
};
