//! # chartlint - chart metadata validation
//!
//! Validates the descriptive metadata (`Chart.yaml`) attached to a packaged
//! chart before it is built, installed, or published.
//!
//! ## Modules
//!
//! - [`chart`] - Metadata model, `Chart.yaml` loading, and the validators
//! - [`lint`] - Per-chart linting: core validation plus advisory rules
//! - [`report`] - Lint issues, summaries, and text/JSON rendering
//! - [`config`] - Layered global/project configuration
//! - [`ui`] - Terminal colors and icons
//!
//! ## Example
//!
//! ```
//! use chartlint::chart::{Dependency, Metadata, ValidationError};
//!
//! let md = Metadata::new("web", "v2", "1.0.0")
//!     .with_type("application")
//!     .with_dependency(Dependency::new("db").with_alias("primary-db"));
//! assert!(md.validate().is_ok());
//!
//! let bad = Metadata::new("web", "v2", "1.0.0")
//!     .with_dependency(Dependency::new("db").with_alias("primary db"));
//! assert_eq!(
//!     bad.validate(),
//!     Err(ValidationError::DisallowedCharacters { dependency: "db".into() })
//! );
//! ```

pub mod chart;
pub mod config;
pub mod lint;
pub mod report;
pub mod ui;
