//! Command handlers for the chartlint CLI

pub mod lint;
pub mod show;
pub mod util;
