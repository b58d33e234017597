//! Core module for common functionality across all targets

pub mod config;
pub mod grading;
pub mod models;
pub mod report;
pub mod summary;
pub mod validation;

/// Returns the current version of the `GpaTracker` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
