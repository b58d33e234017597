//! Shared library for `GpaTracker`
//! Contains the grading engine, transcript store, and reporting used by the CLI

pub mod core;
pub mod logger;

pub use crate::core::config;
pub use crate::core::get_version;
