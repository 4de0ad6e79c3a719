//! Core module: grading scales, GPA arithmetic, history and reporting

pub mod aggregate;
pub mod calculator;
pub mod chart;
pub mod classification;
pub mod config;
pub mod error;
pub mod history;
pub mod models;
pub mod report;
pub mod scale;
pub mod session;
pub mod transcript;

pub use error::{GpaError, ValidationError};

/// Returns the current version of the `GpaTracker` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
