//! CLI command handlers for `GpaTracker`.
//!
//! Each subcommand is implemented in its own submodule.

pub mod calc;
pub mod config;
pub mod report;
pub mod scales;
pub mod session;

use gpa_tracker::config::Config;
use gpa_tracker::core::error::GpaError;
use gpa_tracker::core::scale::ScaleId;

/// Scale from an explicit `--scale` flag, falling back to the configured default
///
/// # Errors
/// Returns `GpaError::UnknownScale` if the flag names an unsupported scale.
pub fn resolve_scale(flag: Option<&str>, config: &Config) -> Result<ScaleId, GpaError> {
    flag.map_or_else(|| Ok(config.default_scale()), str::parse)
}
