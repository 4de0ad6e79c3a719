//! Shared library for `GpaTracker`
//! Contains the grading core used by the CLI and any other front end

pub mod core;
pub mod logger;
pub mod shared;

pub use crate::core::{config, get_version};
