//! Shared module for helpers used by both the core and the CLI

pub mod numeric;
