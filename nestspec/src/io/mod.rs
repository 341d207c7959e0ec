//! Filesystem-facing helpers used by the CLI wrapper.

pub mod config;
pub mod report;
