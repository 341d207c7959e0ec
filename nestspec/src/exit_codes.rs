//! Stable exit codes for the CLI wrapper.

/// Every spec passed or was ignored.
pub const OK: i32 = 0;
/// At least one spec failed.
pub const FAILED: i32 = 1;
/// Invalid arguments or config, or the report could not be written.
pub const INVALID: i32 = 2;
