//! Exit codes for the CLI

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// Changelog does not parse, or strict validation found warnings
pub const VALIDATION_ERROR: i32 = 5;

/// `fmt --check` found a changelog that is not in canonical form
pub const CHECK_FAILED: i32 = 6;
