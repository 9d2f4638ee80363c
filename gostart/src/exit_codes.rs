//! Stable exit codes for the gostart CLI.

/// Scaffolding completed (or `--help`/`--version` was printed).
pub const OK: i32 = 0;
/// Usage error, missing environment tool, or a failed action.
pub const FAILURE: i32 = 1;
