//! Stable exit codes for gate CLI commands.

/// Command succeeded; for `run`, the verdict was `Success`.
pub const OK: i32 = 0;
/// `run` finished with a non-success verdict.
pub const FAILED: i32 = 1;
/// Catalog, challenge lookup, or config failure before any run.
pub const FATAL: i32 = 2;
