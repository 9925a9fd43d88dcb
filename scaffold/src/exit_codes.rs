//! Stable exit codes for scaffold CLI commands.

/// Command succeeded (or `check` found every slot complete).
pub const OK: i32 = 0;
/// Command failed due to invalid config/arguments or a filesystem error.
pub const FAILED: i32 = 1;
/// `check` found missing or partial slots. `2` is left to clap usage errors.
pub const INCOMPLETE: i32 = 3;
