//! Idempotent day-by-day scaffold generator for puzzle calendars.
//!
//! For a given year the generator ensures a folder with one slot per day,
//! each made of two empty input placeholders and a stub source file. Files
//! are only ever created, never rewritten, so running it again fills gaps
//! and otherwise does nothing.
//!
//! - **[`core`]**: Pure, deterministic logic (labels, layout, validation).
//! - **[`io`]**: Side-effecting helpers (config, templates, file creation).
//!
//! Orchestration modules ([`generate`], [`check`]) combine both to implement
//! the CLI commands.

pub mod check;
pub mod core;
pub mod exit_codes;
pub mod generate;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
