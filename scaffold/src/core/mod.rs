//! Deterministic, pure logic shared by the scaffold commands.
//!
//! Core modules must be free of I/O side effects. They compute labels, paths
//! and validation results that the orchestration layer acts upon.

pub mod layout;
pub mod settings;
pub mod slot;
pub mod types;
