//! I/O helpers for scaffold commands.

pub mod config;
pub mod files;
pub mod template;
