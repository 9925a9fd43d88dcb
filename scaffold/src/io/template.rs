//! Stub source rendering.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use minijinja::Environment;
use serde::Serialize;

const DAY_TEMPLATE: &str = include_str!("templates/day.kt.j2");

/// Variables available to stub templates.
#[derive(Debug, Clone, Serialize)]
pub struct StubContext<'a> {
    /// Slot label, e.g. `Day07`.
    pub label: &'a str,
    /// Year token exactly as given.
    pub year: &'a str,
    /// Package of the year folder, e.g. `aoc2023`.
    pub package: &'a str,
    /// Numeric slot index.
    pub day: u32,
}

/// Name the stub is registered under.
const STUB: &str = "stub";

/// Template engine wrapper around minijinja.
///
/// Holds either the built-in Kotlin stub or a user-provided template, compiled
/// once. Trailing newlines are kept so rendered files end exactly like the
/// template.
pub struct StubTemplate {
    env: Environment<'static>,
}

impl StubTemplate {
    pub fn builtin() -> Self {
        let mut env = stub_environment();
        env.add_template(STUB, DAY_TEMPLATE)
            .expect("day stub template should be valid");
        Self { env }
    }

    /// Load a custom template, rejecting syntax errors before any file is written.
    pub fn from_file(path: &Path) -> Result<Self> {
        let source =
            fs::read_to_string(path).with_context(|| format!("read template {}", path.display()))?;
        let mut env = stub_environment();
        env.add_template_owned(STUB, source)
            .with_context(|| format!("parse template {}", path.display()))?;
        Ok(Self { env })
    }

    pub fn render(&self, ctx: &StubContext<'_>) -> Result<String> {
        self.env
            .get_template(STUB)
            .and_then(|template| template.render(ctx))
            .with_context(|| format!("render stub for {}", ctx.label))
    }
}

fn stub_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env
}
