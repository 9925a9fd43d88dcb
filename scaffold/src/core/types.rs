//! Shared enums for scaffold generation and inspection.

use serde::{Deserialize, Serialize};

/// How existing files decide what gets created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipPolicy {
    /// Check each file on its own; only missing files are created.
    #[default]
    File,
    /// Treat a slot as done once its input placeholder exists.
    Slot,
}

/// The three files that make up a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    /// `<label>.txt`, empty.
    Input,
    /// `<label>_test.txt`, empty.
    TestInput,
    /// `<label>.<ext>`, rendered from the stub template.
    Source,
}

impl FileKind {
    pub const ALL: [FileKind; 3] = [FileKind::Input, FileKind::TestInput, FileKind::Source];

    pub fn is_placeholder(self) -> bool {
        !matches!(self, FileKind::Source)
    }
}

/// What happened to a single file during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileOutcome {
    Created,
    /// Already present; left untouched.
    Existing,
    /// Not inspected because the slot was already started (`SkipPolicy::Slot`).
    Skipped,
    /// Missing; a dry run would have created it.
    WouldCreate,
}

/// Read-only status of a slot on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    Complete,
    Partial,
    Missing,
}

impl SlotStatus {
    pub fn from_present(present: usize, total: usize) -> Self {
        match present {
            0 => SlotStatus::Missing,
            n if n >= total => SlotStatus::Complete,
            _ => SlotStatus::Partial,
        }
    }
}
