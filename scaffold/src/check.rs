//! Read-only inspection of a year's scaffold.

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use serde::Serialize;

use crate::core::slot::slots;
use crate::core::types::SlotStatus;
use crate::generate::GenerateOptions;

/// Status of one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotCheck {
    pub day: u32,
    pub label: String,
    pub status: SlotStatus,
    pub missing: Vec<PathBuf>,
}

/// Per-slot status of the target directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub target_dir: PathBuf,
    pub slots: Vec<SlotCheck>,
}

impl CheckOutcome {
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|s| s.status == SlotStatus::Complete)
    }

    pub fn count(&self, status: SlotStatus) -> usize {
        self.slots.iter().filter(|s| s.status == status).count()
    }
}

/// Inspect the scaffold described by `options` without modifying anything.
///
/// A missing target directory reports every slot as missing. A path that exists
/// with the wrong type (file vs. directory) is an error.
pub fn check_scaffold(options: &GenerateOptions) -> Result<CheckOutcome> {
    options.validate()?;
    let layout = options.layout();
    let dir_present = ensure_dir_or_absent(&layout.target_dir)?;

    let mut checks = Vec::new();
    for slot in slots(options.days) {
        let files = layout.slot_files(slot);
        let mut missing = Vec::new();
        if dir_present {
            for (_, path) in files.iter() {
                if !ensure_file_or_absent(path)? {
                    missing.push(path.to_path_buf());
                }
            }
        } else {
            missing.extend(files.iter().map(|(_, path)| path.to_path_buf()));
        }
        let total = files.iter().count();
        checks.push(SlotCheck {
            day: slot.index(),
            status: SlotStatus::from_present(total - missing.len(), total),
            label: files.label,
            missing,
        });
    }

    Ok(CheckOutcome {
        target_dir: layout.target_dir,
        slots: checks,
    })
}

fn ensure_dir_or_absent(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    if !path.is_dir() {
        return Err(anyhow!("expected directory {}", path.display()));
    }
    Ok(true)
}

fn ensure_file_or_absent(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    if !path.is_file() {
        return Err(anyhow!("expected file {}", path.display()));
    }
    Ok(true)
}
