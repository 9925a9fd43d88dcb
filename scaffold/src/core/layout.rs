//! Path and naming rules for the generated tree.
//!
//! ```text
//! <base>/[<nest>/]aoc<year>/
//!   Day01.txt  Day01_test.txt  Day01.<ext>
//!   ...
//! ```

use std::path::{Path, PathBuf};

use super::slot::Slot;
use super::types::FileKind;

/// Folder name (and package name) for a year, e.g. `aoc2023`.
pub fn year_folder(year: &str) -> String {
    format!("aoc{year}")
}

/// Canonical locations for one year's scaffold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldLayout {
    pub target_dir: PathBuf,
    /// Package declared at the top of every stub.
    pub package: String,
    pub extension: String,
}

impl ScaffoldLayout {
    /// `nest_dir` is a source root, so it is part of the path but not the package.
    pub fn new(base_dir: &Path, nest_dir: Option<&str>, year: &str, extension: &str) -> Self {
        let folder = year_folder(year);
        let mut target_dir = base_dir.to_path_buf();
        if let Some(nest) = nest_dir {
            target_dir.push(nest);
        }
        target_dir.push(&folder);
        Self {
            target_dir,
            package: folder,
            extension: extension.to_string(),
        }
    }

    pub fn slot_files(&self, slot: Slot) -> SlotFiles {
        let label = slot.label();
        SlotFiles {
            input: self.target_dir.join(format!("{label}.txt")),
            test_input: self.target_dir.join(format!("{label}_test.txt")),
            source: self.target_dir.join(format!("{label}.{}", self.extension)),
            slot,
            label,
        }
    }
}

/// The file triple belonging to a single slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotFiles {
    pub slot: Slot,
    pub label: String,
    pub input: PathBuf,
    pub test_input: PathBuf,
    pub source: PathBuf,
}

impl SlotFiles {
    pub fn path(&self, kind: FileKind) -> &Path {
        match kind {
            FileKind::Input => &self.input,
            FileKind::TestInput => &self.test_input,
            FileKind::Source => &self.source,
        }
    }

    /// Files in creation order: input, test input, source.
    pub fn iter(&self) -> impl Iterator<Item = (FileKind, &Path)> {
        FileKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.path(kind)))
    }
}
