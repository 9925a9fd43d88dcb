//! Test-only helpers for inspecting generated scaffolds.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Sorted names of the regular files directly inside `dir`.
pub fn list_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read dir")
        .map(|entry| entry.expect("dir entry"))
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// File name to contents for every regular file directly inside `dir`.
pub fn snapshot(dir: &Path) -> BTreeMap<String, String> {
    list_files(dir)
        .into_iter()
        .map(|name| {
            let contents = fs::read_to_string(dir.join(&name)).expect("read file");
            (name, contents)
        })
        .collect()
}

/// Temporary working directory for CLI tests.
pub struct TempWorkspace {
    dir: tempfile::TempDir,
}

impl TempWorkspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("tempdir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to `relative`, creating parents as needed.
    pub fn write(&self, relative: &str, contents: &str) {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(path, contents).expect("write file");
    }
}

impl Default for TempWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
