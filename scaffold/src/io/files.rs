//! Create-if-missing filesystem primitives.

use std::fs::{self, File};
use std::io::{self, ErrorKind, Write};
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tempfile::NamedTempFile;

/// Result of [`create_if_missing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    /// The path already existed and was not touched.
    Existing,
}

/// Create `path` (and parents) as a directory; succeed if it already is one.
pub fn create_dir(path: &Path) -> Result<()> {
    if path.exists() && !path.is_dir() {
        return Err(anyhow!("{} exists but is not a directory", path.display()));
    }
    fs::create_dir_all(path).with_context(|| format!("create directory {}", path.display()))
}

/// Write `contents` to `path` only if nothing exists there yet.
///
/// Contents go to a temp file in the same directory first, which is then
/// linked into place without clobbering. A failed write leaves no file behind,
/// and a concurrent creator wins and is reported as [`WriteOutcome::Existing`].
pub fn create_if_missing(path: &Path, contents: &str) -> Result<WriteOutcome> {
    create_with(path, |file| file.write_all(contents.as_bytes()))
}

fn create_with<F>(path: &Path, write: F) -> Result<WriteOutcome>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    if path.exists() {
        return Ok(WriteOutcome::Existing);
    }
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(parent)
        .with_context(|| format!("create file {}", path.display()))?;
    write(tmp.as_file_mut())
        .and_then(|()| tmp.as_file().sync_all())
        .with_context(|| format!("write file {}", path.display()))?;
    match tmp.persist_noclobber(path) {
        Ok(_) => Ok(WriteOutcome::Created),
        Err(err) if err.error.kind() == ErrorKind::AlreadyExists => Ok(WriteOutcome::Existing),
        Err(err) => Err(err.error).with_context(|| format!("create file {}", path.display())),
    }
}
