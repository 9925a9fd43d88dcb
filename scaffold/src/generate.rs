//! Orchestration for generating a year's scaffold.
//!
//! Generation is idempotent: every file is created only if it is missing, and
//! existing files are never rewritten. A run that fails midway leaves the files
//! it already created in place, and a retry resumes from there.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::core::layout::{ScaffoldLayout, SlotFiles};
use crate::core::settings::validate_settings;
use crate::core::slot::{DAY_COUNT, slots};
use crate::core::types::{FileKind, FileOutcome, SkipPolicy};
use crate::io::config::{DEFAULT_EXTENSION, ScaffoldConfig};
use crate::io::files::{WriteOutcome, create_dir, create_if_missing};
use crate::io::template::{StubContext, StubTemplate};

/// Parameters of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub base_dir: PathBuf,
    pub year: String,
    pub nest_dir: Option<String>,
    pub extension: String,
    pub days: u32,
    pub skip: SkipPolicy,
    pub template: Option<PathBuf>,
    /// Report what would be created without touching the filesystem.
    pub dry_run: bool,
}

impl GenerateOptions {
    /// Full 25-day scaffold with the built-in Kotlin stub.
    pub fn new(year: impl Into<String>, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            year: year.into(),
            nest_dir: None,
            extension: DEFAULT_EXTENSION.to_string(),
            days: DAY_COUNT,
            skip: SkipPolicy::File,
            template: None,
            dry_run: false,
        }
    }

    pub fn from_config(cfg: &ScaffoldConfig) -> Self {
        Self {
            base_dir: cfg.base_dir.clone(),
            year: cfg.year.clone(),
            nest_dir: cfg.nest_dir.clone(),
            extension: cfg.extension.clone(),
            days: cfg.days,
            skip: cfg.skip,
            template: cfg.template.clone(),
            dry_run: false,
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_settings(
            &self.year,
            &self.extension,
            self.days,
            self.nest_dir.as_deref(),
        )
    }

    pub fn layout(&self) -> ScaffoldLayout {
        ScaffoldLayout::new(
            &self.base_dir,
            self.nest_dir.as_deref(),
            &self.year,
            &self.extension,
        )
    }
}

/// Outcome of a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub day: u32,
    pub kind: FileKind,
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

/// Everything a run did (or would do), in slot order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateReport {
    pub target_dir: PathBuf,
    pub dry_run: bool,
    pub files: Vec<FileReport>,
}

impl GenerateReport {
    pub fn count(&self, outcome: FileOutcome) -> usize {
        self.files.iter().filter(|f| f.outcome == outcome).count()
    }

    /// One-line human summary, e.g. `aoc2023: created=75 existing=0 skipped=0`.
    pub fn summary(&self) -> String {
        let created = if self.dry_run {
            format!("would_create={}", self.count(FileOutcome::WouldCreate))
        } else {
            format!("created={}", self.count(FileOutcome::Created))
        };
        format!(
            "{}: {} existing={} skipped={}",
            self.target_dir.display(),
            created,
            self.count(FileOutcome::Existing),
            self.count(FileOutcome::Skipped)
        )
    }

    fn record(&mut self, files: &SlotFiles, kind: FileKind, outcome: FileOutcome) {
        self.files.push(FileReport {
            day: files.slot.index(),
            kind,
            path: files.path(kind).to_path_buf(),
            outcome,
        });
    }
}

/// Ensure the default 25-slot scaffold for `year` exists under `base_dir`.
pub fn generate(year: &str, base_dir: &Path) -> Result<GenerateReport> {
    generate_with(&GenerateOptions::new(year, base_dir))
}

/// Ensure the scaffold described by `options` exists.
///
/// - Creates the target directory (and missing parents) if absent.
/// - For each slot, creates `<label>.txt` and `<label>_test.txt` empty and
///   `<label>.<ext>` from the stub template, skipping files that exist.
/// - With `SkipPolicy::Slot`, a slot whose `<label>.txt` exists is skipped whole.
pub fn generate_with(options: &GenerateOptions) -> Result<GenerateReport> {
    options.validate()?;
    let layout = options.layout();
    let template = match &options.template {
        Some(path) => StubTemplate::from_file(path)?,
        None => StubTemplate::builtin(),
    };
    debug!(
        target_dir = %layout.target_dir.display(),
        year = %options.year,
        days = options.days,
        dry_run = options.dry_run,
        "generating scaffold"
    );

    if !options.dry_run {
        create_dir(&layout.target_dir)?;
    }

    let mut report = GenerateReport {
        target_dir: layout.target_dir.clone(),
        dry_run: options.dry_run,
        files: Vec::with_capacity(options.days as usize * FileKind::ALL.len()),
    };

    for slot in slots(options.days) {
        let files = layout.slot_files(slot);

        if options.skip == SkipPolicy::Slot && files.input.exists() {
            debug!(label = %files.label, "slot already started; skipping");
            for kind in FileKind::ALL {
                report.record(&files, kind, FileOutcome::Skipped);
            }
            continue;
        }

        for (kind, path) in files.iter() {
            let outcome = if options.dry_run {
                if path.exists() {
                    FileOutcome::Existing
                } else {
                    FileOutcome::WouldCreate
                }
            } else {
                let contents = if kind.is_placeholder() {
                    String::new()
                } else {
                    template.render(&StubContext {
                        label: &files.label,
                        year: &options.year,
                        package: &layout.package,
                        day: slot.index(),
                    })?
                };
                match create_if_missing(path, &contents)
                    .with_context(|| format!("scaffold {}", files.label))?
                {
                    WriteOutcome::Created => FileOutcome::Created,
                    WriteOutcome::Existing => FileOutcome::Existing,
                }
            };
            debug!(path = %path.display(), ?outcome, "scaffold file");
            report.record(&files, kind, outcome);
        }
    }

    info!(
        target_dir = %report.target_dir.display(),
        created = report.count(FileOutcome::Created),
        existing = report.count(FileOutcome::Existing),
        skipped = report.count(FileOutcome::Skipped),
        "scaffold ready"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{list_files, snapshot};
    use std::fs;

    #[test]
    fn fresh_run_creates_75_files() {
        let temp = tempfile::tempdir().expect("tempdir");

        let report = generate("2023", temp.path()).expect("generate");

        let target = temp.path().join("aoc2023");
        assert_eq!(report.target_dir, target);
        assert_eq!(report.count(FileOutcome::Created), 75);
        let names = list_files(&target);
        assert_eq!(names.len(), 75);
        for day in 1..=25 {
            let label = format!("Day{day:02}");
            for name in [
                format!("{label}.txt"),
                format!("{label}_test.txt"),
                format!("{label}.kt"),
            ] {
                assert!(names.contains(&name), "missing {name}");
            }
        }
    }

    #[test]
    fn placeholders_are_empty_and_stubs_are_templated() {
        let temp = tempfile::tempdir().expect("tempdir");
        generate("2023", temp.path()).expect("generate");

        let target = temp.path().join("aoc2023");
        assert_eq!(fs::read(target.join("Day07.txt")).expect("read"), b"");
        assert_eq!(fs::read(target.join("Day07_test.txt")).expect("read"), b"");
        let stub = fs::read_to_string(target.join("Day07.kt")).expect("read");
        assert!(stub.starts_with("package aoc2023\n"));
        assert!(stub.contains("readInput(\"Day07_test\", 2023)"));
        assert!(stub.contains("println(Day07.part2(input))"));
    }

    #[test]
    fn second_run_changes_nothing() {
        let temp = tempfile::tempdir().expect("tempdir");
        generate("2023", temp.path()).expect("first");
        let before = snapshot(&temp.path().join("aoc2023"));

        let report = generate("2023", temp.path()).expect("second");

        assert_eq!(report.count(FileOutcome::Created), 0);
        assert_eq!(report.count(FileOutcome::Existing), 75);
        assert_eq!(snapshot(&temp.path().join("aoc2023")), before);
    }

    #[test]
    fn existing_stub_and_inputs_are_not_overwritten() {
        let temp = tempfile::tempdir().expect("tempdir");
        let target = temp.path().join("aoc2023");
        fs::create_dir_all(&target).expect("mkdir");
        fs::write(target.join("Day05.kt"), "// my solution\n").expect("seed stub");
        fs::write(target.join("Day05.txt"), "1\n2\n3\n").expect("seed input");

        let report = generate("2023", temp.path()).expect("generate");

        assert_eq!(
            fs::read_to_string(target.join("Day05.kt")).expect("read"),
            "// my solution\n"
        );
        assert_eq!(
            fs::read_to_string(target.join("Day05.txt")).expect("read"),
            "1\n2\n3\n"
        );
        assert_eq!(report.count(FileOutcome::Existing), 2);
        assert_eq!(report.count(FileOutcome::Created), 73);
        assert_eq!(list_files(&target).len(), 75);
    }

    #[test]
    fn missing_tree_is_created_with_nesting() {
        let temp = tempfile::tempdir().expect("tempdir");
        let mut options = GenerateOptions::new("2021", temp.path().join("src").join("main"));
        options.nest_dir = Some("kotlin".to_string());

        let report = generate_with(&options).expect("generate");

        let target = temp.path().join("src/main/kotlin/aoc2021");
        assert_eq!(report.target_dir, target);
        assert_eq!(list_files(&target).len(), 75);
        let stub = fs::read_to_string(target.join("Day01.kt")).expect("read");
        assert!(stub.starts_with("package aoc2021\n"));
    }

    #[test]
    fn slot_policy_skips_started_slots() {
        let temp = tempfile::tempdir().expect("tempdir");
        let target = temp.path().join("aoc2023");
        fs::create_dir_all(&target).expect("mkdir");
        fs::write(target.join("Day02.txt"), "").expect("seed");
        let mut options = GenerateOptions::new("2023", temp.path());
        options.skip = SkipPolicy::Slot;

        let report = generate_with(&options).expect("generate");

        assert!(!target.join("Day02.kt").exists());
        assert!(!target.join("Day02_test.txt").exists());
        assert_eq!(report.count(FileOutcome::Skipped), 3);
        assert_eq!(report.count(FileOutcome::Created), 72);
    }

    #[test]
    fn dry_run_touches_nothing() {
        let temp = tempfile::tempdir().expect("tempdir");
        let mut options = GenerateOptions::new("2023", temp.path());
        options.dry_run = true;

        let report = generate_with(&options).expect("generate");

        assert!(!temp.path().join("aoc2023").exists());
        assert_eq!(report.count(FileOutcome::WouldCreate), 75);
        assert!(report.summary().contains("would_create=75"));
    }

    #[test]
    fn custom_day_count_and_extension() {
        let temp = tempfile::tempdir().expect("tempdir");
        let mut options = GenerateOptions::new("2024", temp.path());
        options.days = 12;
        options.extension = "kts".to_string();

        generate_with(&options).expect("generate");

        let names = list_files(&temp.path().join("aoc2024"));
        assert_eq!(names.len(), 36);
        assert!(names.contains(&"Day12.kts".to_string()));
        assert!(!names.iter().any(|n| n.starts_with("Day13")));
    }

    #[test]
    fn invalid_year_fails_before_touching_disk() {
        let temp = tempfile::tempdir().expect("tempdir");

        let err = generate("../2023", temp.path()).unwrap_err();

        assert!(err.to_string().contains("year"));
        assert_eq!(fs::read_dir(temp.path()).expect("read dir").count(), 0);
    }

    #[test]
    fn year_token_with_space_is_accepted() {
        let temp = tempfile::tempdir().expect("tempdir");

        let report = generate("2023 b", temp.path()).expect("generate");

        let target = temp.path().join("aoc2023 b");
        assert_eq!(report.target_dir, target);
        assert_eq!(list_files(&target).len(), 75);
    }

    #[test]
    fn base_dir_that_is_a_file_fails() {
        let temp = tempfile::tempdir().expect("tempdir");
        let base = temp.path().join("not-a-dir");
        fs::write(&base, "").expect("seed");

        assert!(generate("2023", &base).is_err());
    }
}
