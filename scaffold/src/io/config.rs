//! Scaffold configuration stored in `aoc-scaffold.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::settings::validate_settings;
use crate::core::slot::DAY_COUNT;
use crate::core::types::SkipPolicy;

/// File name looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "aoc-scaffold.toml";

/// Year used when neither the command line nor the config names one.
pub const DEFAULT_YEAR: &str = "2023";

pub const DEFAULT_EXTENSION: &str = "kt";

/// Scaffold configuration (TOML).
///
/// Every field is optional in the file; missing fields take the defaults
/// below. Command-line flags override whatever is loaded here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Directory under which the year folder is created.
    pub base_dir: PathBuf,

    /// Year token. Accepts `2023` as well as `"2023"` in the file.
    #[serde(deserialize_with = "year_token")]
    pub year: String,

    /// Optional source root between `base_dir` and the year folder (e.g. `kotlin`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nest_dir: Option<String>,

    /// Extension of the generated stub, without the dot.
    pub extension: String,

    pub days: u32,

    pub skip: SkipPolicy,

    /// Custom stub template replacing the built-in one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            year: DEFAULT_YEAR.to_string(),
            nest_dir: None,
            extension: DEFAULT_EXTENSION.to_string(),
            days: DAY_COUNT,
            skip: SkipPolicy::default(),
            template: None,
        }
    }
}

impl ScaffoldConfig {
    pub fn validate(&self) -> Result<()> {
        validate_settings(
            &self.year,
            &self.extension,
            self.days,
            self.nest_dir.as_deref(),
        )
    }

    /// Resolve relative paths in the config against the directory holding it.
    fn anchor_to(mut self, dir: &Path) -> Self {
        if self.base_dir.is_relative() {
            self.base_dir = dir.join(&self.base_dir);
        }
        if let Some(template) = self.template.take() {
            self.template = Some(if template.is_relative() {
                dir.join(template)
            } else {
                template
            });
        }
        self
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ScaffoldConfig::default()`. Relative
/// `base_dir` and `template` values are resolved against the file's directory.
pub fn load_config(path: &Path) -> Result<ScaffoldConfig> {
    if !path.exists() {
        let cfg = ScaffoldConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ScaffoldConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    let dir = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(cfg.anchor_to(dir))
}

/// Render config as pretty TOML with a trailing newline.
pub fn render_config(cfg: &ScaffoldConfig) -> Result<String> {
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    if !buf.ends_with('\n') {
        buf.push('\n');
    }
    Ok(buf)
}

fn year_token<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Token {
        Number(i64),
        Text(String),
    }

    Ok(match Token::deserialize(deserializer)? {
        Token::Number(n) => n.to_string(),
        Token::Text(s) => s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, ScaffoldConfig::default());
        assert_eq!(cfg.year, "2023");
        assert_eq!(cfg.days, 25);
    }

    #[test]
    fn numeric_year_and_relative_paths_are_normalized() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            "year = 2021\nbase_dir = \"src/main\"\nnest_dir = \"kotlin\"\nskip = \"slot\"\ntemplate = \"stub.j2\"\n",
        )
        .expect("write");

        let cfg = load_config(&path).expect("load");

        assert_eq!(cfg.year, "2021");
        assert_eq!(cfg.base_dir, temp.path().join("src/main"));
        assert_eq!(cfg.nest_dir.as_deref(), Some("kotlin"));
        assert_eq!(cfg.skip, SkipPolicy::Slot);
        assert_eq!(cfg.template, Some(temp.path().join("stub.j2")));
        assert_eq!(cfg.extension, "kt");
    }

    #[test]
    fn invalid_days_are_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "days = 120\n").expect("write");

        let err = load_config(&path).unwrap_err();
        assert!(format!("{err:#}").contains("days must be within"));
    }

    #[test]
    fn render_omits_unset_optionals() {
        let rendered = render_config(&ScaffoldConfig::default()).expect("render");
        assert!(rendered.contains("year = \"2023\""));
        assert!(rendered.contains("skip = \"file\""));
        assert!(!rendered.contains("nest_dir"));
        assert!(rendered.ends_with('\n'));
    }
}
