//! Validation of user-supplied naming parameters.
//!
//! These values end up as path segments, so they must not escape the base
//! directory or introduce extra nesting.

use anyhow::{Result, anyhow};

use super::slot::MAX_DAYS;

/// Year tokens are free-form (`2023`, `2023 b`, `2023.5`, ...); only tokens
/// that would leave the year folder are rejected.
pub fn validate_year(year: &str) -> Result<()> {
    if year.is_empty() {
        return Err(anyhow!("year must not be empty"));
    }
    if !is_plain_segment(year) {
        return Err(anyhow!(
            "year '{}' must not contain path separators, '..' or control characters",
            year.escape_debug()
        ));
    }
    Ok(())
}

pub fn validate_extension(extension: &str) -> Result<()> {
    if extension.is_empty() || extension.contains('.') || !is_plain_segment(extension) {
        return Err(anyhow!(
            "extension '{}' must be a non-empty name without dots or separators",
            extension.escape_debug()
        ));
    }
    Ok(())
}

pub fn validate_days(days: u32) -> Result<()> {
    if !(1..=MAX_DAYS).contains(&days) {
        return Err(anyhow!("days must be within 1..={MAX_DAYS}, got {days}"));
    }
    Ok(())
}

pub fn validate_nest_dir(nest: &str) -> Result<()> {
    if nest.is_empty() || !is_plain_segment(nest) {
        return Err(anyhow!(
            "nest_dir '{}' must be a single folder name",
            nest.escape_debug()
        ));
    }
    Ok(())
}

/// Validate every naming parameter of a run.
pub fn validate_settings(
    year: &str,
    extension: &str,
    days: u32,
    nest_dir: Option<&str>,
) -> Result<()> {
    validate_year(year)?;
    validate_extension(extension)?;
    validate_days(days)?;
    if let Some(nest) = nest_dir {
        validate_nest_dir(nest)?;
    }
    Ok(())
}

fn is_plain_segment(value: &str) -> bool {
    value != "."
        && value != ".."
        && !value.contains(['/', '\\'])
        && !value.chars().any(char::is_control)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_accepts_any_printable_token() {
        for year in ["2023", "2015", "1999b", "next", "2023 b", "2023.5", "..2023"] {
            validate_year(year).expect("valid year");
        }
    }

    #[test]
    fn year_rejects_path_like_tokens() {
        for year in ["", "..", "20/23", "20\\23", "20\n23", "20\t23"] {
            assert!(validate_year(year).is_err(), "accepted {year:?}");
        }
    }

    #[test]
    fn year_with_space_names_its_folder() {
        validate_year("2023 b").expect("space is allowed");
        let err = validate_year("../2023").unwrap_err();
        assert!(err.to_string().contains("path separators"));
        assert!(!err.to_string().contains("printable"));
    }

    #[test]
    fn extension_rejects_dotted_values() {
        validate_extension("kt").expect("kt");
        assert!(validate_extension(".kt").is_err());
        assert!(validate_extension("").is_err());
    }

    #[test]
    fn days_must_fit_two_digit_labels() {
        validate_days(25).expect("25");
        validate_days(1).expect("1");
        let err = validate_days(100).unwrap_err();
        assert!(err.to_string().contains("1..=99"));
        assert!(validate_days(0).is_err());
    }

    #[test]
    fn settings_report_first_invalid_field() {
        let err = validate_settings("2023", "kt", 25, Some("a/b")).unwrap_err();
        assert!(err.to_string().contains("nest_dir"));
    }
}
