//! Holiday calendar loading.
//!
//! Holiday dates are data, not code: each year is a YAML file in a
//! configuration directory, and the loader folds every year file into one
//! [`HolidaySet`] injected into the calculations.
//!
//! # Directory structure
//!
//! ```text
//! config/holidays/
//! ├── 2024.yaml
//! ├── 2025.yaml
//! └── 2026.yaml
//! ```
//!
//! Each file lists the fixed non-working dates of one year:
//!
//! ```yaml
//! year: 2025
//! holidays:
//!   - date: 2025-01-01
//!     name: Новогодние каникулы
//!   - date: 2025-05-09
//!     name: День Победы
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::{Holiday, HolidaySet};

/// One year's holiday file.
#[derive(Debug, Clone, Deserialize)]
struct HolidayFile {
    /// The calendar year the file covers.
    year: i32,
    /// The holidays of that year.
    holidays: Vec<Holiday>,
}

/// Loads every `*.yaml` year file from a holiday configuration directory.
///
/// # Arguments
///
/// * `dir` - Path to the holiday directory (e.g. `./config/holidays`)
///
/// # Returns
///
/// A [`HolidaySet`] covering all loaded years, or an error if:
/// - The directory is missing or contains no YAML files (`ConfigNotFound`)
/// - Any file contains invalid YAML (`ConfigParse`)
/// - A file lists a date outside its declared year (`ConfigParse`)
///
/// # Example
///
/// ```no_run
/// use timesheet_engine::config::load_holidays;
///
/// let holidays = load_holidays("./config/holidays")?;
/// # Ok::<(), timesheet_engine::error::EngineError>(())
/// ```
pub fn load_holidays<P: AsRef<Path>>(dir: P) -> EngineResult<HolidaySet> {
    let dir = dir.as_ref();
    let dir_str = dir.display().to_string();

    let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
        path: dir_str.clone(),
    })?;

    let mut holidays = Vec::new();
    let mut files_seen = 0usize;

    for entry in entries {
        let entry = entry.map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "yaml") {
            let file = load_yaml::<HolidayFile>(&path)?;
            validate_year(&file, &path)?;
            files_seen += 1;
            holidays.extend(file.holidays);
        }
    }

    if files_seen == 0 {
        return Err(EngineError::ConfigNotFound {
            path: format!("{} (no holiday files found)", dir_str),
        });
    }

    Ok(HolidaySet::from_holidays(holidays))
}

/// Loads and parses a YAML file.
fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParse {
        path: path_str,
        message: e.to_string(),
    })
}

/// Rejects dates filed under the wrong year.
fn validate_year(file: &HolidayFile, path: &Path) -> EngineResult<()> {
    use chrono::Datelike;

    for holiday in &file.holidays {
        if holiday.date.year() != file.year {
            return Err(EngineError::ConfigParse {
                path: path.display().to_string(),
                message: format!(
                    "holiday '{}' dated {} does not belong to year {}",
                    holiday.name, holiday.date, file.year
                ),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_load_single_year_file() {
        let tmp = TempDir::new().unwrap();
        write_file(
            tmp.path(),
            "2025.yaml",
            "year: 2025\nholidays:\n  - date: 2025-01-01\n    name: Новогодние каникулы\n  - date: 2025-05-09\n    name: День Победы\n",
        );

        let set = load_holidays(tmp.path()).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.is_holiday(NaiveDate::from_ymd_opt(2025, 5, 9).unwrap()));
        assert_eq!(
            set.label(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()),
            Some("Новогодние каникулы")
        );
    }

    #[test]
    fn test_load_merges_multiple_years() {
        let tmp = TempDir::new().unwrap();
        write_file(
            tmp.path(),
            "2024.yaml",
            "year: 2024\nholidays:\n  - date: 2024-06-12\n    name: День России\n",
        );
        write_file(
            tmp.path(),
            "2025.yaml",
            "year: 2025\nholidays:\n  - date: 2025-06-12\n    name: День России\n",
        );

        let set = load_holidays(tmp.path()).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.is_holiday(NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()));
        assert!(set.is_holiday(NaiveDate::from_ymd_opt(2025, 6, 12).unwrap()));
    }

    #[test]
    fn test_missing_directory_returns_config_not_found() {
        let result = load_holidays("/nonexistent/holidays");
        assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_empty_directory_returns_config_not_found() {
        let tmp = TempDir::new().unwrap();
        let result = load_holidays(tmp.path());
        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("no holiday files found"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_config_parse() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "2025.yaml", "year: [not a year\n");

        let result = load_holidays(tmp.path());
        assert!(matches!(result, Err(EngineError::ConfigParse { .. })));
    }

    #[test]
    fn test_date_outside_declared_year_is_rejected() {
        let tmp = TempDir::new().unwrap();
        write_file(
            tmp.path(),
            "2025.yaml",
            "year: 2025\nholidays:\n  - date: 2024-12-31\n    name: Новый год\n",
        );

        let result = load_holidays(tmp.path());
        match result {
            Err(EngineError::ConfigParse { message, .. }) => {
                assert!(message.contains("does not belong to year 2025"));
            }
            other => panic!("Expected ConfigParse, got {:?}", other),
        }
    }

    #[test]
    fn test_non_yaml_files_are_ignored() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "notes.txt", "not yaml");
        write_file(
            tmp.path(),
            "2025.yaml",
            "year: 2025\nholidays:\n  - date: 2025-03-08\n    name: Международный женский день\n",
        );

        let set = load_holidays(tmp.path()).unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_shipped_holiday_resources_load() {
        let set = load_holidays("./config/holidays").unwrap();
        // New Year holidays run Jan 1-9 in every shipped year.
        assert!(set.is_holiday(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()));
        assert!(set.is_holiday(NaiveDate::from_ymd_opt(2026, 1, 9).unwrap()));
        assert!(set.is_holiday(NaiveDate::from_ymd_opt(2024, 5, 9).unwrap()));
        assert!(!set.is_holiday(NaiveDate::from_ymd_opt(2025, 7, 15).unwrap()));
    }
}
