//! Static calendar configuration: the rendered date range and the holiday
//! and vacation day sets.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{ContCalError, ContCalResult};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Built-in range: the two calendar years 2025-2026.
const DEFAULT_RANGE: ((i32, u32, u32), (i32, u32, u32)) = ((2025, 1, 1), (2026, 12, 31));

/// Public holidays for 2025-2026, as inclusive (start, end) blocks.
const DEFAULT_HOLIDAYS: &[((i32, u32, u32), (i32, u32, u32))] = &[
    ((2025, 1, 1), (2025, 1, 8)),
    ((2025, 2, 23), (2025, 2, 23)),
    ((2025, 3, 8), (2025, 3, 8)),
    ((2025, 5, 1), (2025, 5, 1)),
    ((2025, 5, 9), (2025, 5, 9)),
    ((2025, 6, 12), (2025, 6, 12)),
    ((2025, 11, 4), (2025, 11, 4)),
    ((2026, 1, 1), (2026, 1, 9)),
    ((2026, 2, 23), (2026, 2, 23)),
    ((2026, 3, 9), (2026, 3, 9)),
    ((2026, 5, 1), (2026, 5, 1)),
    ((2026, 5, 11), (2026, 5, 11)),
    ((2026, 6, 12), (2026, 6, 12)),
    ((2026, 11, 4), (2026, 11, 4)),
];

/// School vacation blocks for 2025-2026. Days also present in the holiday
/// set stay holidays; the classifier gives holidays precedence.
const DEFAULT_VACATIONS: &[((i32, u32, u32), (i32, u32, u32))] = &[
    ((2025, 10, 25), (2025, 11, 4)),
    ((2026, 2, 21), (2026, 3, 1)),
    ((2026, 3, 28), (2026, 4, 5)),
];

fn ymd((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid built-in calendar date")
}

/// An inclusive span of calendar days, used in config files to describe
/// multi-day holiday or vacation blocks.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DateSpan {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateSpan {
    fn collect_into(&self, set: &mut BTreeSet<NaiveDate>) {
        for date in self.from.iter_days().take_while(|d| *d <= self.to) {
            set.insert(date);
        }
    }
}

/// On-disk shape of ~/.config/contcal/config.toml. Every field is optional;
/// anything absent falls back to the built-in 2025-2026 tables.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    range_start: Option<NaiveDate>,
    range_end: Option<NaiveDate>,
    #[serde(default)]
    holidays: Vec<NaiveDate>,
    #[serde(default)]
    holiday_spans: Vec<DateSpan>,
    #[serde(default)]
    vacations: Vec<NaiveDate>,
    #[serde(default)]
    vacation_spans: Vec<DateSpan>,
}

/// Static calendar data driving classification and grid generation.
#[derive(Debug, Clone)]
pub struct CalendarConfig {
    pub range_start: NaiveDate,
    pub range_end: NaiveDate,
    pub holidays: BTreeSet<NaiveDate>,
    pub vacations: BTreeSet<NaiveDate>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        let mut holidays = BTreeSet::new();
        for (from, to) in DEFAULT_HOLIDAYS {
            DateSpan { from: ymd(*from), to: ymd(*to) }.collect_into(&mut holidays);
        }

        let mut vacations = BTreeSet::new();
        for (from, to) in DEFAULT_VACATIONS {
            DateSpan { from: ymd(*from), to: ymd(*to) }.collect_into(&mut vacations);
        }

        CalendarConfig {
            range_start: ymd(DEFAULT_RANGE.0),
            range_end: ymd(DEFAULT_RANGE.1),
            holidays,
            vacations,
        }
    }
}

impl CalendarConfig {
    /// Default location: ~/.config/contcal/config.toml
    pub fn config_path() -> ContCalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ContCalError::Config("Could not determine config directory".into()))?
            .join("contcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from the given path, or from the default location
    /// when `path` is None. A missing file yields the built-in defaults; an
    /// unreadable or invalid file is an error.
    pub fn load_or_default(path: Option<&Path>) -> ContCalResult<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path()?,
        };

        if !path.exists() {
            return Ok(CalendarConfig::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let file: ConfigFile = toml::from_str(&content)
            .map_err(|e| ContCalError::Config(format!("{}: {}", path.display(), e)))?;

        Ok(Self::from_file(file))
    }

    fn from_file(file: ConfigFile) -> Self {
        let defaults = CalendarConfig::default();

        // Day sets in the file replace the built-in tables entirely; a file
        // that only changes the range keeps the default sets.
        let holidays = if file.holidays.is_empty() && file.holiday_spans.is_empty() {
            defaults.holidays
        } else {
            let mut set: BTreeSet<NaiveDate> = file.holidays.into_iter().collect();
            for span in &file.holiday_spans {
                span.collect_into(&mut set);
            }
            set
        };

        let vacations = if file.vacations.is_empty() && file.vacation_spans.is_empty() {
            defaults.vacations
        } else {
            let mut set: BTreeSet<NaiveDate> = file.vacations.into_iter().collect();
            for span in &file.vacation_spans {
                span.collect_into(&mut set);
            }
            set
        };

        CalendarConfig {
            range_start: file.range_start.unwrap_or(defaults.range_start),
            range_end: file.range_end.unwrap_or(defaults.range_end),
            holidays,
            vacations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_range_covers_both_years() {
        let config = CalendarConfig::default();
        assert_eq!(config.range_start, ymd((2025, 1, 1)));
        assert_eq!(config.range_end, ymd((2026, 12, 31)));
    }

    #[test]
    fn test_default_holiday_blocks_are_expanded() {
        let config = CalendarConfig::default();
        assert!(config.holidays.contains(&ymd((2025, 1, 1))));
        assert!(config.holidays.contains(&ymd((2025, 1, 8))));
        assert!(!config.holidays.contains(&ymd((2025, 1, 9))));
        assert!(config.holidays.contains(&ymd((2026, 6, 12))));
    }

    #[test]
    fn test_holiday_and_vacation_sets_may_share_days() {
        // Nov 4 2025 is both a public holiday and inside the autumn
        // vacation block; precedence is resolved by the classifier.
        let config = CalendarConfig::default();
        let day = ymd((2025, 11, 4));
        assert!(config.holidays.contains(&day));
        assert!(config.vacations.contains(&day));
    }

    #[test]
    fn test_config_file_replaces_day_sets() {
        let file: ConfigFile = toml::from_str(
            r#"
            holidays = ["2025-07-04"]

            [[vacation_spans]]
            from = "2025-08-01"
            to = "2025-08-03"
            "#,
        )
        .unwrap();

        let config = CalendarConfig::from_file(file);
        assert_eq!(config.holidays.len(), 1);
        assert!(config.holidays.contains(&ymd((2025, 7, 4))));
        assert_eq!(config.vacations.len(), 3);
        assert!(config.vacations.contains(&ymd((2025, 8, 2))));
        // Untouched fields keep the defaults.
        assert_eq!(config.range_start, ymd((2025, 1, 1)));
    }

    #[test]
    fn test_empty_config_file_keeps_defaults() {
        let file: ConfigFile = toml::from_str("").unwrap();
        let config = CalendarConfig::from_file(file);
        let defaults = CalendarConfig::default();
        assert_eq!(config.holidays, defaults.holidays);
        assert_eq!(config.vacations, defaults.vacations);
    }
}
