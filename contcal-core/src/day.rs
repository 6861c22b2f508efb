//! Per-day classification: holiday, vacation, working day, weekend, today.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::config::{CalendarConfig, MONTH_NAMES};

/// Inputs to classification that vary per view: the vacation-highlight
/// toggle and the injected current date.
#[derive(Debug, Clone, Copy)]
pub struct ClassifyOptions {
    pub show_vacations: bool,
    /// The date considered "today". Injected so callers (and tests) control
    /// the clock instead of the classifier reading ambient time.
    pub today: NaiveDate,
}

/// Derived, immutable view of a single calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub day_of_month: u32,
    /// 0-based month index (January = 0).
    pub month_index: u32,
    pub year: i32,
    pub is_first_of_month: bool,
    pub month_name: &'static str,
    pub is_holiday: bool,
    pub is_vacation: bool,
    pub is_working_day: bool,
    pub is_weekend: bool,
    pub is_today: bool,
}

/// Classify a single date. Pure and total: any valid calendar date maps to
/// exactly one attribute bundle.
///
/// Precedence rules:
/// - holiday wins over vacation; a date is never both
/// - a vacation weekday still counts as a working day (only holidays and
///   weekends remove working-day status)
/// - "weekend" for styling purposes is the negation of working day, so a
///   mid-week holiday is weekend-styled
pub fn classify(date: NaiveDate, config: &CalendarConfig, opts: ClassifyOptions) -> CalendarDay {
    let is_holiday = config.holidays.contains(&date);
    let is_vacation = opts.show_vacations && !is_holiday && config.vacations.contains(&date);
    let is_weekday = !matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
    let is_working_day = is_weekday && !is_holiday;

    CalendarDay {
        date,
        day_of_month: date.day(),
        month_index: date.month0(),
        year: date.year(),
        is_first_of_month: date.day() == 1,
        month_name: MONTH_NAMES[date.month0() as usize],
        is_holiday,
        is_vacation,
        is_working_day,
        is_weekend: !is_working_day,
        is_today: date == opts.today,
    }
}
