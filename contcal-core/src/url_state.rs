//! Query-string persistence of the view state.
//!
//! The URL is the single source of truth for shareable state: intervals as
//! repeated `dates=YYMMDD-YYMMDD` parameters, the selected month as
//! `month=YYMM`, and the vacation toggle as a bare `vc` presence flag.
//! Unrelated parameters survive every rewrite untouched.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::interval::DateInterval;

pub const DATES_PARAM: &str = "dates";
pub const MONTH_PARAM: &str = "month";
pub const VACATIONS_PARAM: &str = "vc";

/// A year/month pair; `month_index` is 0-based like `CalendarDay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month_index: u32,
}

impl YearMonth {
    /// First calendar day of the month, the scroll target when a month
    /// label is clicked.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month_index + 1, 1)
    }
}

/// The projection of view state that round-trips through the URL. The
/// selection cursor is deliberately absent: a half-finished selection is
/// never shareable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersistedViewState {
    pub intervals: Vec<DateInterval>,
    pub selected_month: Option<YearMonth>,
    pub show_vacations: bool,
}

/// How a query-string write lands in browser history. Interval and toggle
/// writes replace the current entry; month selection pushes a new one so
/// back/forward steps between month views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    Replace,
    Push,
}

/// A fully rewritten query string plus its history disposition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryWrite {
    pub query: String,
    pub history: HistoryMode,
}

/// `YYMMDD`, two-digit year, zero-padded month and day.
fn encode_date_token(date: NaiveDate) -> String {
    format!(
        "{:02}{:02}{:02}",
        date.year().rem_euclid(100),
        date.month(),
        date.day()
    )
}

/// Two-digit years decode into 2000-2099.
fn decode_date_token(token: &str) -> Option<NaiveDate> {
    if token.len() != 6 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = 2000 + token[0..2].parse::<i32>().ok()?;
    let month = token[2..4].parse::<u32>().ok()?;
    let day = token[4..6].parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn encode_interval(interval: &DateInterval) -> String {
    format!(
        "{}-{}",
        encode_date_token(interval.start_date),
        encode_date_token(interval.end_date)
    )
}

/// Parse one `dates` token. A decoded interval gets a fresh id: ids are
/// session-local and never travel through the URL.
fn decode_interval(token: &str) -> Option<DateInterval> {
    let (start, end) = token.split_once('-')?;
    let start = decode_date_token(start)?;
    let end = decode_date_token(end)?;
    // Hand-edited URLs may carry a reversed pair; construction normalizes.
    Some(DateInterval::new(start, end))
}

/// `YYMM`, 1-based month on the wire.
fn encode_month(ym: YearMonth) -> String {
    format!("{:02}{:02}", ym.year.rem_euclid(100), ym.month_index + 1)
}

fn decode_month(token: &str) -> Option<YearMonth> {
    if token.len() != 4 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = 2000 + token[0..2].parse::<i32>().ok()?;
    let month = token[2..4].parse::<u32>().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    Some(YearMonth {
        year,
        month_index: month - 1,
    })
}

/// Parse a query string into view state. Malformed tokens are dropped
/// one at a time, never fatal: a partially corrupt URL yields the valid
/// subset.
pub fn decode(query: &str) -> PersistedViewState {
    let mut state = PersistedViewState::default();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            DATES_PARAM => match decode_interval(&value) {
                Some(interval) => state.intervals.push(interval),
                None => tracing::debug!(token = %value, "dropping malformed dates token"),
            },
            MONTH_PARAM => match decode_month(&value) {
                Some(ym) => state.selected_month = Some(ym),
                None => tracing::debug!(token = %value, "dropping malformed month token"),
            },
            // Presence alone means enabled, whatever the value.
            VACATIONS_PARAM => state.show_vacations = true,
            _ => {}
        }
    }

    state
}

/// Rewrite the full query string from the given state, keeping every
/// parameter this codec does not own, in its original order.
pub fn apply(query: &str, state: &PersistedViewState) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if !matches!(
            key.as_ref(),
            DATES_PARAM | MONTH_PARAM | VACATIONS_PARAM
        ) {
            serializer.append_pair(&key, &value);
        }
    }

    for interval in &state.intervals {
        serializer.append_pair(DATES_PARAM, &encode_interval(interval));
    }
    if let Some(ym) = state.selected_month {
        serializer.append_pair(MONTH_PARAM, &encode_month(ym));
    }
    if state.show_vacations {
        serializer.append_key_only(VACATIONS_PARAM);
    }

    serializer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn state_with(intervals: Vec<DateInterval>) -> PersistedViewState {
        PersistedViewState {
            intervals,
            selected_month: None,
            show_vacations: false,
        }
    }

    #[test]
    fn test_interval_token_shape() {
        let interval = DateInterval::new(date(2025, 1, 3), date(2025, 1, 12));
        assert_eq!(encode_interval(&interval), "250103-250112");
    }

    #[test]
    fn test_roundtrip_preserves_interval_bounds() {
        let intervals = vec![
            DateInterval::new(date(2025, 1, 3), date(2025, 1, 12)),
            DateInterval::new(date(2026, 11, 30), date(2026, 12, 31)),
        ];
        let query = apply("", &state_with(intervals.clone()));
        let decoded = decode(&query);

        assert_eq!(decoded.intervals.len(), 2);
        for (original, parsed) in intervals.iter().zip(&decoded.intervals) {
            assert_eq!(original.start_date, parsed.start_date);
            assert_eq!(original.end_date, parsed.end_date);
            // Ids are regenerated on decode.
            assert_ne!(original.id, parsed.id);
        }
    }

    #[test]
    fn test_malformed_dates_token_is_dropped_not_fatal() {
        let decoded =
            decode("dates=250103-250112&dates=garbage&dates=25010-250112&dates=250201-250205");
        assert_eq!(decoded.intervals.len(), 2);
        assert_eq!(decoded.intervals[0].start_date, date(2025, 1, 3));
        assert_eq!(decoded.intervals[1].end_date, date(2025, 2, 5));
    }

    #[test]
    fn test_impossible_calendar_date_is_dropped() {
        let decoded = decode("dates=250230-250301");
        assert!(decoded.intervals.is_empty());
    }

    #[test]
    fn test_reversed_pair_is_normalized_on_decode() {
        let decoded = decode("dates=250112-250103");
        assert_eq!(decoded.intervals[0].start_date, date(2025, 1, 3));
        assert_eq!(decoded.intervals[0].end_date, date(2025, 1, 12));
    }

    #[test]
    fn test_month_parameter_roundtrip() {
        let ym = YearMonth {
            year: 2026,
            month_index: 2,
        };
        assert_eq!(encode_month(ym), "2603");
        assert_eq!(decode_month("2603"), Some(ym));
        assert_eq!(decode("month=2603").selected_month, Some(ym));
    }

    #[test]
    fn test_malformed_month_is_dropped() {
        assert_eq!(decode("month=26").selected_month, None);
        assert_eq!(decode("month=2613").selected_month, None);
        assert_eq!(decode("month=26ab").selected_month, None);
    }

    #[test]
    fn test_vacation_flag_is_presence_only() {
        assert!(decode("vc").show_vacations);
        assert!(decode("vc=true").show_vacations);
        assert!(decode("vc=anything").show_vacations);
        assert!(!decode("").show_vacations);
    }

    #[test]
    fn test_unknown_parameters_survive_rewrite() {
        let state = PersistedViewState {
            intervals: vec![DateInterval::new(date(2025, 5, 1), date(2025, 5, 9))],
            selected_month: None,
            show_vacations: true,
        };
        let query = apply("utm_source=mail&dates=250101-250102&theme=dark", &state);

        let decoded = decode(&query);
        assert_eq!(decoded.intervals.len(), 1);
        assert!(decoded.show_vacations);
        assert!(query.contains("utm_source=mail"));
        assert!(query.contains("theme=dark"));
        // The stale dates entry was replaced by the state's intervals.
        assert!(!query.contains("250101"));
    }

    #[test]
    fn test_clearing_month_removes_the_parameter() {
        let mut state = decode("month=2603");
        state.selected_month = None;
        let query = apply("month=2603", &state);
        assert!(!query.contains("month"));
    }

    #[test]
    fn test_two_digit_year_decodes_into_2000s() {
        assert_eq!(decode_date_token("991231"), Some(date(2099, 12, 31)));
        assert_eq!(decode_date_token("000101"), Some(date(2000, 1, 1)));
    }
}
