//! The two-click interval selection: a store of date intervals plus the
//! pending-start cursor.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A closed date range created by two clicks. `start_date <= end_date`
/// always holds; out-of-order clicks are swapped at construction. Intervals
/// are never mutated in place: removal and creation are the only
/// transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInterval {
    pub id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl DateInterval {
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        let (start_date, end_date) = if a <= b { (a, b) } else { (b, a) };
        DateInterval {
            id: Uuid::new_v4().to_string(),
            start_date,
            end_date,
        }
    }

    /// Inclusive membership test.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// Result of a click: either the cursor was set, or a second click
/// completed an interval. Only completion warrants a persistence write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    StartSelected,
    IntervalCreated { id: String },
}

/// Per-date selection status reported to the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateStatus<'a> {
    /// True only when the date equals the live cursor.
    pub is_selected: bool,
    pub is_in_interval: bool,
    /// Id surfaced for the delete affordance. When several intervals
    /// overlap the date, the last-matching interval wins (documented
    /// ambiguity; see DESIGN.md).
    pub interval_id: Option<&'a str>,
    /// True when any covering interval ends at this date.
    pub is_interval_end: bool,
}

/// Holds the user-created intervals and the in-progress selection cursor.
///
/// Two states: Idle (no cursor) and PendingStart (cursor set). Overlapping
/// intervals are permitted and never merged.
#[derive(Debug, Clone, Default)]
pub struct IntervalStore {
    intervals: Vec<DateInterval>,
    cursor: Option<NaiveDate>,
}

impl IntervalStore {
    pub fn new() -> Self {
        IntervalStore::default()
    }

    /// Rebuild a store from decoded intervals. The cursor is never
    /// persisted, so hydration always starts Idle.
    pub fn hydrate(intervals: Vec<DateInterval>) -> Self {
        IntervalStore {
            intervals,
            cursor: None,
        }
    }

    pub fn intervals(&self) -> &[DateInterval] {
        &self.intervals
    }

    pub fn cursor(&self) -> Option<NaiveDate> {
        self.cursor
    }

    /// Idle: remember the date as the pending start. PendingStart: complete
    /// an interval from cursor to this date and clear the cursor.
    pub fn click(&mut self, date: NaiveDate) -> ClickOutcome {
        match self.cursor.take() {
            None => {
                self.cursor = Some(date);
                ClickOutcome::StartSelected
            }
            Some(start) => {
                let interval = DateInterval::new(start, date);
                let id = interval.id.clone();
                self.intervals.push(interval);
                ClickOutcome::IntervalCreated { id }
            }
        }
    }

    /// Delete the interval with this id. Unknown ids are a silent no-op.
    /// The cursor is unaffected either way.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.intervals.len();
        self.intervals.retain(|interval| interval.id != id);
        self.intervals.len() != before
    }

    /// Selection status of a date. A cursor match short-circuits; otherwise
    /// every interval is scanned so overlaps report membership correctly.
    pub fn status_of(&self, date: NaiveDate) -> DateStatus<'_> {
        if self.cursor == Some(date) {
            return DateStatus {
                is_selected: true,
                ..DateStatus::default()
            };
        }

        let mut status = DateStatus::default();
        for interval in &self.intervals {
            if interval.contains(date) {
                status.is_in_interval = true;
                status.interval_id = Some(&interval.id);
                if date == interval.end_date {
                    status.is_interval_end = true;
                }
            }
        }
        status
    }

    /// Start date of the first stored interval, in storage (URL) order.
    /// Used for the load-time scroll fallback.
    pub fn first_interval_start(&self) -> Option<NaiveDate> {
        self.intervals.first().map(|interval| interval.start_date)
    }
}
