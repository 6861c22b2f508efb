//! Week grid generation: the full day sequence over the configured range,
//! grouped into Monday-started rows with month-label anchors.

use chrono::{Datelike, NaiveDate};

use crate::config::CalendarConfig;
use crate::day::{CalendarDay, ClassifyOptions, classify};

pub const DAYS_PER_WEEK: usize = 7;

/// One calendar row: exactly 7 slots, Monday first. `None` slots pad the
/// partial leading and trailing weeks of the range.
pub type Week = Vec<Option<CalendarDay>>;

/// The week row that displays a month label, keyed to that row's
/// first-of-month day. A row has at most one anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthAnchor {
    pub week_index: usize,
    pub month_index: u32,
    pub month_name: &'static str,
    pub year: i32,
}

#[derive(Debug, Clone)]
pub struct CalendarGrid {
    pub weeks: Vec<Week>,
    pub month_anchors: Vec<MonthAnchor>,
}

impl CalendarGrid {
    /// Row index containing the given date, for scroll-target resolution.
    pub fn week_index_of(&self, date: NaiveDate) -> Option<usize> {
        self.weeks.iter().position(|week| {
            week.iter()
                .flatten()
                .any(|day| day.date == date)
        })
    }
}

/// Build the grid for the configured range, inclusive on both ends.
pub fn build(config: &CalendarConfig, opts: ClassifyOptions) -> CalendarGrid {
    let mut weeks: Vec<Week> = Vec::new();
    let mut current: Week = Vec::with_capacity(DAYS_PER_WEEK);

    // Monday-origin offset: how many empty slots precede the first day.
    let leading = config.range_start.weekday().num_days_from_monday() as usize;
    for _ in 0..leading {
        current.push(None);
    }

    let mut last_month: Option<u32> = None;
    for date in config
        .range_start
        .iter_days()
        .take_while(|d| *d <= config.range_end)
    {
        let mut day = classify(date, config, opts);
        // A month boundary is a change from the previously iterated day.
        // The very first day only counts when it is literally day 1, so a
        // range starting mid-month produces no label for that partial month.
        day.is_first_of_month = match last_month {
            None => date.day() == 1,
            Some(month) => month != date.month(),
        };
        last_month = Some(date.month());

        current.push(Some(day));
        if current.len() == DAYS_PER_WEEK {
            weeks.push(current);
            current = Vec::with_capacity(DAYS_PER_WEEK);
        }
    }

    if !current.is_empty() {
        while current.len() < DAYS_PER_WEEK {
            current.push(None);
        }
        weeks.push(current);
    }

    let month_anchors = anchors_of(&weeks);
    CalendarGrid {
        weeks,
        month_anchors,
    }
}

fn anchors_of(weeks: &[Week]) -> Vec<MonthAnchor> {
    weeks
        .iter()
        .enumerate()
        .filter_map(|(week_index, week)| {
            week.iter()
                .flatten()
                .find(|day| day.is_first_of_month)
                .map(|day| MonthAnchor {
                    week_index,
                    month_index: day.month_index,
                    month_name: day.month_name,
                    year: day.year,
                })
        })
        .collect()
}
