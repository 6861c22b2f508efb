//! Terminal rendering of the calendar grid.
//!
//! This is the presentation side of the core's rendering boundary: it
//! consumes the week grid plus per-date selection status and turns them
//! into colored rows, one per week, with month labels in a left gutter at
//! anchor rows.

use chrono::NaiveDate;
use contcal_core::config::WEEKDAY_LABELS;
use contcal_core::{App, CalendarDay, CalendarGrid, ScrollTarget};
use owo_colors::OwoColorize;

const GUTTER_WIDTH: usize = 15;

pub fn print_calendar(app: &App, grid: &CalendarGrid) {
    let header: Vec<String> = WEEKDAY_LABELS
        .iter()
        .map(|label| format!("{:<3}", label))
        .collect();
    println!(
        "{:<width$}{}",
        "",
        header.join(" ").dimmed(),
        width = GUTTER_WIDTH
    );

    for (week_index, week) in grid.weeks.iter().enumerate() {
        let cells: Vec<String> = week
            .iter()
            .map(|slot| render_slot(app, slot.as_ref()))
            .collect();
        println!(
            "{:<width$}{}",
            gutter_label(grid, week_index),
            cells.join(" "),
            width = GUTTER_WIDTH
        );
    }
}

/// Month label for an anchor row, empty otherwise.
fn gutter_label(grid: &CalendarGrid, week_index: usize) -> String {
    grid.month_anchors
        .iter()
        .find(|anchor| anchor.week_index == week_index)
        .map(|anchor| format!("{} {}", anchor.month_name, anchor.year))
        .unwrap_or_default()
}

/// One cell: a 2-char day number plus a 1-char interval-end marker.
/// Styling is padded before coloring so ANSI escapes never skew alignment.
fn render_slot(app: &App, slot: Option<&CalendarDay>) -> String {
    let Some(day) = slot else {
        return "   ".to_string();
    };

    let status = app.status_of(day.date);
    let number = format!("{:>2}", day.day_of_month);
    let number = if day.is_today {
        number.bold().underline().to_string()
    } else {
        number
    };

    let styled = if status.is_selected {
        number.black().on_cyan().to_string()
    } else if status.is_in_interval {
        number.white().on_blue().to_string()
    } else if day.is_holiday {
        number.red().to_string()
    } else if day.is_vacation {
        number.yellow().to_string()
    } else if day.is_weekend {
        number.dimmed().to_string()
    } else {
        number
    };

    let marker = if status.is_interval_end {
        "×".red().to_string()
    } else {
        " ".to_string()
    };

    format!("{}{}", styled, marker)
}

pub fn print_intervals(app: &App) {
    if app.intervals().is_empty() && app.cursor().is_none() {
        return;
    }

    println!();
    for interval in app.intervals() {
        println!(
            "  {} {} – {}",
            interval.id.dimmed(),
            interval.start_date,
            interval.end_date
        );
    }
    if let Some(cursor) = app.cursor() {
        println!("  {} {}", "pending start:".cyan(), cursor);
    }
}

/// Resolve a scroll intent against the grid. A target with no matching row
/// is logged and ignored; scrolling is cosmetic, never a failure.
pub fn print_scroll_target(grid: &CalendarGrid, target: ScrollTarget, today: NaiveDate) {
    let date = match target {
        ScrollTarget::Date(date) => date,
        ScrollTarget::Today => today,
    };

    match grid.week_index_of(date) {
        Some(week_index) => {
            let line = format!("scroll to week {} ({})", week_index + 1, date);
            println!("\n{}", line.dimmed());
        }
        None => tracing::warn!(%date, "no calendar row for scroll target"),
    }
}
