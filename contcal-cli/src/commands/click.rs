use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use super::Ctx;

pub fn run(ctx: &mut Ctx, date: NaiveDate) -> Result<()> {
    let effects = ctx.app.on_date_click(date);
    ctx.commit(&effects)?;

    match ctx.app.cursor() {
        Some(start) => {
            println!("Start selected: {}", start.to_string().cyan());
            println!("{}", "Click a second day to complete the interval".dimmed());
        }
        None => {
            // Completing click: the new interval is the last one stored.
            if let Some(interval) = ctx.app.intervals().last() {
                println!(
                    "Marked {} – {} ({})",
                    interval.start_date,
                    interval.end_date,
                    interval.id.dimmed()
                );
            }
            println!("Link: ?{}", ctx.app.query());
        }
    }

    Ok(())
}
