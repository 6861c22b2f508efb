use anyhow::{Context, Result};
use contcal_core::config::MONTH_NAMES;

use super::Ctx;
use crate::render;

pub fn run(ctx: &mut Ctx, month: &str) -> Result<()> {
    let (year, month_number) = parse_month(month)?;
    let effects = ctx.app.on_month_click(year, month_number - 1);
    ctx.commit(&effects)?;

    match ctx.app.selected_month() {
        Some(ym) => println!(
            "Selected {} {}",
            MONTH_NAMES[ym.month_index as usize], ym.year
        ),
        None => println!("Month selection cleared"),
    }

    if let Some(scroll) = effects.scroll {
        render::print_scroll_target(&ctx.app.grid(ctx.today), scroll, ctx.today);
    }

    Ok(())
}

fn parse_month(s: &str) -> Result<(i32, u32)> {
    let (year, month) = s
        .split_once('-')
        .with_context(|| format!("Invalid month '{}'. Expected YYYY-MM", s))?;

    let year: i32 = year
        .parse()
        .with_context(|| format!("Invalid year in '{}'", s))?;
    let month: u32 = month
        .parse()
        .with_context(|| format!("Invalid month in '{}'", s))?;
    anyhow::ensure!((1..=12).contains(&month), "Month must be between 1 and 12");

    Ok((year, month))
}
