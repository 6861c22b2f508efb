use anyhow::Result;

use super::Ctx;
use crate::render;

pub fn run(ctx: &Ctx) -> Result<()> {
    let grid = ctx.app.grid(ctx.today);

    render::print_calendar(&ctx.app, &grid);
    render::print_intervals(&ctx.app);
    render::print_scroll_target(&grid, ctx.app.initial_scroll(), ctx.today);

    Ok(())
}
