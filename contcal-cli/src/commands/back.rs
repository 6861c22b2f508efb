use anyhow::Result;
use owo_colors::OwoColorize;

use super::Ctx;

pub fn run(ctx: &mut Ctx) -> Result<()> {
    if ctx.view.back() {
        ctx.save()?;
        println!("Back to: ?{}", ctx.view.current);
    } else {
        println!("{}", "No earlier view to return to".dimmed());
    }

    Ok(())
}
