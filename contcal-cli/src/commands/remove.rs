use anyhow::Result;
use owo_colors::OwoColorize;

use super::Ctx;

pub fn run(ctx: &mut Ctx, id: &str) -> Result<()> {
    let existed = ctx.app.intervals().iter().any(|interval| interval.id == id);
    let effects = ctx.app.on_remove_interval(id);
    ctx.commit(&effects)?;

    if existed {
        println!("Removed interval {}", id);
        println!("Link: ?{}", ctx.app.query());
    } else {
        // Stale ids are a silent no-op in the core; just tell the user.
        println!("{}", format!("No interval with id {}", id).dimmed());
    }

    Ok(())
}
