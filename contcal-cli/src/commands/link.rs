use anyhow::Result;

use super::Ctx;

pub fn run(ctx: &Ctx) -> Result<()> {
    println!("?{}", ctx.app.query());
    Ok(())
}
