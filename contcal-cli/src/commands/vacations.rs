use anyhow::Result;

use super::Ctx;

pub fn run(ctx: &mut Ctx) -> Result<()> {
    let effects = ctx.app.on_toggle_vacations();
    ctx.commit(&effects)?;

    if ctx.app.show_vacations() {
        println!("Vacation highlighting on");
    } else {
        println!("Vacation highlighting off");
    }

    Ok(())
}
