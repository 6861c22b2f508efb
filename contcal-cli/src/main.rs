mod commands;
mod render;
mod store;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "contcal")]
#[command(about = "Continuous two-year calendar with shareable interval state")]
struct Cli {
    /// Query string to view instead of the saved state (not written back)
    #[arg(long, global = true)]
    state: Option<String>,

    /// Override the current date (YYYY-MM-DD)
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Path to a config.toml overriding the built-in calendar data
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the calendar grid
    Show,
    /// Select a day: the first click marks a start, the second completes an interval
    Click {
        /// Day to click (YYYY-MM-DD)
        date: NaiveDate,
    },
    /// Remove an interval by id
    Remove { id: String },
    /// Select a month (YYYY-MM); selecting it again clears the selection
    Month { month: String },
    /// Toggle vacation highlighting
    Vacations,
    /// Print the shareable query string
    Link,
    /// Step back to the state before the last month selection
    Back,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut ctx = commands::Ctx::load(cli.state, cli.today, cli.config.as_deref())?;

    match cli.command {
        Commands::Show => commands::show::run(&ctx),
        Commands::Click { date } => commands::click::run(&mut ctx, date),
        Commands::Remove { id } => commands::remove::run(&mut ctx, &id),
        Commands::Month { month } => commands::month::run(&mut ctx, &month),
        Commands::Vacations => commands::vacations::run(&mut ctx),
        Commands::Link => commands::link::run(&ctx),
        Commands::Back => commands::back::run(&mut ctx),
    }
}
