mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use booking_core::Granularity;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::view::ViewArgs;

#[derive(Parser)]
#[command(name = "booking")]
#[command(about = "Browse the booking calendar by day, week or month")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Appointments per resource for one day
    Day(ViewArgs),
    /// Week strip around a date (Sunday first)
    Week(ViewArgs),
    /// Month grid around a date (Monday first)
    Month(ViewArgs),
    /// Open the default view from config
    Show(ViewArgs),
    /// List resources and locations
    Resources {
        /// Data file (TOML), overrides data_file from config
        #[arg(long)]
        data: Option<PathBuf>,
    },
    /// Show config path and effective settings
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Day(args) => commands::view::run(Some(Granularity::Day), args),
        Commands::Week(args) => commands::view::run(Some(Granularity::Week), args),
        Commands::Month(args) => commands::view::run(Some(Granularity::Month), args),
        Commands::Show(args) => commands::view::run(None, args),
        Commands::Resources { data } => commands::resources::run(data),
        Commands::Config => commands::config::run(),
    }
}
