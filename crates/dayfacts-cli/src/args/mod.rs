// NOTE: Command organization
//
// Namespaced subcommands (init, show, tui, provider) keep the surface
// discoverable from --help; flags shared by show and tui (date, category
// selection) live on each subcommand rather than globally, because the
// default date ("today") is resolved at handling time, not at parse time.

mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "dayfacts")]
#[command(about = "Pick a date, see the day's facts: births, deaths, events, holidays and more", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory holding config.toml (defaults to the platform data
    /// dir, overridable via DAYFACTS_PATH)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
