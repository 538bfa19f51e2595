use super::enums::CategoryArg;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Initialize dayfacts configuration")]
    Init,

    #[command(about = "Fetch one day's facts and print them")]
    Show {
        /// Date as YYYY-MM-DD; defaults to today. Future dates are rejected.
        #[arg(long)]
        date: Option<String>,

        /// Categories to fetch and show
        #[arg(long, value_delimiter = ',', default_value = "all")]
        categories: Vec<CategoryArg>,
    },

    #[command(about = "Interactive terminal UI with toggles and the birthdays carousel")]
    Tui {
        /// Date as YYYY-MM-DD; defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    #[command(about = "Manage fact providers")]
    Provider {
        #[command(subcommand)]
        command: ProviderCommand,
    },
}

#[derive(Subcommand)]
pub enum ProviderCommand {
    #[command(about = "List known providers and their endpoints")]
    List,
}
