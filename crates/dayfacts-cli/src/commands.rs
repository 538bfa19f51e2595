use super::args::{Cli, Commands, ProviderCommand};
use super::handlers;
use crate::config::{Config, resolve_data_dir};
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let config_path = Config::path_in(&data_dir);

    let Some(command) = cli.command else {
        show_guidance();
        return Ok(());
    };

    match command {
        Commands::Init => handlers::init::handle(&config_path),

        Commands::Show { date, categories } => {
            let config = Config::load_from(&config_path)?;
            handlers::show::handle(&config, cli.format, date.as_deref(), &categories)
        }

        Commands::Tui { date } => {
            let config = Config::load_from(&config_path)?;
            handlers::tui::handle(config, &config_path, date.as_deref())
        }

        Commands::Provider { command } => match command {
            ProviderCommand::List => handlers::provider::list(&config_path),
        },
    }
}

fn show_guidance() {
    println!("dayfacts - facts for any day of the year\n");
    println!("Get started:");
    println!("  dayfacts init                      # Write the default config");
    println!("  dayfacts show                      # Today's facts in the terminal");
    println!("  dayfacts show --date 2024-07-04    # A specific day");
    println!("  dayfacts tui                       # Interactive UI with the carousel");
    println!("  dayfacts provider list             # Where the data comes from\n");
    println!("For more commands:");
    println!("  dayfacts --help");
}
