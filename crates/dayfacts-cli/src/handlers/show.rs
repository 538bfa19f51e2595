use crate::args::{CategoryArg, OutputFormat};
use crate::config::Config;
use crate::fetch::{FetchOutcome, FetchService};
use crate::presentation::console;
use anyhow::{Result, bail};
use dayfacts_engine::{App, ViewState};
use dayfacts_types::{CategoryToggles, DateSelection};
use is_terminal::IsTerminal;
use serde::Serialize;

#[derive(Serialize)]
struct JsonScreen<'a> {
    date: String,
    #[serde(flatten)]
    screen: &'a dayfacts_engine::ScreenSections,
}

pub fn handle(
    config: &Config,
    format: OutputFormat,
    date: Option<&str>,
    categories: &[CategoryArg],
) -> Result<()> {
    let date = match date {
        Some(input) => DateSelection::parse(input)?,
        None => DateSelection::today(),
    };
    if date.is_future() {
        return Err(dayfacts_types::Error::FutureDate(date.to_string()).into());
    }

    let toggles = CategoryToggles::only(&CategoryArg::expand(categories));
    let mut app = App::new(toggles);
    let (seq, plan) = app.begin_fetch(date);

    if !plan.is_empty() {
        let is_tty = std::io::stdout().is_terminal();
        if is_tty && format == OutputFormat::Plain {
            eprintln!("Fetching facts for {}…", date);
        }

        let service = FetchService::from_config(config)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        match runtime.block_on(service.fetch_day(date, plan)) {
            FetchOutcome::Payload(payload) => {
                app.complete_fetch(seq, payload);
            }
            FetchOutcome::Failed(message) => {
                app.fail_fetch(seq, message);
            }
        }
    }

    if let ViewState::Failed { message, .. } = app.state() {
        bail!("{} — check your connection and try again", message);
    }

    let Some(screen) = app.sections() else {
        bail!("No data for {}", date);
    };

    match format {
        OutputFormat::Json => {
            let out = JsonScreen {
                date: date.to_string(),
                screen: &screen,
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Plain => {
            let color = std::io::stdout().is_terminal();
            console::render_screen(&screen, &date, color);
        }
    }

    Ok(())
}
