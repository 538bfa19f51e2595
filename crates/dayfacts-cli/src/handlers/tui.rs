//! Interactive TUI handler.
//!
//! Owns the domain state (App, carousel, timers) and the fetch channel;
//! drawing goes through the pure presenter and the ratatui view. Fetches
//! run on a background tokio runtime and report `{seq, outcome}` events;
//! the sequence guard in the engine drops whatever arrives late.

use crate::config::{Config, Theme};
use crate::fetch::{FetchEvent, FetchOutcome, FetchService, spawn_fetch};
use crate::presentation::presenters::{Focus, build_screen_vm};
use crate::presentation::tui_view::TuiScreen;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use dayfacts_engine::{App, AutoAdvance, Carousel};
use dayfacts_types::{Category, CategoryToggles, DateSelection, DisplayRecord};
use std::path::Path;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

const TICK: Duration = Duration::from_millis(100);

struct TuiState {
    app: App,
    carousel: Option<Carousel>,
    auto: AutoAdvance,
    births: Vec<DisplayRecord>,
    focus: Focus,
    toggle_cursor: usize,
    date_input: String,
    status: Option<String>,
    theme: Theme,
}

enum Action {
    Continue,
    Quit,
}

pub fn handle(mut config: Config, config_path: &Path, date_arg: Option<&str>) -> Result<()> {
    let service = Arc::new(FetchService::from_config(&config)?);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;
    let (tx, rx): (Sender<FetchEvent>, Receiver<FetchEvent>) = mpsc::channel();

    // First paint exercises the carousel: births on, the rest opt-in.
    let mut state = TuiState {
        app: App::new(CategoryToggles::only(&[Category::Births])),
        carousel: None,
        auto: AutoAdvance::new(AutoAdvance::DEFAULT_INTERVAL),
        births: Vec::new(),
        focus: Focus::Date,
        toggle_cursor: 0,
        date_input: date_arg
            .map(str::to_string)
            .unwrap_or_else(|| DateSelection::today().to_string()),
        status: None,
        theme: config.theme,
    };
    submit_date(&mut state, &runtime, &service, &tx);

    let mut screen = TuiScreen::new()?;
    let mut last_tick = Instant::now();

    loop {
        let vm = build_screen_vm(
            &state.app,
            state.carousel.as_ref(),
            &state.births,
            &state.date_input,
            state.focus,
            state.toggle_cursor,
            state.status.as_deref(),
            state.theme,
        );
        screen.draw(&vm)?;

        while let Ok(fetch_event) = rx.try_recv() {
            apply_fetch_event(&mut state, fetch_event);
        }

        if event::poll(TICK)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let action = handle_key(
                        key.code,
                        &mut state,
                        &mut config,
                        config_path,
                        &runtime,
                        &service,
                        &tx,
                    );
                    if matches!(action, Action::Quit) {
                        break;
                    }
                }
                Event::Resize(width, _) => {
                    if let Some(carousel) = &mut state.carousel {
                        // Re-measure card width; reposition is implicit, the
                        // next frame lays the same index out at the new width.
                        carousel.set_item_width(width / 3);
                    }
                }
                _ => {}
            }
        }

        let dt = last_tick.elapsed();
        last_tick = Instant::now();
        if state.auto.tick(dt) {
            if let Some(carousel) = &mut state.carousel {
                carousel.step_forward();
            }
        }
    }

    // Dropping the runtime cancels in-flight fetches; TuiScreen's Drop
    // restores the terminal.
    Ok(())
}

fn handle_key(
    code: KeyCode,
    state: &mut TuiState,
    config: &mut Config,
    config_path: &Path,
    runtime: &tokio::runtime::Runtime,
    service: &Arc<FetchService>,
    tx: &Sender<FetchEvent>,
) -> Action {
    match code {
        KeyCode::Esc => return Action::Quit,
        KeyCode::Char('q') if state.focus != Focus::Date => return Action::Quit,
        KeyCode::Char('t') if state.focus != Focus::Date => {
            config.theme = config.theme.flipped();
            state.theme = config.theme;
            if let Err(err) = config.save_to(config_path) {
                state.status = Some(format!("Couldn't save theme: {}", err));
            }
        }
        KeyCode::Tab => cycle_focus(state),
        _ => match state.focus {
            Focus::Date => handle_date_key(code, state, runtime, service, tx),
            Focus::Toggles => handle_toggle_key(code, state),
            Focus::Carousel => handle_carousel_key(code, state),
        },
    }
    Action::Continue
}

fn cycle_focus(state: &mut TuiState) {
    let next = match state.focus {
        Focus::Date => Focus::Toggles,
        Focus::Toggles => {
            if state.carousel.is_some() {
                Focus::Carousel
            } else {
                Focus::Date
            }
        }
        Focus::Carousel => Focus::Date,
    };

    // Carousel focus is the hover analog: pause while focused, resume with
    // a fresh interval on leave.
    if next == Focus::Carousel {
        state.auto.pause();
    } else if state.focus == Focus::Carousel {
        state.auto.resume();
    }
    state.focus = next;
}

fn handle_date_key(
    code: KeyCode,
    state: &mut TuiState,
    runtime: &tokio::runtime::Runtime,
    service: &Arc<FetchService>,
    tx: &Sender<FetchEvent>,
) {
    match code {
        KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
            if state.date_input.len() < 10 {
                state.date_input.push(c);
            }
        }
        KeyCode::Backspace => {
            state.date_input.pop();
        }
        KeyCode::Enter => submit_date(state, runtime, service, tx),
        _ => {}
    }
}

fn handle_toggle_key(code: KeyCode, state: &mut TuiState) {
    match code {
        KeyCode::Up => {
            state.toggle_cursor = state.toggle_cursor.saturating_sub(1);
        }
        KeyCode::Down => {
            state.toggle_cursor = (state.toggle_cursor + 1).min(Category::ALL.len() - 1);
        }
        KeyCode::Char(' ') => {
            // Toggles re-render from the cached payload; no fetch.
            state.app.toggle(Category::ALL[state.toggle_cursor]);
            rebuild_carousel(state);
        }
        _ => {}
    }
}

fn handle_carousel_key(code: KeyCode, state: &mut TuiState) {
    let Some(carousel) = &mut state.carousel else {
        return;
    };
    match code {
        KeyCode::Left => carousel.step_back(),
        KeyCode::Right => carousel.step_forward(),
        _ => {}
    }
}

fn submit_date(
    state: &mut TuiState,
    runtime: &tokio::runtime::Runtime,
    service: &Arc<FetchService>,
    tx: &Sender<FetchEvent>,
) {
    let date = match DateSelection::parse(&state.date_input) {
        Ok(date) => date,
        Err(err) => {
            // User-correctable; prompt instead of fetching.
            state.status = Some(err.to_string());
            return;
        }
    };
    if date.is_future() {
        state.status = Some(format!(
            "{}; pick today or earlier",
            dayfacts_types::Error::FutureDate(date.to_string())
        ));
        return;
    }

    state.status = None;
    let (seq, plan) = state.app.begin_fetch(date);
    if !plan.is_empty() {
        spawn_fetch(
            runtime.handle(),
            Arc::clone(service),
            date,
            plan,
            seq,
            tx.clone(),
        );
    }
}

fn apply_fetch_event(state: &mut TuiState, fetch_event: FetchEvent) {
    let FetchEvent { seq, outcome } = fetch_event;
    match outcome {
        FetchOutcome::Payload(payload) => {
            if state.app.complete_fetch(seq, payload) {
                rebuild_carousel(state);
            }
        }
        FetchOutcome::Failed(message) => {
            state.app.fail_fetch(seq, message);
        }
    }
}

/// Rebuild the births strip from the cached payload and current toggles.
/// An empty list means no carousel at all, never an empty one.
fn rebuild_carousel(state: &mut TuiState) {
    state.births = if state.app.toggles().is_enabled(Category::Births) {
        state
            .app
            .payload()
            .and_then(|payload| payload.records(Category::Births))
            .map(|records| {
                records
                    .iter()
                    .take(Category::Births.display_cap())
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    } else {
        Vec::new()
    };

    state.carousel = Carousel::new(state.births.len());

    if state.carousel.is_none() && state.focus == Focus::Carousel {
        state.focus = Focus::Toggles;
        state.auto.resume();
    }
}
