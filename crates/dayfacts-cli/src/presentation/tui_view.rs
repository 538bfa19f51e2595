use crate::config::Theme;
use crate::presentation::console::truncate_line;
use crate::presentation::presenters::{CarouselVm, Focus, ScreenVm};
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use dayfacts_engine::GLOBAL_EMPTY_MESSAGE;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use std::io::{self, Stdout};

/// Terminal lifecycle wrapper: raw mode + alternate screen on entry,
/// restored on drop so a panic or early return never leaves the shell raw.
pub struct TuiScreen {
    pub terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TuiScreen {
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        // Ctrl+C must restore the terminal before exiting
        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        Ok(Self { terminal })
    }

    pub fn draw(&mut self, vm: &ScreenVm) -> Result<()> {
        self.terminal.draw(|frame| ui(frame, vm))?;
        Ok(())
    }
}

impl Drop for TuiScreen {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct Palette {
    accent: Color,
    text: Color,
    dim: Color,
    error: Color,
}

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            accent: Color::Cyan,
            text: Color::White,
            dim: Color::DarkGray,
            error: Color::Red,
        },
        Theme::Light => Palette {
            accent: Color::Blue,
            text: Color::Black,
            dim: Color::Gray,
            error: Color::LightRed,
        },
    }
}

fn focus_style(focused: bool, palette: &Palette) -> Style {
    if focused {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.dim)
    }
}

/// Render one frame from the view model.
pub fn ui(frame: &mut Frame, vm: &ScreenVm) {
    let palette = palette(vm.theme);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // date bar
            Constraint::Min(0),    // body
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    draw_date_bar(frame, rows[0], vm, &palette);
    draw_body(frame, rows[1], vm, &palette);
    draw_footer(frame, rows[2], vm, &palette);
}

fn draw_date_bar(frame: &mut Frame, area: Rect, vm: &ScreenVm, palette: &Palette) {
    let mut spans = vec![
        Span::styled("Date: ", Style::default().fg(palette.dim)),
        Span::styled(
            vm.date_input.clone(),
            Style::default().fg(palette.text),
        ),
    ];
    if vm.focus == Focus::Date {
        spans.push(Span::styled("_", Style::default().fg(palette.accent)));
    }
    if vm.loading {
        spans.push(Span::styled(
            "   loading…",
            Style::default().fg(palette.accent),
        ));
    }

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(focus_style(vm.focus == Focus::Date, palette))
            .title("dayfacts"),
    );
    frame.render_widget(bar, area);
}

fn draw_body(frame: &mut Frame, area: Rect, vm: &ScreenVm, palette: &Palette) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(0)])
        .split(area);

    draw_toggles(frame, columns[0], vm, palette);

    let has_carousel = vm.carousel.is_some();
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints(if has_carousel {
            [Constraint::Length(9), Constraint::Min(0)]
        } else {
            [Constraint::Length(0), Constraint::Min(0)]
        })
        .split(columns[1]);

    if let Some(carousel) = &vm.carousel {
        draw_carousel(frame, right[0], carousel, vm, palette);
    }
    draw_sections(frame, right[1], vm, palette);
}

fn draw_toggles(frame: &mut Frame, area: Rect, vm: &ScreenVm, palette: &Palette) {
    let items: Vec<ListItem> = vm
        .toggles
        .iter()
        .enumerate()
        .map(|(i, (category, enabled))| {
            let marker = if *enabled { "[x]" } else { "[ ]" };
            let style = if vm.focus == Focus::Toggles && i == vm.toggle_cursor {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else if *enabled {
                Style::default().fg(palette.text)
            } else {
                Style::default().fg(palette.dim)
            };
            ListItem::new(Line::from(Span::styled(
                format!("{} {}", marker, category.label()),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(focus_style(vm.focus == Focus::Toggles, palette))
            .title("Categories"),
    );
    frame.render_widget(list, area);
}

fn draw_carousel(frame: &mut Frame, area: Rect, carousel: &CarouselVm, vm: &ScreenVm, palette: &Palette) {
    let title = if carousel.paused {
        format!(
            "Famous Birthdays ({}/{}) — paused",
            carousel.current + 1,
            carousel.len
        )
    } else {
        format!("Famous Birthdays ({}/{})", carousel.current + 1, carousel.len)
    };

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_style(vm.focus == Focus::Carousel, palette))
        .title(title);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    // One card per window slot, the centered one highlighted. Card width is
    // re-derived from the viewport every frame, so resizes stay aligned.
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(inner);

    for (slot, record) in carousel.window.iter().enumerate() {
        let centered = slot == carousel.center;
        let style = if centered {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.dim)
        };

        let mut lines = vec![Line::from(Span::styled(record.title.clone(), style))];
        if let Some(subtitle) = &record.subtitle {
            lines.push(Line::from(Span::styled(
                subtitle.clone(),
                Style::default().fg(palette.dim),
            )));
        }
        if centered && !record.description.is_empty() {
            lines.push(Line::from(Span::styled(
                truncate_line(&record.description, 60),
                Style::default().fg(palette.text),
            )));
        }

        let card = Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).border_style(style));
        if slot < slots.len() {
            frame.render_widget(card, slots[slot]);
        }
    }
}

fn draw_sections(frame: &mut Frame, area: Rect, vm: &ScreenVm, palette: &Palette) {
    let mut lines: Vec<Line> = Vec::new();

    match &vm.sections {
        None => {
            if let Some(status) = &vm.status {
                lines.push(Line::from(Span::styled(
                    status.clone(),
                    Style::default().fg(palette.error),
                )));
            }
        }
        Some(screen) if screen.all_hidden => {
            lines.push(Line::from(Span::styled(
                GLOBAL_EMPTY_MESSAGE,
                Style::default().fg(palette.dim),
            )));
        }
        Some(screen) => {
            for section in &screen.sections {
                // The births strip is the carousel; skip its flat listing.
                if section.category == dayfacts_types::Category::Births && vm.carousel.is_some() {
                    continue;
                }
                lines.push(Line::from(Span::styled(
                    section.title,
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                )));
                if let Some(failure) = &section.failure {
                    lines.push(Line::from(Span::styled(
                        format!("  {} — try again in a moment.", failure),
                        Style::default().fg(palette.error),
                    )));
                } else if let Some(empty) = section.empty_message {
                    lines.push(Line::from(Span::styled(
                        format!("  {}", empty),
                        Style::default().fg(palette.dim),
                    )));
                } else {
                    for record in &section.records {
                        let heading = match &record.subtitle {
                            Some(subtitle) => format!("  • {} ({})", record.title, subtitle),
                            None => format!("  • {}", record.title),
                        };
                        lines.push(Line::from(Span::styled(
                            heading,
                            Style::default().fg(palette.text),
                        )));
                    }
                }
                lines.push(Line::from(""));
            }
        }
    }

    let body = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Sections"));
    frame.render_widget(body, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, vm: &ScreenVm, palette: &Palette) {
    let help = match vm.focus {
        Focus::Date => "type date · Enter fetch · Tab next pane · t theme · q quit",
        Focus::Toggles => "↑/↓ select · Space toggle · Tab next pane · t theme · q quit",
        Focus::Carousel => "←/→ navigate (auto-advance paused) · Tab next pane · t theme · q quit",
    };
    let footer = Paragraph::new(Line::from(Span::styled(
        help,
        Style::default().fg(palette.dim),
    )));
    frame.render_widget(footer, area);
}
