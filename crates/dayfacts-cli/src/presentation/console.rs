use dayfacts_engine::{GLOBAL_EMPTY_MESSAGE, ScreenSections, SectionView};
use dayfacts_types::{DateSelection, DisplayRecord};
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

const MIN_WIDTH: usize = 40;
const MAX_WIDTH: usize = 100;

/// Render one screen of sections as console cards.
pub fn render_screen(screen: &ScreenSections, date: &DateSelection, color: bool) {
    let width = card_width();

    print_header(&format!("On this day — {}", date), width, color);

    if screen.all_hidden {
        println!("\n{}", GLOBAL_EMPTY_MESSAGE);
        return;
    }

    for section in &screen.sections {
        print_section(section, width, color);
    }
}

fn card_width() -> usize {
    let detected = terminal_size()
        .map(|(Width(w), _)| w as usize)
        .unwrap_or(80);
    detected.clamp(MIN_WIDTH, MAX_WIDTH)
}

fn print_header(title: &str, width: usize, color: bool) {
    if color {
        println!("{}", title.bold());
    } else {
        println!("{}", title);
    }
    println!("{}", "=".repeat(width.min(title.chars().count().max(20))));
}

fn print_section(section: &SectionView, width: usize, color: bool) {
    println!();
    if color {
        println!("{}", section.title.bold().cyan());
    } else {
        println!("## {}", section.title);
    }

    if let Some(message) = &section.failure {
        let line = format!("{} — try again in a moment.", message);
        if color {
            println!("  {}", line.red());
        } else {
            println!("  {}", line);
        }
        return;
    }

    if let Some(message) = section.empty_message {
        if color {
            println!("  {}", message.dimmed());
        } else {
            println!("  {}", message);
        }
        return;
    }

    for record in &section.records {
        print_record(record, width, color);
    }
}

fn print_record(record: &DisplayRecord, width: usize, color: bool) {
    let heading = match &record.subtitle {
        Some(subtitle) => format!("• {} ({})", record.title, subtitle),
        None => format!("• {}", record.title),
    };
    if color {
        println!("  {}", heading.green());
    } else {
        println!("  {}", heading);
    }

    if !record.description.is_empty() && record.description != record.title {
        let line = truncate_line(&record.description, width.saturating_sub(4));
        if color {
            println!("    {}", line.dimmed());
        } else {
            println!("    {}", line);
        }
    }

    if let Some(link) = &record.link_url {
        if color {
            println!("    {}", link.blue().underline());
        } else {
            println!("    {}", link);
        }
    }
}

/// Cut a line to at most `max` characters, on a char boundary.
pub fn truncate_line(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
