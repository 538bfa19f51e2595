//! Pure view-model builders for the TUI.
//!
//! The handler owns the domain state; everything the renderer needs is
//! copied into a `ScreenVm` here, so drawing never touches the engine.

use crate::config::Theme;
use dayfacts_engine::{App, Carousel, ScreenSections, ViewState};
use dayfacts_types::{Category, DisplayRecord};

/// Which pane has keyboard focus. Carousel focus is the hover analog: it
/// pauses auto-advance until focus moves away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Date,
    Toggles,
    Carousel,
}

#[derive(Debug, Clone)]
pub struct CarouselVm {
    /// Window of three track positions centered on the current one,
    /// resolved to real items (clones resolve to what they duplicate).
    pub window: Vec<DisplayRecord>,
    /// Offset into `window` of the centered card.
    pub center: usize,
    pub current: usize,
    pub len: usize,
    pub paused: bool,
}

#[derive(Debug, Clone)]
pub struct ScreenVm {
    pub date_input: String,
    pub focus: Focus,
    pub loading: bool,
    pub status: Option<String>,
    pub toggles: Vec<(Category, bool)>,
    pub toggle_cursor: usize,
    pub sections: Option<ScreenSections>,
    pub carousel: Option<CarouselVm>,
    pub theme: Theme,
}

#[allow(clippy::too_many_arguments)]
pub fn build_screen_vm(
    app: &App,
    carousel: Option<&Carousel>,
    births: &[DisplayRecord],
    date_input: &str,
    focus: Focus,
    toggle_cursor: usize,
    status: Option<&str>,
    theme: Theme,
) -> ScreenVm {
    let status = status.map(str::to_string).or_else(|| match app.state() {
        ViewState::Failed { message, .. } => {
            Some(format!("{} — try another date.", message))
        }
        ViewState::NoSelection => Some("Enter a date to get started.".to_string()),
        _ => None,
    });

    ScreenVm {
        date_input: date_input.to_string(),
        focus,
        loading: app.is_loading(),
        status,
        toggles: Category::ALL
            .into_iter()
            .map(|c| (c, app.toggles().is_enabled(c)))
            .collect(),
        toggle_cursor,
        sections: app.sections(),
        carousel: carousel.map(|c| {
            let mut vm = build_carousel_vm(c, births);
            vm.paused = focus == Focus::Carousel;
            vm
        }),
        theme,
    }
}

fn build_carousel_vm(carousel: &Carousel, items: &[DisplayRecord]) -> CarouselVm {
    let len = carousel.len();
    let index = carousel.index();

    // Track positions index-1, index, index+1, clamped to the padded range.
    let lo = index.saturating_sub(1);
    let hi = (index + 1).min(len + 1);
    let window = (lo..=hi)
        .filter_map(|p| items.get(real_item(p, len)).cloned())
        .collect();

    CarouselVm {
        window,
        center: index - lo,
        current: carousel.current(),
        len,
        paused: false,
    }
}

/// Map a padded track position to the real item it shows.
fn real_item(position: usize, len: usize) -> usize {
    if position == 0 {
        len - 1
    } else if position == len + 1 {
        0
    } else {
        position - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str) -> DisplayRecord {
        DisplayRecord {
            title: title.to_string(),
            subtitle: None,
            description: String::new(),
            image_url: None,
            link_url: None,
        }
    }

    #[test]
    fn window_centers_on_the_current_card() {
        let items: Vec<DisplayRecord> = ["a", "b", "c"].iter().map(|t| record(t)).collect();
        let mut carousel = Carousel::new(3).unwrap();
        carousel.step_forward(); // showing "b"

        let vm = build_carousel_vm(&carousel, &items);
        let titles: Vec<&str> = vm.window.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
        assert_eq!(vm.center, 1);
        assert_eq!(vm.current, 1);
    }

    #[test]
    fn window_wraps_through_the_clones() {
        let items: Vec<DisplayRecord> = ["a", "b", "c"].iter().map(|t| record(t)).collect();
        let carousel = Carousel::new(3).unwrap(); // at index 1, showing "a"

        let vm = build_carousel_vm(&carousel, &items);
        let titles: Vec<&str> = vm.window.iter().map(|r| r.title.as_str()).collect();
        // Leading clone shows the last item.
        assert_eq!(titles, vec!["c", "a", "b"]);
    }
}
