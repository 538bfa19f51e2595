use crate::payload::{CategoryOutcome, DayPayload};
use dayfacts_types::{Category, CategoryToggles, DisplayRecord};
use serde::Serialize;

/// Shown when every category is switched off.
pub const GLOBAL_EMPTY_MESSAGE: &str =
    "Nothing to show — enable a category to see facts for this day.";

/// One renderable section: a header plus up to `display_cap` cards.
#[derive(Debug, Clone, Serialize)]
pub struct SectionView {
    pub category: Category,
    pub title: &'static str,
    pub records: Vec<DisplayRecord>,
    /// Category-specific copy when the day has no items; the section still
    /// renders rather than disappearing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
    /// Category-level failure line when its provider call failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

/// Everything the renderers need for one screen.
#[derive(Debug, Clone, Serialize)]
pub struct ScreenSections {
    pub sections: Vec<SectionView>,
    /// True when no category is enabled at all; renderers show the single
    /// global placeholder instead of sections.
    pub all_hidden: bool,
}

/// Build the visible sections for the enabled categories.
pub fn assemble(payload: &DayPayload, toggles: &CategoryToggles) -> ScreenSections {
    let sections: Vec<SectionView> = toggles
        .enabled()
        .map(|category| section_for(payload, category))
        .collect();

    ScreenSections {
        all_hidden: sections.is_empty(),
        sections,
    }
}

fn section_for(payload: &DayPayload, category: Category) -> SectionView {
    let mut section = SectionView {
        category,
        title: category.label(),
        records: Vec::new(),
        empty_message: None,
        failure: None,
    };

    match payload.outcome(category) {
        CategoryOutcome::Loaded(records) if !records.is_empty() => {
            section.records = truncate(records, category.display_cap());
        }
        CategoryOutcome::Loaded(_) | CategoryOutcome::NotFetched => {
            section.empty_message = Some(category.empty_message());
        }
        CategoryOutcome::Failed(message) => {
            section.failure = Some(message.clone());
        }
    }

    section
}

fn truncate(records: &[DisplayRecord], cap: usize) -> Vec<DisplayRecord> {
    records.iter().take(cap).cloned().collect()
}
