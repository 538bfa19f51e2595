use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A user-toggleable content grouping.
///
/// The category table drives the whole pipeline: which provider feeds it,
/// how many cards it shows, and what it says when the day has nothing.
/// Adding a category is a table change, not a new widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Births,
    Deaths,
    Events,
    Holidays,
    FunFact,
    Movies,
    Anime,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Births,
        Category::Deaths,
        Category::Events,
        Category::Holidays,
        Category::FunFact,
        Category::Movies,
        Category::Anime,
    ];

    /// Stable identifier, as used in config files and CLI arguments.
    pub fn id(&self) -> &'static str {
        match self {
            Category::Births => "births",
            Category::Deaths => "deaths",
            Category::Events => "events",
            Category::Holidays => "holidays",
            Category::FunFact => "fun_fact",
            Category::Movies => "movies",
            Category::Anime => "anime",
        }
    }

    /// Section heading shown above the cards.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Births => "Famous Birthdays",
            Category::Deaths => "Notable Deaths",
            Category::Events => "Historical Events",
            Category::Holidays => "Holidays & Observances",
            Category::FunFact => "Fun Fact",
            Category::Movies => "Movies Released Today",
            Category::Anime => "Anime That Premiered Today",
        }
    }

    /// Maximum cards rendered for this category.
    pub fn display_cap(&self) -> usize {
        match self {
            Category::Holidays => 4,
            Category::Deaths => 6,
            Category::Births | Category::Events => 7,
            Category::FunFact => 1,
            Category::Movies | Category::Anime => 8,
        }
    }

    /// Copy shown when the category is enabled but the day has no items.
    pub fn empty_message(&self) -> &'static str {
        match self {
            Category::Births => "No birthdays recorded for this day.",
            Category::Deaths => "No deaths recorded for this day.",
            Category::Events => "No events recorded for this day.",
            Category::Holidays => "No holidays or observances for this day.",
            Category::FunFact => "No fun fact for this day.",
            Category::Movies => "No movie releases found for this day.",
            Category::Anime => "No anime premieres found for this day.",
        }
    }

    pub fn from_id(id: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.id() == id)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The set of categories the user currently has switched on.
///
/// Lives for the session; mutated only by user interaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryToggles {
    enabled: BTreeSet<Category>,
}

impl CategoryToggles {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Self {
            enabled: Category::ALL.into_iter().collect(),
        }
    }

    pub fn only(categories: &[Category]) -> Self {
        Self {
            enabled: categories.iter().copied().collect(),
        }
    }

    pub fn is_enabled(&self, category: Category) -> bool {
        self.enabled.contains(&category)
    }

    pub fn any_enabled(&self) -> bool {
        !self.enabled.is_empty()
    }

    pub fn set(&mut self, category: Category, enabled: bool) {
        if enabled {
            self.enabled.insert(category);
        } else {
            self.enabled.remove(&category);
        }
    }

    /// Flip one category, returning its new state.
    pub fn toggle(&mut self, category: Category) -> bool {
        let now_enabled = !self.is_enabled(category);
        self.set(category, now_enabled);
        now_enabled
    }

    /// Enabled categories in table order.
    pub fn enabled(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL
            .into_iter()
            .filter(|c| self.enabled.contains(c))
    }
}

/// The normalized, provider-agnostic representation of one fact or item,
/// ready for rendering. Absent optional fields mean the corresponding UI
/// fragment is omitted, never rendered as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRecord {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_ids_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_id(category.id()), Some(category));
        }
        assert_eq!(Category::from_id("weather"), None);
    }

    #[test]
    fn display_caps_match_product_choices() {
        assert_eq!(Category::Holidays.display_cap(), 4);
        assert_eq!(Category::Deaths.display_cap(), 6);
        assert_eq!(Category::Births.display_cap(), 7);
        assert_eq!(Category::Events.display_cap(), 7);
        assert_eq!(Category::Movies.display_cap(), 8);
    }

    #[test]
    fn toggles_flip_and_report() {
        let mut toggles = CategoryToggles::none();
        assert!(!toggles.any_enabled());

        assert!(toggles.toggle(Category::Births));
        assert!(toggles.is_enabled(Category::Births));
        assert!(!toggles.toggle(Category::Births));
        assert!(!toggles.any_enabled());
    }

    #[test]
    fn enabled_iterates_in_table_order() {
        let toggles = CategoryToggles::only(&[Category::Anime, Category::Births]);
        let order: Vec<Category> = toggles.enabled().collect();
        assert_eq!(order, vec![Category::Births, Category::Anime]);
    }
}
