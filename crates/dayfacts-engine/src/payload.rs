use dayfacts_types::{Category, DateSelection, DisplayRecord};
use std::collections::BTreeMap;

/// What one category ended up with after a fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryOutcome {
    /// The provider answered; the list may legitimately be empty.
    Loaded(Vec<DisplayRecord>),

    /// The provider was called and failed (timeout, HTTP, network, parse).
    Failed(String),

    /// The category was disabled when the fetch ran, so its provider was
    /// never called. Renders like an empty category, never as an error.
    NotFetched,
}

/// The single-slot cache value: one date's outcomes for every category.
///
/// One slot holds the latest full fetch so toggle changes re-render without
/// re-fetching. The slot is keyed by recency, not by category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPayload {
    pub date: DateSelection,
    outcomes: BTreeMap<Category, CategoryOutcome>,
}

impl DayPayload {
    /// Fresh payload with every category marked not-fetched.
    pub fn new(date: DateSelection) -> Self {
        Self {
            date,
            outcomes: Category::ALL
                .into_iter()
                .map(|c| (c, CategoryOutcome::NotFetched))
                .collect(),
        }
    }

    pub fn set(&mut self, category: Category, outcome: CategoryOutcome) {
        self.outcomes.insert(category, outcome);
    }

    pub fn outcome(&self, category: Category) -> &CategoryOutcome {
        self.outcomes
            .get(&category)
            .unwrap_or(&CategoryOutcome::NotFetched)
    }

    /// Records for a category, when it loaded.
    pub fn records(&self, category: Category) -> Option<&[DisplayRecord]> {
        match self.outcome(category) {
            CategoryOutcome::Loaded(records) => Some(records),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_payload_has_nothing_fetched() {
        let date = DateSelection::parse("2024-07-04").unwrap();
        let payload = DayPayload::new(date);
        for category in Category::ALL {
            assert_eq!(payload.outcome(category), &CategoryOutcome::NotFetched);
        }
    }

    #[test]
    fn outcomes_are_set_per_category() {
        let date = DateSelection::parse("2024-07-04").unwrap();
        let mut payload = DayPayload::new(date);
        payload.set(Category::Births, CategoryOutcome::Loaded(vec![]));
        payload.set(Category::Movies, CategoryOutcome::Failed("Request timed out".into()));

        assert_eq!(payload.records(Category::Births), Some(&[][..]));
        assert!(matches!(
            payload.outcome(Category::Movies),
            CategoryOutcome::Failed(_)
        ));
        assert_eq!(payload.records(Category::Deaths), None);
    }
}
