use crate::payload::DayPayload;
use crate::sections::{ScreenSections, assemble};
use dayfacts_types::{Category, CategoryToggles, DateSelection};

/// Which provider calls one fetch will issue.
///
/// The four wikipedia-backed categories plus the fun fact share a single
/// feed call; movies and anime are independent calls. A plan is derived
/// from the toggles at fetch time, so a date change with everything
/// disabled issues zero calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchPlan {
    pub wikipedia: bool,
    pub movies: bool,
    pub anime: bool,
}

const WIKIPEDIA_CATEGORIES: [Category; 5] = [
    Category::Births,
    Category::Deaths,
    Category::Events,
    Category::Holidays,
    Category::FunFact,
];

impl FetchPlan {
    pub fn from_toggles(toggles: &CategoryToggles) -> Self {
        Self {
            wikipedia: WIKIPEDIA_CATEGORIES
                .iter()
                .any(|c| toggles.is_enabled(*c)),
            movies: toggles.is_enabled(Category::Movies),
            anime: toggles.is_enabled(Category::Anime),
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.wikipedia || self.movies || self.anime)
    }
}

/// Lifecycle of the view: nothing selected yet, a fetch in flight, a
/// payload on screen, or a whole-fetch failure.
///
/// `Loading` carries the previous payload so toggles stay cheap while a
/// newer date loads.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    NoSelection,
    Loading {
        seq: u64,
        date: DateSelection,
        previous: Option<DayPayload>,
    },
    Loaded {
        seq: u64,
        payload: DayPayload,
    },
    Failed {
        seq: u64,
        date: DateSelection,
        message: String,
    },
}

/// The view controller: owns the toggle state, the single-slot payload
/// cache, and the request sequence counter that guards against a stale,
/// slower fetch overwriting a fresher one.
#[derive(Debug)]
pub struct App {
    state: ViewState,
    toggles: CategoryToggles,
    next_seq: u64,
}

impl App {
    pub fn new(toggles: CategoryToggles) -> Self {
        Self {
            state: ViewState::NoSelection,
            toggles,
            next_seq: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn toggles(&self) -> &CategoryToggles {
        &self.toggles
    }

    /// Flip one category. Never fetches; the next render reads the cache.
    pub fn toggle(&mut self, category: Category) -> bool {
        self.toggles.toggle(category)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading { .. })
    }

    pub fn selected_date(&self) -> Option<DateSelection> {
        match &self.state {
            ViewState::NoSelection => None,
            ViewState::Loading { date, .. } | ViewState::Failed { date, .. } => Some(*date),
            ViewState::Loaded { payload, .. } => Some(payload.date),
        }
    }

    /// Start a fetch for a date, returning the new sequence number and the
    /// plan of provider calls. An empty plan resolves immediately to an
    /// all-hidden payload, with no loading state and no network.
    pub fn begin_fetch(&mut self, date: DateSelection) -> (u64, FetchPlan) {
        self.next_seq += 1;
        let seq = self.next_seq;
        let plan = FetchPlan::from_toggles(&self.toggles);

        if plan.is_empty() {
            self.state = ViewState::Loaded {
                seq,
                payload: DayPayload::new(date),
            };
        } else {
            let previous = self.take_payload();
            self.state = ViewState::Loading {
                seq,
                date,
                previous,
            };
        }

        (seq, plan)
    }

    /// Install a finished fetch. A result whose seq is not the one in
    /// flight is stale and discarded silently: not shown as an error, not
    /// shown as data.
    pub fn complete_fetch(&mut self, seq: u64, payload: DayPayload) -> bool {
        if !self.accepts(seq) {
            return false;
        }
        self.state = ViewState::Loaded { seq, payload };
        true
    }

    /// Record a whole-fetch failure, subject to the same staleness guard.
    pub fn fail_fetch(&mut self, seq: u64, message: String) -> bool {
        let ViewState::Loading { date, .. } = &self.state else {
            return false;
        };
        let date = *date;
        if !self.accepts(seq) {
            return false;
        }
        self.state = ViewState::Failed { seq, date, message };
        true
    }

    fn accepts(&self, seq: u64) -> bool {
        matches!(&self.state, ViewState::Loading { seq: current, .. } if *current == seq)
    }

    /// The payload available for rendering: the loaded one, or the previous
    /// one while a newer fetch is in flight.
    pub fn payload(&self) -> Option<&DayPayload> {
        match &self.state {
            ViewState::Loaded { payload, .. } => Some(payload),
            ViewState::Loading { previous, .. } => previous.as_ref(),
            _ => None,
        }
    }

    /// Sections for the current payload and toggles; `None` when there is
    /// nothing to render from yet.
    pub fn sections(&self) -> Option<ScreenSections> {
        self.payload()
            .map(|payload| assemble(payload, &self.toggles))
    }

    fn take_payload(&mut self) -> Option<DayPayload> {
        match std::mem::replace(&mut self.state, ViewState::NoSelection) {
            ViewState::Loaded { payload, .. } => Some(payload),
            ViewState::Loading { previous, .. } => previous,
            _ => None,
        }
    }
}
