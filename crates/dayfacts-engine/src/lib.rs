pub mod app;
pub mod carousel;
pub mod payload;
pub mod sections;

pub use app::{App, FetchPlan, ViewState};
pub use carousel::{AutoAdvance, Carousel};
pub use payload::{CategoryOutcome, DayPayload};
pub use sections::{GLOBAL_EMPTY_MESSAGE, ScreenSections, SectionView, assemble};
