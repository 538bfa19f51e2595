use std::time::Duration;

/// Clone-padded looping carousel index machine.
///
/// The track holds the item list padded with a clone of the last item at
/// position 0 and a clone of the first at position `len + 1`, so real
/// content lives at `1..=len`. Wrapping works by animating onto a clone and
/// then snapping, without animation, to the real index it duplicates;
/// `settle` is that snap. The machine never leaves the index on a clone
/// after a transition completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    item_width: u16,
}

impl Carousel {
    /// A carousel needs at least one item; callers check non-emptiness
    /// before constructing.
    pub fn new(len: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        Some(Self {
            len,
            index: 1,
            item_width: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Raw track position, `0..=len + 1`.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The real item on display, 0-based, with clone positions mapped to
    /// the items they duplicate.
    pub fn current(&self) -> usize {
        match self.index {
            0 => self.len - 1,
            i if i == self.len + 1 => 0,
            i => i - 1,
        }
    }

    /// Move one step right. Refused while sitting on the trailing clone,
    /// exactly as the right arrow is.
    pub fn advance(&mut self) -> bool {
        if self.index >= self.len + 1 {
            return false;
        }
        self.index += 1;
        true
    }

    /// Move one step left. Refused at the leading clone.
    pub fn retreat(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Transition-end snap: a clone position repositions instantly to the
    /// real index it duplicates. Returns whether a snap happened.
    pub fn settle(&mut self) -> bool {
        if self.index == 0 {
            self.index = self.len;
            true
        } else if self.index == self.len + 1 {
            self.index = 1;
            true
        } else {
            false
        }
    }

    /// Advance and settle in one step (the terminal renderer has no tween).
    pub fn step_forward(&mut self) {
        self.advance();
        self.settle();
    }

    pub fn step_back(&mut self) {
        self.retreat();
        self.settle();
    }

    /// Measured width of one rendered item, set after layout and again on
    /// every viewport resize.
    pub fn set_item_width(&mut self, width: u16) {
        self.item_width = width;
    }

    pub fn item_width(&self) -> u16 {
        self.item_width
    }
}

/// Repeating auto-advance timer.
///
/// Pausing discards accumulated time; resuming starts a fresh interval with
/// no carry-over. The owner drops the timer with the view, so a timer never
/// drives a detached carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoAdvance {
    interval: Duration,
    elapsed: Duration,
    paused: bool,
}

impl AutoAdvance {
    /// The observed production cadence.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(3_400);

    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
            paused: false,
        }
    }

    /// Feed elapsed wall time; returns true when the interval fires.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.paused {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= self.interval {
            self.elapsed = Duration::ZERO;
            true
        } else {
            false
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;
        self.elapsed = Duration::ZERO;
    }

    pub fn resume(&mut self) {
        self.paused = false;
        self.elapsed = Duration::ZERO;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_carousel_is_refused() {
        assert!(Carousel::new(0).is_none());
    }

    #[test]
    fn starts_on_the_first_real_item() {
        let carousel = Carousel::new(5).unwrap();
        assert_eq!(carousel.index(), 1);
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn k_steps_forward_displays_k_mod_n() {
        for n in [1, 2, 3, 5, 12] {
            let mut carousel = Carousel::new(n).unwrap();
            for k in 0..3 * n + 4 {
                assert_eq!(
                    carousel.current(),
                    k % n,
                    "after {} steps over {} items",
                    k,
                    n
                );
                carousel.step_forward();
            }
        }
    }

    #[test]
    fn settle_snaps_trailing_clone_to_first_item() {
        let mut carousel = Carousel::new(3).unwrap();
        carousel.advance();
        carousel.advance();
        carousel.advance(); // onto the clone at len + 1
        assert_eq!(carousel.index(), 4);
        assert_eq!(carousel.current(), 0); // clone already shows item 0

        assert!(carousel.settle());
        assert_eq!(carousel.index(), 1);
        assert_eq!(carousel.current(), 0); // the snap is invisible
    }

    #[test]
    fn settle_snaps_leading_clone_to_last_item() {
        let mut carousel = Carousel::new(3).unwrap();
        carousel.retreat(); // onto the clone at 0
        assert_eq!(carousel.current(), 2);

        assert!(carousel.settle());
        assert_eq!(carousel.index(), 3);
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn arrows_refuse_past_the_clones() {
        let mut carousel = Carousel::new(2).unwrap();
        assert!(carousel.retreat());
        assert!(!carousel.retreat()); // at 0, refused

        carousel.settle(); // snapped to index len
        assert!(carousel.advance()); // onto the trailing clone
        assert!(!carousel.advance()); // refused
    }

    #[test]
    fn stepping_back_wraps_around() {
        let mut carousel = Carousel::new(4).unwrap();
        carousel.step_back();
        assert_eq!(carousel.current(), 3);
        carousel.step_back();
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn single_item_carousel_keeps_showing_it() {
        let mut carousel = Carousel::new(1).unwrap();
        for _ in 0..5 {
            carousel.step_forward();
            assert_eq!(carousel.current(), 0);
        }
    }

    #[test]
    fn auto_advance_fires_on_the_interval() {
        let mut timer = AutoAdvance::new(Duration::from_millis(100));
        assert!(!timer.tick(Duration::from_millis(60)));
        assert!(timer.tick(Duration::from_millis(60)));
        // Fresh interval after firing.
        assert!(!timer.tick(Duration::from_millis(60)));
    }

    #[test]
    fn paused_timer_accumulates_nothing() {
        let mut timer = AutoAdvance::new(Duration::from_millis(100));
        timer.tick(Duration::from_millis(90));
        timer.pause();
        assert!(!timer.tick(Duration::from_millis(500)));

        // Resume starts fresh, no carry-over of the 90ms.
        timer.resume();
        assert!(!timer.tick(Duration::from_millis(90)));
        assert!(timer.tick(Duration::from_millis(20)));
    }
}
