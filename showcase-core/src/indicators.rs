//! Dot indicators, one per reachable scroll position.

use crate::input::CarouselEvent;

/// Number of dots for a given item and display count; never less than one.
#[inline]
pub fn total_slides(item_count: usize, display_count: usize) -> usize {
    item_count.saturating_sub(display_count) + 1
}

/// One dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    /// Scroll position this dot jumps to.
    pub index: usize,
    /// True for the dot matching the current index.
    pub active: bool,
}

impl Indicator {
    /// Event a front-end dispatches when this dot is activated.
    pub fn action(&self) -> CarouselEvent {
        CarouselEvent::DotActivated(self.index)
    }
}

/// Indicator set plus the generation it was built in.
///
/// `rebuild` is required whenever the slide count changes. `refresh_active`
/// only re-flags the existing dots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Indicators {
    dots: Vec<Indicator>,
    generation: u64,
}

impl Indicators {
    /// Empty set; the controller rebuilds it during init.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard every dot and create `total_slides` fresh ones (at least one),
    /// with `active_index` flagged.
    pub fn rebuild(&mut self, total_slides: usize, active_index: usize) {
        let total = total_slides.max(1);
        self.dots.clear();
        self.dots.extend((0..total).map(|index| Indicator {
            index,
            active: index == active_index,
        }));
        self.generation += 1;

        log::debug!(
            "Indicators rebuilt: {} dots, active={} (generation {})",
            total,
            active_index,
            self.generation
        );
    }

    /// Re-flag the existing dots without recreating them.
    pub fn refresh_active(&mut self, active_index: usize) {
        for dot in &mut self.dots {
            dot.active = dot.index == active_index;
        }
    }

    /// Dots in position order.
    pub fn as_slice(&self) -> &[Indicator] {
        &self.dots
    }

    /// Number of dots.
    pub fn len(&self) -> usize {
        self.dots.len()
    }

    /// True only before the first rebuild.
    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    /// Position of the active dot.
    pub fn active_index(&self) -> Option<usize> {
        self.dots.iter().find(|dot| dot.active).map(|dot| dot.index)
    }

    /// Bumped on every rebuild; stays put across refreshes.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
