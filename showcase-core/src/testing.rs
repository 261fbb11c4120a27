//! In-memory surface and timer used to drive the controller without a UI.
//!
//! Built for tests only (`cfg(test)` or the `testing` feature).

use std::cell::Cell;
use std::collections::{BTreeMap, HashSet};
use std::time::Duration;

use crate::{
    autoplay::{TimerDriver, TimerHandle},
    indicators::Indicator,
    layout::CardMetrics,
    surface::{NavState, RenderSurface, SurfaceElement},
};

/// Records every call the controller makes so tests can assert on them.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    /// Elements reported as present.
    pub elements: HashSet<SurfaceElement>,
    /// What `measure_card` returns.
    pub card: Option<CardMetrics>,
    /// Every applied track offset, oldest first.
    pub offsets: Vec<f32>,
    /// Dots as last rebuilt or refreshed.
    pub indicators: Vec<Indicator>,
    /// Number of `rebuild_indicators` calls.
    pub rebuilds: usize,
    /// Number of `refresh_indicators` calls.
    pub refreshes: usize,
    /// Last applied nav state.
    pub nav: Option<NavState>,
    /// Number of `measure_card` calls.
    pub measurements: Cell<usize>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self {
            elements: SurfaceElement::REQUIRED.into_iter().collect(),
            card: None,
            offsets: Vec::new(),
            indicators: Vec::new(),
            rebuilds: 0,
            refreshes: 0,
            nav: None,
            measurements: Cell::new(0),
        }
    }
}

impl RecordingSurface {
    /// Surface with every element and a measurable `card`.
    pub fn with_card(card: CardMetrics) -> Self {
        Self {
            card: Some(card),
            ..Self::default()
        }
    }

    /// Card of `width` px with no margins.
    pub fn with_card_width(width: f32) -> Self {
        Self::with_card(CardMetrics::new(width, 0.0, 0.0))
    }

    /// Drop `element` so init fails on it.
    pub fn without(mut self, element: SurfaceElement) -> Self {
        self.elements.remove(&element);
        self
    }

    /// Most recent track offset.
    pub fn last_offset(&self) -> Option<f32> {
        self.offsets.last().copied()
    }
}

impl RenderSurface for RecordingSurface {
    fn has_element(&self, element: SurfaceElement) -> bool {
        self.elements.contains(&element)
    }

    fn measure_card(&self) -> Option<CardMetrics> {
        self.measurements.set(self.measurements.get() + 1);
        self.card
    }

    fn apply_track_offset(&mut self, offset_px: f32) {
        self.offsets.push(offset_px);
    }

    fn rebuild_indicators(&mut self, indicators: &[Indicator]) {
        self.indicators = indicators.to_vec();
        self.rebuilds += 1;
    }

    fn refresh_indicators(&mut self, indicators: &[Indicator]) {
        // Refresh may only re-flag; the dot count must not change.
        assert_eq!(
            self.indicators.len(),
            indicators.len(),
            "refresh changed the indicator count"
        );
        self.indicators = indicators.to_vec();
        self.refreshes += 1;
    }

    fn apply_nav_state(&mut self, nav: NavState) {
        self.nav = Some(nav);
    }
}

/// Timer that only fires when a test says so.
#[derive(Debug, Clone, Default)]
pub struct ManualTimer {
    next_id: u64,
    live: BTreeMap<TimerHandle, Duration>,
    cancelled: Vec<TimerHandle>,
    scheduled: usize,
    last_interval: Option<Duration>,
}

impl ManualTimer {
    /// Timers scheduled and not yet cancelled.
    pub fn live_handles(&self) -> Vec<TimerHandle> {
        self.live.keys().copied().collect()
    }

    /// Cancelled timers, in order.
    pub fn cancelled(&self) -> &[TimerHandle] {
        &self.cancelled
    }

    /// Total `schedule_repeating` calls.
    pub fn scheduled_count(&self) -> usize {
        self.scheduled
    }

    /// Interval of the most recent schedule.
    pub fn last_interval(&self) -> Option<Duration> {
        self.last_interval
    }
}

impl TimerDriver for ManualTimer {
    fn schedule_repeating(&mut self, interval: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle::new(self.next_id);
        self.live.insert(handle, interval);
        self.scheduled += 1;
        self.last_interval = Some(interval);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if self.live.remove(&handle).is_some() {
            self.cancelled.push(handle);
        }
    }
}
