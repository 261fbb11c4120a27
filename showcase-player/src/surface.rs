//! Render surface backed by plain view state that `view()` reads.

use std::collections::HashSet;

use showcase_core::{
    indicators::Indicator,
    layout::CardMetrics,
    surface::{DEFAULT_DISABLED_OPACITY, NavState, RenderSurface, SurfaceElement},
};

#[derive(Debug, Clone)]
pub struct IcedSurface {
    mounted: HashSet<SurfaceElement>,
    card: CardMetrics,
    has_cards: bool,
    track_offset: f32,
    /// Offset not yet turned into a `scroll_to` task.
    pending_scroll: Option<f32>,
    dots: Vec<Indicator>,
    dots_generation: u64,
    nav: NavState,
}

impl IcedSurface {
    /// Surface with every required element mounted.
    pub fn new(card: CardMetrics, item_count: usize) -> Self {
        Self::with_elements(card, item_count, SurfaceElement::REQUIRED)
    }

    pub fn with_elements(
        card: CardMetrics,
        item_count: usize,
        elements: impl IntoIterator<Item = SurfaceElement>,
    ) -> Self {
        Self {
            mounted: elements.into_iter().collect(),
            card,
            has_cards: item_count > 0,
            track_offset: 0.0,
            pending_scroll: None,
            dots: Vec::new(),
            dots_generation: 0,
            nav: NavState::disabled(DEFAULT_DISABLED_OPACITY),
        }
    }

    pub fn card(&self) -> CardMetrics {
        self.card
    }

    pub fn track_offset(&self) -> f32 {
        self.track_offset
    }

    pub fn take_pending_scroll(&mut self) -> Option<f32> {
        self.pending_scroll.take()
    }

    pub fn dots(&self) -> &[Indicator] {
        &self.dots
    }

    pub fn dots_generation(&self) -> u64 {
        self.dots_generation
    }

    pub fn nav(&self) -> NavState {
        self.nav
    }
}

impl RenderSurface for IcedSurface {
    fn has_element(&self, element: SurfaceElement) -> bool {
        self.mounted.contains(&element)
    }

    fn measure_card(&self) -> Option<CardMetrics> {
        self.has_cards.then_some(self.card)
    }

    fn apply_track_offset(&mut self, offset_px: f32) {
        if (offset_px - self.track_offset).abs() > f32::EPSILON || self.pending_scroll.is_some() {
            self.pending_scroll = Some(offset_px);
        }
        self.track_offset = offset_px;
    }

    fn rebuild_indicators(&mut self, indicators: &[Indicator]) {
        self.dots = indicators.to_vec();
        self.dots_generation += 1;
    }

    fn refresh_indicators(&mut self, indicators: &[Indicator]) {
        for (dot, fresh) in self.dots.iter_mut().zip(indicators) {
            dot.active = fresh.active;
        }
    }

    fn apply_nav_state(&mut self, nav: NavState) {
        self.nav = nav;
    }
}
