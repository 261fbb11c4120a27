//! Carousel controller: routes input events through the index manager and
//! pushes the resulting layout, indicator and button state to the surface.
//!
//! Every [`CarouselController::dispatch`] call is one atomic step. The
//! surface sees the final offset, indicators and nav state for that step and
//! nothing in between.

use crate::{
    autoplay::{Autoplay, TimerDriver},
    error::{CarouselError, Result},
    index::IndexManager,
    indicators::{Indicator, Indicators},
    input::{CarouselEvent, Swipe, SwipeTracker},
    items::ItemSet,
    layout::{Breakpoints, compute_offset},
    settings::CarouselSettings,
    surface::{NavState, RenderSurface, SurfaceElement},
};

/// How indicators are brought up to date during a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IndicatorSync {
    Rebuild,
    Refresh,
}

/// Point-in-time view of everything the carousel renders.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselSnapshot {
    /// Index of the left-most visible item.
    pub current_index: usize,
    /// Cards visible at once.
    pub display_count: usize,
    /// Largest reachable index.
    pub max_index: usize,
    /// Number of reachable positions.
    pub total_slides: usize,
    /// Px the track is shifted left.
    pub track_offset: f32,
    /// Dots as last rendered.
    pub indicators: Vec<Indicator>,
    /// Button state as last rendered.
    pub nav: NavState,
    /// True while an autoplay timer is live.
    pub autoplay_running: bool,
}

/// One carousel bound to an item set, a render surface `S` and a timer
/// driver `D`.
#[derive(Debug)]
pub struct CarouselController<T, S, D> {
    items: ItemSet<T>,
    index: IndexManager,
    indicators: Indicators,
    breakpoints: Breakpoints,
    swipe: SwipeTracker,
    autoplay: Autoplay,
    disabled_opacity: f32,
    track_offset: f32,
    nav: NavState,
    surface: S,
    timer: D,
}

impl<T, S, D> CarouselController<T, S, D>
where
    S: RenderSurface,
    D: TimerDriver,
{
    /// Validate the surface, lay out the first window, build the dots and
    /// start autoplay.
    pub fn new(
        items: ItemSet<T>,
        viewport_width: f32,
        settings: &CarouselSettings,
        surface: S,
        timer: D,
    ) -> Result<Self> {
        settings.validate()?;

        if let Some(missing) = SurfaceElement::REQUIRED
            .into_iter()
            .find(|element| !surface.has_element(*element))
        {
            log::error!("Carousel init failed: {} not found", missing);
            return Err(CarouselError::MissingElement(missing));
        }

        let display_count = settings.breakpoints.display_count_for(viewport_width);
        let index = IndexManager::new(items.len(), display_count);

        let mut controller = Self {
            items,
            index,
            indicators: Indicators::new(),
            breakpoints: settings.breakpoints.clone(),
            swipe: SwipeTracker::new(settings.swipe_threshold_px),
            autoplay: Autoplay::new(settings.autoplay.enabled, settings.autoplay.interval),
            disabled_opacity: settings.disabled_opacity,
            track_offset: 0.0,
            nav: NavState::disabled(settings.disabled_opacity),
            surface,
            timer,
        };

        controller.render(IndicatorSync::Rebuild);
        controller.resume_autoplay();

        log::info!(
            "Carousel initialized: {} items, {} visible at width {} ({} slides)",
            controller.index.item_count(),
            controller.index.display_count(),
            viewport_width,
            controller.index.total_slides()
        );

        Ok(controller)
    }

    /// Apply one input event. Returns true if the current index moved.
    pub fn dispatch(&mut self, event: CarouselEvent) -> bool {
        log::trace!("Carousel event: {:?}", event);

        match event {
            CarouselEvent::PrevActivated => self.navigate(IndexManager::retreat),
            CarouselEvent::NextActivated => self.navigate(IndexManager::advance),
            CarouselEvent::DotActivated(target) => {
                self.navigate(|index| index.jump_to(target))
            }
            CarouselEvent::TouchStart { x } => {
                self.swipe.begin(x);
                self.autoplay.stop(&mut self.timer);
                false
            }
            CarouselEvent::TouchEnd { x } => {
                let moved = match self.swipe.finish(x) {
                    Some(Swipe::Left) => self.navigate(IndexManager::advance),
                    Some(Swipe::Right) => self.navigate(IndexManager::retreat),
                    None => false,
                };
                self.resume_autoplay();
                moved
            }
            CarouselEvent::PointerEnter(_) => {
                self.autoplay.stop(&mut self.timer);
                false
            }
            CarouselEvent::PointerLeave(_) => {
                self.resume_autoplay();
                false
            }
            CarouselEvent::Resized { viewport_width } => self.resize(viewport_width),
            CarouselEvent::TimerTick => self.tick(),
        }
    }

    fn navigate(&mut self, op: impl FnOnce(&mut IndexManager) -> bool) -> bool {
        if !self.index.is_navigable() {
            log::debug!("Ignoring navigation on empty carousel");
            return false;
        }
        let moved = op(&mut self.index);
        self.render(IndicatorSync::Refresh);
        moved
    }

    fn tick(&mut self) -> bool {
        if !self.autoplay.is_running() {
            log::debug!("Ignoring autoplay tick with no live timer");
            return false;
        }
        if self.index.can_advance() {
            self.navigate(IndexManager::advance)
        } else {
            self.navigate(|index| index.jump_to(0))
        }
    }

    fn resize(&mut self, viewport_width: f32) -> bool {
        let new_count = self
            .index
            .fit(self.breakpoints.display_count_for(viewport_width));
        if new_count == self.index.display_count() {
            self.render(IndicatorSync::Refresh);
            return false;
        }

        let old_count = self.index.display_count();
        let moved = self.index.on_display_count_changed(new_count);
        log::debug!(
            "Display count {} -> {} at width {} (index {}, max {})",
            old_count,
            new_count,
            viewport_width,
            self.index.current_index(),
            self.index.max_index()
        );
        self.render(IndicatorSync::Rebuild);
        moved
    }

    fn resume_autoplay(&mut self) {
        if self.index.is_navigable() {
            self.autoplay.start(&mut self.timer);
        }
    }

    fn render(&mut self, sync: IndicatorSync) {
        let current = self.index.current_index();

        self.track_offset = if self.items.is_empty() {
            0.0
        } else {
            match self.surface.measure_card() {
                Some(card) => compute_offset(current, card.outer_width()),
                None => {
                    log::warn!("Track has items but no measurable card; using zero offset");
                    0.0
                }
            }
        };
        self.surface.apply_track_offset(self.track_offset);

        match sync {
            IndicatorSync::Rebuild => {
                self.indicators.rebuild(self.index.total_slides(), current);
                self.surface.rebuild_indicators(self.indicators.as_slice());
            }
            IndicatorSync::Refresh => {
                self.indicators.refresh_active(current);
                self.surface.refresh_indicators(self.indicators.as_slice());
            }
        }

        self.nav = if self.index.is_navigable() {
            NavState::new(
                self.index.can_retreat(),
                self.index.can_advance(),
                self.disabled_opacity,
            )
        } else {
            NavState::disabled(self.disabled_opacity)
        };
        self.surface.apply_nav_state(self.nav);
    }

    /// Cancel autoplay and hand back the surface and timer.
    pub fn into_parts(mut self) -> (ItemSet<T>, S, D) {
        self.autoplay.stop(&mut self.timer);
        (self.items, self.surface, self.timer)
    }
}

impl<T, S, D> CarouselController<T, S, D> {
    /// Copy of the rendered state.
    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            current_index: self.index.current_index(),
            display_count: self.index.display_count(),
            max_index: self.index.max_index(),
            total_slides: self.index.total_slides(),
            track_offset: self.track_offset,
            indicators: self.indicators.as_slice().to_vec(),
            nav: self.nav,
            autoplay_running: self.autoplay.is_running(),
        }
    }

    /// The full item set.
    pub fn items(&self) -> &ItemSet<T> {
        &self.items
    }

    /// Items currently inside the visible window.
    pub fn visible_items(&self) -> &[T] {
        self.items
            .window(self.index.current_index(), self.index.display_count())
    }

    /// Current scroll position.
    pub fn index(&self) -> &IndexManager {
        &self.index
    }

    /// Current dots.
    pub fn indicators(&self) -> &Indicators {
        &self.indicators
    }

    /// Autoplay state.
    pub fn autoplay(&self) -> &Autoplay {
        &self.autoplay
    }

    /// Button state as last rendered.
    pub fn nav_state(&self) -> NavState {
        self.nav
    }

    /// Px the track is shifted left.
    pub fn track_offset(&self) -> f32 {
        self.track_offset
    }

    /// The render surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The render surface, for hosts that drain state from it.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The timer driver.
    pub fn timer(&self) -> &D {
        &self.timer
    }
}
