//! Input events and swipe classification.

use crate::surface::SurfaceElement;

/// Default horizontal travel (px) before a touch counts as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Everything the outside world can tell the carousel. Each event maps to
/// exactly one controller step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselEvent {
    /// Previous button pressed.
    PrevActivated,
    /// Next button pressed.
    NextActivated,
    /// Dot for the given position pressed.
    DotActivated(usize),

    /// Finger down on the track.
    TouchStart {
        /// Horizontal position in px.
        x: f32,
    },
    /// Finger lifted after a [`CarouselEvent::TouchStart`].
    TouchEnd {
        /// Horizontal position in px.
        x: f32,
    },

    /// Pointer entered one of the hover targets.
    PointerEnter(SurfaceElement),
    /// Pointer left one of the hover targets.
    PointerLeave(SurfaceElement),

    /// Viewport changed size.
    Resized {
        /// New viewport width in px.
        viewport_width: f32,
    },

    /// Autoplay timer fired.
    TimerTick,
}

/// Direction of a recognized swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved left; shows the next card.
    Left,
    /// Finger moved right; shows the previous card.
    Right,
}

/// Classify a horizontal delta (`end - start`). Exactly `threshold` counts.
pub fn classify_swipe(delta_x: f32, threshold: f32) -> Option<Swipe> {
    if delta_x <= -threshold {
        Some(Swipe::Left)
    } else if delta_x >= threshold {
        Some(Swipe::Right)
    } else {
        None
    }
}

/// Remembers where the current touch began.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    threshold: f32,
    start_x: Option<f32>,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD_PX)
    }
}

impl SwipeTracker {
    /// Tracker that needs `threshold` px of travel (sign ignored).
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.abs(),
            start_x: None,
        }
    }

    /// Travel needed for a swipe, in px.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// True between `begin` and `finish`.
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    /// Record where a touch started.
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Finish the current touch. A release with no recorded start yields nothing.
    pub fn finish(&mut self, x: f32) -> Option<Swipe> {
        let start = self.start_x.take()?;
        classify_swipe(x - start, self.threshold)
    }
}
