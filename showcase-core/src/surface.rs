//! Render surface seam.
//!
//! The controller never talks to a UI toolkit directly. A front-end implements
//! [`RenderSurface`] and receives already-computed layout, indicator and
//! button state.

use std::fmt;

use crate::indicators::Indicator;
use crate::layout::CardMetrics;

/// Opacity applied to an enabled navigation button.
pub const ENABLED_OPACITY: f32 = 1.0;
/// Default opacity applied to a disabled navigation button.
pub const DEFAULT_DISABLED_OPACITY: f32 = 0.5;

/// Elements a surface must provide before the carousel can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceElement {
    /// Strip holding every card; shifted to scroll.
    Track,
    /// Button that steps back.
    PrevButton,
    /// Button that steps forward.
    NextButton,
    /// Holder for the dot indicators.
    DotsContainer,
}

impl SurfaceElement {
    /// Every element; all of them are also hover targets for autoplay.
    pub const REQUIRED: [Self; 4] = [
        Self::Track,
        Self::PrevButton,
        Self::NextButton,
        Self::DotsContainer,
    ];
}

impl fmt::Display for SurfaceElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Track => write!(f, "track"),
            Self::PrevButton => write!(f, "previous button"),
            Self::NextButton => write!(f, "next button"),
            Self::DotsContainer => write!(f, "dots container"),
        }
    }
}

/// Whether a navigation button reacts, and how opaque it is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonState {
    /// Pressing the button does something.
    pub enabled: bool,
    /// [`ENABLED_OPACITY`] when enabled, the dimmed value otherwise.
    pub opacity: f32,
}

impl ButtonState {
    /// State for a button, dimmed to `disabled_opacity` when not enabled.
    pub fn new(enabled: bool, disabled_opacity: f32) -> Self {
        Self {
            enabled,
            opacity: if enabled {
                ENABLED_OPACITY
            } else {
                disabled_opacity
            },
        }
    }
}

/// Enabled/dimmed state of both navigation buttons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavState {
    /// Previous button.
    pub prev: ButtonState,
    /// Next button.
    pub next: ButtonState,
}

impl NavState {
    /// Button states for the given reachability.
    pub fn new(can_retreat: bool, can_advance: bool, disabled_opacity: f32) -> Self {
        Self {
            prev: ButtonState::new(can_retreat, disabled_opacity),
            next: ButtonState::new(can_advance, disabled_opacity),
        }
    }

    /// Both buttons dimmed and inert.
    pub fn disabled(disabled_opacity: f32) -> Self {
        Self::new(false, false, disabled_opacity)
    }
}

/// What the controller needs from a front-end.
pub trait RenderSurface {
    /// Whether the surface can render `element`.
    fn has_element(&self, element: SurfaceElement) -> bool;

    /// Footprint of the first rendered card, or `None` when nothing is rendered.
    fn measure_card(&self) -> Option<CardMetrics>;

    /// Shift the track left by `offset_px`.
    fn apply_track_offset(&mut self, offset_px: f32);

    /// Replace every dot with a fresh set.
    fn rebuild_indicators(&mut self, indicators: &[Indicator]);

    /// Re-flag the existing dots.
    fn refresh_indicators(&mut self, indicators: &[Indicator]);

    /// Enable or dim the navigation buttons.
    fn apply_nav_state(&mut self, nav: NavState);
}
