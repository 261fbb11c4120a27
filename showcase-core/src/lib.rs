//! Core library for the Showcase carousel.
//!
//! A headless controller that shows a fixed window of cards from a larger,
//! immutable item set. It sizes the window from the viewport width, steps it
//! with buttons, dots, swipes and an autoplay timer, and pushes the result to
//! whatever [`RenderSurface`](surface::RenderSurface) the host provides. No UI toolkit is involved;
//! `showcase-player` is one such host.
//!
//! ```
//! use showcase_core::prelude::*;
//! use showcase_core::testing::{ManualTimer, RecordingSurface};
//!
//! let mut carousel = CarouselController::new(
//!     (0..9).collect::<ItemSet<u32>>(),
//!     1280.0,
//!     &CarouselSettings::default(),
//!     RecordingSurface::with_card_width(260.0),
//!     ManualTimer::default(),
//! )?;
//!
//! carousel.dispatch(CarouselEvent::NextActivated);
//! assert_eq!(carousel.snapshot().current_index, 1);
//! assert_eq!(carousel.track_offset(), 260.0);
//! # Ok::<(), showcase_core::CarouselError>(())
//! ```

pub mod autoplay;
pub mod controller;
pub mod error;
pub mod index;
pub mod indicators;
pub mod input;
pub mod items;
pub mod layout;
pub mod settings;
pub mod surface;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::{CarouselError, Result};

/// The types needed to build and drive a carousel.
pub mod prelude {
    pub use crate::autoplay::{Autoplay, TimerDriver, TimerHandle};
    pub use crate::controller::{CarouselController, CarouselSnapshot};
    pub use crate::error::{CarouselError, Result};
    pub use crate::index::IndexManager;
    pub use crate::indicators::{Indicator, Indicators, total_slides};
    pub use crate::input::{CarouselEvent, Swipe, SwipeTracker};
    pub use crate::items::ItemSet;
    pub use crate::layout::{
        Breakpoint, Breakpoints, CardMetrics, compute_display_count, compute_offset,
    };
    pub use crate::settings::{AutoplaySettings, CarouselSettings};
    pub use crate::surface::{ButtonState, NavState, RenderSurface, SurfaceElement};
}
