//! Errors raised while setting up a carousel.

use thiserror::Error;

use crate::surface::SurfaceElement;

/// Fatal carousel setup errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    /// The host did not provide an element the carousel drives.
    #[error("Render surface is missing required element: {0}")]
    MissingElement(SurfaceElement),

    /// A breakpoint has a bad width or a zero count, or the widths are not
    /// strictly descending.
    #[error("Invalid breakpoints: {0}")]
    InvalidBreakpoints(String),

    /// A setting is out of range.
    #[error("Invalid carousel settings: {0}")]
    InvalidSettings(String),
}

/// Result alias for carousel setup.
pub type Result<T> = std::result::Result<T, CarouselError>;
