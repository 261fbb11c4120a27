//! Desktop host for the Showcase carousel.

pub mod app;
pub mod surface;
pub mod timer;

pub use app::{App, Message};
