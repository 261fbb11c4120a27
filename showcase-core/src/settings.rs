//! Tunable carousel behaviour.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    autoplay::DEFAULT_AUTOPLAY_INTERVAL,
    error::{CarouselError, Result},
    input::DEFAULT_SWIPE_THRESHOLD_PX,
    layout::Breakpoints,
    surface::DEFAULT_DISABLED_OPACITY,
};

/// Autoplay switch and interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoplaySettings {
    /// Advance on a timer when true.
    pub enabled: bool,
    /// Time between ticks, written as a humantime string ("5s", "750ms").
    #[serde(with = "humantime_duration")]
    pub interval: Duration,
}

impl Default for AutoplaySettings {
    fn default() -> Self {
        Self {
            enabled: true,
            interval: DEFAULT_AUTOPLAY_INTERVAL,
        }
    }
}

/// Everything about a carousel that can be configured. Missing fields take
/// their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    /// Viewport width -> visible card count table, widest first.
    pub breakpoints: Breakpoints,
    /// Horizontal travel (px) a touch needs to count as a swipe.
    pub swipe_threshold_px: f32,
    /// Timer-driven advancing.
    pub autoplay: AutoplaySettings,
    /// Opacity of a navigation button that cannot be used.
    pub disabled_opacity: f32,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::standard(),
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
            autoplay: AutoplaySettings::default(),
            disabled_opacity: DEFAULT_DISABLED_OPACITY,
        }
    }
}

impl CarouselSettings {
    /// Reject values the controller cannot work with. Breakpoints are
    /// validated when they are built.
    pub fn validate(&self) -> Result<()> {
        if !self.swipe_threshold_px.is_finite() || self.swipe_threshold_px <= 0.0 {
            return Err(CarouselError::InvalidSettings(format!(
                "swipe_threshold_px must be positive, got {}",
                self.swipe_threshold_px
            )));
        }
        if self.autoplay.enabled && self.autoplay.interval.is_zero() {
            return Err(CarouselError::InvalidSettings(
                "autoplay.interval must be non-zero when autoplay is enabled".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.disabled_opacity) {
            return Err(CarouselError::InvalidSettings(format!(
                "disabled_opacity must be within 0.0..=1.0, got {}",
                self.disabled_opacity
            )));
        }
        Ok(())
    }
}

mod humantime_duration {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&humantime::format_duration(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let raw = String::deserialize(deserializer)?;
        humantime::parse_duration(raw.trim()).map_err(D::Error::custom)
    }
}
