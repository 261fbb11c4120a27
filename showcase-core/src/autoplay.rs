//! Autoplay timer lifecycle.
//!
//! The host owns the actual clock; the carousel only asks it to schedule or
//! cancel a repeating tick through [`TimerDriver`]. [`Autoplay`] guarantees
//! at most one live handle.

use std::time::Duration;

/// Default time between autoplay ticks.
pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5_000);

/// Opaque id of a scheduled repeating timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    /// Wrap a host-assigned timer id.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The host-assigned id.
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Host timer primitive.
pub trait TimerDriver {
    /// Start delivering [`crate::input::CarouselEvent::TimerTick`] every
    /// `interval`.
    fn schedule_repeating(&mut self, interval: Duration) -> TimerHandle;

    /// Stop a timer previously returned by `schedule_repeating`.
    fn cancel(&mut self, handle: TimerHandle);
}

/// Autoplay state: whether it may run, how often, and the live timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Autoplay {
    enabled: bool,
    interval: Duration,
    active: Option<TimerHandle>,
}

impl Default for Autoplay {
    fn default() -> Self {
        Self::new(true, DEFAULT_AUTOPLAY_INTERVAL)
    }
}

impl Autoplay {
    /// Stopped autoplay; nothing is scheduled until [`Autoplay::start`].
    pub fn new(enabled: bool, interval: Duration) -> Self {
        Self {
            enabled,
            interval,
            active: None,
        }
    }

    /// False when autoplay is switched off in settings.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Time between ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// True while a timer is live.
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Handle of the live timer, if any.
    pub fn active_handle(&self) -> Option<TimerHandle> {
        self.active
    }

    /// (Re)start the repeating tick. Any pending timer is cancelled first.
    pub fn start<D: TimerDriver + ?Sized>(&mut self, driver: &mut D) {
        if !self.enabled {
            return;
        }
        self.stop(driver);
        let handle = driver.schedule_repeating(self.interval);
        log::debug!(
            "Autoplay started: handle={} interval={:?}",
            handle.id(),
            self.interval
        );
        self.active = Some(handle);
    }

    /// Cancel the live timer, if any.
    pub fn stop<D: TimerDriver + ?Sized>(&mut self, driver: &mut D) {
        if let Some(handle) = self.active.take() {
            log::debug!("Autoplay stopped: handle={}", handle.id());
            driver.cancel(handle);
        }
    }
}
