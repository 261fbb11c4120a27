//! Autoplay timer hosted by an iced subscription.
//!
//! Scheduling only records the live handle. `subscription()` turns it into a
//! ticking stream keyed by the handle, so a restart gets a fresh stream and
//! a cancelled handle simply drops out of the subscription set.

use std::time::Duration;

use futures::stream::{self, Stream};
use iced::Subscription;
use showcase_core::{
    autoplay::{TimerDriver, TimerHandle},
    input::CarouselEvent,
};

#[derive(Debug, Clone, Default)]
pub struct SubscriptionTimer {
    next_id: u64,
    active: Option<(TimerHandle, Duration)>,
}

impl SubscriptionTimer {
    pub fn active(&self) -> Option<(TimerHandle, Duration)> {
        self.active
    }

    pub fn subscription(&self) -> Subscription<CarouselEvent> {
        match self.active {
            Some((handle, interval)) => Subscription::run_with_id(handle, ticks(interval)),
            None => Subscription::none(),
        }
    }
}

impl TimerDriver for SubscriptionTimer {
    fn schedule_repeating(&mut self, interval: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle::new(self.next_id);
        self.active = Some((handle, interval));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if matches!(self.active, Some((live, _)) if live == handle) {
            self.active = None;
        }
    }
}

fn ticks(interval: Duration) -> impl Stream<Item = CarouselEvent> {
    stream::unfold((), move |()| async move {
        tokio::time::sleep(interval).await;
        Some((CarouselEvent::TimerTick, ()))
    })
}
