//! End-to-end controller scenarios driven through the in-memory surface.

use showcase_core::prelude::*;
use showcase_core::testing::{ManualTimer, RecordingSurface};

type Carousel = CarouselController<u32, RecordingSurface, ManualTimer>;

const WIDE: f32 = 1280.0; // 4 visible
const MEDIUM: f32 = 900.0; // 3 visible
const SMALL: f32 = 600.0; // 2 visible

fn carousel(items: u32, width: f32) -> Carousel {
    CarouselController::new(
        (0..items).collect(),
        width,
        &CarouselSettings::default(),
        RecordingSurface::with_card_width(100.0),
        ManualTimer::default(),
    )
    .expect("carousel init")
}

#[test]
fn advancing_stops_at_max_index() {
    let mut c = carousel(9, WIDE);
    assert_eq!(c.index().max_index(), 5);
    assert_eq!(c.indicators().len(), 6);

    for _ in 0..5 {
        assert!(c.dispatch(CarouselEvent::NextActivated));
    }
    assert_eq!(c.index().current_index(), 5);
    assert!(!c.dispatch(CarouselEvent::NextActivated));
    assert_eq!(c.index().current_index(), 5);

    let snap = c.snapshot();
    assert!(snap.nav.prev.enabled);
    assert!(!snap.nav.next.enabled);
    assert_eq!(snap.nav.next.opacity, 0.5);
    assert_eq!(snap.track_offset, 500.0);
}

#[test]
fn prev_at_start_stays_put() {
    let mut c = carousel(9, WIDE);
    assert!(!c.dispatch(CarouselEvent::PrevActivated));
    assert_eq!(c.index().current_index(), 0);
    assert_eq!(c.surface().last_offset(), Some(0.0));
}

#[test]
fn dot_jumps_and_is_clamped() {
    let mut c = carousel(9, WIDE);
    c.dispatch(CarouselEvent::DotActivated(3));
    assert_eq!(c.index().current_index(), 3);
    assert_eq!(c.indicators().active_index(), Some(3));

    c.dispatch(CarouselEvent::DotActivated(99));
    assert_eq!(c.index().current_index(), 5);
}

#[test]
fn dot_action_round_trips_through_dispatch() {
    let mut c = carousel(9, WIDE);
    let action = c.indicators().as_slice()[4].action();
    c.dispatch(action);
    assert_eq!(c.index().current_index(), 4);
    assert_eq!(c.surface().indicators.iter().filter(|d| d.active).count(), 1);
    assert!(c.surface().indicators[4].active);
}

#[test]
fn swipe_left_past_threshold_advances_once() {
    let mut c = carousel(9, WIDE);
    c.dispatch(CarouselEvent::TouchStart { x: 400.0 });
    assert!(c.dispatch(CarouselEvent::TouchEnd { x: 340.0 }));
    assert_eq!(c.index().current_index(), 1);
}

#[test]
fn short_swipe_does_nothing() {
    let mut c = carousel(9, WIDE);
    c.dispatch(CarouselEvent::TouchStart { x: 400.0 });
    assert!(!c.dispatch(CarouselEvent::TouchEnd { x: 360.0 }));
    assert_eq!(c.index().current_index(), 0);
}

#[test]
fn swipe_right_retreats() {
    let mut c = carousel(9, WIDE);
    c.dispatch(CarouselEvent::DotActivated(2));
    c.dispatch(CarouselEvent::TouchStart { x: 100.0 });
    c.dispatch(CarouselEvent::TouchEnd { x: 160.0 });
    assert_eq!(c.index().current_index(), 1);
}

#[test]
fn timer_tick_advances_then_wraps() {
    let mut c = carousel(9, WIDE);
    c.dispatch(CarouselEvent::TimerTick);
    assert_eq!(c.index().current_index(), 1);

    c.dispatch(CarouselEvent::DotActivated(5));
    assert!(c.dispatch(CarouselEvent::TimerTick));
    assert_eq!(c.index().current_index(), 0);
    assert!(c.snapshot().autoplay_running);
}

#[test]
fn widening_keeps_index_when_bound_is_looser() {
    let mut c = carousel(9, WIDE);
    c.dispatch(CarouselEvent::DotActivated(5));

    assert!(!c.dispatch(CarouselEvent::Resized { viewport_width: SMALL }));
    let snap = c.snapshot();
    assert_eq!(snap.display_count, 2);
    assert_eq!(snap.max_index, 7);
    assert_eq!(snap.current_index, 5);
    assert_eq!(snap.indicators.len(), 8);
    assert_eq!(c.surface().rebuilds, 2);
}

#[test]
fn narrowing_bound_clamps_index() {
    let mut c = carousel(9, SMALL);
    c.dispatch(CarouselEvent::DotActivated(7));
    assert!(c.dispatch(CarouselEvent::Resized { viewport_width: WIDE }));
    assert_eq!(c.index().current_index(), 5);
    assert_eq!(c.indicators().len(), 6);
    assert_eq!(c.indicators().active_index(), Some(5));
}

#[test]
fn resize_within_same_bucket_only_relays_out() {
    let mut c = carousel(9, MEDIUM);
    c.dispatch(CarouselEvent::NextActivated);
    c.surface_mut().card = Some(CardMetrics::new(120.0, 5.0, 5.0));

    c.dispatch(CarouselEvent::Resized { viewport_width: 1000.0 });
    assert_eq!(c.surface().rebuilds, 1);
    assert_eq!(c.indicators().generation(), 1);
    assert_eq!(c.track_offset(), 130.0);
}

#[test]
fn hover_suspends_and_leave_resumes_autoplay() {
    let mut c = carousel(9, WIDE);
    assert!(c.autoplay().is_running());

    c.dispatch(CarouselEvent::PointerEnter(SurfaceElement::NextButton));
    assert!(!c.autoplay().is_running());
    assert!(c.timer().live_handles().is_empty());

    c.dispatch(CarouselEvent::PointerLeave(SurfaceElement::NextButton));
    assert!(c.autoplay().is_running());
    assert_eq!(c.timer().live_handles().len(), 1);
}

#[test]
fn touch_suspends_then_restarts_autoplay() {
    let mut c = carousel(9, WIDE);
    c.dispatch(CarouselEvent::TouchStart { x: 10.0 });
    assert!(!c.autoplay().is_running());
    c.dispatch(CarouselEvent::TouchEnd { x: 12.0 });
    assert!(c.autoplay().is_running());
}

#[test]
fn never_more_than_one_live_timer() {
    let mut c = carousel(9, WIDE);
    for _ in 0..5 {
        c.dispatch(CarouselEvent::PointerLeave(SurfaceElement::Track));
        c.dispatch(CarouselEvent::TouchEnd { x: 0.0 });
    }
    assert_eq!(c.timer().live_handles().len(), 1);
    assert_eq!(c.timer().scheduled_count(), 11);
    assert_eq!(c.timer().cancelled().len(), 10);
}

#[test]
fn everything_fits_disables_navigation() {
    let mut c = carousel(3, WIDE);
    let snap = c.snapshot();
    assert_eq!(snap.display_count, 3);
    assert_eq!(snap.max_index, 0);
    assert_eq!(snap.indicators.len(), 1);
    assert!(!snap.nav.prev.enabled);
    assert!(!snap.nav.next.enabled);

    assert!(!c.dispatch(CarouselEvent::NextActivated));
    assert!(!c.dispatch(CarouselEvent::TimerTick));
    assert_eq!(c.index().current_index(), 0);
}

#[test]
fn display_count_never_exceeds_item_count() {
    let mut c = carousel(3, WIDE);
    assert_eq!(c.snapshot().display_count, 3);
    assert_eq!(c.visible_items(), &[0, 1, 2]);

    // 3 visible at this width too: same count, so no rebuild.
    c.dispatch(CarouselEvent::Resized { viewport_width: MEDIUM });
    assert_eq!(c.surface().rebuilds, 1);

    c.dispatch(CarouselEvent::Resized { viewport_width: SMALL });
    let snap = c.snapshot();
    assert_eq!(snap.display_count, 2);
    assert_eq!(snap.total_slides, 2);
    assert_eq!(c.surface().rebuilds, 2);

    c.dispatch(CarouselEvent::NextActivated);
    c.dispatch(CarouselEvent::Resized { viewport_width: WIDE });
    let snap = c.snapshot();
    assert_eq!(snap.display_count, 3);
    assert_eq!(snap.current_index, 0);
    assert_eq!(snap.indicators.len(), 1);
}

#[test]
fn empty_item_set_is_inert() {
    let mut c = carousel(0, WIDE);
    let snap = c.snapshot();
    assert_eq!(snap.display_count, 1);
    assert_eq!(snap.indicators.len(), 1);
    assert_eq!(snap.track_offset, 0.0);
    assert!(!snap.autoplay_running);
    assert_eq!(c.surface().measurements.get(), 0);

    assert!(!c.dispatch(CarouselEvent::NextActivated));
    c.dispatch(CarouselEvent::PointerLeave(SurfaceElement::Track));
    assert!(!c.autoplay().is_running());
    c.dispatch(CarouselEvent::Resized { viewport_width: SMALL });
    assert_eq!(c.index().current_index(), 0);
    assert_eq!(c.timer().scheduled_count(), 0);
}

#[test]
fn missing_elements_fail_init() {
    for element in SurfaceElement::REQUIRED {
        let result = CarouselController::<u32, _, _>::new(
            (0..9).collect(),
            WIDE,
            &CarouselSettings::default(),
            RecordingSurface::with_card_width(100.0).without(element),
            ManualTimer::default(),
        );
        assert_eq!(
            result.err(),
            Some(CarouselError::MissingElement(element)),
            "{element}"
        );
    }
}

#[test]
fn invalid_settings_fail_init() {
    let settings = CarouselSettings {
        swipe_threshold_px: -1.0,
        ..CarouselSettings::default()
    };
    let result = CarouselController::<u32, _, _>::new(
        (0..9).collect(),
        WIDE,
        &settings,
        RecordingSurface::with_card_width(100.0),
        ManualTimer::default(),
    );
    assert!(matches!(result, Err(CarouselError::InvalidSettings(_))));
}

#[test]
fn disabled_autoplay_ignores_ticks() {
    let mut settings = CarouselSettings::default();
    settings.autoplay.enabled = false;
    let mut c = CarouselController::new(
        (0..9).collect::<ItemSet<u32>>(),
        WIDE,
        &settings,
        RecordingSurface::with_card_width(100.0),
        ManualTimer::default(),
    )
    .unwrap();
    assert!(!c.dispatch(CarouselEvent::TimerTick));
    assert_eq!(c.timer().scheduled_count(), 0);
}
