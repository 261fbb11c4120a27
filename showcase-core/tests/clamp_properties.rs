//! Randomized operation sequences: the index must never leave `[0, max_index]`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use showcase_core::prelude::*;
use showcase_core::testing::{ManualTimer, RecordingSurface};

fn assert_in_bounds(index: &IndexManager) {
    assert!(index.display_count() >= 1);
    assert!(index.display_count() <= index.item_count().max(1));
    assert!(
        index.current_index() <= index.max_index(),
        "index {} escaped max {} (items {}, display {})",
        index.current_index(),
        index.max_index(),
        index.item_count(),
        index.display_count()
    );
}

#[test]
fn index_manager_sequences_stay_clamped() {
    let mut rng = StdRng::seed_from_u64(0x5eed_ca20);

    for _ in 0..200 {
        let items = rng.random_range(0..20usize);
        let mut index = IndexManager::new(items, rng.random_range(1..6usize));

        for _ in 0..100 {
            match rng.random_range(0..4u8) {
                0 => {
                    index.advance();
                }
                1 => {
                    index.retreat();
                }
                2 => {
                    index.jump_to(rng.random_range(0..40usize));
                }
                _ => {
                    let before = index.current_index();
                    let new_count = rng.random_range(1..6usize);
                    let moved = index.on_display_count_changed(new_count);
                    // Only a tighter bound may move the index, and only downward.
                    assert_eq!(moved, before > items.saturating_sub(new_count));
                    assert!(index.current_index() <= before);
                }
            }
            assert_in_bounds(&index);
        }
    }
}

#[test]
fn controller_event_sequences_stay_consistent() {
    let mut rng = StdRng::seed_from_u64(42);
    let widths = [320.0, 480.0, 481.0, 768.0, 769.0, 1024.0, 1025.0, 1920.0];

    for _ in 0..50 {
        let items = rng.random_range(0..16u32);
        let mut c = CarouselController::new(
            (0..items).collect::<ItemSet<u32>>(),
            widths[rng.random_range(0..widths.len())],
            &CarouselSettings::default(),
            RecordingSurface::with_card_width(150.0),
            ManualTimer::default(),
        )
        .unwrap();

        for _ in 0..150 {
            let event = match rng.random_range(0..8u8) {
                0 => CarouselEvent::NextActivated,
                1 => CarouselEvent::PrevActivated,
                2 => CarouselEvent::DotActivated(rng.random_range(0..20usize)),
                3 => CarouselEvent::TimerTick,
                4 => CarouselEvent::Resized {
                    viewport_width: widths[rng.random_range(0..widths.len())],
                },
                5 => CarouselEvent::TouchStart {
                    x: rng.random_range(0.0..500.0f32),
                },
                6 => CarouselEvent::TouchEnd {
                    x: rng.random_range(0.0..500.0f32),
                },
                _ => CarouselEvent::PointerLeave(SurfaceElement::Track),
            };
            c.dispatch(event);

            let snap = c.snapshot();
            assert_in_bounds(c.index());
            assert_eq!(
                snap.indicators.len(),
                total_slides(items as usize, snap.display_count)
            );
            assert_eq!(snap.indicators.iter().filter(|d| d.active).count(), 1);
            assert_eq!(c.surface().indicators, snap.indicators);
            assert!(c.timer().live_handles().len() <= 1);
            if items > 0 {
                assert_eq!(snap.track_offset, snap.current_index as f32 * 150.0);
            }
        }
    }
}
