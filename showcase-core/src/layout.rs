//! Layout engine: responsive display count and track offset math.
//!
//! Everything in here is pure. Applying the computed offset to a track is the
//! controller's job (see [`crate::controller`]).

use serde::{Deserialize, Serialize};

use crate::error::{CarouselError, Result};

/// Display count used when the viewport is narrower than every breakpoint.
pub const FALLBACK_DISPLAY_COUNT: usize = 1;

/// A viewport strictly wider than `min_width` shows `display_count` cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    /// Exclusive lower bound on the viewport width, in px.
    pub min_width: f32,
    /// Cards shown above `min_width`.
    pub display_count: usize,
}

impl Breakpoint {
    /// Breakpoint showing `display_count` cards above `min_width`.
    pub const fn new(min_width: f32, display_count: usize) -> Self {
        Self {
            min_width,
            display_count,
        }
    }
}

const STANDARD_BREAKPOINTS: [Breakpoint; 3] = [
    Breakpoint::new(1024.0, 4),
    Breakpoint::new(768.0, 3),
    Breakpoint::new(480.0, 2),
];

/// Width-ordered breakpoint table, widest first.
///
/// The first entry whose `min_width` is strictly below the viewport width
/// wins. A width sitting exactly on a boundary falls through to the next
/// (narrower) bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Breakpoint>", into = "Vec<Breakpoint>")]
pub struct Breakpoints(Vec<Breakpoint>);

impl Default for Breakpoints {
    fn default() -> Self {
        Self::standard()
    }
}

impl Breakpoints {
    /// 1024 / 768 / 480 px table showing 4 / 3 / 2 cards, 1 below that.
    pub fn standard() -> Self {
        Self(STANDARD_BREAKPOINTS.to_vec())
    }

    /// Validated table. Widths must be finite, non-negative and strictly
    /// descending; every entry must show at least one card. An empty table
    /// is allowed and always yields [`FALLBACK_DISPLAY_COUNT`].
    pub fn new(entries: Vec<Breakpoint>) -> Result<Self> {
        validate_entries(&entries)?;
        Ok(Self(entries))
    }

    /// Entries, widest first.
    pub fn as_slice(&self) -> &[Breakpoint] {
        &self.0
    }

    /// Cards visible at `viewport_width`.
    pub fn display_count_for(&self, viewport_width: f32) -> usize {
        display_count_in(&self.0, viewport_width)
    }

    /// Largest display count any viewport can produce.
    pub fn max_display_count(&self) -> usize {
        self.0
            .iter()
            .map(|bp| bp.display_count)
            .max()
            .unwrap_or(FALLBACK_DISPLAY_COUNT)
            .max(FALLBACK_DISPLAY_COUNT)
    }
}

impl TryFrom<Vec<Breakpoint>> for Breakpoints {
    type Error = CarouselError;

    fn try_from(entries: Vec<Breakpoint>) -> Result<Self> {
        Self::new(entries)
    }
}

impl From<Breakpoints> for Vec<Breakpoint> {
    fn from(value: Breakpoints) -> Self {
        value.0
    }
}

fn validate_entries(entries: &[Breakpoint]) -> Result<()> {
    for (position, bp) in entries.iter().enumerate() {
        if !bp.min_width.is_finite() || bp.min_width < 0.0 {
            return Err(CarouselError::InvalidBreakpoints(format!(
                "entry {position} has non-finite or negative min_width {}",
                bp.min_width
            )));
        }
        if bp.display_count == 0 {
            return Err(CarouselError::InvalidBreakpoints(format!(
                "entry {position} (min_width {}) must show at least one card",
                bp.min_width
            )));
        }
    }

    if let Some(pair) = entries
        .windows(2)
        .find(|pair| pair[0].min_width <= pair[1].min_width)
    {
        return Err(CarouselError::InvalidBreakpoints(format!(
            "min_width must be strictly descending, found {} before {}",
            pair[0].min_width, pair[1].min_width
        )));
    }

    Ok(())
}

fn display_count_in(table: &[Breakpoint], viewport_width: f32) -> usize {
    table
        .iter()
        .find(|bp| viewport_width > bp.min_width)
        .map(|bp| bp.display_count)
        .unwrap_or(FALLBACK_DISPLAY_COUNT)
}

/// Visible card count for the standard breakpoint table.
pub fn compute_display_count(viewport_width: f32) -> usize {
    display_count_in(&STANDARD_BREAKPOINTS, viewport_width)
}

/// Horizontal footprint of one rendered card.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CardMetrics {
    /// Border-box width in px.
    pub width: f32,
    /// Left margin in px.
    pub margin_left: f32,
    /// Right margin in px.
    pub margin_right: f32,
}

impl CardMetrics {
    /// Card metrics from width and margins.
    pub const fn new(width: f32, margin_left: f32, margin_right: f32) -> Self {
        Self {
            width,
            margin_left,
            margin_right,
        }
    }

    /// Width plus both margins; the distance between two card origins.
    #[inline]
    pub fn outer_width(&self) -> f32 {
        (self.width + self.margin_left + self.margin_right).max(0.0)
    }
}

/// Distance the track must shift left so `index` becomes the first visible card.
#[inline]
pub fn compute_offset(index: usize, card_width: f32) -> f32 {
    index as f32 * card_width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_boundaries_fall_to_lower_bucket() {
        assert_eq!(compute_display_count(1025.0), 4);
        assert_eq!(compute_display_count(1024.0), 3);
        assert_eq!(compute_display_count(769.0), 3);
        assert_eq!(compute_display_count(768.0), 2);
        assert_eq!(compute_display_count(481.0), 2);
        assert_eq!(compute_display_count(480.0), 1);
        assert_eq!(compute_display_count(0.0), 1);
        assert_eq!(compute_display_count(3840.0), 4);
    }

    #[test]
    fn every_width_maps_into_standard_range() {
        for width in (0..3000).step_by(7) {
            let count = compute_display_count(width as f32);
            assert!((1..=4).contains(&count), "width {width} -> {count}");
        }
    }

    #[test]
    fn custom_table_matches_free_function_for_standard() {
        let table = Breakpoints::standard();
        for width in [0.0, 480.0, 480.5, 768.0, 1000.0, 1024.0, 2000.0] {
            assert_eq!(table.display_count_for(width), compute_display_count(width));
        }
        assert_eq!(table.max_display_count(), 4);
    }

    #[test]
    fn empty_table_always_shows_one() {
        let table = Breakpoints::new(Vec::new()).unwrap();
        assert_eq!(table.display_count_for(5000.0), 1);
        assert_eq!(table.max_display_count(), 1);
    }

    #[test]
    fn rejects_unsorted_and_zero_count_tables() {
        let unsorted = Breakpoints::new(vec![
            Breakpoint::new(480.0, 2),
            Breakpoint::new(768.0, 3),
        ]);
        assert!(matches!(unsorted, Err(CarouselError::InvalidBreakpoints(_))));

        let zero = Breakpoints::new(vec![Breakpoint::new(600.0, 0)]);
        assert!(matches!(zero, Err(CarouselError::InvalidBreakpoints(_))));

        let nan = Breakpoints::new(vec![Breakpoint::new(f32::NAN, 2)]);
        assert!(nan.is_err());
    }

    #[test]
    fn deserialization_validates() {
        let ok: Breakpoints = serde_json::from_str(
            r#"[{"min_width": 900, "display_count": 5}, {"min_width": 300, "display_count": 2}]"#,
        )
        .unwrap();
        assert_eq!(ok.display_count_for(901.0), 5);
        assert_eq!(ok.display_count_for(900.0), 2);

        let bad = serde_json::from_str::<Breakpoints>(
            r#"[{"min_width": 300, "display_count": 2}, {"min_width": 900, "display_count": 5}]"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn offset_uses_outer_card_width() {
        let card = CardMetrics::new(240.0, 10.0, 10.0);
        assert_eq!(card.outer_width(), 260.0);
        assert_eq!(compute_offset(0, card.outer_width()), 0.0);
        assert_eq!(compute_offset(3, card.outer_width()), 780.0);
    }
}
