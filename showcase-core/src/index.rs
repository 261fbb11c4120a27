//! Index manager: the only owner of the mutable scroll position.

/// Scroll position over a fixed item count.
///
/// `current_index` is the zero-based index of the left-most visible item and
/// always satisfies `0 <= current_index <= max_index()`. `display_count` is
/// at least 1 and never exceeds `item_count` when there are items; a request
/// for more cards than exist is capped, leaving a single position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexManager {
    item_count: usize,
    display_count: usize,
    current_index: usize,
}

impl IndexManager {
    /// Start at index 0 with `display_count` fitted to `item_count`.
    pub fn new(item_count: usize, display_count: usize) -> Self {
        Self {
            item_count,
            display_count: fit_display_count(item_count, display_count),
            current_index: 0,
        }
    }

    /// The display count actually adopted for a requested one.
    #[inline]
    pub fn fit(&self, requested: usize) -> usize {
        fit_display_count(self.item_count, requested)
    }

    /// Number of items being paged.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Cards visible at once.
    #[inline]
    pub fn display_count(&self) -> usize {
        self.display_count
    }

    /// Index of the left-most visible item.
    #[inline]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Largest valid start index: `item_count - display_count`, never negative.
    #[inline]
    pub fn max_index(&self) -> usize {
        self.item_count.saturating_sub(self.display_count)
    }

    /// Number of distinct reachable positions (`max_index + 1`).
    #[inline]
    pub fn total_slides(&self) -> usize {
        self.max_index() + 1
    }

    /// False when there is nothing to show at all.
    #[inline]
    pub fn is_navigable(&self) -> bool {
        self.item_count > 0
    }

    /// False at the first position.
    #[inline]
    pub fn can_retreat(&self) -> bool {
        self.current_index > 0
    }

    /// False at the last position.
    #[inline]
    pub fn can_advance(&self) -> bool {
        self.current_index < self.max_index()
    }

    /// Step one card forward. Returns true if the index moved.
    pub fn advance(&mut self) -> bool {
        self.set_clamped(self.current_index.saturating_add(1))
    }

    /// Step one card back. Returns true if the index moved.
    pub fn retreat(&mut self) -> bool {
        self.set_clamped(self.current_index.saturating_sub(1))
    }

    /// Jump straight to `index`, clamped into range. Returns true if the index moved.
    pub fn jump_to(&mut self, index: usize) -> bool {
        self.set_clamped(index)
    }

    /// Adopt a new display count. The index is only pulled down when it no
    /// longer fits under the new bound; a looser bound leaves it alone.
    /// Returns true if the index moved.
    pub fn on_display_count_changed(&mut self, new_count: usize) -> bool {
        self.display_count = self.fit(new_count);
        self.set_clamped(self.current_index)
    }

    fn set_clamped(&mut self, index: usize) -> bool {
        let clamped = self.clamp(index);
        let moved = clamped != self.current_index;
        self.current_index = clamped;
        moved
    }

    /// The single clamp path shared by every operation.
    #[inline]
    pub fn clamp(&self, index: usize) -> usize {
        index.min(self.max_index())
    }
}

fn fit_display_count(item_count: usize, requested: usize) -> usize {
    requested.max(1).min(item_count.max(1))
}
