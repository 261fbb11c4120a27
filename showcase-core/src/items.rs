//! The immutable set of cards a carousel pages through.

/// Fixed, ordered collection of display items.
///
/// Built once at start-up and never resized; the carousel only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSet<T> {
    items: Box<[T]>,
}

impl<T> ItemSet<T> {
    /// Freeze `items` in their current order.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: items.into_boxed_slice(),
        }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Iterate in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// All items as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Items inside the window that starts at `start` and spans `count` cards.
    pub fn window(&self, start: usize, count: usize) -> &[T] {
        let start = start.min(self.items.len());
        let end = start.saturating_add(count).min(self.items.len());
        &self.items[start..end]
    }
}

impl<T> From<Vec<T>> for ItemSet<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for ItemSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a ItemSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
