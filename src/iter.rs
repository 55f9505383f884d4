use core::iter::FusedIterator;

use crate::{Window, WindowItem};

impl Window {
    /// Iterates the window's `(index, offset)` pairs in ascending index
    /// order, lazily. `offset = index * item_extent`.
    pub fn positions(&self, item_extent: f64) -> Positions {
        Positions {
            next: self.start_index,
            end: self.end_index.max(self.start_index),
            item_extent,
        }
    }

    /// Pairs each windowed position with the backing item at that index.
    ///
    /// Indexes past the end of `items` are dropped, so a window computed
    /// against a larger collection stays safe against a since-shrunk slice.
    pub fn items<'a, T>(&self, item_extent: f64, items: &'a [T]) -> WindowedItems<'a, T> {
        WindowedItems {
            positions: self.positions(item_extent),
            items,
        }
    }
}

/// Lazy iterator over a window's [`WindowItem`]s.
#[derive(Clone, Debug)]
pub struct Positions {
    next: usize,
    end: usize,
    item_extent: f64,
}

impl Positions {
    fn item(&self, index: usize) -> WindowItem {
        WindowItem {
            index,
            offset: index as f64 * self.item_extent,
        }
    }
}

impl Iterator for Positions {
    type Item = WindowItem;

    fn next(&mut self) -> Option<WindowItem> {
        if self.next >= self.end {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(self.item(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end - self.next;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for Positions {
    fn next_back(&mut self) -> Option<WindowItem> {
        if self.next >= self.end {
            return None;
        }
        self.end -= 1;
        Some(self.item(self.end))
    }
}

impl ExactSizeIterator for Positions {}
impl FusedIterator for Positions {}

/// Lazy view over the windowed slice of a caller-owned collection.
///
/// Yields `(WindowItem, &T)` pairs; the collection is only ever read by
/// index, never copied.
#[derive(Clone, Debug)]
pub struct WindowedItems<'a, T> {
    positions: Positions,
    items: &'a [T],
}

impl<'a, T> Iterator for WindowedItems<'a, T> {
    type Item = (WindowItem, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let position = self.positions.next()?;
        let item = self.items.get(position.index)?;
        Some((position, item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.positions.len()))
    }
}

impl<T> FusedIterator for WindowedItems<'_, T> {}
