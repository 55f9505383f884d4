use alloc::vec::Vec;
use core::cmp;

use crate::iter::WindowedItems;
use crate::{Align, InvalidConfiguration, Window, WindowItem};

/// A snapshot of everything the engine needs to window a list.
///
/// This type is intentionally ephemeral: the host rebuilds it on every scroll
/// or resize notification and every query is a pure function of the snapshot.
/// It holds no reference to the backing collection; items are read by index
/// only, via [`ViewportState::windowed_items`].
///
/// The engine never clamps `scroll_offset`. Clamping is the host's job
/// (see [`ViewportState::clamp_scroll_offset`]); offsets beyond the end of the
/// list degrade to an empty window rather than an error.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub total_item_count: usize,
    /// The fixed extent of one item along the scroll axis. Must be positive.
    pub item_extent: f64,
    /// The visible extent of the scrollable area. Must be positive.
    pub viewport_extent: f64,
    pub scroll_offset: f64,
    /// Extra items materialized beyond the strictly visible range, to reduce
    /// flicker during fast scrolling.
    pub overscan: usize,
}

impl ViewportState {
    pub fn new(total_item_count: usize, item_extent: f64, viewport_extent: f64) -> Self {
        Self {
            total_item_count,
            item_extent,
            viewport_extent,
            scroll_offset: 0.0,
            overscan: 0,
        }
    }

    pub fn with_total_item_count(mut self, total_item_count: usize) -> Self {
        self.total_item_count = total_item_count;
        self
    }

    pub fn with_scroll_offset(mut self, scroll_offset: f64) -> Self {
        self.scroll_offset = scroll_offset;
        self
    }

    pub fn with_viewport_extent(mut self, viewport_extent: f64) -> Self {
        self.viewport_extent = viewport_extent;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    fn check_item_extent(&self) -> Result<(), InvalidConfiguration> {
        if self.item_extent.is_finite() && self.item_extent > 0.0 {
            Ok(())
        } else {
            Err(InvalidConfiguration::ItemExtent)
        }
    }

    fn validate(&self) -> Result<(), InvalidConfiguration> {
        self.check_item_extent()?;
        if self.viewport_extent.is_finite() && self.viewport_extent > 0.0 {
            Ok(())
        } else {
            Err(InvalidConfiguration::ViewportExtent)
        }
    }

    /// Computes the window of indexes that must be materialized.
    ///
    /// The window covers every item intersecting
    /// `[scroll_offset, scroll_offset + viewport_extent]`, widened by
    /// `overscan` on both sides and clamped to `[0, total_item_count)`.
    ///
    /// A scroll offset past the end of the list yields a valid empty window at
    /// `total_item_count`; the host renders nothing for it.
    pub fn compute_window(&self) -> Result<Window, InvalidConfiguration> {
        self.validate()?;
        let count = self.total_item_count;
        if count == 0 {
            return Ok(Window::default());
        }

        let raw_start = index_at(self.scroll_offset, self.item_extent);
        let visible = visible_count(self.viewport_extent, self.item_extent);

        let end_index = cmp::min(
            count,
            raw_start
                .saturating_add(visible)
                .saturating_add(self.overscan),
        );
        // Far out-of-range offsets put raw_start past the end; pin start to
        // end so the window stays ordered (and empty).
        let start_index = cmp::min(raw_start.saturating_sub(self.overscan), end_index);

        wtrace!(raw_start, start_index, end_index, "compute_window");
        Ok(Window {
            start_index,
            end_index,
        })
    }

    /// The extent of the whole list (`total_item_count * item_extent`).
    ///
    /// This depends only on count and item extent, never on the scroll
    /// offset; hosts use it to size the outer scroll container so native
    /// scrollbars behave correctly.
    pub fn total_extent(&self) -> Result<f64, InvalidConfiguration> {
        self.check_item_extent()?;
        Ok(self.total_item_count as f64 * self.item_extent)
    }

    /// The largest scroll offset at which any content is still visible.
    pub fn max_scroll_offset(&self) -> Result<f64, InvalidConfiguration> {
        self.validate()?;
        Ok(self.max_offset())
    }

    /// Clamps `offset` to `[0, max_scroll_offset]`.
    ///
    /// The engine itself never clamps; this helper centralizes the arithmetic
    /// for hosts that want to clamp before building the next snapshot.
    pub fn clamp_scroll_offset(&self, offset: f64) -> Result<f64, InvalidConfiguration> {
        self.validate()?;
        Ok(offset.clamp(0.0, self.max_offset()))
    }

    fn max_offset(&self) -> f64 {
        (self.total_item_count as f64 * self.item_extent - self.viewport_extent).max(0.0)
    }

    /// Computes the (clamped) scroll offset that brings `index` into view.
    ///
    /// `Align::Auto` keeps an already fully visible item where it is, and
    /// otherwise scrolls the minimal distance to reveal it.
    pub fn scroll_to_index_offset(
        &self,
        index: usize,
        align: Align,
    ) -> Result<f64, InvalidConfiguration> {
        self.validate()?;
        if self.total_item_count == 0 {
            return Ok(0.0);
        }
        let index = index.min(self.total_item_count - 1);
        let start = index as f64 * self.item_extent;
        let end = start + self.item_extent;
        let view = self.viewport_extent;

        let target = match align {
            Align::Start => start,
            Align::End => end - view,
            Align::Center => start + self.item_extent / 2.0 - view / 2.0,
            Align::Auto => {
                let cur = self.scroll_offset;
                if start >= cur && end <= cur + view {
                    cur
                } else if start < cur {
                    start
                } else {
                    end - view
                }
            }
        };

        wdebug!(index, ?align, target, "scroll_to_index_offset");
        Ok(target.clamp(0.0, self.max_offset()))
    }

    /// Calls `f` with each [`WindowItem`] in the current window, in ascending
    /// index order, without allocating.
    pub fn for_each_window_item(
        &self,
        mut f: impl FnMut(WindowItem),
    ) -> Result<(), InvalidConfiguration> {
        let window = self.compute_window()?;
        for item in window.positions(self.item_extent) {
            f(item);
        }
        Ok(())
    }

    /// Collects the current window's [`WindowItem`]s into `out` (clears `out`
    /// first).
    ///
    /// This is a convenience wrapper around [`Self::for_each_window_item`];
    /// hosts that care about allocations should prefer the iteration APIs and
    /// reuse a scratch buffer.
    pub fn collect_window_items(
        &self,
        out: &mut Vec<WindowItem>,
    ) -> Result<(), InvalidConfiguration> {
        out.clear();
        self.for_each_window_item(|item| out.push(item))
    }

    /// Returns a lazy view pairing each windowed position with the backing
    /// item at that index.
    ///
    /// The engine never copies the collection; the view borrows it. If the
    /// host shrank the collection after building this snapshot, indexes past
    /// the slice end are silently dropped (the host should recompute with the
    /// new count, this just keeps a stale window safe).
    pub fn windowed_items<'a, T>(
        &self,
        items: &'a [T],
    ) -> Result<WindowedItems<'a, T>, InvalidConfiguration> {
        let window = self.compute_window()?;
        Ok(window.items(self.item_extent, items))
    }
}

// `f64::floor`/`ceil` live in std, not core, so both helpers lean on float
// casts instead: a float-to-usize cast truncates (== floor for the
// non-negative quotients here) and saturates, so absurd offsets degrade to an
// empty window at the end of the list instead of wrapping, negative offsets
// land on index 0, and NaN lands on 0.

fn index_at(offset: f64, extent: f64) -> usize {
    (offset / extent) as usize
}

fn visible_count(viewport_extent: f64, item_extent: f64) -> usize {
    let ratio = viewport_extent / item_extent;
    let floored = ratio as usize;
    let ceiled = if (floored as f64) < ratio {
        floored.saturating_add(1)
    } else {
        floored
    };
    // The +1 keeps a partially visible trailing row in the window even when
    // the viewport extent is an exact multiple of the item extent.
    ceiled.saturating_add(1)
}
