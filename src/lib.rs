//! A headless windowing engine for fixed-extent lists.
//!
//! Given a total item count, a uniform item extent, a viewport extent, and a
//! scroll offset, this crate computes the minimal contiguous index window that
//! must be materialized so element count stays constant no matter how large
//! the backing collection grows.
//!
//! It is UI-agnostic. A GUI/TUI layer is expected to provide:
//! - the viewport extent (height/width along the scroll axis)
//! - the current scroll offset
//! - the item count and the fixed per-item extent
//!
//! and is responsible for placing each emitted [`WindowItem`] at its offset and
//! for sizing the outer scroll container to [`ViewportState::total_extent`].
//!
//! Everything here is a pure function of [`ViewportState`]: there is no hidden
//! state, no caching across calls, and identical inputs always produce
//! identical windows.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod iter;
mod types;
mod viewport;


pub use error::InvalidConfiguration;
pub use iter::{Positions, WindowedItems};
pub use types::{Align, Window, WindowItem};
pub use viewport::ViewportState;
