use core::fmt;

/// The engine's single error kind: the caller supplied geometry that cannot
/// be windowed over.
///
/// Every other input, however extreme (huge counts, scroll offsets far past
/// the end of the list), yields a well-defined, possibly empty window instead
/// of an error. Scroll and resize events are frequent, and transient
/// out-of-range states are expected during interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvalidConfiguration {
    /// `item_extent` was zero, negative, or non-finite.
    ItemExtent,
    /// `viewport_extent` was zero, negative, or non-finite.
    ViewportExtent,
}

impl fmt::Display for InvalidConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ItemExtent => f.write_str("item extent must be positive and finite"),
            Self::ViewportExtent => f.write_str("viewport extent must be positive and finite"),
        }
    }
}

impl core::error::Error for InvalidConfiguration {}
