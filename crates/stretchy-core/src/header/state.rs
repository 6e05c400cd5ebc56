//! L4 Atomic Layer: Header state and the layout constants derived from it

use serde::{Deserialize, Serialize};

use super::bounds::HeaderBounds;

/// Mutable header state, owned by the scroll tracker
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeaderState {
    /// Real header height, always within the header bounds
    pub current_height: f64,
    /// Inner layer offset, `0` at rest and negative while overstretched
    pub overstretch_offset: f64,
}

impl HeaderState {
    /// Resting state: full height, no overstretch
    pub fn resting(bounds: &HeaderBounds) -> Self {
        Self {
            current_height: bounds.max(),
            overstretch_offset: 0.0,
        }
    }

    #[inline]
    pub fn is_overstretched(&self) -> bool {
        self.overstretch_offset < 0.0
    }

    /// Layout constants for the presentation layer
    pub fn layout(&self) -> HeaderLayout {
        HeaderLayout {
            height: self.current_height,
            inner_bottom_constant: self.overstretch_offset,
        }
    }
}

/// The two numbers the presentation layer applies after each update
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeaderLayout {
    /// Header height constraint
    pub height: f64,
    /// Constant pinning the header bottom to the inner layer bottom
    pub inner_bottom_constant: f64,
}
