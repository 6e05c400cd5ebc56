//! L4 Atomic Layer: Scroll samples and direction
//!
//! Plain value types describing a single scroll-position notification.

use serde::{Deserialize, Serialize};

/// Vertical content offset of the tracked scroll container
///
/// Negative values mean the content is pulled below its origin,
/// positive values mean it is scrolled up past the origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollSample {
    pub offset_y: f64,
}

impl ScrollSample {
    pub fn new(offset_y: f64) -> Self {
        Self { offset_y }
    }

    /// Signed change from `old` to `self` (positive = scrolling up)
    #[inline]
    pub fn delta_from(&self, old: ScrollSample) -> f64 {
        self.offset_y - old.offset_y
    }

    /// Content is pulled below its origin
    #[inline]
    pub fn is_below_origin(&self) -> bool {
        self.offset_y < 0.0
    }

    /// Content is scrolled up past its origin
    #[inline]
    pub fn is_above_origin(&self) -> bool {
        self.offset_y > 0.0
    }
}

impl From<f64> for ScrollSample {
    fn from(offset_y: f64) -> Self {
        Self::new(offset_y)
    }
}

/// Content inset of the scroll container at the time of a change
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContentInset {
    #[serde(default)]
    pub top: f64,
}

impl ContentInset {
    pub fn new(top: f64) -> Self {
        Self { top }
    }
}

/// Direction of a scroll update, derived from the sign of the delta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Delta > 0: content moves up, header shrinks
    Up,
    /// Delta < 0: content moves down, header grows
    Down,
    /// Delta == 0
    Still,
}

impl ScrollDirection {
    /// Classify a delta; NaN is treated as no movement
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            ScrollDirection::Up
        } else if delta < 0.0 {
            ScrollDirection::Down
        } else {
            ScrollDirection::Still
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_sign() {
        let old = ScrollSample::new(10.0);
        assert_eq!(ScrollSample::new(25.0).delta_from(old), 15.0);
        assert_eq!(ScrollSample::new(-5.0).delta_from(old), -15.0);
    }

    #[test]
    fn test_direction() {
        assert_eq!(ScrollDirection::from_delta(3.0), ScrollDirection::Up);
        assert_eq!(ScrollDirection::from_delta(-0.5), ScrollDirection::Down);
        assert_eq!(ScrollDirection::from_delta(0.0), ScrollDirection::Still);
        assert_eq!(ScrollDirection::from_delta(f64::NAN), ScrollDirection::Still);
        assert_eq!(
            ScrollDirection::from_delta(ScrollSample::new(-8.0).delta_from(ScrollSample::new(0.0))),
            ScrollDirection::Down
        );
    }

    #[test]
    fn test_origin_regions() {
        assert!(ScrollSample::new(-1.0).is_below_origin());
        assert!(ScrollSample::new(1.0).is_above_origin());
        let origin = ScrollSample::default();
        assert!(!origin.is_below_origin());
        assert!(!origin.is_above_origin());
    }
}
