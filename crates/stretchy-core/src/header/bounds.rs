//! L4 Atomic Layer: Header height bounds
//!
//! The `[min, max]` interval a header's real height may move within.
//! Bounds are fixed once the header is attached to its scroll source.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Minimum height used when no compact size has been measured
pub const FALLBACK_MINIMUM_HEIGHT: f64 = 64.0;

/// Validated `[preferred_minimum_height, preferred_maximum_height]` pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBounds", into = "RawBounds")]
pub struct HeaderBounds {
    min: f64,
    max: f64,
}

#[derive(Serialize, Deserialize)]
struct RawBounds {
    #[serde(alias = "min")]
    preferred_minimum_height: f64,
    #[serde(alias = "max")]
    preferred_maximum_height: f64,
}

impl TryFrom<RawBounds> for HeaderBounds {
    type Error = Error;

    fn try_from(raw: RawBounds) -> Result<Self> {
        HeaderBounds::new(raw.preferred_minimum_height, raw.preferred_maximum_height)
    }
}

impl From<HeaderBounds> for RawBounds {
    fn from(bounds: HeaderBounds) -> Self {
        RawBounds {
            preferred_minimum_height: bounds.min,
            preferred_maximum_height: bounds.max,
        }
    }
}

impl HeaderBounds {
    /// Create bounds, rejecting `min > max`, negative or non-finite values
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min < 0.0 || min > max {
            return Err(Error::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Create bounds from the resting height and an optional measured
    /// compact height, falling back to [`FALLBACK_MINIMUM_HEIGHT`]
    ///
    /// # Arguments
    /// * `max` - Resting (initial) header height
    /// * `measured_min` - Compact content height, if the caller measured one
    pub fn with_measured_minimum(max: f64, measured_min: Option<f64>) -> Result<Self> {
        Self::new(measured_min.unwrap_or(FALLBACK_MINIMUM_HEIGHT), max)
    }

    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Collapsible range (`max - min`)
    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Clamp a height into the bounds
    ///
    /// NaN collapses to `min`, so the result is always inside the bounds.
    #[inline]
    pub fn clamp(&self, height: f64) -> f64 {
        height.max(self.min).min(self.max)
    }

    #[inline]
    pub fn contains(&self, height: f64) -> bool {
        height >= self.min && height <= self.max
    }

    /// Height is at or above the cap
    #[inline]
    pub fn is_at_max(&self, height: f64) -> bool {
        height >= self.max
    }

    /// Height is in `[min, max)`: it can still be collapsed further
    /// without first leaving its resting size
    #[inline]
    pub fn has_room_to_shrink(&self, height: f64) -> bool {
        height >= self.min && height < self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_inverted_bounds() {
        let err = HeaderBounds::new(130.0, 120.0).unwrap_err();
        assert!(matches!(err, Error::InvalidBounds { .. }));
    }

    #[test]
    fn test_rejects_non_finite_and_negative() {
        assert!(HeaderBounds::new(f64::NAN, 120.0).is_err());
        assert!(HeaderBounds::new(40.0, f64::INFINITY).is_err());
        assert!(HeaderBounds::new(-1.0, 120.0).is_err());
    }

    #[test]
    fn test_equal_bounds_are_valid() {
        let bounds = HeaderBounds::new(80.0, 80.0).unwrap();
        assert_eq!(bounds.span(), 0.0);
        assert_eq!(bounds.clamp(10.0), 80.0);
    }

    #[test]
    fn test_measured_minimum_fallback() {
        let bounds = HeaderBounds::with_measured_minimum(200.0, None).unwrap();
        assert_eq!(bounds.min(), FALLBACK_MINIMUM_HEIGHT);
        assert_eq!(bounds.max(), 200.0);

        let bounds = HeaderBounds::with_measured_minimum(200.0, Some(48.0)).unwrap();
        assert_eq!(bounds.min(), 48.0);

        assert!(HeaderBounds::with_measured_minimum(30.0, None).is_err());
    }

    #[test]
    fn test_clamp_and_regions() {
        let bounds = HeaderBounds::new(40.0, 120.0).unwrap();
        assert_eq!(bounds.clamp(10.0), 40.0);
        assert_eq!(bounds.clamp(500.0), 120.0);
        assert_eq!(bounds.clamp(77.0), 77.0);
        assert_eq!(bounds.clamp(f64::NAN), 40.0);

        assert!(bounds.has_room_to_shrink(40.0));
        assert!(bounds.has_room_to_shrink(119.9));
        assert!(!bounds.has_room_to_shrink(120.0));
        assert!(bounds.is_at_max(120.0));
    }

    #[test]
    fn test_deserialize_validates() {
        let bounds: HeaderBounds = toml::from_str("min = 40.0\nmax = 120.0").unwrap();
        assert_eq!(bounds, HeaderBounds::new(40.0, 120.0).unwrap());

        let inverted: std::result::Result<HeaderBounds, _> =
            toml::from_str("preferred_minimum_height = 150.0\npreferred_maximum_height = 120.0");
        assert!(inverted.is_err());
    }
}
