//! L4 Atomic Layer: Overstretch (parallax) offset math
//!
//! Once the header is pinned at its maximum height, further downward pulls
//! stretch an inner layer instead. The offset is `0` at rest and negative
//! while stretched.

/// Extend the overstretch by a downward delta (`delta < 0`)
#[inline]
pub fn extend_overstretch(offset: f64, delta: f64) -> f64 {
    offset + delta
}

/// Relax the overstretch by an upward delta (`delta > 0`)
///
/// The result may recover to exactly `0` but never becomes positive.
#[inline]
pub fn relax_overstretch(offset: f64, delta: f64) -> f64 {
    (offset + delta).min(0.0)
}

/// Apply the overstretch rule for one update
///
/// # Arguments
/// * `offset` - Overstretch offset before the update
/// * `delta` - Scroll delta of the update
/// * `at_max_height` - Header height (after this update's height pass) is at its cap
///
/// # Returns
/// The new offset, or `None` when neither the expand nor the relax rule applies
pub fn next_overstretch(offset: f64, delta: f64, at_max_height: bool) -> Option<f64> {
    if at_max_height && delta < 0.0 {
        return Some(extend_overstretch(offset, delta));
    }
    if offset < 0.0 && delta > 0.0 {
        return Some(relax_overstretch(offset, delta));
    }
    None
}
