//! L4 Atomic Layer: Header height resolution
//!
//! Maps a scroll delta onto a new clamped header height. Shared by the
//! collapse and expand paths; the sign of the delta picks the direction.

use super::bounds::HeaderBounds;

/// Compute the header height after a scroll delta
///
/// # Arguments
/// * `delta` - `new.offset_y - old.offset_y` (positive = scrolling up)
/// * `content_inset_top` - Top content inset of the scroll container
/// * `current_height` - Header height before this update
/// * `bounds` - Height bounds of the header
///
/// # Returns
/// `current_height - (delta + content_inset_top)` clamped to `bounds`
#[inline]
pub fn resolve_height(
    delta: f64,
    content_inset_top: f64,
    current_height: f64,
    bounds: &HeaderBounds,
) -> f64 {
    let adjusted_offset = delta + content_inset_top;
    bounds.clamp(current_height - adjusted_offset)
}
