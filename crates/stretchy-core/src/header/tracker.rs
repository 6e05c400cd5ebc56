//! L3 Molecular Layer: Scroll tracker
//!
//! Combines height resolution and overstretch math into the controller that
//! reacts to every scroll-offset change of the tracked container.

use tracing::{debug, trace, warn};

use super::bounds::HeaderBounds;
use super::height::resolve_height;
use super::overstretch::next_overstretch;
use super::sample::{ContentInset, ScrollDirection, ScrollSample};
use super::state::{HeaderLayout, HeaderState};

/// Header controller driven by scroll-offset notifications
///
/// Each notification runs two independent passes: the height pass
/// (collapse on upward scroll past the origin, expand on downward pull
/// below it) followed by the overstretch pass (stretch the inner layer
/// while the header is capped, relax it on upward scroll).
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    bounds: HeaderBounds,
    state: HeaderState,
    detached: bool,
}

impl ScrollTracker {
    /// Create a tracker in the resting state (full height, no overstretch)
    pub fn new(bounds: HeaderBounds) -> Self {
        Self {
            bounds,
            state: HeaderState::resting(&bounds),
            detached: false,
        }
    }

    /// Create a tracker from an existing state, clamping it into the bounds
    pub fn with_state(bounds: HeaderBounds, state: HeaderState) -> Self {
        Self {
            bounds,
            state: HeaderState {
                current_height: bounds.clamp(state.current_height),
                overstretch_offset: state.overstretch_offset.min(0.0),
            },
            detached: false,
        }
    }

    pub fn bounds(&self) -> &HeaderBounds {
        &self.bounds
    }

    pub fn state(&self) -> &HeaderState {
        &self.state
    }

    pub fn layout(&self) -> HeaderLayout {
        self.state.layout()
    }

    #[inline]
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Stop reacting to notifications; later updates are no-ops
    pub fn detach(&mut self) {
        self.detached = true;
    }

    /// Apply one scroll-offset change and return the resulting layout
    ///
    /// # Arguments
    /// * `old` - Offset before the change
    /// * `new` - Offset after the change
    /// * `inset` - Content inset of the container at the time of the change
    pub fn on_scroll_offset_changed(
        &mut self,
        old: ScrollSample,
        new: ScrollSample,
        inset: ContentInset,
    ) -> HeaderLayout {
        if self.detached {
            debug!(offset_y = new.offset_y, "Ignoring scroll update after detach");
            return self.layout();
        }

        let delta = new.delta_from(old);
        if !delta.is_finite() || !inset.top.is_finite() {
            warn!(
                old = old.offset_y,
                new = new.offset_y,
                inset_top = inset.top,
                "Dropping non-finite scroll sample"
            );
            return self.layout();
        }

        trace!(old = old.offset_y, new = new.offset_y, delta, "Scroll offset changed");

        if let Some(height) = self.next_height(delta, new, inset) {
            debug!(
                from = self.state.current_height,
                to = height,
                delta,
                "Header height adjusted"
            );
            self.state.current_height = height;
        }

        let at_max = self.bounds.is_at_max(self.state.current_height);
        if let Some(offset) = next_overstretch(self.state.overstretch_offset, delta, at_max) {
            debug!(
                from = self.state.overstretch_offset,
                to = offset,
                delta,
                "Overstretch adjusted"
            );
            self.state.overstretch_offset = offset;
        }

        self.layout()
    }

    /// Height pass; `None` leaves the height unchanged
    fn next_height(&self, delta: f64, new: ScrollSample, inset: ContentInset) -> Option<f64> {
        let direction = ScrollDirection::from_delta(delta);
        let pulling_down = new.is_below_origin() && direction == ScrollDirection::Down;
        let collapsing =
            new.is_above_origin() && direction == ScrollDirection::Up && self.can_shrink();

        if pulling_down || collapsing {
            Some(resolve_height(
                delta,
                inset.top,
                self.state.current_height,
                &self.bounds,
            ))
        } else {
            None
        }
    }

    /// Room to shrink: below the cap, or at the cap with the inner layer
    /// already relaxed. An upward scroll unwinds overstretch before it
    /// starts collapsing the header.
    fn can_shrink(&self) -> bool {
        let height = self.state.current_height;
        self.bounds.has_room_to_shrink(height)
            || (self.bounds.is_at_max(height) && !self.state.is_overstretched())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bounds() -> HeaderBounds {
        HeaderBounds::new(40.0, 120.0).unwrap()
    }

    fn step(tracker: &mut ScrollTracker, old: f64, new: f64) -> HeaderLayout {
        tracker.on_scroll_offset_changed(
            ScrollSample::new(old),
            ScrollSample::new(new),
            ContentInset::default(),
        )
    }

    #[test]
    fn test_collapse_from_rest() {
        let mut tracker = ScrollTracker::new(bounds());
        let layout = step(&mut tracker, 0.0, 10.0);
        assert_eq!(layout.height, 110.0);
        assert_eq!(layout.inner_bottom_constant, 0.0);
    }

    #[test]
    fn test_overstretch_cycle() {
        let mut tracker = ScrollTracker::new(bounds());

        // pull down while capped: height stays, inner layer stretches
        let layout = step(&mut tracker, 0.0, -15.0);
        assert_eq!(layout.height, 120.0);
        assert_eq!(layout.inner_bottom_constant, -15.0);

        // partial release
        let layout = step(&mut tracker, -15.0, -5.0);
        assert_eq!(layout.height, 120.0);
        assert_eq!(layout.inner_bottom_constant, -5.0);

        // release past the origin: overstretch recovers to 0, height unwound first
        let layout = step(&mut tracker, -5.0, 1.0);
        assert_eq!(layout.height, 120.0);
        assert_eq!(layout.inner_bottom_constant, 0.0);

        // further upward scroll starts collapsing
        let layout = step(&mut tracker, 1.0, 11.0);
        assert_eq!(layout.height, 110.0);
        assert_eq!(layout.inner_bottom_constant, 0.0);
    }

    #[test]
    fn test_expand_from_min() {
        let mut tracker = ScrollTracker::new(bounds());
        step(&mut tracker, 0.0, 200.0);
        assert_eq!(tracker.state().current_height, 40.0);

        let layout = step(&mut tracker, 0.0, -10.0);
        assert_eq!(layout.height, 50.0);
        assert_eq!(layout.inner_bottom_constant, 0.0);
    }

    #[test]
    fn test_expand_reaching_max_starts_overstretch_same_update() {
        let state = HeaderState {
            current_height: 110.0,
            overstretch_offset: 0.0,
        };
        let mut tracker = ScrollTracker::with_state(bounds(), state);
        let layout = step(&mut tracker, -2.0, -22.0);
        assert_eq!(layout.height, 120.0);
        assert_eq!(layout.inner_bottom_constant, -20.0);
    }

    #[test]
    fn test_upward_scroll_below_origin_keeps_height() {
        let state = HeaderState {
            current_height: 80.0,
            overstretch_offset: 0.0,
        };
        let mut tracker = ScrollTracker::with_state(bounds(), state);
        let layout = step(&mut tracker, -30.0, -10.0);
        assert_eq!(layout.height, 80.0);
    }

    #[test]
    fn test_downward_scroll_above_origin_keeps_height() {
        let state = HeaderState {
            current_height: 80.0,
            overstretch_offset: 0.0,
        };
        let mut tracker = ScrollTracker::with_state(bounds(), state);
        let layout = step(&mut tracker, 50.0, 30.0);
        assert_eq!(layout.height, 80.0);
    }

    #[test]
    fn test_content_inset_applies() {
        let state = HeaderState {
            current_height: 100.0,
            overstretch_offset: 0.0,
        };
        let mut tracker = ScrollTracker::with_state(bounds(), state);
        let layout = tracker.on_scroll_offset_changed(
            ScrollSample::new(0.0),
            ScrollSample::new(5.0),
            ContentInset::new(10.0),
        );
        assert_eq!(layout.height, 85.0);
    }

    #[test]
    fn test_detached_tracker_ignores_updates() {
        let mut tracker = ScrollTracker::new(bounds());
        tracker.detach();
        let layout = step(&mut tracker, 0.0, 30.0);
        assert!(tracker.is_detached());
        assert_eq!(layout.height, 120.0);
    }

    #[test]
    fn test_non_finite_sample_dropped() {
        let mut tracker = ScrollTracker::new(bounds());
        step(&mut tracker, 0.0, f64::NAN);
        step(&mut tracker, f64::INFINITY, 0.0);
        assert_eq!(*tracker.state(), HeaderState::resting(&bounds()));
    }

    #[test]
    fn test_with_state_clamps() {
        let tracker = ScrollTracker::with_state(
            bounds(),
            HeaderState {
                current_height: 400.0,
                overstretch_offset: 9.0,
            },
        );
        assert_eq!(tracker.state().current_height, 120.0);
        assert_eq!(tracker.state().overstretch_offset, 0.0);
    }

    proptest! {
        #[test]
        fn zero_delta_is_idempotent(
            offset in -300.0f64..300.0,
            height in 40.0f64..=120.0,
            overstretch in -100.0f64..=0.0,
            inset in -20.0f64..20.0,
        ) {
            let state = HeaderState { current_height: height, overstretch_offset: overstretch };
            let mut tracker = ScrollTracker::with_state(bounds(), state);
            tracker.on_scroll_offset_changed(
                ScrollSample::new(offset),
                ScrollSample::new(offset),
                ContentInset::new(inset),
            );
            prop_assert_eq!(*tracker.state(), state);
        }

        #[test]
        fn invariants_hold_over_any_path(
            offsets in proptest::collection::vec(-400.0f64..400.0, 1..60),
        ) {
            let mut tracker = ScrollTracker::new(bounds());
            let mut previous = 0.0;
            for offset in offsets {
                step(&mut tracker, previous, offset);
                previous = offset;
                prop_assert!(bounds().contains(tracker.state().current_height));
                prop_assert!(tracker.state().overstretch_offset <= 0.0);
            }
        }
    }
}
