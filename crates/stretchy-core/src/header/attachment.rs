//! L2 Organism Layer: Header attached to a scroll source
//!
//! Owns the tracker, registers it with the scroll source on attach and
//! unregisters it on detach or drop. The source itself is held weakly.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{debug, info};

use super::bounds::HeaderBounds;
use super::source::{ScrollSource, SubscriptionId};
use super::state::{HeaderLayout, HeaderState};
use super::tracker::ScrollTracker;

/// A stretchy header wired to a scroll source
///
/// Read [`StretchyHeader::layout`] after the source moves and apply the two
/// constants to the presentation layer.
pub struct StretchyHeader {
    tracker: Rc<RefCell<ScrollTracker>>,
    source: Weak<RefCell<ScrollSource>>,
    subscription: Option<SubscriptionId>,
}

impl StretchyHeader {
    /// Attach a header in its resting state to `source`
    ///
    /// Must not be called from inside a notification of the same source.
    pub fn attach(source: &Rc<RefCell<ScrollSource>>, bounds: HeaderBounds) -> Self {
        Self::attach_tracker(source, ScrollTracker::new(bounds))
    }

    /// Attach an already configured tracker
    pub fn attach_tracker(source: &Rc<RefCell<ScrollSource>>, tracker: ScrollTracker) -> Self {
        let tracker = Rc::new(RefCell::new(tracker));
        let subscription = source.borrow_mut().subscribe(&tracker);
        info!(
            %subscription,
            min = tracker.borrow().bounds().min(),
            max = tracker.borrow().bounds().max(),
            "Header attached to scroll source"
        );
        Self {
            tracker,
            source: Rc::downgrade(source),
            subscription: Some(subscription),
        }
    }

    /// Current layout constants
    pub fn layout(&self) -> HeaderLayout {
        self.tracker.borrow().layout()
    }

    pub fn state(&self) -> HeaderState {
        *self.tracker.borrow().state()
    }

    pub fn bounds(&self) -> HeaderBounds {
        *self.tracker.borrow().bounds()
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Unregister from the scroll source; the last state stays readable
    pub fn detach(&mut self) {
        let Some(id) = self.subscription.take() else {
            return;
        };
        self.tracker.borrow_mut().detach();

        let Some(source) = self.source.upgrade() else {
            debug!(%id, "Scroll source already gone");
            return;
        };

        let unsubscribed = source
            .try_borrow_mut()
            .map(|mut source| source.unsubscribe(id))
            .is_ok();
        if unsubscribed {
            debug!(%id, "Header detached from scroll source");
        } else {
            // Detaching from inside a notification: the tracker is already
            // inert and the source prunes the dead handle once we drop it.
            debug!(%id, "Scroll source busy, deferring unsubscribe");
        }
    }
}

impl Drop for StretchyHeader {
    fn drop(&mut self) {
        self.detach();
    }
}

impl std::fmt::Debug for StretchyHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StretchyHeader")
            .field("state", &self.state())
            .field("attached", &self.is_attached())
            .finish()
    }
}
