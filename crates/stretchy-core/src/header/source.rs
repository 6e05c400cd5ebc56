//! L3 Molecular Layer: Scroll source and observer registration
//!
//! An in-process model of a scroll container. Observers are notified
//! synchronously with the old and new content offset whenever the offset
//! changes. The source only keeps weak handles to its observers.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{trace, warn};
use uuid::Uuid;

use super::sample::{ContentInset, ScrollSample};
use super::tracker::ScrollTracker;

/// A single content-offset change as delivered to observers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetChange {
    pub old: ScrollSample,
    pub new: ScrollSample,
    pub inset: ContentInset,
}

/// Receiver of content-offset changes
pub trait ScrollObserver {
    fn scroll_offset_changed(&mut self, change: &OffsetChange);
}

impl ScrollObserver for ScrollTracker {
    fn scroll_offset_changed(&mut self, change: &OffsetChange) {
        self.on_scroll_offset_changed(change.old, change.new, change.inset);
    }
}

/// Handle returned by [`ScrollSource::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

struct Subscription {
    id: SubscriptionId,
    observer: Weak<RefCell<dyn ScrollObserver>>,
}

/// Scroll container model: content offset, content inset and observers
#[derive(Default)]
pub struct ScrollSource {
    offset: ScrollSample,
    inset: ContentInset,
    subscriptions: Vec<Subscription>,
}

impl std::fmt::Debug for ScrollSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollSource")
            .field("offset", &self.offset)
            .field("inset", &self.inset)
            .field("observers", &self.subscriptions.len())
            .finish()
    }
}

impl ScrollSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inset(inset: ContentInset) -> Self {
        Self {
            inset,
            ..Self::default()
        }
    }

    pub fn content_offset(&self) -> ScrollSample {
        self.offset
    }

    pub fn content_inset(&self) -> ContentInset {
        self.inset
    }

    /// Change the content inset; observers see it with the next offset change
    pub fn set_content_inset(&mut self, inset: ContentInset) {
        self.inset = inset;
    }

    /// Register an observer without taking ownership of it
    pub fn subscribe<O>(&mut self, observer: &Rc<RefCell<O>>) -> SubscriptionId
    where
        O: ScrollObserver + 'static,
    {
        let observer: Rc<RefCell<dyn ScrollObserver>> = observer.clone();
        let id = SubscriptionId::new();
        self.subscriptions.push(Subscription {
            id,
            observer: Rc::downgrade(&observer),
        });
        trace!(%id, "Observer subscribed");
        id
    }

    /// Remove an observer; returns false if the id was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        let removed = self.subscriptions.len() != before;
        if removed {
            trace!(%id, "Observer unsubscribed");
        }
        removed
    }

    /// Number of live observers
    pub fn observer_count(&self) -> usize {
        self.subscriptions
            .iter()
            .filter(|s| s.observer.strong_count() > 0)
            .count()
    }

    /// Move the content to an absolute offset and notify observers
    ///
    /// Returns the number of observers notified. Setting the current offset
    /// again does not notify.
    pub fn set_content_offset(&mut self, offset_y: f64) -> usize {
        let old = self.offset;
        let new = ScrollSample::new(offset_y);
        if old == new {
            return 0;
        }
        self.offset = new;
        self.notify(OffsetChange {
            old,
            new,
            inset: self.inset,
        })
    }

    /// Move the content by a relative amount (positive = up)
    pub fn scroll_by(&mut self, dy: f64) -> usize {
        self.set_content_offset(self.offset.offset_y + dy)
    }

    fn notify(&mut self, change: OffsetChange) -> usize {
        // Observers dropped by their owners are pruned here
        self.subscriptions.retain(|s| s.observer.strong_count() > 0);

        let mut notified = 0;
        for subscription in &self.subscriptions {
            let Some(observer) = subscription.observer.upgrade() else {
                continue;
            };
            let delivered = observer
                .try_borrow_mut()
                .map(|mut observer| observer.scroll_offset_changed(&change))
                .is_ok();
            if delivered {
                notified += 1;
            } else {
                warn!(id = %subscription.id, "Observer busy, skipping re-entrant notification");
            }
        }
        notified
    }
}
