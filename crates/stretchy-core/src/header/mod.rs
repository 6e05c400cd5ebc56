//! Stretchy header: a list header whose height follows the scroll offset
//!
//! The header collapses toward its minimum height as the content scrolls up
//! past the origin, grows back as the content is pulled down below it, and
//! once capped at its maximum height stretches an inner parallax layer.
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `sample` - Scroll samples, content inset, scroll direction
//! - `bounds` - Validated `[min, max]` height bounds
//! - `height` - Pure height resolution
//! - `overstretch` - Pure overstretch offset math
//! - `state` - Header state and layout constants
//!
//! ## L3 Molecular Layer
//! - `tracker` - Controller applying both passes per scroll notification
//! - `source` - Scroll container model with weak observer registration
//!
//! ## L2 Organism Layer
//! - `attachment` - Header attached to (and detached from) a scroll source
//!
//! # Usage
//!
//! ```ignore
//! use std::{cell::RefCell, rc::Rc};
//! use stretchy_core::header::{HeaderBounds, ScrollSource, StretchyHeader};
//!
//! let source = Rc::new(RefCell::new(ScrollSource::new()));
//! let bounds = HeaderBounds::new(40.0, 120.0)?;
//! let header = StretchyHeader::attach(&source, bounds);
//!
//! source.borrow_mut().set_content_offset(10.0);
//! let layout = header.layout(); // height 110, inner bottom constant 0
//! ```

// L4 Atomic Layer
pub mod bounds;
pub mod height;
pub mod overstretch;
pub mod sample;
pub mod state;

// L3 Molecular Layer
pub mod source;
pub mod tracker;

// L2 Organism Layer
pub mod attachment;

pub use attachment::StretchyHeader;
pub use bounds::{HeaderBounds, FALLBACK_MINIMUM_HEIGHT};
pub use height::resolve_height;
pub use overstretch::next_overstretch;
pub use sample::{ContentInset, ScrollDirection, ScrollSample};
pub use source::{OffsetChange, ScrollObserver, ScrollSource, SubscriptionId};
pub use state::{HeaderLayout, HeaderState};
pub use tracker::ScrollTracker;
