//! Scroll traces: recorded or scripted offset sequences replayed through a
//! stretchy header.
//!
//! A trace file is TOML, or JSON when its extension is `.json`:
//!
//! ```toml
//! content_inset_top = 0.0
//! waypoints = [0.0, -40.0, 0.0, 150.0]
//! step = 5.0
//!
//! [bounds]
//! min = 40.0
//! max = 120.0
//! ```
//!
//! `offsets` lists every sample explicitly; `waypoints` is expanded into a
//! linear drag with samples `step` apart.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::header::{ContentInset, HeaderBounds, ScrollSource, StretchyHeader};
use crate::{Error, Result};

/// Scroll trace as stored on disk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScrollTrace {
    /// Content inset of the container; falls back to the configured one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_inset_top: Option<f64>,
    /// Header bounds; fall back to the configured ones
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<HeaderBounds>,
    /// Content offset before the header is attached
    #[serde(default)]
    pub start_offset: f64,
    /// Explicit offset samples
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub offsets: Vec<f64>,
    /// Drag path corners, expanded with `step`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub waypoints: Vec<f64>,
    /// Sample spacing along `waypoints`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
}

impl ScrollTrace {
    /// Trace driven by a drag path
    pub fn from_waypoints(waypoints: Vec<f64>, step: Option<f64>) -> Self {
        Self {
            waypoints,
            step,
            ..Self::default()
        }
    }

    /// Load a trace file; `.json` is parsed as JSON, anything else as TOML
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let trace: Self = if is_json {
            serde_json::from_str(&content).map_err(|e| Error::Trace(e.to_string()))?
        } else {
            toml::from_str(&content).map_err(|e| Error::Trace(e.to_string()))?
        };

        debug!(
            path = %path.display(),
            offsets = trace.offsets.len(),
            waypoints = trace.waypoints.len(),
            "Loaded scroll trace"
        );
        Ok(trace)
    }

    /// Expand the trace into the offsets to feed the scroll source
    ///
    /// # Arguments
    /// * `default_step` - Spacing used when the trace has no `step`
    pub fn samples(&self, default_step: f64) -> Result<Vec<f64>> {
        if !self.start_offset.is_finite() {
            return Err(Error::Trace(format!(
                "start_offset {} is not finite",
                self.start_offset
            )));
        }
        match (self.offsets.is_empty(), self.waypoints.is_empty()) {
            (false, true) => {
                if let Some(bad) = self.offsets.iter().find(|o| !o.is_finite()) {
                    return Err(Error::Trace(format!("offset {} is not finite", bad)));
                }
                Ok(self.offsets.clone())
            }
            (true, false) => drag_path(&self.waypoints, self.step.unwrap_or(default_step)),
            (false, false) => Err(Error::Trace(
                "trace has both `offsets` and `waypoints`, expected one".to_string(),
            )),
            (true, true) => Err(Error::Trace(
                "trace has neither `offsets` nor `waypoints`".to_string(),
            )),
        }
    }
}

/// Upper limit on the samples a drag path may expand into
pub const MAX_TRACE_SAMPLES: usize = 1_000_000;

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Expand drag corners into samples at most `step` apart
///
/// The first waypoint is included; every segment ends exactly on its corner.
pub fn drag_path(waypoints: &[f64], step: f64) -> Result<Vec<f64>> {
    if !(step.is_finite() && step > 0.0) {
        return Err(Error::Trace(format!("step must be positive, got {}", step)));
    }
    if let Some(bad) = waypoints.iter().find(|w| !w.is_finite()) {
        return Err(Error::Trace(format!("waypoint {} is not finite", bad)));
    }

    let Some(&first) = waypoints.first() else {
        return Ok(Vec::new());
    };

    // Counted in f64 so a tiny step cannot saturate the usize cast
    let total = waypoints
        .windows(2)
        .map(|pair| ((pair[1] - pair[0]).abs() / step).ceil())
        .sum::<f64>()
        + 1.0;
    if total > MAX_TRACE_SAMPLES as f64 {
        return Err(Error::Trace(format!(
            "drag path would produce {} samples, limit is {}",
            total, MAX_TRACE_SAMPLES
        )));
    }

    let mut samples = Vec::with_capacity(total as usize);
    samples.push(first);
    for pair in waypoints.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let count = ((to - from).abs() / step).ceil() as usize;
        for i in 1..=count {
            samples.push(lerp(from, to, i as f64 / count as f64));
        }
    }
    Ok(samples)
}

/// Header output after one scroll notification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeaderFrame {
    pub index: usize,
    pub old_offset: f64,
    pub new_offset: f64,
    pub height: f64,
    pub overstretch_offset: f64,
}

/// Aggregate view of a replay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReplaySummary {
    pub frames: usize,
    pub min_height: f64,
    pub max_height: f64,
    pub deepest_overstretch: f64,
    pub final_height: f64,
    pub final_overstretch: f64,
}

impl ReplaySummary {
    /// Summarize frames; `None` when nothing was notified
    pub fn from_frames(frames: &[HeaderFrame]) -> Option<Self> {
        let last = frames.last()?;
        let mut summary = Self {
            frames: frames.len(),
            min_height: f64::INFINITY,
            max_height: f64::NEG_INFINITY,
            deepest_overstretch: 0.0,
            final_height: last.height,
            final_overstretch: last.overstretch_offset,
        };
        for frame in frames {
            summary.min_height = summary.min_height.min(frame.height);
            summary.max_height = summary.max_height.max(frame.height);
            summary.deepest_overstretch = summary.deepest_overstretch.min(frame.overstretch_offset);
        }
        Some(summary)
    }
}

/// Feed `samples` through a scroll source with an attached header
///
/// Samples equal to the current offset produce no notification and no frame.
pub fn replay(
    bounds: HeaderBounds,
    inset: ContentInset,
    start_offset: f64,
    samples: &[f64],
) -> Vec<HeaderFrame> {
    let source = Rc::new(RefCell::new(ScrollSource::with_inset(inset)));
    source.borrow_mut().set_content_offset(start_offset);

    let header = StretchyHeader::attach(&source, bounds);
    let mut frames = Vec::with_capacity(samples.len());

    for &offset in samples {
        let old_offset = source.borrow().content_offset().offset_y;
        if source.borrow_mut().set_content_offset(offset) == 0 {
            continue;
        }
        let state = header.state();
        frames.push(HeaderFrame {
            index: frames.len(),
            old_offset,
            new_offset: offset,
            height: state.current_height,
            overstretch_offset: state.overstretch_offset,
        });
    }

    info!(samples = samples.len(), frames = frames.len(), "Replay finished");
    frames
}
