#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod image;
pub mod types;

// Building blocks of the per-frame pipeline. Public so tools and tests can
// exercise each stage in isolation.
pub mod scan;
pub mod segments;
pub mod tracker;
pub mod voting;

// --- High-level re-exports -------------------------------------------------

// Main entry points: tracker + results.
pub use crate::detector::{LaneParams, LaneTracker, ScanParams};
pub use crate::types::{LaneResult, TrackedLine};

// High-level diagnostics returned by the tracker.
pub use crate::diagnostics::{FrameReport, FrameTrace};

// Per-side hysteresis types useful to embedders.
pub use crate::tracker::{TrackAction, TrackingParams};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use lane_tracker::prelude::*;
///
/// # fn main() {
/// let (w, h) = (640usize, 180usize);
/// let edge = vec![0u8; w * h];
/// let view = ImageU8 { w, h, stride: w, data: &edge };
///
/// let mut tracker = LaneTracker::new(LaneParams::default());
/// let lanes = tracker.process(view, &[]);
/// println!("left={:?} latency_ms={:.3}", lanes.left, lanes.latency_ms);
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageU8;
    pub use crate::{LaneParams, LaneResult, LaneTracker, TrackedLine};
}
