//! Lane tracker orchestrating the per-frame pipeline.
//!
//! Overview
//! - Classifies the frame's raw line segments into left/right candidate
//!   sets by angle and midpoint (`crate::segments`).
//! - Scans edge-map rows from the vertical midline outward for isolated
//!   bright bands, bottom of the frame first (`crate::scan`).
//! - Votes each row's nearest response onto the best-matching candidate and
//!   picks a winner per side (`crate::voting`).
//! - Feeds the winners into the two side state machines, which smooth the
//!   line parameters behind a lost/reset hysteresis (`crate::tracker`).
//!
//! Modules
//! - [`params`] – configuration types used by the tracker and the demos.
//! - `pipeline` – the main [`LaneTracker`] implementation.
//! - `workspace` – reusable buffers that amortise allocations across frames.

pub mod params;
mod pipeline;
mod workspace;

pub use params::{LaneParams, ScanParams};
pub use pipeline::LaneTracker;
pub use workspace::TrackerWorkspace;
