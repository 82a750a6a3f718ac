//! Parameter types configuring the tracker stages.
//!
//! Groups knobs for segment classification, the row response scan, response
//! voting, and the per-side smoothing/hysteresis. Defaults target a
//! bottom-of-frame road ROI at ~640px width; for tuning, start with the
//! brightness threshold and the tracking tolerances.

use crate::tracker::TrackingParams;
use serde::{Deserialize, Serialize};

/// Tracker-wide parameters, passed to [`LaneTracker::new`](crate::LaneTracker::new).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LaneParams {
    /// Segments with |angle| below this many degrees are rejected as noise.
    pub line_reject_degrees: f32,
    /// Offset of the ROI inside the full frame, applied when projecting
    /// tracked lines into drawable coordinates.
    pub roi_offset: [i32; 2],
    /// Row scan and voting configuration.
    pub scan: ScanParams,
    /// Per-side smoothing and lost/reset hysteresis.
    pub tracking: TrackingParams,
}

impl Default for LaneParams {
    fn default() -> Self {
        Self {
            line_reject_degrees: 30.0,
            roi_offset: [0, 0],
            scan: ScanParams::default(),
            tracking: TrackingParams::default(),
        }
    }
}

/// Parameters for the scan-line response search and vote matching.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScanParams {
    /// Edge-map intensity strictly above this value counts as bright.
    pub bw_thresh: u8,
    /// Vertical distance between scanned rows (>= 1).
    pub scan_step: usize,
    /// Margin at the frame's outer borders where scanning stops.
    pub border_x: usize,
    /// Responses farther than this from every candidate cast no vote.
    pub max_response_dist: f32,
}

impl Default for ScanParams {
    fn default() -> Self {
        Self {
            bw_thresh: 250,
            scan_step: 5,
            border_x: 10,
            max_response_dist: 5.0,
        }
    }
}
