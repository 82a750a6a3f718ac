use crate::diagnostics::{ClassifyStage, ScanStage, TrackingStage, VotingStage};
use crate::types::LaneResult;
use serde::Serialize;

/// Result produced by [`LaneTracker::process_with_diagnostics`](crate::LaneTracker).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameReport {
    pub lanes: LaneResult,
    pub trace: FrameTrace,
}

/// End-to-end trace describing the internal execution of one frame.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub classify: ClassifyStage,
    pub scan: ScanStage,
    pub voting: VotingStage,
    pub tracking: TrackingStage,
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub frame_index: u64,
    pub width: usize,
    pub height: usize,
    pub segments_in: usize,
}

/// Wall-clock split of one frame.
#[derive(Clone, Copy, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub classify_ms: f64,
    pub scan_vote_ms: f64,
    pub tracking_ms: f64,
}
