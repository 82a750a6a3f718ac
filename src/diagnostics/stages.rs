use crate::segments::{ClassifyCounts, LineSegment};
use crate::tracker::TrackAction;
use crate::types::TrackedLine;
use serde::Serialize;

/// Segment classification outcome for one frame.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyStage {
    pub elapsed_ms: f64,
    #[serde(flatten)]
    pub counts: ClassifyCounts,
    pub left_candidates: Vec<LineSegment>,
    pub right_candidates: Vec<LineSegment>,
}

/// Row-scan and voting summary for both sides.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanStage {
    pub elapsed_ms: f64,
    pub rows_scanned: usize,
    pub left: SideScan,
    pub right: SideScan,
}

/// Per-side response statistics.
#[derive(Clone, Copy, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SideScan {
    /// Rows that produced a response nearest the midline.
    pub responses: usize,
    /// Responses that were matched to a candidate.
    pub votes_cast: usize,
    /// Responses farther than the matching distance from every candidate.
    pub stray_responses: usize,
}

/// Winner selection for both sides.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VotingStage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<SideVote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<SideVote>,
}

/// Winning candidate of one side.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SideVote {
    pub winner_index: usize,
    pub winner_votes: u32,
    pub winner_k: f32,
    pub winner_b: f32,
    /// Final vote tally per candidate, in classification order.
    pub tallies: Vec<u32>,
}

/// State-machine outcome for both sides.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingStage {
    pub left: SideTrackReport,
    pub right: SideTrackReport,
}

/// One side's tracker state after the frame's update.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SideTrackReport {
    pub action: TrackAction,
    pub lost: u32,
    pub reset: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<TrackedLine>,
}
