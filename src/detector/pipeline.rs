//! Frame orchestrator driving lane tracking end-to-end.
//!
//! The [`LaneTracker`] exposes a simple API: feed an edge map and the raw
//! line segments for one frame and get back the smoothed left/right lane
//! boundaries. Internally it coordinates segment classification, the
//! midline-outward row scan, response voting, and the per-side hysteresis
//! trackers, in that order, exactly once per frame.
//!
//! Typical usage:
//! ```no_run
//! use lane_tracker::image::ImageU8;
//! use lane_tracker::{LaneParams, LaneTracker};
//!
//! # fn example(edge: ImageU8, segments: &[[i32; 4]]) {
//! let mut tracker = LaneTracker::new(LaneParams::default());
//! let report = tracker.process_with_diagnostics(edge, segments);
//! if let Some(left) = report.lanes.left {
//!     println!("left lane: k={:.3} b={:.1}", left.k, left.b);
//! }
//! # }
//! ```
use super::params::{LaneParams, ScanParams};
use super::workspace::TrackerWorkspace;
use crate::diagnostics::{
    ClassifyStage, FrameReport, FrameTrace, InputDescriptor, ScanStage, SideScan, SideTrackReport,
    SideVote, TimingBreakdown, TrackingStage, VotingStage,
};
use crate::image::ImageU8;
use crate::scan::scan_row;
use crate::segments::{classify_segments, Candidate};
use crate::tracker::SideTracker;
use crate::types::{LaneResult, TrackedLine};
use crate::voting::{cast_vote, winner};
use log::debug;
use nalgebra::Point2;
use std::time::Instant;

/// Lane tracker orchestrating classification, scanning, voting and the two
/// side state machines across a frame stream.
pub struct LaneTracker {
    params: LaneParams,
    left: SideTracker,
    right: SideTracker,
    workspace: TrackerWorkspace,
    frame_index: u64,
}

impl LaneTracker {
    /// Create a tracker with the supplied parameters. Both sides start in
    /// the re-armed state, so the first winner per side is accepted
    /// unconditionally.
    pub fn new(params: LaneParams) -> Self {
        let left = SideTracker::new(params.tracking);
        let right = SideTracker::new(params.tracking);
        Self {
            params,
            left,
            right,
            workspace: TrackerWorkspace::new(),
            frame_index: 0,
        }
    }

    pub fn params(&self) -> &LaneParams {
        &self.params
    }

    /// Current smoothed left boundary, if established.
    pub fn left_line(&self) -> Option<TrackedLine> {
        self.left.line()
    }

    /// Current smoothed right boundary, if established.
    pub fn right_line(&self) -> Option<TrackedLine> {
        self.right.line()
    }

    /// Process one frame, returning the compact result.
    pub fn process(&mut self, edge: ImageU8<'_>, segments: &[[i32; 4]]) -> LaneResult {
        self.process_with_diagnostics(edge, segments).lanes
    }

    /// Process one frame and return both the result and a detailed trace.
    pub fn process_with_diagnostics(
        &mut self,
        edge: ImageU8<'_>,
        segments: &[[i32; 4]],
    ) -> FrameReport {
        let total_start = Instant::now();
        let (width, height) = (edge.w, edge.h);
        debug!(
            "LaneTracker::process start frame={} w={} h={} segments={}",
            self.frame_index,
            width,
            height,
            segments.len()
        );

        let classify_start = Instant::now();
        let counts = classify_segments(
            segments,
            width,
            self.params.line_reject_degrees,
            &mut self.workspace.left,
            &mut self.workspace.right,
        );
        let classify_ms = classify_start.elapsed().as_secs_f64() * 1000.0;

        let scan_start = Instant::now();
        let frame_center = Point2::new(width as f32 / 2.0, height as f32 / 2.0);
        let mid = width / 2;
        // Scans run from the vertical midline outward; a border margin on
        // each side is never entered.
        let left_end = self.params.scan.border_x.min(mid);
        let right_end = width.saturating_sub(self.params.scan.border_x).max(mid);
        let left_scan = scan_and_vote(
            &edge,
            &mut self.workspace.left,
            mid,
            left_end,
            &self.params.scan,
            frame_center,
        );
        let right_scan = scan_and_vote(
            &edge,
            &mut self.workspace.right,
            mid,
            right_end,
            &self.params.scan,
            frame_center,
        );
        let scan_vote_ms = scan_start.elapsed().as_secs_f64() * 1000.0;

        let tracking_start = Instant::now();
        let left_vote = side_vote(&self.workspace.left, frame_center);
        let right_vote = side_vote(&self.workspace.right, frame_center);

        let left_winner = left_vote
            .as_ref()
            .map(|v| &self.workspace.left[v.winner_index].segment);
        let left_action = self.left.update(left_winner);
        let right_winner = right_vote
            .as_ref()
            .map(|v| &self.workspace.right[v.winner_index].segment);
        let right_action = self.right.update(right_winner);
        let tracking_ms = tracking_start.elapsed().as_secs_f64() * 1000.0;

        debug!(
            "frame {}: left {:?} lost={} reset={}; right {:?} lost={} reset={}",
            self.frame_index,
            left_action,
            self.left.lost_frames(),
            self.left.is_reset(),
            right_action,
            self.right.lost_frames(),
            self.right.is_reset()
        );

        let total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        let lanes = LaneResult {
            left: self.left.line(),
            right: self.right.line(),
            latency_ms: total_ms,
        };

        let step = self.params.scan.scan_step.max(1);
        let trace = FrameTrace {
            input: InputDescriptor {
                frame_index: self.frame_index,
                width,
                height,
                segments_in: segments.len(),
            },
            timings: TimingBreakdown {
                total_ms,
                classify_ms,
                scan_vote_ms,
                tracking_ms,
            },
            classify: ClassifyStage {
                elapsed_ms: classify_ms,
                counts,
                left_candidates: self
                    .workspace
                    .left
                    .iter()
                    .map(|c| c.segment.clone())
                    .collect(),
                right_candidates: self
                    .workspace
                    .right
                    .iter()
                    .map(|c| c.segment.clone())
                    .collect(),
            },
            scan: ScanStage {
                elapsed_ms: scan_vote_ms,
                rows_scanned: (height + step - 1) / step,
                left: left_scan,
                right: right_scan,
            },
            voting: VotingStage {
                left: left_vote,
                right: right_vote,
            },
            tracking: TrackingStage {
                left: SideTrackReport {
                    action: left_action,
                    lost: self.left.lost_frames(),
                    reset: self.left.is_reset(),
                    line: self.left.line(),
                },
                right: SideTrackReport {
                    action: right_action,
                    lost: self.right.lost_frames(),
                    reset: self.right.is_reset(),
                    line: self.right.line(),
                },
            },
        };

        self.frame_index += 1;
        FrameReport { lanes, trace }
    }
}

/// Scan rows bottom-to-top and vote the nearest response per row onto the
/// side's candidates.
fn scan_and_vote(
    edge: &ImageU8<'_>,
    candidates: &mut [Candidate],
    start_x: usize,
    end_x: usize,
    scan: &ScanParams,
    frame_center: Point2<f32>,
) -> SideScan {
    let mut stats = SideScan::default();
    let step = scan.scan_step.max(1);
    for y in (0..edge.h).rev().step_by(step) {
        // Only the first response (closest to the midline) counts as
        // evidence for this row.
        let Some(x) = scan_row(edge, y, start_x, end_x, scan.bw_thresh).next() else {
            continue;
        };
        stats.responses += 1;
        let response = Point2::new(x as f32, y as f32);
        match cast_vote(candidates, response, frame_center, scan.max_response_dist) {
            Some(_) => stats.votes_cast += 1,
            None => stats.stray_responses += 1,
        }
    }
    stats
}

fn side_vote(candidates: &[Candidate], frame_center: Point2<f32>) -> Option<SideVote> {
    let idx = winner(candidates, frame_center)?;
    let best = &candidates[idx];
    Some(SideVote {
        winner_index: idx,
        winner_votes: best.votes,
        winner_k: best.segment.k,
        winner_b: best.segment.b,
        tallies: candidates.iter().map(|c| c.votes).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::TrackAction;

    fn empty_edge(w: usize, h: usize) -> Vec<u8> {
        vec![0u8; w * h]
    }

    #[test]
    fn empty_frame_leaves_both_sides_unset() {
        let (w, h) = (64usize, 32usize);
        let data = empty_edge(w, h);
        let edge = ImageU8 {
            w,
            h,
            stride: w,
            data: &data,
        };
        let mut tracker = LaneTracker::new(LaneParams::default());
        let report = tracker.process_with_diagnostics(edge, &[]);
        assert!(report.lanes.left.is_none());
        assert!(report.lanes.right.is_none());
        assert_eq!(report.trace.tracking.left.action, TrackAction::NoCandidates);
        assert_eq!(report.trace.input.segments_in, 0);
    }

    #[test]
    fn frame_index_advances_per_call() {
        let (w, h) = (16usize, 8usize);
        let data = empty_edge(w, h);
        let edge = ImageU8 {
            w,
            h,
            stride: w,
            data: &data,
        };
        let mut tracker = LaneTracker::new(LaneParams::default());
        let first = tracker.process_with_diagnostics(edge.clone(), &[]);
        let second = tracker.process_with_diagnostics(edge, &[]);
        assert_eq!(first.trace.input.frame_index, 0);
        assert_eq!(second.trace.input.frame_index, 1);
    }

    #[test]
    fn winner_without_responses_is_still_tracked() {
        // A candidate exists but the edge map is dark: zero votes, yet the
        // side has a winner and the first one is accepted unconditionally.
        let (w, h) = (64usize, 32usize);
        let data = empty_edge(w, h);
        let edge = ImageU8 {
            w,
            h,
            stride: w,
            data: &data,
        };
        let mut tracker = LaneTracker::new(LaneParams::default());
        let report = tracker.process_with_diagnostics(edge, &[[4, 31, 20, 0]]);
        assert_eq!(report.trace.tracking.left.action, TrackAction::Accepted);
        assert!(report.lanes.left.is_some());
        assert_eq!(report.trace.voting.left.as_ref().unwrap().winner_votes, 0);
    }
}
