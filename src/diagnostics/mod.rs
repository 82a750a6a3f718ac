//! Structured per-frame diagnostics exposed by the tracker.
//!
//! [`FrameReport`] is the main entry point returned by
//! `LaneTracker::process_with_diagnostics`, bundling the compact result
//! (`LaneResult`) with a [`FrameTrace`] describing every stage the frame
//! went through. Everything serializes to JSON for offline inspection.

pub mod pipeline;
pub mod stages;

pub use pipeline::{FrameReport, FrameTrace, InputDescriptor, TimingBreakdown};
pub use stages::{
    ClassifyStage, ScanStage, SideScan, SideTrackReport, SideVote, TrackingStage, VotingStage,
};
