//! Per-frame workspace reusing candidate buffers.
//!
//! Candidate lists are frame-scoped but their allocations are kept across
//! frames to avoid repeated heap traffic in the per-frame hot path.
use crate::segments::Candidate;

/// Workspace holding the two candidate lists between frames.
#[derive(Default)]
pub struct TrackerWorkspace {
    pub left: Vec<Candidate>,
    pub right: Vec<Candidate>,
}

impl TrackerWorkspace {
    pub fn new() -> Self {
        Self::default()
    }
}
