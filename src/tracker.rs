//! Per-side smoothing and lost/reset hysteresis.
//!
//! Each lane boundary owns a [`SideTracker`] that turns the per-frame
//! winning candidate into a stable `(k, b)` estimate. Two failure modes are
//! kept deliberately distinct:
//!
//! - **Deviation loss**: a winner exists but disagrees with the smoothed
//!   estimate beyond tolerance. The true lane is assumed still visible and
//!   momentarily inconsistent (partial occlusion, detector flicker), so the
//!   smoothed history is preserved while `lost` counts up. Once the limit is
//!   reached the tracker re-arms (`reset = true`) and the next winner is
//!   accepted unconditionally.
//! - **Absence loss**: the side produced no candidates at all. After the
//!   limit the marking is assumed genuinely gone and the smoothed values are
//!   cleared together with the re-arm, so stale history cannot bias
//!   re-acquisition.
use crate::segments::LineSegment;
use crate::types::TrackedLine;
use serde::{Deserialize, Serialize};

/// Exponential moving average with an explicit unset state.
///
/// The first accepted sample becomes the value directly; later samples blend
/// via `new = old + alpha * (sample - old)`.
#[derive(Clone, Copy, Debug)]
pub struct ExpMovingAverage {
    alpha: f32,
    value: Option<f32>,
}

impl ExpMovingAverage {
    pub fn new(alpha: f32) -> Self {
        Self { alpha, value: None }
    }

    /// Forget the current value; the next sample is taken as-is.
    pub fn clear(&mut self) {
        self.value = None;
    }

    pub fn add(&mut self, sample: f32) {
        self.value = Some(match self.value {
            None => sample,
            Some(old) => old + self.alpha * (sample - old),
        });
    }

    pub fn get(&self) -> Option<f32> {
        self.value
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }
}

/// Outcome of one per-frame tracker update, reported in diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TrackAction {
    /// Winner folded into the smoothed estimate.
    Accepted,
    /// Winner deviated beyond tolerance and was ignored as an outlier.
    RejectedDeviation,
    /// The side had no candidates this frame.
    NoCandidates,
}

/// Acceptance tolerances and hysteresis limits for one side.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrackingParams {
    /// Maximum |Δk| between winner and smoothed slope.
    pub k_tolerance: f32,
    /// Maximum |Δb| between winner and smoothed intercept (pixels).
    pub b_tolerance: f32,
    /// Rejected/absent frames tolerated before the tracker re-arms.
    pub max_lost_frames: u32,
    /// EMA smoothing factor in (0, 1].
    pub smoothing_alpha: f32,
}

impl Default for TrackingParams {
    fn default() -> Self {
        Self {
            k_tolerance: 0.2,
            b_tolerance: 20.0,
            max_lost_frames: 30,
            smoothing_alpha: 0.2,
        }
    }
}

/// State machine tracking one lane boundary across frames.
///
/// Starts re-armed (`reset = true`), so the first winner ever observed is
/// accepted unconditionally. Must be updated exactly once per frame, in
/// frame order.
#[derive(Clone, Debug)]
pub struct SideTracker {
    k: ExpMovingAverage,
    b: ExpMovingAverage,
    reset: bool,
    lost: u32,
    params: TrackingParams,
}

impl SideTracker {
    pub fn new(params: TrackingParams) -> Self {
        Self {
            k: ExpMovingAverage::new(params.smoothing_alpha),
            b: ExpMovingAverage::new(params.smoothing_alpha),
            reset: true,
            lost: 0,
            params,
        }
    }

    /// Feed the frame's winning candidate (or `None`) and advance the state
    /// machine.
    pub fn update(&mut self, winner: Option<&LineSegment>) -> TrackAction {
        match winner {
            Some(seg) => {
                if self.reset || self.within_tolerance(seg) {
                    self.k.add(seg.k);
                    self.b.add(seg.b);
                    self.reset = false;
                    self.lost = 0;
                    TrackAction::Accepted
                } else {
                    self.lost = self.lost.saturating_add(1);
                    if self.lost >= self.params.max_lost_frames {
                        // Deviation loss: re-arm but keep the history.
                        self.reset = true;
                    }
                    TrackAction::RejectedDeviation
                }
            }
            None => {
                self.lost = self.lost.saturating_add(1);
                if self.lost >= self.params.max_lost_frames && !self.reset {
                    // Absence loss: re-arm and wipe the history.
                    self.reset = true;
                    self.k.clear();
                    self.b.clear();
                }
                TrackAction::NoCandidates
            }
        }
    }

    fn within_tolerance(&self, seg: &LineSegment) -> bool {
        match (self.k.get(), self.b.get()) {
            (Some(k), Some(b)) => {
                (seg.k - k).abs() <= self.params.k_tolerance
                    && (seg.b - b).abs() <= self.params.b_tolerance
            }
            // No history to deviate from: treat as acceptable.
            _ => true,
        }
    }

    /// Current smoothed line, if any sample has ever been accepted.
    pub fn line(&self) -> Option<TrackedLine> {
        match (self.k.get(), self.b.get()) {
            (Some(k), Some(b)) => Some(TrackedLine { k, b }),
            _ => None,
        }
    }

    pub fn is_reset(&self) -> bool {
        self.reset
    }

    pub fn lost_frames(&self) -> u32 {
        self.lost
    }
}
