//! Segment classification into left/right lane-boundary candidates.
//!
//! The upstream extractor delivers raw endpoint quads `[x0, y0, x1, y1]` in
//! ROI pixel coordinates. Classification proceeds as follows:
//!
//! - Near-horizontal segments are noise, not lane markings: a segment is
//!   rejected when the magnitude of its signed angle is below the configured
//!   rejection threshold.
//! - Surviving segments get slope/intercept attributes for `y = k·x + b`.
//!   A perfectly vertical segment is normalized (`dx := 1`) rather than
//!   rejected, so the derived slope stays finite.
//! - The integer midpoint x decides the side: strictly left of the frame's
//!   horizontal center → left set, strictly right → right set, exactly on
//!   center → dropped (the vanishing point is assumed near the center, so
//!   such a segment is evidence for neither boundary).
//!
//! Candidates are frame-scoped; the per-frame vote counter starts at zero
//! and is only ever touched by the voter.
use nalgebra::{Point2, Vector2};
use serde::Serialize;

/// Line segment with derived line attributes, immutable after construction.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSegment {
    pub p0: Point2<f32>,
    pub p1: Point2<f32>,
    /// Signed angle of `p1 - p0` in degrees, range (-180, 180].
    pub angle_deg: f32,
    /// Slope of `y = k·x + b`.
    pub k: f32,
    /// Intercept of `y = k·x + b`.
    pub b: f32,
}

impl LineSegment {
    /// Build a segment from a raw endpoint quad `[x0, y0, x1, y1]`.
    pub fn from_quad(quad: [i32; 4]) -> Self {
        let [x0, y0, x1, y1] = quad;
        let dy = y1 - y0;
        let mut dx = x1 - x0;
        let angle_deg = (dy as f32).atan2(dx as f32).to_degrees();
        if dx == 0 {
            dx = 1; // vertical segment, keep the slope finite
        }
        let k = dy as f32 / dx as f32;
        let b = y0 as f32 - k * x0 as f32;
        Self {
            p0: Point2::new(x0 as f32, y0 as f32),
            p1: Point2::new(x1 as f32, y1 as f32),
            angle_deg,
            k,
            b,
        }
    }

    /// x-coordinate of the carrier line at row `y`.
    pub fn x_at(&self, y: f32) -> f32 {
        let k = if self.k.abs() < 1e-6 {
            1e-6f32.copysign(self.k)
        } else {
            self.k
        };
        (y - self.b) / k
    }

    /// Distance from `p` to the segment, clamped to the endpoints.
    pub fn distance_to(&self, p: Point2<f32>) -> f32 {
        let d: Vector2<f32> = self.p1 - self.p0;
        let len2 = d.norm_squared();
        if len2 < 1e-12 {
            return (p - self.p0).norm();
        }
        let t = ((p - self.p0).dot(&d) / len2).clamp(0.0, 1.0);
        let proj = self.p0 + d * t;
        (p - proj).norm()
    }
}

/// A classified segment considered as evidence for one lane boundary.
#[derive(Clone, Debug)]
pub struct Candidate {
    pub segment: LineSegment,
    pub votes: u32,
}

impl Candidate {
    pub fn new(segment: LineSegment) -> Self {
        Self { segment, votes: 0 }
    }
}

/// Bookkeeping from one classification pass, reported in diagnostics.
#[derive(Clone, Copy, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyCounts {
    pub rejected_near_horizontal: usize,
    pub dropped_center: usize,
}

/// Split raw segments into left/right candidate sets.
///
/// `left` and `right` are cleared first so their allocations can be reused
/// across frames. Empty input is a valid steady state; both outputs may end
/// up empty.
pub fn classify_segments(
    raw: &[[i32; 4]],
    frame_width: usize,
    reject_degrees: f32,
    left: &mut Vec<Candidate>,
    right: &mut Vec<Candidate>,
) -> ClassifyCounts {
    left.clear();
    right.clear();
    let mut counts = ClassifyCounts::default();
    let half = (frame_width / 2) as i32;

    for &quad in raw {
        let segment = LineSegment::from_quad(quad);
        if segment.angle_deg.abs() < reject_degrees {
            counts.rejected_near_horizontal += 1;
            continue;
        }
        let midx = (quad[0] + quad[2]) / 2;
        if midx < half {
            left.push(Candidate::new(segment));
        } else if midx > half {
            right.push(Candidate::new(segment));
        } else {
            counts.dropped_center += 1;
        }
    }
    counts
}
