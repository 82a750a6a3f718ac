use nalgebra::Point2;
use serde::Serialize;

/// Smoothed lane-boundary model `y = k·x + b` in ROI pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TrackedLine {
    pub k: f32,
    pub b: f32,
}

impl TrackedLine {
    /// x-coordinate of the line at row `y`.
    ///
    /// The slope is clamped away from zero; near-horizontal segments never
    /// survive classification, so the clamp only guards pathological inputs.
    pub fn x_at(&self, y: f32) -> f32 {
        let k = if self.k.abs() < 1e-6 {
            1e-6f32.copysign(self.k)
        } else {
            self.k
        };
        (y - self.b) / k
    }

    /// y-coordinate of the line at column `x`.
    pub fn y_at(&self, x: f32) -> f32 {
        self.k * x + self.b
    }

    /// Drawable endpoints between rows `y0` and `y1` (ROI coordinates),
    /// shifted by the ROI offset into full-frame coordinates.
    pub fn span(&self, y0: f32, y1: f32, roi_offset: [i32; 2]) -> [Point2<f32>; 2] {
        let ox = roi_offset[0] as f32;
        let oy = roi_offset[1] as f32;
        [
            Point2::new(self.x_at(y0) + ox, y0 + oy),
            Point2::new(self.x_at(y1) + ox, y1 + oy),
        ]
    }
}

/// Per-frame tracker output.
///
/// A side is `None` until its tracker has accepted at least one candidate,
/// and becomes `None` again after a full loss of track (no candidates for
/// `max_lost_frames` consecutive frames).
#[derive(Clone, Copy, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneResult {
    pub left: Option<TrackedLine>,
    pub right: Option<TrackedLine>,
    pub latency_ms: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x_at_inverts_y_at() {
        let line = TrackedLine { k: -0.8, b: 400.0 };
        let x = 120.0f32;
        let y = line.y_at(x);
        assert!((line.x_at(y) - x).abs() < 1e-3);
    }

    #[test]
    fn span_applies_roi_offset() {
        let line = TrackedLine { k: 1.0, b: 0.0 };
        let [p0, p1] = line.span(100.0, 40.0, [20, 180]);
        assert!((p0.x - 120.0).abs() < 1e-4);
        assert!((p0.y - 280.0).abs() < 1e-4);
        assert!((p1.x - 60.0).abs() < 1e-4);
        assert!((p1.y - 220.0).abs() < 1e-4);
    }
}
