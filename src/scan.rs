//! Scan-line response search over the binary edge map.
//!
//! A "response" is an isolated bright band on one row: a contiguous run of
//! pixels strictly above the brightness threshold, bounded by at-or-below
//! threshold pixels on both sides within the scan range. This matches a lane
//! marking crossing the row while ignoring sustained bright regions such as
//! pavement glare (the run never terminates inside the range) and runs that
//! fall off the end of the range.
//!
//! Responses are produced lazily, ordered from the scan's starting point
//! outward, so callers that only need the nearest response to the midline
//! pay for a single iterator step.
use crate::image::ImageU8;

/// Lazy iterator over response x-positions on one edge-map row.
pub struct RowScan<'a> {
    row: &'a [u8],
    x: isize,
    end: isize,
    step: isize,
    thresh: u8,
}

/// Scan row `y` from `start_x` toward `end_x` (exclusive) for responses.
///
/// The walk direction follows the ordering of `start_x` and `end_x`.
/// Scanning is a pure function of the row contents: re-scanning with the
/// same inputs yields the same responses.
pub fn scan_row<'a>(
    edge: &ImageU8<'a>,
    y: usize,
    start_x: usize,
    end_x: usize,
    bw_thresh: u8,
) -> RowScan<'a> {
    debug_assert!(y < edge.h, "row {} out of bounds (h={})", y, edge.h);
    // The start pixel is dereferenced before the end bound is checked, so a
    // non-empty range must start strictly inside the row.
    debug_assert!(
        start_x < edge.w || start_x == end_x,
        "scan start {} out of bounds (w={})",
        start_x,
        edge.w
    );
    debug_assert!(
        end_x <= edge.w,
        "scan end {} exceeds width {}",
        end_x,
        edge.w
    );
    let row = edge.row(y);
    let step = if end_x >= start_x { 1 } else { -1 };
    RowScan {
        row,
        x: start_x as isize,
        end: end_x as isize,
        step,
        thresh: bw_thresh,
    }
}

impl<'a> Iterator for RowScan<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        // Skip pixels at or below the threshold.
        while self.x != self.end && self.row[self.x as usize] <= self.thresh {
            self.x += self.step;
        }
        if self.x == self.end {
            return None;
        }
        let run_start = self.x;
        // Consume the contiguous bright run.
        while self.x != self.end && self.row[self.x as usize] > self.thresh {
            self.x += self.step;
        }
        if self.x == self.end {
            // Unterminated run at the range boundary: not a response.
            return None;
        }
        Some(run_start as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge_from_row(row: &[u8]) -> ImageU8<'_> {
        ImageU8 {
            w: row.len(),
            h: 1,
            stride: row.len(),
            data: row,
        }
    }

    #[test]
    fn isolated_band_yields_run_start() {
        let row = [0, 0, 0, 255, 255, 0, 0, 0];
        let edge = edge_from_row(&row);
        let hits: Vec<usize> = scan_row(&edge, 0, 0, row.len(), 250).collect();
        assert_eq!(hits, vec![3]);
    }

    #[test]
    fn run_reaching_range_end_is_discarded() {
        let row = [0, 0, 0, 255, 255, 255];
        let edge = edge_from_row(&row);
        let hits: Vec<usize> = scan_row(&edge, 0, 0, row.len(), 250).collect();
        assert!(hits.is_empty());
    }

    #[test]
    fn sustained_bright_region_is_not_a_response() {
        // Glare filling the whole range never produces a dark terminator.
        let row = [255u8; 12];
        let edge = edge_from_row(&row);
        assert_eq!(scan_row(&edge, 0, 0, row.len(), 250).next(), None);
    }

    #[test]
    fn multiple_bands_in_scan_order() {
        let row = [0, 255, 0, 0, 255, 255, 0, 255, 0];
        let edge = edge_from_row(&row);
        let hits: Vec<usize> = scan_row(&edge, 0, 0, row.len(), 250).collect();
        assert_eq!(hits, vec![1, 4, 7]);
    }

    #[test]
    fn leftward_scan_reports_run_start_nearest_origin() {
        let row = [0, 0, 255, 255, 0, 0, 0, 0];
        let edge = edge_from_row(&row);
        // Walking from x=7 down toward x=0 (exclusive): the run is entered
        // at x=3 and terminates at x=1, so the recorded start is 3.
        let hits: Vec<usize> = scan_row(&edge, 0, 7, 0, 250).collect();
        assert_eq!(hits, vec![3]);
    }

    #[test]
    fn leftward_run_touching_exclusive_end_is_discarded() {
        let row = [255, 255, 0, 0, 0, 0];
        let edge = edge_from_row(&row);
        // The run covers x=1..=0 but x=0 is the exclusive bound, so the walk
        // exits the range while still inside the run.
        let hits: Vec<usize> = scan_row(&edge, 0, 5, 0, 250).collect();
        assert!(hits.is_empty());
    }

    #[test]
    fn rescan_is_idempotent() {
        let row = [0, 255, 0, 255, 255, 0, 0];
        let edge = edge_from_row(&row);
        let a: Vec<usize> = scan_row(&edge, 0, 0, row.len(), 250).collect();
        let b: Vec<usize> = scan_row(&edge, 0, 0, row.len(), 250).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn threshold_is_strict() {
        // Pixels exactly at the threshold count as dark.
        let row = [0, 250, 0, 251, 0];
        let edge = edge_from_row(&row);
        let hits: Vec<usize> = scan_row(&edge, 0, 0, row.len(), 250).collect();
        assert_eq!(hits, vec![3]);
    }

    #[test]
    fn empty_range_yields_nothing() {
        let row = [255u8; 4];
        let edge = edge_from_row(&row);
        assert_eq!(scan_row(&edge, 0, 2, 2, 250).next(), None);
        // The degenerate empty range may sit on the one-past-the-end column.
        assert_eq!(scan_row(&edge, 0, 4, 4, 250).next(), None);
    }

    #[test]
    #[should_panic(expected = "scan start")]
    fn leftward_scan_from_one_past_the_end_is_rejected() {
        let row = [0u8, 0, 255, 0];
        let edge = edge_from_row(&row);
        scan_row(&edge, 0, 4, 0, 250).next();
    }

    #[test]
    fn respects_stride() {
        let data = [0u8, 0, 0, 0, /* row 1 */ 0, 255, 0, 0];
        let edge = ImageU8 {
            w: 3,
            h: 2,
            stride: 4,
            data: &data,
        };
        let hits: Vec<usize> = scan_row(&edge, 1, 0, 3, 250).collect();
        assert_eq!(hits, vec![1]);
    }
}
