use lane_tracker::image::ImageU8;
use lane_tracker::{LaneParams, LaneTracker};

fn main() {
    // Demo stub: paints two lane markings into a synthetic edge map and runs
    // the tracker on matching segments.
    let w = 640usize;
    let h = 180usize;
    let stride = w; // tightly packed
    let mut edge = vec![0u8; w * h];
    for y in 0..h {
        // Left marking along x = 220 - y, right marking along x = 420 + y.
        for x in [220 - y, 420 + y] {
            edge[y * stride + x] = 255;
        }
    }
    let view = ImageU8 {
        w,
        h,
        stride,
        data: &edge,
    };

    let segments: Vec<[i32; 4]> = vec![[41, 179, 220, 0], [599, 179, 420, 0]];

    let mut tracker = LaneTracker::new(LaneParams {
        roi_offset: [0, 180], // ROI sits in the lower half of a 640x360 frame
        ..Default::default()
    });
    let lanes = tracker.process(view, &segments);
    println!(
        "left={:?} right={:?} latency_ms={:.3}",
        lanes.left, lanes.right, lanes.latency_ms
    );

    // Project the tracked lines into full-frame guide segments.
    let roi = tracker.params().roi_offset;
    for (name, line) in [("left", lanes.left), ("right", lanes.right)] {
        if let Some(line) = line {
            let [p0, p1] = line.span((h - 1) as f32, h as f32 * 0.55, roi);
            println!(
                "{name} guide: ({:.0},{:.0})-({:.0},{:.0})",
                p0.x, p0.y, p1.x, p1.y
            );
        }
    }
}
