use lane_tracker::config::demo::load_config;
use lane_tracker::diagnostics::FrameReport;
use lane_tracker::image::io::{
    load_grayscale_image, save_grayscale_u8, write_json_file, GrayImageU8,
};
use lane_tracker::{LaneResult, LaneTracker};
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let mut tracker = LaneTracker::new(config.params.clone());
    let mut reports: Vec<FrameReport> = Vec::with_capacity(config.frames.len());

    for entry in &config.frames {
        let edge = load_grayscale_image(&entry.edge_image)?;
        let report = tracker.process_with_diagnostics(edge.as_view(), &entry.segments);

        let describe = |line: Option<lane_tracker::TrackedLine>| match line {
            Some(l) => format!("k={:.3} b={:.1}", l.k, l.b),
            None => "unset".to_string(),
        };
        println!(
            "frame {:>4}: left {} | right {} | {:.3} ms",
            report.trace.input.frame_index,
            describe(report.lanes.left),
            describe(report.lanes.right),
            report.lanes.latency_ms
        );
        if let Some(dir) = &config.output.overlay_dir {
            save_overlay(dir, report.trace.input.frame_index, &edge, &report.lanes)?;
        }
        reports.push(report);
    }

    if let Some(path) = &config.output.report_json {
        write_json_file(&reports, path)?;
        println!("Wrote report to {}", path.display());
    }

    Ok(())
}

fn save_overlay(
    dir: &Path,
    frame_index: u64,
    edge: &GrayImageU8,
    lanes: &LaneResult,
) -> Result<(), String> {
    std::fs::create_dir_all(dir)
        .map_err(|e| format!("Failed to create overlay dir {}: {e}", dir.display()))?;

    let view = edge.as_view();
    let mut pixels = Vec::with_capacity(view.w * view.h);
    for y in 0..view.h {
        pixels.extend_from_slice(view.row(y));
    }
    for line in [lanes.left, lanes.right].into_iter().flatten() {
        for y in 0..view.h {
            let x = line.x_at(y as f32).round();
            if x >= 0.0 && (x as usize) < view.w {
                pixels[y * view.w + x as usize] = 128;
            }
        }
    }
    let overlay = GrayImageU8::new(view.w, view.h, pixels);
    save_grayscale_u8(&overlay, &dir.join(format!("frame_{frame_index:04}.png")))
}

fn usage() -> String {
    "Usage: lane_track_demo <config.json>".to_string()
}
