use crate::LaneParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for `lane_track_demo`: an ordered list of frames, tracker
/// parameters and output locations.
#[derive(Debug, Deserialize)]
pub struct DemoConfig {
    pub frames: Vec<FrameEntry>,
    #[serde(default)]
    pub params: LaneParams,
    #[serde(default)]
    pub output: DemoOutputConfig,
}

/// One frame of input: an edge-map image plus the extractor's segment
/// endpoint quads `[x0, y0, x1, y1]` in the same ROI coordinates.
#[derive(Debug, Deserialize)]
pub struct FrameEntry {
    pub edge_image: PathBuf,
    #[serde(default)]
    pub segments: Vec<[i32; 4]>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DemoOutputConfig {
    pub report_json: Option<PathBuf>,
    /// When set, a per-frame PNG with the tracked lines painted over the
    /// edge map is written into this directory.
    pub overlay_dir: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<DemoConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: DemoConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}
