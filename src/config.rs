// Tunables for the tracking pipeline, gathered in one place instead of being
// scattered as magic numbers through the detection code.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::Rgb;

/// Detection and painting parameters. Defaults mirror the constants the
/// program was calibrated with; `--config <file.json>` overrides any subset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Red channel value a pixel must exceed to count as the pointer.
    pub red_threshold: u8,
    /// Side of the top-left camera-space square that wipes the trail.
    pub clear_zone: i32,
    /// Width of the top-right camera-space band that shuts the program down.
    pub close_zone: i32,
    /// Ray-march step during region growth, in pixels. Coarser than 1 on
    /// purpose: the dot is several pixels wide and halving the samples keeps
    /// growth cheap. Traces thinner than the stride can slip through.
    pub grow_stride: i32,
    /// Padding added around the grown rectangle, per side, when it fits.
    pub grow_padding: i32,
    /// Color painted at every trail point.
    pub trail_color: Rgb,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            red_threshold: 200,
            clear_zone: 64,
            close_zone: 32,
            grow_stride: 2,
            grow_padding: 3,
            trail_color: Rgb { r: 0, g: 255, b: 255 }, // cyan
        }
    }
}

impl TrackerConfig {
    /// Read a JSON override file. Missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("read {}: {e}", path.display())))?;
        serde_json::from_str(&text)
            .map_err(|e| Error::Config(format!("parse {}: {e}", path.display())))
    }
}
