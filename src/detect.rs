// Blob location: find the first pixel bright enough to be the pointer and
// decide whether it is a command or a drawing seed.

use crate::config::TrackerConfig;
use crate::types::{Frame, Point};

/// Outcome of scanning one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection {
    /// Pointer held in the top-left command square: wipe the drawing.
    Clear,
    /// Pointer held in the top-right command band: shut down.
    Close,
    /// Pointer seed at this camera-space coordinate.
    Found(Point),
    /// No pixel above threshold anywhere in the frame.
    None,
}

/// Walk the frame top-to-bottom, left-to-right and classify the first pixel
/// whose red channel exceeds the threshold. The scan stops right there:
/// exactly one seed is ever considered per frame, command zones first.
pub fn scan(frame: &Frame, cfg: &TrackerConfig) -> Detection {
    let cols = frame.width as i32;
    for y in 0..frame.height as i32 {
        for x in 0..cols {
            if frame.red(x, y) <= cfg.red_threshold {
                continue;
            }
            if y <= cfg.clear_zone && x <= cfg.clear_zone {
                return Detection::Clear;
            }
            if y <= cfg.close_zone && x > cols - cfg.close_zone {
                return Detection::Close;
            }
            return Detection::Found(Point::new(x, y));
        }
    }
    Detection::None
}
