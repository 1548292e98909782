// Rasterization: walk a grown rectangle and turn its bright pixels into
// display-space trail points.

use crate::config::TrackerConfig;
use crate::trail::Trail;
use crate::types::{Frame, Point, Rect};

/// Map a camera-space coordinate onto the display. Each axis scales
/// independently and rounds to the nearest pixel, so the mapping is exact at
/// both extremes: (0,0) stays put and (cam_w,cam_h) lands on (disp_w,disp_h).
#[inline]
pub fn map_to_display(x: i32, y: i32, cam: (usize, usize), disp: (u32, u32)) -> Point {
    let dx = (x as f64 * disp.0 as f64 / cam.0 as f64).round() as i32;
    let dy = (y as f64 * disp.1 as f64 / cam.1 as f64).round() as i32;
    Point::new(dx, dy)
}

/// Append every qualifying pixel of `rect` to the trail, row-major, mapped
/// into display space. No deduplication happens at any level: one contiguous
/// blob contributes many points, and rasterizing the same frame twice appends
/// the same points twice.
pub fn rasterize(frame: &Frame, rect: Rect, disp: (u32, u32), cfg: &TrackerConfig, trail: &mut Trail) {
    let cam = (frame.width, frame.height);
    for y in rect.y0..rect.y1 {
        for x in rect.x0..rect.x1 {
            if frame.red(x, y) > cfg.red_threshold {
                trail.push(map_to_display(x, y, cam, disp));
            }
        }
    }
}
