// Region growth: turn one seed pixel into the bounding rectangle of its
// contiguous bright region by marching rays outward in eight directions.

use crate::config::TrackerConfig;
use crate::types::{Frame, Point, Rect};

/// The eight ray directions, in whole stride steps: horizontal, vertical and
/// the four diagonals (both axes advance together on a diagonal).
const DIRECTIONS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

/// Grow `seed` into the bounding rectangle of its bright region, then pad
/// each side by the configured margin where the frame has room for it.
pub fn grow(frame: &Frame, seed: Point, cfg: &TrackerConfig) -> Rect {
    let mut rect = Rect::at(seed);
    let stride = cfg.grow_stride.max(1); // a ray must advance to terminate

    for (dx, dy) in DIRECTIONS {
        march(
            frame,
            seed,
            dx * stride,
            dy * stride,
            cfg.red_threshold,
            &mut rect,
        );
    }

    pad(&mut rect, cfg.grow_padding.max(0), frame.width as i32, frame.height as i32);
    rect
}

/// March from the seed along (dx, dy) while the sampled red channel stays
/// above threshold, then widen `rect` to the furthest extremes reached.
/// The axes are bounds-checked one after the other, and the ray ends as soon
/// as either next step would leave the frame.
fn march(frame: &Frame, seed: Point, dx: i32, dy: i32, threshold: u8, rect: &mut Rect) {
    let cols = frame.width as i32;
    let rows = frame.height as i32;

    let (mut x, mut y) = (seed.x, seed.y);
    let (mut min_x, mut max_x) = (seed.x, seed.x);
    let (mut min_y, mut max_y) = (seed.y, seed.y);

    while frame.red(x, y) > threshold {
        if max_x < x {
            max_x = x;
        }
        if min_x > x {
            min_x = x;
        }
        if max_y < y {
            max_y = y;
        }
        if min_y > y {
            min_y = y;
        }

        if x + dx >= 0 && x + dx < cols {
            x += dx;
        } else {
            break;
        }
        if y + dy >= 0 && y + dy < rows {
            y += dy;
        } else {
            break;
        }
    }

    // Merge is expand-only: a later ray never shrinks what an earlier one won.
    if rect.x0 > min_x {
        rect.x0 = min_x;
    }
    if rect.x1 < max_x {
        rect.x1 = max_x;
    }
    if rect.y0 > min_y {
        rect.y0 = min_y;
    }
    if rect.y1 < max_y {
        rect.y1 = max_y;
    }
}

/// Pad each side by `margin`, but only where the padded edge still lies
/// inside the frame. A side whose padding would overflow keeps the value the
/// growth produced; no clamping, so the box can end up asymmetric.
fn pad(rect: &mut Rect, margin: i32, cols: i32, rows: i32) {
    if rect.x0 - margin >= 0 {
        rect.x0 -= margin;
    }
    if rect.y0 - margin >= 0 {
        rect.y0 -= margin;
    }
    if rect.x1 + margin < cols {
        rect.x1 += margin;
    }
    if rect.y1 + margin < rows {
        rect.y1 += margin;
    }
}
