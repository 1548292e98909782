// Core geometry and frame types shared by the whole pipeline.

use serde::{Deserialize, Serialize};

/// A 2-D coordinate. Whether it lives in camera space or display space is
/// decided by whoever produced it; the two never share a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned camera-space box, tracked as inclusive extremes. A growth
/// pass only ever widens it; afterwards `x0 <= x1`, `y0 <= y1`, and all four
/// edges lie inside the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: i32,
    pub x1: i32,
    pub y0: i32,
    pub y1: i32,
}

impl Rect {
    /// The degenerate box covering exactly one pixel.
    pub fn at(p: Point) -> Self {
        Self { x0: p.x, x1: p.x, y0: p.y, y1: p.y }
    }
}

/// An 8-bit color triple. The trail is painted in one fixed color no matter
/// what hue the pointer itself has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// One camera frame: 3-channel 0..255 samples, packed 0x00RRGGBB per pixel.
/// The pipeline only ever reads it; a fresh one arrives every iteration.
#[derive(Clone)]
pub struct Frame {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u32>, // each entry is 0x00RRGGBB
}

impl Frame {
    /// Red channel at (x, y). Callers keep the coordinate inside the frame.
    #[inline]
    pub fn red(&self, x: i32, y: i32) -> u8 {
        ((self.pixels[y as usize * self.width + x as usize] >> 16) & 0xFF) as u8
    }
}
