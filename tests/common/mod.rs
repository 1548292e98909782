// Shared fixtures: an in-memory pixel sink and synthetic camera frames.

use laser_cast::error::Error;
use laser_cast::fb::PixelSink;
use laser_cast::types::{Frame, Point, Rgb};

/// Records every pixel write instead of touching real hardware.
pub struct TestSink {
    width: u32,
    height: u32,
    pub painted: Vec<(Point, Rgb)>,
    pub passes_ended: usize,
    pub refreshes: usize,
}

impl TestSink {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            painted: Vec::new(),
            passes_ended: 0,
            refreshes: 0,
        }
    }

    /// Forget recorded writes, keeping the counters.
    pub fn forget_painted(&mut self) {
        self.painted.clear();
    }
}

impl PixelSink for TestSink {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn write_pixel(&mut self, p: Point, color: Rgb) -> Result<(), Error> {
        self.painted.push((p, color));
        Ok(())
    }

    fn end_pass(&mut self) {
        self.passes_ended += 1;
    }

    fn refresh(&mut self) -> Result<(), Error> {
        self.refreshes += 1;
        Ok(())
    }
}

/// A camera-resolution frame with nothing bright in it.
pub fn dark_frame(width: usize, height: usize) -> Frame {
    Frame {
        width,
        height,
        pixels: vec![0; width * height],
    }
}

/// Set one pixel to full red, the way a laser dot center samples.
pub fn light(frame: &mut Frame, x: usize, y: usize) {
    frame.pixels[y * frame.width + x] = 0x00FF_0000;
}
