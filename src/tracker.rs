// The per-frame pipeline: detect, grow, rasterize, paint. One Tracker owns
// everything the loop carries between frames; nothing lives in globals.

use log::debug;

use crate::config::TrackerConfig;
use crate::detect::{self, Detection};
use crate::error::Error;
use crate::fb::PixelSink;
use crate::raster;
use crate::region;
use crate::trail::Trail;
use crate::types::Frame;

/// What the caller should do after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Shutdown,
}

/// Detection state passed into every iteration: the config and the trail
/// accumulated so far.
pub struct Tracker {
    config: TrackerConfig,
    trail: Trail,
}

impl Tracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self { config, trail: Trail::new() }
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Process one camera frame against the sink.
    ///
    /// A frame with no detection still repaints the whole trail; the drawing
    /// must not flicker out between detections. A Close command clears the
    /// trail, refreshes the display and skips the paint pass entirely; there
    /// is nothing left to paint.
    pub fn step(&mut self, frame: &Frame, sink: &mut dyn PixelSink) -> Result<Flow, Error> {
        match detect::scan(frame, &self.config) {
            Detection::None => {}
            Detection::Clear => {
                debug!("clear command: dropping {} trail points", self.trail.len());
                self.trail.clear();
                sink.refresh()?;
            }
            Detection::Close => {
                debug!("close command: shutting down");
                self.trail.clear();
                sink.refresh()?;
                return Ok(Flow::Shutdown);
            }
            Detection::Found(seed) => {
                let rect = region::grow(frame, seed, &self.config);
                raster::rasterize(
                    frame,
                    rect,
                    (sink.width(), sink.height()),
                    &self.config,
                    &mut self.trail,
                );
                debug!("seed ({}, {}) grew to {rect:?}, trail holds {} points", seed.x, seed.y, self.trail.len());
            }
        }

        for &p in self.trail.points() {
            sink.write_pixel(p, self.config.trail_color)?;
        }
        sink.end_pass();
        Ok(Flow::Continue)
    }
}
