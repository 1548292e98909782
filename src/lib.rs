// Laser cast: turn a laser pointer seen by a webcam into a persistent
// drawing painted straight onto the Linux framebuffer.

pub mod camera;
pub mod config;
pub mod detect;
pub mod error;
pub mod fb;
pub mod raster;
pub mod region;
pub mod tracker;
pub mod trail;
pub mod types;

// --- High-level re-exports -------------------------------------------------

pub use crate::config::TrackerConfig;
pub use crate::detect::Detection;
pub use crate::error::Error;
pub use crate::fb::{FbGeometry, FramebufferSink, PixelSink};
pub use crate::tracker::{Flow, Tracker};
pub use crate::trail::Trail;
pub use crate::types::{Frame, Point, Rect, Rgb};
