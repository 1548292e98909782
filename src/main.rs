// Laser cast: draw on the screen with a laser pointer seen by a webcam.
//
// The camera watches the projected screen; the first sufficiently red pixel
// of each frame seeds a region grow, the grown blob is mapped onto the
// display, and every point ever detected is painted cyan straight into the
// framebuffer. Pointing into the top-left corner wipes the drawing; the
// top-right corner shuts the program down.

use std::path::PathBuf;

use clap::Parser;
use log::info;

use laser_cast::camera::{CameraCapture, FrameSource};
use laser_cast::config::TrackerConfig;
use laser_cast::error::Error;
use laser_cast::fb::FramebufferSink;
use laser_cast::tracker::{Flow, Tracker};

// Resolution requested from the camera; the stream's answer is authoritative.
const CAMERA_WIDTH: u32 = 640;
const CAMERA_HEIGHT: u32 = 480;

/// Draw on the framebuffer with a laser pointer seen by a webcam.
#[derive(Parser, Debug)]
#[command(name = "laser-cast", version, about)]
struct Options {
    /// Camera device index.
    #[arg(long, default_value_t = 0)]
    camera: u32,

    /// Framebuffer device to paint on.
    #[arg(long, default_value = "/dev/fb0")]
    fb: PathBuf,

    /// Optional JSON file overriding the tracker defaults.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Error> {
    env_logger::init();
    let opts = Options::parse();

    let config = match &opts.config {
        Some(path) => TrackerConfig::from_json_file(path)?,
        None => TrackerConfig::default(),
    };

    // Both collaborators are required; either one missing ends the process
    // right here with its diagnostic.
    let mut cam = CameraCapture::new(opts.camera, CAMERA_WIDTH, CAMERA_HEIGHT)?;
    let (cam_w, cam_h) = cam.resolution();
    info!("camera streaming at {cam_w}x{cam_h}");

    let mut sink = FramebufferSink::open(&opts.fb)?;
    let geometry = sink.geometry();
    info!(
        "framebuffer {}: {}x{} at {} bpp, {} bytes per row",
        opts.fb.display(),
        geometry.width,
        geometry.height,
        geometry.bits_per_pixel,
        geometry.line_length,
    );

    let mut tracker = Tracker::new(config);
    loop {
        let frame = cam.next_frame()?;
        if tracker.step(&frame, &mut sink)? == Flow::Shutdown {
            info!("close command received, exiting");
            break;
        }
    }
    Ok(())
}
