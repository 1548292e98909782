// Opens the camera and converts frames into the packed buffer the detector
// reads. One blocking call, one frame.

use crate::error::Error;
use crate::types::Frame;

// Bring in nokhwa types for camera control.
use nokhwa::{
    Camera,
    pixel_format::RgbFormat,
    utils::{
        CameraFormat, CameraIndex, FrameFormat, RequestedFormat, RequestedFormatType, Resolution,
    },
};

// We also use `image` crate types to help decode frames cleanly.
use image::{ImageBuffer, Rgb};

/// Anything that can produce camera frames, one per blocking call.
pub trait FrameSource {
    /// Block until the next frame is available.
    fn next_frame(&mut self) -> Result<Frame, Error>;

    /// The resolution frames actually arrive at.
    fn resolution(&self) -> (u32, u32);
}

/// A small wrapper around nokhwa::Camera so the main loop stays clean.
pub struct CameraCapture {
    cam: Camera,
    width: u32,
    height: u32,
}

impl CameraCapture {
    /// Open camera `index` at a target resolution (falls back if not exact).
    pub fn new(index: u32, width: u32, height: u32) -> Result<Self, Error> {
        let idx = CameraIndex::Index(index);

        let fmt = CameraFormat::new(
            Resolution::new(width, height),
            FrameFormat::YUYV, // uncompressed; cheap to convert to RGB
            30,                // target FPS
        );

        // Ask for RGB frames near the requested format.
        let req = RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(fmt));

        let mut cam =
            Camera::new(idx, req).map_err(|e| Error::CameraInit(format!("create camera: {e}")))?;

        cam.open_stream()
            .map_err(|e| Error::CameraInit(format!("open stream: {e}")))?;

        // The actual stream might choose a slightly different resolution;
        // that one is authoritative for every frame that follows.
        let actual = cam.resolution();

        Ok(Self {
            cam,
            width: actual.width(),
            height: actual.height(),
        })
    }
}

impl FrameSource for CameraCapture {
    fn next_frame(&mut self) -> Result<Frame, Error> {
        let raw = self
            .cam
            .frame()
            .map_err(|e| Error::CameraFrame(format!("fetch frame: {e}")))?;

        let rgb: ImageBuffer<Rgb<u8>, Vec<u8>> = raw
            .decode_image::<RgbFormat>()
            .map_err(|e| Error::CameraFrame(format!("decode rgb: {e}")))?;

        let (w, h) = rgb.dimensions();
        let mut pixels = Vec::with_capacity((w as usize) * (h as usize));
        for (_x, _y, px) in rgb.enumerate_pixels() {
            // Each `px` is Rgb<u8>; pack it as 0x00RRGGBB.
            let r = px[0] as u32;
            let g = px[1] as u32;
            let b = px[2] as u32;
            pixels.push((r << 16) | (g << 8) | b);
        }

        Ok(Frame {
            width: w as usize,
            height: h as usize,
            pixels,
        })
    }

    fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
