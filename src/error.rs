// Every variant states *where* things went wrong.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("camera init error: {0}")]
    CameraInit(String), // Opening/starting the camera failed
    #[error("camera frame error: {0}")]
    CameraFrame(String), // Grabbing/decoding a frame failed
    #[error("framebuffer init error: {0}")]
    SinkInit(String), // Opening the framebuffer device failed
    #[error("framebuffer geometry error: {0}")]
    SinkGeometry(String), // Probing the display geometry failed
    #[error("framebuffer write error: {0}")]
    SinkWrite(String), // Mapping or painting the pixel memory failed
    #[error("config error: {0}")]
    Config(String), // Reading/parsing a config override failed
}
