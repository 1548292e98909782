// The destination surface: a Linux framebuffer device written pixel by pixel.
// The paint loop never sees device details; it gets the display size, one
// `write_pixel`, and the whole-display refresh the command zones trigger.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::process::Command;

use log::warn;
use memmap2::MmapMut;

use crate::error::Error;
use crate::types::{Point, Rgb};

/// Fixed-for-the-process description of the display surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FbGeometry {
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u32,
    /// Bytes per display row; can exceed `width * bytes_per_pixel`.
    pub line_length: u32,
    /// Panning offsets. Zero on an unpanned console; kept in the location
    /// arithmetic so a panned surface still paints in the visible region.
    pub xoffset: u32,
    pub yoffset: u32,
}

impl FbGeometry {
    /// Bytes the surface occupies in the mapped region, panning included.
    pub fn byte_len(&self) -> usize {
        (self.yoffset + self.height) as usize * self.line_length as usize
    }

    /// Probe a device's geometry through sysfs: `/dev/fb0` reports under
    /// `/sys/class/graphics/fb0/{virtual_size,bits_per_pixel,stride}`.
    pub fn probe(device: &Path) -> Result<Self, Error> {
        let name = device
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::SinkGeometry(format!("no device name in {}", device.display())))?;
        let sys = PathBuf::from("/sys/class/graphics").join(name);

        let size = read_sys(&sys, "virtual_size")?;
        let (w, h) = size
            .split_once(',')
            .ok_or_else(|| Error::SinkGeometry(format!("virtual_size {size:?} is not WIDTH,HEIGHT")))?;

        Ok(Self {
            width: parse_u32(w, "virtual_size width")?,
            height: parse_u32(h, "virtual_size height")?,
            bits_per_pixel: parse_u32(&read_sys(&sys, "bits_per_pixel")?, "bits_per_pixel")?,
            line_length: parse_u32(&read_sys(&sys, "stride")?, "stride")?,
            xoffset: 0,
            yoffset: 0,
        })
    }
}

fn read_sys(dir: &Path, file: &str) -> Result<String, Error> {
    let path = dir.join(file);
    fs::read_to_string(&path)
        .map(|s| s.trim().to_string())
        .map_err(|e| Error::SinkGeometry(format!("read {}: {e}", path.display())))
}

fn parse_u32(text: &str, what: &str) -> Result<u32, Error> {
    text.trim()
        .parse()
        .map_err(|e| Error::SinkGeometry(format!("{what} {text:?}: {e}")))
}

/// Capability the paint loop needs from a display.
pub trait PixelSink {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Paint one display-space pixel. Points outside the surface are ignored.
    fn write_pixel(&mut self, p: Point, color: Rgb) -> Result<(), Error>;

    /// A paint pass is over; drop anything held for its duration.
    fn end_pass(&mut self) {}

    /// Force a full display repaint, the side effect behind the Clear and
    /// Close commands, so stale trail pixels vanish from the screen.
    fn refresh(&mut self) -> Result<(), Error>;
}

/// The real display: an fbdev node whose pixel memory is mapped for the
/// duration of each paint pass and released when the pass ends.
pub struct FramebufferSink {
    file: File,
    geometry: FbGeometry,
    map: Option<MmapMut>, // present only inside a paint pass
}

impl FramebufferSink {
    /// Open a framebuffer device read-write and probe its geometry. Either
    /// failure is startup-fatal for the caller.
    pub fn open(device: &Path) -> Result<Self, Error> {
        let geometry = FbGeometry::probe(device)?;
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(device)
            .map_err(|e| Error::SinkInit(format!("open {}: {e}", device.display())))?;
        Ok(Self { file, geometry, map: None })
    }

    /// Wrap an already-open file with known geometry. Tests drive this with a
    /// plain file standing in for the device.
    pub fn with_geometry(file: File, geometry: FbGeometry) -> Self {
        Self { file, geometry, map: None }
    }

    pub fn geometry(&self) -> &FbGeometry {
        &self.geometry
    }

    fn map_pixels(file: &File, geometry: &FbGeometry) -> Result<MmapMut, Error> {
        let map = unsafe { MmapMut::map_mut(file) }
            .map_err(|e| Error::SinkWrite(format!("map framebuffer: {e}")))?;
        if map.len() < geometry.byte_len() {
            return Err(Error::SinkWrite(format!(
                "mapped {} bytes, geometry needs {}",
                map.len(),
                geometry.byte_len()
            )));
        }
        Ok(map)
    }
}

impl PixelSink for FramebufferSink {
    fn width(&self) -> u32 {
        self.geometry.width
    }

    fn height(&self) -> u32 {
        self.geometry.height
    }

    fn write_pixel(&mut self, p: Point, color: Rgb) -> Result<(), Error> {
        if p.x < 0 || p.y < 0 {
            return Ok(());
        }
        let (x, y) = (p.x as u32, p.y as u32);
        if x >= self.geometry.width || y >= self.geometry.height {
            return Ok(());
        }

        if self.map.is_none() {
            self.map = Some(Self::map_pixels(&self.file, &self.geometry)?);
        }
        let geometry = self.geometry;
        if let Some(map) = self.map.as_mut() {
            put_pixel(map, &geometry, x, y, color);
        }
        Ok(())
    }

    fn end_pass(&mut self) {
        self.map = None; // unmaps; writes are already in the shared mapping
    }

    fn refresh(&mut self) -> Result<(), Error> {
        self.end_pass();
        match Command::new("xrefresh").status() {
            Ok(status) if status.success() => {}
            Ok(status) => warn!("xrefresh exited with {status}"),
            Err(e) => warn!("xrefresh did not run: {e}"),
        }
        Ok(())
    }
}

/// Byte offset of (x, y) in the mapped region.
#[inline]
fn location(geometry: &FbGeometry, x: u32, y: u32) -> usize {
    ((x + geometry.xoffset) * (geometry.bits_per_pixel / 8)
        + (y + geometry.yoffset) * geometry.line_length) as usize
}

fn put_pixel(map: &mut [u8], geometry: &FbGeometry, x: u32, y: u32, color: Rgb) {
    let loc = location(geometry, x, y);
    let depth = if geometry.bits_per_pixel == 32 { 4 } else { 2 };
    if loc + depth > map.len() {
        return; // the write would land past the mapping
    }
    if geometry.bits_per_pixel == 32 {
        // Byte order on a 32-bit surface is blue, green, red, alpha (0 = opaque).
        map[loc] = color.b;
        map[loc + 1] = color.g;
        map[loc + 2] = color.r;
        map[loc + 3] = 0;
    } else {
        // Everything else is treated as 16-bit RGB565, little-endian.
        map[loc..loc + 2].copy_from_slice(&pack_rgb565(color).to_le_bytes());
    }
}

/// 5-6-5 packing: red in the high five bits, green in the middle six, blue
/// in the low five.
#[inline]
pub fn pack_rgb565(color: Rgb) -> u16 {
    (((color.r as u16) >> 3) << 11) | (((color.g as u16) >> 2) << 5) | ((color.b as u16) >> 3)
}
