//! Pixel buffer that finished strokes are composited into.

use super::paint::PaintMode;
use super::path::StrokePath;
use std::io::{Read, Write};
use thiserror::Error;

/// Errors raised by raster allocation, compositing and PNG streaming.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("Invalid raster size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("PNG stream error: {0}")]
    Png(#[from] cairo::IoError),

    #[error("Raster data unavailable: {0}")]
    Borrow(#[from] cairo::BorrowError),
}

/// A mutable ARGB pixel grid backed by a Cairo image surface.
///
/// The surface uses premultiplied 32-bit ARGB. No Cairo context is kept
/// alive between calls, so the buffer is the only owner of its pixels and
/// every read sees the result of the last completed composite.
#[derive(Debug)]
pub struct RasterBuffer {
    surface: cairo::ImageSurface,
}

impl RasterBuffer {
    /// Allocates a fully transparent buffer.
    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        let invalid = || RasterError::InvalidSize { width, height };
        let w = i32::try_from(width).map_err(|_| invalid())?;
        let h = i32::try_from(height).map_err(|_| invalid())?;
        if w == 0 || h == 0 {
            return Err(invalid());
        }

        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, w, h)?;
        Ok(Self { surface })
    }

    pub fn width(&self) -> u32 {
        self.surface.width() as u32
    }

    pub fn height(&self) -> u32 {
        self.surface.height() as u32
    }

    /// Strokes `path` into the buffer with `paint`.
    ///
    /// An empty path leaves the buffer untouched.
    pub fn composite(&mut self, path: &StrokePath, paint: &PaintMode) -> Result<(), RasterError> {
        if path.is_empty() {
            return Ok(());
        }

        let ctx = cairo::Context::new(&self.surface)?;
        paint.apply(&ctx);
        path.trace(&ctx);
        ctx.stroke()?;
        Ok(())
    }

    /// Returns an independent deep copy of the current pixels.
    ///
    /// Later composites into `self` are not visible through the copy.
    pub fn snapshot(&self) -> Result<RasterBuffer, RasterError> {
        let copy = RasterBuffer::new(self.width(), self.height())?;
        {
            let ctx = cairo::Context::new(&copy.surface)?;
            ctx.set_operator(cairo::Operator::Source);
            ctx.set_source_surface(&self.surface, 0.0, 0.0)?;
            ctx.paint()?;
        }
        Ok(copy)
    }

    /// Paints the buffer at the origin of `ctx` with the `Over` operator.
    pub fn paint_onto(&self, ctx: &cairo::Context) -> Result<(), RasterError> {
        ctx.set_operator(cairo::Operator::Over);
        ctx.set_source_surface(&self.surface, 0.0, 0.0)?;
        let painted = ctx.paint();
        // Drop the pattern's reference to our surface.
        ctx.set_source_rgba(0.0, 0.0, 0.0, 0.0);
        painted?;
        Ok(())
    }

    /// Reads one pixel as straight (non-premultiplied) `0xAARRGGBB`.
    ///
    /// Returns `None` for coordinates outside the buffer, or when the pixel
    /// data cannot be borrowed (see [`is_blank`](Self::is_blank) for a
    /// variant that reports the error).
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }

        let stride = self.surface.stride() as usize;
        let offset = y as usize * stride + x as usize * 4;
        let mut value = None;
        self.surface
            .with_data(|data| {
                value = data
                    .get(offset..offset + 4)
                    .and_then(|bytes| bytes.try_into().ok())
                    .map(|bytes: [u8; 4]| unpremultiply(u32::from_ne_bytes(bytes)));
            })
            .ok()?;
        value
    }

    /// Returns true when every pixel is fully transparent.
    pub fn is_blank(&self) -> Result<bool, RasterError> {
        let mut blank = true;
        let stride = self.surface.stride() as usize;
        let row_bytes = self.width() as usize * 4;
        self.surface.with_data(|data| {
            blank = data.chunks(stride).all(|row| {
                row[..row_bytes]
                    .chunks_exact(4)
                    .all(|px| u32::from_ne_bytes([px[0], px[1], px[2], px[3]]) >> 24 == 0)
            });
        })?;
        Ok(blank)
    }

    /// Encodes the buffer as a lossless PNG.
    pub fn write_png<W: Write>(&self, stream: &mut W) -> Result<(), RasterError> {
        self.surface.write_to_png(stream)?;
        Ok(())
    }

    /// Decodes a PNG into a new ARGB buffer.
    ///
    /// Opaque images decode as RGB24 in Cairo; those are converted so the
    /// result can be erased into like any other buffer.
    pub fn read_png<R: Read>(stream: &mut R) -> Result<Self, RasterError> {
        let decoded = cairo::ImageSurface::create_from_png(stream)?;
        if decoded.format() == cairo::Format::ARgb32 {
            return Ok(Self { surface: decoded });
        }

        let converted = RasterBuffer::new(decoded.width() as u32, decoded.height() as u32)?;
        {
            let ctx = cairo::Context::new(&converted.surface)?;
            ctx.set_operator(cairo::Operator::Source);
            ctx.set_source_surface(&decoded, 0.0, 0.0)?;
            ctx.paint()?;
        }
        Ok(converted)
    }
}

fn unpremultiply(argb: u32) -> u32 {
    let a = argb >> 24;
    if a == 0 {
        return 0;
    }
    let channel = |shift: u32| {
        let c = (argb >> shift) & 0xFF;
        ((c * 255 + a / 2) / a).min(255)
    };
    (a << 24) | (channel(16) << 16) | (channel(8) << 8) | channel(0)
}
