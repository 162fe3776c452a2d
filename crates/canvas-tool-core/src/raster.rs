//! RGBA raster buffer shared by every stage of the editor.

use thiserror::Error;

/// Bytes per pixel in every raster handled by this crate.
pub const CHANNELS: usize = 4;

/// Errors raised when building or resampling a raster.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RasterError {
    /// Pixel buffer length does not match `width * height * 4`.
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    BufferMismatch { expected: usize, actual: usize },

    /// Width or height is zero.
    #[error("Raster has no pixels")]
    Empty,

    /// The resampler could not produce an image.
    #[error("Resize failed: {0}")]
    ResizeFailed(String),
}

/// A 2D grid of RGBA pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel).
    pub pixels: Vec<u8>,
}

impl Raster {
    /// Create a raster, checking that the buffer matches the dimensions.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, RasterError> {
        let expected = buffer_len(width, height);
        if pixels.len() != expected {
            return Err(RasterError::BufferMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A fully transparent raster of the given size.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; buffer_len(width, height)],
        }
    }

    /// Build a raster from opaque RGB data, filling alpha with 255.
    pub fn from_rgb(width: u32, height: u32, rgb: &[u8]) -> Result<Self, RasterError> {
        let expected = (width as usize) * (height as usize) * 3;
        if rgb.len() != expected {
            return Err(RasterError::BufferMismatch {
                expected,
                actual: rgb.len(),
            });
        }
        let mut pixels = Vec::with_capacity(buffer_len(width, height));
        for chunk in rgb.chunks_exact(3) {
            pixels.extend_from_slice(&[chunk[0], chunk[1], chunk[2], 255]);
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a raster from an `image::RgbaImage`.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Convert to an `image::RgbaImage` for resampling or encoding.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Drop the alpha channel.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.pixel_count() as usize * 3);
        for chunk in self.pixels.chunks_exact(CHANNELS) {
            rgb.extend_from_slice(&chunk[..3]);
        }
        rgb
    }

    /// Same dimensions, different pixels.
    pub fn with_pixels(&self, pixels: Vec<u8>) -> Result<Self, RasterError> {
        Self::new(self.width, self.height, pixels)
    }

    /// Read one pixel. Returns `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.index(x, y);
        Some([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ])
    }

    /// Byte offset of pixel `(x, y)`.
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty/invalid raster.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}

#[inline]
fn buffer_len(width: u32, height: u32) -> usize {
    (width as usize) * (height as usize) * CHANNELS
}
