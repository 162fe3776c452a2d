//! Encoding the edited raster for export.
//!
//! Both encoders take row-major RGBA data, the layout every raster in this
//! crate uses. PNG keeps the alpha channel; JPEG drops it, so pixels outside
//! the image come out black, as they do when a browser canvas is exported as
//! JPEG.
//!
//! # Examples
//!
//! ```ignore
//! use canvas_tool_core::encode::{encode_raster, ExportFormat};
//!
//! let png = encode_raster(&raster, ExportFormat::Png).unwrap();
//! assert_eq!(&png[1..4], b"PNG");
//! ```

mod jpeg;
mod png;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::raster::{Raster, CHANNELS};

pub use jpeg::{encode_jpeg, DEFAULT_JPEG_QUALITY};
pub use png::encode_png;

/// Errors that can occur while encoding a raster.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The underlying encoder failed
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

/// Output format for [`encode_raster`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Png,
    Jpeg { quality: u8 },
}

impl ExportFormat {
    /// MIME type of the encoded bytes.
    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Jpeg { .. } => "image/jpeg",
        }
    }

    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg { .. } => "jpg",
        }
    }
}

/// Encode a raster in the requested format.
pub fn encode_raster(raster: &Raster, format: ExportFormat) -> Result<Vec<u8>, EncodeError> {
    match format {
        ExportFormat::Png => encode_png(&raster.pixels, raster.width, raster.height),
        ExportFormat::Jpeg { quality } => {
            encode_jpeg(&raster.pixels, raster.width, raster.height, quality)
        }
    }
}

/// Shared size checks for RGBA input.
fn validate_rgba(pixels: &[u8], width: u32, height: u32) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = (width as usize) * (height as usize) * CHANNELS;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }
    Ok(())
}
