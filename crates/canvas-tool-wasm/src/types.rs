//! WASM-compatible wrapper types for raster data.

use canvas_tool_core::raster::{Raster, RasterError};
use canvas_tool_core::transform::FilterType;
use wasm_bindgen::prelude::*;

/// An RGBA image held in WASM memory.
///
/// `pixels()` copies the buffer out to a `Uint8Array`; keep images in WASM
/// memory between operations and only copy out for display.
#[wasm_bindgen(js_name = Raster)]
pub struct JsRaster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen(js_class = Raster)]
impl JsRaster {
    /// Wrap RGBA pixel data (4 bytes per pixel, row-major order), for
    /// example `ImageData.data` from a canvas.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsRaster {
        JsRaster {
            width,
            height,
            pixels,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of bytes in the pixel buffer (width * height * 4).
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGBA pixel data as Uint8Array (a copy).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory. Optional; the finalizer does the same.
    pub fn free(self) {}
}

impl JsRaster {
    pub(crate) fn from_raster(raster: Raster) -> Self {
        Self {
            width: raster.width,
            height: raster.height,
            pixels: raster.pixels,
        }
    }

    /// Copy into a core raster, checking the buffer length.
    pub(crate) fn to_raster(&self) -> Result<Raster, RasterError> {
        Raster::new(self.width, self.height, self.pixels.clone())
    }

    pub(crate) fn pixel_data(&self) -> &[u8] {
        &self.pixels
    }
}

/// Convert a u8 filter type value to the core FilterType enum.
///
/// Values:
/// - 0 = Nearest
/// - 1 = Bilinear
/// - 2 = Lanczos3
///
/// Any other value defaults to Bilinear.
pub(crate) fn filter_from_u8(value: u8) -> FilterType {
    match value {
        0 => FilterType::Nearest,
        2 => FilterType::Lanczos3,
        _ => FilterType::Bilinear,
    }
}

/// Map any displayable error to a JS string value.
pub(crate) fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_raster_creation() {
        let img = JsRaster::new(100, 50, vec![0u8; 100 * 50 * 4]);
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.byte_length(), 20000);
    }

    #[test]
    fn test_to_raster_checks_length() {
        let img = JsRaster::new(2, 2, vec![0u8; 12]);
        assert_eq!(
            img.to_raster(),
            Err(RasterError::BufferMismatch {
                expected: 16,
                actual: 12
            })
        );
    }

    #[test]
    fn test_raster_round_trip() {
        let raster = Raster::new(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let js = JsRaster::from_raster(raster.clone());
        assert_eq!(js.pixels(), raster.pixels);
        assert_eq!(js.to_raster().unwrap(), raster);
    }

    #[test]
    fn test_filter_from_u8() {
        assert_eq!(filter_from_u8(0), FilterType::Nearest);
        assert_eq!(filter_from_u8(1), FilterType::Bilinear);
        assert_eq!(filter_from_u8(2), FilterType::Lanczos3);
        assert_eq!(filter_from_u8(255), FilterType::Bilinear);
    }
}
