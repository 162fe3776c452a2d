//! Image encoding WASM bindings.
//!
//! Exposes PNG and JPEG encoding for RGBA pixel data, for example the
//! contents of a canvas read back with `getImageData`.

use crate::types::{to_js_error, JsRaster};
use canvas_tool_core::encode::{self, ExportFormat};
use wasm_bindgen::prelude::*;

/// Encode RGBA pixel data as PNG.
///
/// # Errors
///
/// Returns an error if the pixel buffer does not match `width * height * 4`
/// or either dimension is zero.
#[wasm_bindgen]
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(pixels, width, height).map_err(to_js_error)
}

/// Encode RGBA pixel data as JPEG.
///
/// Alpha is discarded. `quality` is clamped to 1-100; pass 0 for the default
/// of 92.
///
/// # Example
///
/// ```typescript
/// const data = ctx.getImageData(0, 0, w, h);
/// const jpeg = encode_jpeg(data.data, w, h, 90);
/// const blob = new Blob([jpeg], { type: 'image/jpeg' });
/// ```
#[wasm_bindgen]
pub fn encode_jpeg(pixels: &[u8], width: u32, height: u32, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(pixels, width, height, jpeg_quality(quality)).map_err(to_js_error)
}

/// Encode a `Raster` in the named format (`"png"` or `"jpeg"`).
#[wasm_bindgen]
pub fn encode_raster(image: &JsRaster, format: &str, quality: u8) -> Result<Vec<u8>, JsValue> {
    let format = export_format(format, quality)
        .ok_or_else(|| JsValue::from_str(&format!("Unsupported export format: {format}")))?;
    let raster = image.to_raster().map_err(to_js_error)?;
    encode::encode_raster(&raster, format).map_err(to_js_error)
}

/// A timestamped download name such as `1718000000000.png`.
#[wasm_bindgen]
pub fn suggested_file_name(format: &str) -> String {
    let extension = export_format(format, 0)
        .unwrap_or_default()
        .extension();
    format!("{}.{extension}", js_sys::Date::now() as u64)
}

pub(crate) fn jpeg_quality(quality: u8) -> u8 {
    if quality == 0 {
        encode::DEFAULT_JPEG_QUALITY
    } else {
        quality
    }
}

pub(crate) fn export_format(name: &str, quality: u8) -> Option<ExportFormat> {
    match name.to_ascii_lowercase().as_str() {
        "png" => Some(ExportFormat::Png),
        "jpeg" | "jpg" => Some(ExportFormat::Jpeg {
            quality: jpeg_quality(quality),
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jpeg_quality_default() {
        assert_eq!(jpeg_quality(0), 92);
        assert_eq!(jpeg_quality(75), 75);
    }

    #[test]
    fn test_export_format_names() {
        assert_eq!(export_format("png", 0), Some(ExportFormat::Png));
        assert_eq!(export_format("PNG", 10), Some(ExportFormat::Png));
        assert_eq!(
            export_format("jpg", 80),
            Some(ExportFormat::Jpeg { quality: 80 })
        );
        assert_eq!(
            export_format("jpeg", 0),
            Some(ExportFormat::Jpeg { quality: 92 })
        );
        assert_eq!(export_format("gif", 0), None);
    }

    // The core encoders are exercised directly; the wrappers above only map
    // errors to JsValue, which needs a wasm32 target.

    #[test]
    fn test_core_encode_png_signature() {
        let bytes = encode::encode_png(&[0, 0, 255, 255].repeat(4), 2, 2).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[test]
    fn test_core_encode_jpeg_markers() {
        let bytes = encode::encode_jpeg(&[0, 0, 255, 255].repeat(4), 2, 2, 90).unwrap();
        assert_eq!(&bytes[0..2], &[0xFF, 0xD8]);
    }
}
