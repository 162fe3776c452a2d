//! Image decoding WASM bindings.
//!
//! # Functions
//!
//! - [`decode_image`] - Decode a PNG or JPEG, applying EXIF orientation
//! - [`image_orientation`] - Read the EXIF orientation tag without decoding
//!
//! # Example
//!
//! ```typescript
//! import { decode_image } from '@canvas-tool/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! console.log(`Decoded ${image.width}x${image.height} image`);
//! ```

use crate::types::{to_js_error, JsRaster};
use canvas_tool_core::decode;
use wasm_bindgen::prelude::*;

/// Decode an encoded image into RGBA pixels.
///
/// The format is sniffed from the bytes. JPEG EXIF orientation is applied so
/// the result is upright.
///
/// # Errors
///
/// Returns an error if the format is not recognised or the data is
/// corrupted or truncated.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsRaster, JsValue> {
    decode::decode_image(bytes)
        .map(JsRaster::from_raster)
        .map_err(to_js_error)
}

/// EXIF orientation value (1-8) of an encoded image; 1 when absent.
#[wasm_bindgen]
pub fn image_orientation(bytes: &[u8]) -> u8 {
    decode::get_orientation(bytes) as u8
}
