//! Canvas Tool WASM - WebAssembly bindings for the canvas-tool editor
//!
//! This crate exposes canvas-tool-core to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `editor` - The interactive `ImageEditor` session
//! - `adjustments` - Colour parameters and standalone colour transforms
//! - `types` - WASM-compatible wrapper types for image data
//! - `decode` - Image decoding bindings (PNG, JPEG with EXIF orientation)
//! - `encode` - Image encoding bindings (PNG, JPEG export)
//! - `transform` - Resize, region extraction and placement geometry
//!
//! # Usage
//!
//! ```typescript
//! import init, { ImageEditor } from '@canvas-tool/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const editor = ImageEditor.from_bytes(canvas.width, canvas.height, bytes, undefined);
//! editor.present(canvas.getContext('2d'));
//! ```

use wasm_bindgen::prelude::*;

mod adjustments;
mod decode;
mod editor;
mod encode;
mod transform;
mod types;

// Re-export public types
pub use adjustments::{
    apply_brightness_contrast, apply_color_params, apply_rgb_offset, apply_saturation,
    to_grayscale, ColorParams,
};
pub use decode::{decode_image, image_orientation};
pub use editor::ImageEditor;
pub use encode::{encode_jpeg, encode_png, encode_raster, suggested_file_name};
pub use transform::{extract_region, fit_to_bounds, resize, rotated_corners};
pub use types::JsRaster;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
