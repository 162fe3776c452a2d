//! Standalone geometry and pixel transform WASM bindings.

use crate::types::{filter_from_u8, to_js_error, JsRaster};
use canvas_tool_core::geometry::{self, Bounds, PixelRect};
use canvas_tool_core::transform;
use wasm_bindgen::prelude::*;

/// Resize an image to exact dimensions.
///
/// Filter values: 0 = Nearest, 1 = Bilinear, 2 = Lanczos3.
#[wasm_bindgen]
pub fn resize(image: &JsRaster, width: u32, height: u32, filter: u8) -> Result<JsRaster, JsValue> {
    let raster = image.to_raster().map_err(to_js_error)?;
    transform::resize(&raster, width, height, filter_from_u8(filter))
        .map(JsRaster::from_raster)
        .map_err(to_js_error)
}

/// Copy a region out of an image. Parts of the region outside the image are
/// transparent.
#[wasm_bindgen]
pub fn extract_region(
    image: &JsRaster,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
) -> Result<JsRaster, JsValue> {
    let raster = image.to_raster().map_err(to_js_error)?;
    let region = PixelRect::new(x as i64, y as i64, width, height);
    Ok(JsRaster::from_raster(transform::extract_region(&raster, region)))
}

/// Fit a natural size inside bounds, preserving aspect ratio.
///
/// Returns `[width, height, scale]`.
#[wasm_bindgen]
pub fn fit_to_bounds(
    natural_width: f64,
    natural_height: f64,
    max_width: f64,
    max_height: f64,
) -> Vec<f64> {
    let fit = geometry::fit_to_bounds(
        natural_width,
        natural_height,
        &Bounds::new(max_width, max_height),
    );
    vec![fit.width, fit.height, fit.scale]
}

/// Corners of a rectangle rotated by `angle` radians about its centre, as
/// `[x0, y0, x1, y1, x2, y2, x3, y3]` in top-left, bottom-left, bottom-right,
/// top-right order.
#[wasm_bindgen]
pub fn rotated_corners(x: f64, y: f64, width: f64, height: f64, angle: f64) -> Vec<f64> {
    geometry::rotated_corners(x, y, width, height, angle)
        .to_quad()
        .iter()
        .flat_map(|p| [p.x, p.y])
        .collect()
}
