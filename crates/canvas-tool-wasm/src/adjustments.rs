//! Colour adjustment WASM bindings.
//!
//! Exposes `ColorParams` to TypeScript along with the standalone pixel
//! transforms, for hosts that want to process pixels without an editor.

use crate::types::{to_js_error, JsRaster};
use canvas_tool_core::adjustments as color;
use canvas_tool_core::RgbOffset;
use wasm_bindgen::prelude::*;

/// Colour adjustment parameters.
#[wasm_bindgen]
#[derive(Default)]
pub struct ColorParams {
    inner: canvas_tool_core::ColorParams,
}

#[wasm_bindgen]
impl ColorParams {
    /// Neutral parameters.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    #[wasm_bindgen(getter)]
    pub fn brightness(&self) -> f64 {
        self.inner.brightness
    }

    #[wasm_bindgen(setter)]
    pub fn set_brightness(&mut self, value: f64) {
        self.inner.brightness = value;
    }

    #[wasm_bindgen(getter)]
    pub fn contrast(&self) -> f64 {
        self.inner.contrast
    }

    #[wasm_bindgen(setter)]
    pub fn set_contrast(&mut self, value: f64) {
        self.inner.contrast = value;
    }

    #[wasm_bindgen(getter)]
    pub fn saturation(&self) -> f64 {
        self.inner.saturation
    }

    #[wasm_bindgen(setter)]
    pub fn set_saturation(&mut self, value: f64) {
        self.inner.saturation = value;
    }

    #[wasm_bindgen(getter)]
    pub fn grayscale(&self) -> bool {
        self.inner.grayscale
    }

    #[wasm_bindgen(setter)]
    pub fn set_grayscale(&mut self, value: bool) {
        self.inner.grayscale = value;
    }

    /// Set the per-channel colour balance offsets.
    pub fn set_rgb_offset(&mut self, r: i32, g: i32, b: i32) {
        self.inner.rgb_offset = RgbOffset::new(r, g, b);
    }

    /// Colour balance offsets as `[r, g, b]`.
    pub fn rgb_offset(&self) -> Vec<i32> {
        let o = self.inner.rgb_offset;
        vec![o.r, o.g, o.b]
    }

    pub fn is_neutral(&self) -> bool {
        self.inner.is_neutral()
    }

    /// Serialize to a plain JS object for storage
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(to_js_error)
    }

    /// Deserialize from a plain JS object
    pub fn from_json(value: JsValue) -> Result<ColorParams, JsValue> {
        let inner: canvas_tool_core::ColorParams =
            serde_wasm_bindgen::from_value(value).map_err(to_js_error)?;
        Ok(Self { inner })
    }
}

impl ColorParams {
    pub(crate) fn from_core(inner: canvas_tool_core::ColorParams) -> Self {
        Self { inner }
    }

    pub(crate) fn inner(&self) -> &canvas_tool_core::ColorParams {
        &self.inner
    }
}

fn map_pixels(image: &JsRaster, f: impl FnOnce(&[u8]) -> Vec<u8>) -> JsRaster {
    JsRaster::new(image.width(), image.height(), f(image.pixel_data()))
}

/// Apply every active adjustment in the editor's order: RGB offset,
/// brightness/contrast, saturation, grayscale.
///
/// # Example (TypeScript)
/// ```typescript
/// const params = new ColorParams();
/// params.brightness = 20;
/// params.set_rgb_offset(10, 0, -10);
/// const adjusted = apply_color_params(source, params);
/// ```
#[wasm_bindgen]
pub fn apply_color_params(image: &JsRaster, params: &ColorParams) -> JsRaster {
    map_pixels(image, |px| color::apply_color_params(px, params.inner()))
}

#[wasm_bindgen]
pub fn apply_rgb_offset(image: &JsRaster, r: i32, g: i32, b: i32) -> JsRaster {
    map_pixels(image, |px| color::apply_rgb_offset(px, r, g, b))
}

#[wasm_bindgen]
pub fn apply_brightness_contrast(image: &JsRaster, brightness: f64, contrast: f64) -> JsRaster {
    map_pixels(image, |px| color::apply_brightness_contrast(px, brightness, contrast))
}

#[wasm_bindgen]
pub fn apply_saturation(image: &JsRaster, delta: f64) -> JsRaster {
    map_pixels(image, |px| color::apply_saturation(px, delta))
}

#[wasm_bindgen]
pub fn to_grayscale(image: &JsRaster) -> JsRaster {
    map_pixels(image, color::to_grayscale)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_image(value: u8) -> JsRaster {
        JsRaster::new(2, 2, [value, value, value, 255].repeat(4))
    }

    #[test]
    fn test_color_params_accessors() {
        let mut params = ColorParams::new();
        assert!(params.is_neutral());

        params.set_brightness(20.0);
        params.set_contrast(-10.0);
        params.set_saturation(5.0);
        params.set_grayscale(true);
        params.set_rgb_offset(1, 2, 3);

        assert_eq!(params.brightness(), 20.0);
        assert_eq!(params.contrast(), -10.0);
        assert_eq!(params.saturation(), 5.0);
        assert!(params.grayscale());
        assert_eq!(params.rgb_offset(), vec![1, 2, 3]);
        assert!(!params.is_neutral());
    }

    #[test]
    fn test_apply_color_params_neutral() {
        let img = gray_image(90);
        let result = apply_color_params(&img, &ColorParams::new());
        assert_eq!(result.pixels(), img.pixels());
        assert_eq!((result.width(), result.height()), (2, 2));
    }

    #[test]
    fn test_apply_color_params_brightness() {
        let mut params = ColorParams::new();
        params.set_brightness(50.0);
        let result = apply_color_params(&gray_image(100), &params);
        assert_eq!(&result.pixels()[0..4], &[150, 150, 150, 255]);
    }

    #[test]
    fn test_standalone_transforms() {
        let img = gray_image(100);
        assert_eq!(&apply_rgb_offset(&img, 10, 0, -200).pixels()[0..4], &[110, 100, 0, 255]);
        assert_eq!(
            apply_brightness_contrast(&img, 0.0, 0.0).pixels(),
            img.pixels()
        );
        assert_eq!(apply_saturation(&img, 50.0).pixels(), img.pixels());
        assert_eq!(to_grayscale(&img).pixels(), img.pixels());
    }
}
