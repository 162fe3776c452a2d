//! Interactive editor WASM bindings.
//!
//! Wraps the core editor with a software canvas and a selection overlay.
//! JavaScript forwards pointer events and control changes, then paints the
//! result with [`ImageEditor::present`] and draws the selection outline from
//! [`ImageEditor::overlay_path`] (for example into an SVG `<path>`).
//!
//! # Example
//!
//! ```typescript
//! const editor = ImageEditor.from_bytes(600, 400, bytes, { crop_policy: 'normalize' });
//! editor.present(ctx);
//!
//! canvas.onmousedown = (e) => editor.pointer_down(e.offsetX, e.offsetY);
//! canvas.onmousemove = (e) => {
//!   editor.pointer_move(e.offsetX, e.offsetY);
//!   canvas.style.cursor = editor.cursor;
//!   outline.setAttribute('d', editor.overlay_path() ?? '');
//!   editor.present(ctx);
//! };
//! ```

use crate::adjustments::ColorParams;
use crate::encode::jpeg_quality;
use crate::types::{to_js_error, JsRaster};
use canvas_tool_core::encode::ExportFormat;
use canvas_tool_core::{
    EditError, EditorOptions, ImageEditor as CoreEditor, Raster, SelectionOverlay, SoftwareCanvas,
};
use wasm_bindgen::prelude::*;

type Session = CoreEditor<SoftwareCanvas, SelectionOverlay>;

/// An editing session bound to a fixed-size viewport.
#[wasm_bindgen(js_name = ImageEditor)]
pub struct ImageEditor {
    inner: Session,
}

impl ImageEditor {
    pub(crate) fn from_raster(source: Raster, options: EditorOptions) -> Result<Self, EditError> {
        let surface = SoftwareCanvas::new(options.width, options.height);
        let overlay = SelectionOverlay::new(options.outline.clone());
        Session::new(surface, overlay, source, options).map(|inner| Self { inner })
    }

    pub(crate) fn from_encoded(bytes: &[u8], options: EditorOptions) -> Result<Self, EditError> {
        let surface = SoftwareCanvas::new(options.width, options.height);
        let overlay = SelectionOverlay::new(options.outline.clone());
        Session::from_encoded(surface, overlay, bytes, options).map(|inner| Self { inner })
    }
}

fn options_from_js(width: u32, height: u32, options: JsValue) -> Result<EditorOptions, JsValue> {
    let mut options: EditorOptions = if options.is_undefined() || options.is_null() {
        EditorOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options).map_err(to_js_error)?
    };
    options.width = width;
    options.height = height;
    Ok(options)
}

#[wasm_bindgen(js_class = ImageEditor)]
impl ImageEditor {
    /// Start a session from already-decoded pixels.
    ///
    /// `options` is an optional plain object with any of `fit_bounds`,
    /// `crop_policy`, `history_limit`, `resample` and `outline`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: u32,
        height: u32,
        source: &JsRaster,
        options: JsValue,
    ) -> Result<ImageEditor, JsValue> {
        let options = options_from_js(width, height, options)?;
        let raster = source.to_raster().map_err(to_js_error)?;
        Self::from_raster(raster, options).map_err(to_js_error)
    }

    /// Start a session from encoded PNG or JPEG bytes.
    pub fn from_bytes(
        width: u32,
        height: u32,
        bytes: &[u8],
        options: JsValue,
    ) -> Result<ImageEditor, JsValue> {
        let options = options_from_js(width, height, options)?;
        Self::from_encoded(bytes, options).map_err(to_js_error)
    }

    /// Current mode name, e.g. `"cropping"`.
    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> String {
        self.inner.mode().as_str().to_string()
    }

    /// CSS cursor for the current mode.
    #[wasm_bindgen(getter)]
    pub fn cursor(&self) -> String {
        self.inner.cursor().as_css().to_string()
    }

    pub fn enter_crop_mode(&mut self) {
        self.inner.enter_crop_mode();
    }

    pub fn enter_move_mode(&mut self) {
        self.inner.enter_move_mode();
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.inner.pointer_down(x, y);
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.inner.pointer_move(x, y);
    }

    /// Finishes a crop or a move.
    pub fn pointer_up(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        self.inner.pointer_up(x, y).map_err(to_js_error)
    }

    pub fn pointer_leave(&mut self) {
        self.inner.pointer_leave();
    }

    /// Rotate to `degrees`. Previews until `commit` is true.
    pub fn rotate(&mut self, degrees: f64, commit: bool) -> Result<(), JsValue> {
        self.inner.rotate(degrees, commit).map_err(to_js_error)
    }

    /// Scale to `factor` of the size after the last rebuild. Previews until
    /// `commit` is true.
    pub fn scale(&mut self, factor: f64, commit: bool) -> Result<(), JsValue> {
        self.inner.scale(factor, commit).map_err(to_js_error)
    }

    pub fn adjust_brightness(&mut self, value: f64, commit: bool) -> Result<(), JsValue> {
        self.inner.adjust_brightness(value, commit).map_err(to_js_error)
    }

    pub fn adjust_contrast(&mut self, value: f64, commit: bool) -> Result<(), JsValue> {
        self.inner.adjust_contrast(value, commit).map_err(to_js_error)
    }

    pub fn adjust_saturation(&mut self, value: f64, commit: bool) -> Result<(), JsValue> {
        self.inner.adjust_saturation(value, commit).map_err(to_js_error)
    }

    pub fn adjust_rgb_balance(&mut self, r: i32, g: i32, b: i32, commit: bool) -> Result<(), JsValue> {
        self.inner
            .adjust_rgb_balance(r, g, b, commit)
            .map_err(to_js_error)
    }

    pub fn set_grayscale(&mut self, enabled: bool) -> Result<(), JsValue> {
        self.inner.set_grayscale(enabled).map_err(to_js_error)
    }

    /// Colour parameters currently applied to the image.
    pub fn color_params(&self) -> ColorParams {
        ColorParams::from_core(self.inner.placement().color)
    }

    /// Current placement as a plain object.
    pub fn placement(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.snapshot()).map_err(to_js_error)
    }

    /// Recorded placements, oldest first.
    pub fn history(&self) -> Result<JsValue, JsValue> {
        let entries: Vec<_> = self.inner.history().iter().collect();
        serde_wasm_bindgen::to_value(&entries).map_err(to_js_error)
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.surface().pixels().width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.surface().pixels().height
    }

    /// Viewport contents as RGBA (a copy).
    pub fn canvas_pixels(&self) -> Vec<u8> {
        self.inner.surface().pixels().pixels.clone()
    }

    /// SVG path data for the crop selection, or `undefined` when there is none.
    pub fn overlay_path(&self) -> Option<String> {
        self.inner.overlay().path_data()
    }

    /// Outline stroke colour.
    pub fn overlay_stroke(&self) -> String {
        self.inner.overlay().style().stroke.clone()
    }

    pub fn overlay_stroke_width(&self) -> f64 {
        self.inner.overlay().style().stroke_width
    }

    /// Paint the viewport into a 2D canvas context at the origin.
    pub fn present(&self, ctx: &web_sys::CanvasRenderingContext2d) -> Result<(), JsValue> {
        let raster = self.inner.surface().pixels();
        let data = web_sys::ImageData::new_with_u8_clamped_array_and_sh(
            wasm_bindgen::Clamped(&raster.pixels),
            raster.width,
            raster.height,
        )?;
        ctx.put_image_data(&data, 0.0, 0.0)
    }

    /// Encode the viewport as PNG.
    pub fn export_png(&self) -> Result<Vec<u8>, JsValue> {
        self.inner
            .export_encoded_image(ExportFormat::Png)
            .map_err(to_js_error)
    }

    /// Encode the viewport as JPEG. Pass 0 for the default quality.
    pub fn export_jpeg(&self, quality: u8) -> Result<Vec<u8>, JsValue> {
        let format = ExportFormat::Jpeg {
            quality: jpeg_quality(quality),
        };
        self.inner.export_encoded_image(format).map_err(to_js_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canvas_tool_core::encode::encode_png;

    fn editor(width: u32, height: u32) -> ImageEditor {
        let source = Raster::new(width, height, [255, 0, 0, 255].repeat((width * height) as usize))
            .unwrap();
        ImageEditor::from_raster(source, EditorOptions::new(100, 100)).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let ed = editor(50, 30);
        assert_eq!(ed.mode(), "idle");
        assert_eq!(ed.cursor(), "default");
        assert_eq!((ed.width(), ed.height()), (100, 100));
        assert_eq!(ed.canvas_pixels().len(), 100 * 100 * 4);
        assert_eq!(ed.overlay_path(), None);
        assert_eq!(ed.overlay_stroke(), "#409EFF");
        assert_eq!(ed.overlay_stroke_width(), 1.0);
    }

    #[test]
    fn test_image_drawn_centred() {
        let ed = editor(50, 30);
        let pixels = ed.canvas_pixels();
        // (50, 50) is inside the image, (0, 0) is not.
        let inside = (50 * 100 + 50) * 4;
        assert_eq!(&pixels[inside..inside + 4], &[255, 0, 0, 255]);
        assert_eq!(&pixels[0..4], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_crop_selection_outline() {
        let mut ed = editor(50, 30);
        ed.enter_crop_mode();
        assert_eq!(ed.mode(), "cropping");
        assert_eq!(ed.cursor(), "crosshair");

        ed.pointer_down(10.0, 10.0);
        ed.pointer_move(60.0, 40.0);
        assert_eq!(
            ed.overlay_path().as_deref(),
            Some("M10,10 L10,40 L60,40 L60,10Z")
        );
    }

    #[test]
    fn test_move_mode_cursors() {
        let mut ed = editor(50, 30);
        ed.enter_move_mode();
        assert_eq!(ed.mode(), "awaiting_move");
        assert_eq!(ed.cursor(), "grab");

        ed.pointer_down(50.0, 50.0);
        assert_eq!(ed.mode(), "moving");
        assert_eq!(ed.cursor(), "grabbing");

        ed.pointer_leave();
        assert_eq!(ed.mode(), "idle");
    }

    #[test]
    fn test_from_encoded() {
        let bytes = encode_png(&[0, 255, 0, 255].repeat(8), 4, 2).unwrap();
        let ed = ImageEditor::from_encoded(&bytes, EditorOptions::new(10, 10)).unwrap();
        assert_eq!(ed.inner.placement().width, 4.0);
        assert_eq!(ed.inner.placement().height, 2.0);
    }

    #[test]
    fn test_from_encoded_invalid() {
        let result = ImageEditor::from_encoded(&[1, 2, 3], EditorOptions::new(10, 10));
        assert!(matches!(result, Err(EditError::Decode(_))));
    }

    #[test]
    fn test_color_params_follow_preview() {
        let mut ed = editor(10, 10);
        assert!(ed.inner.adjust_brightness(30.0, false).is_ok());
        assert_eq!(ed.color_params().brightness(), 30.0);
    }
}
