//! Canvas Tool Core - Image editing library
//!
//! This crate provides the image transform and colour-processing pipeline
//! behind the canvas-tool editor widget: placement geometry, per-pixel colour
//! adjustments, a software raster surface, and the interactive editor
//! controller that ties them together.

pub mod adjustments;
pub mod decode;
pub mod editor;
pub mod encode;
pub mod geometry;
pub mod raster;
pub mod surface;
pub mod transform;

pub use editor::{
    CropPolicy, Cursor, EditError, EditorMode, EditorOptions, HistoryLog, ImageEditor,
    OutlineStyle, Placement, PlacementSnapshot,
};
pub use encode::ExportFormat;
pub use geometry::{Bounds, Point, Rect};
pub use raster::{Raster, RasterError};
pub use surface::{OverlaySurface, RasterSurface, SelectionOverlay, SoftwareCanvas};

/// Per-channel offsets for colour balance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RgbOffset {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl RgbOffset {
    pub fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    pub fn is_neutral(&self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }
}

/// Colour adjustments for image editing
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ColorParams {
    /// Brightness (-100 to 100)
    pub brightness: f64,
    /// Contrast (-100 to 100)
    pub contrast: f64,
    /// Saturation (-100 to 100)
    pub saturation: f64,
    /// Colour balance offsets (-255 to 255 per channel)
    pub rgb_offset: RgbOffset,
    /// Render in black and white
    pub grayscale: bool,
}

impl ColorParams {
    /// Create a new ColorParams with neutral values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all values are neutral
    pub fn is_neutral(&self) -> bool {
        *self == Self::default()
    }
}
