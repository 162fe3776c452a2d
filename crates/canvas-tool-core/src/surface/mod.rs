//! Drawing surfaces the editor renders into.
//!
//! The editor never touches pixels on screen directly. It drives a
//! [`RasterSurface`] (the image canvas) and an [`OverlaySurface`] (the
//! selection outline drawn on top of it). Hosts can implement these traits
//! over a real browser canvas; [`SoftwareCanvas`] and [`SelectionOverlay`]
//! are complete in-memory implementations.

mod canvas;
mod overlay;

pub use canvas::SoftwareCanvas;
pub use overlay::SelectionOverlay;

use crate::editor::Cursor;
use crate::encode::{EncodeError, ExportFormat};
use crate::geometry::{PixelRect, Point, Rect};
use crate::raster::Raster;
use crate::transform::DrawTransform;

/// A fixed-size 2D raster canvas.
pub trait RasterSurface {
    /// Width and height in pixels.
    fn size(&self) -> (u32, u32);

    /// Reset every pixel to transparent black.
    fn clear(&mut self);

    /// Draw `image` stretched into `dest` under `transform`, blending
    /// source-over onto what is already there.
    fn draw_image(&mut self, image: &Raster, dest: Rect, transform: &DrawTransform);

    /// Read back a region. Parts outside the surface come back transparent.
    fn get_pixels(&self, region: PixelRect) -> Raster;

    /// Write `pixels` with their top-left at `(x, y)`, replacing what is
    /// there without blending.
    fn put_pixels(&mut self, pixels: &Raster, x: i64, y: i64);

    /// Encode the whole surface.
    fn export(&self, format: ExportFormat) -> Result<Vec<u8>, EncodeError>;

    /// Pointer cursor shown over the surface.
    fn set_cursor(&mut self, cursor: Cursor);
}

/// Vector layer for the crop selection outline.
pub trait OverlaySurface {
    /// Replace the overlay contents with a closed four-point path.
    fn draw_quad(&mut self, quad: [Point; 4]);

    /// Remove everything from the overlay.
    fn clear(&mut self);
}
