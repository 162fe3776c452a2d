//! In-memory raster surface.

use tracing::debug;

use super::RasterSurface;
use crate::editor::Cursor;
use crate::encode::{encode_raster, EncodeError, ExportFormat};
use crate::geometry::{PixelRect, Rect};
use crate::raster::Raster;
use crate::transform::{draw_transformed, extract_region, put_raster, DrawTransform};

/// A [`RasterSurface`] backed by an RGBA buffer.
#[derive(Debug, Clone)]
pub struct SoftwareCanvas {
    raster: Raster,
    cursor: Cursor,
}

impl SoftwareCanvas {
    /// A transparent canvas of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            raster: Raster::transparent(width, height),
            cursor: Cursor::Default,
        }
    }

    /// Current canvas contents.
    pub fn pixels(&self) -> &Raster {
        &self.raster
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }
}

impl RasterSurface for SoftwareCanvas {
    fn size(&self) -> (u32, u32) {
        (self.raster.width, self.raster.height)
    }

    fn clear(&mut self) {
        self.raster.pixels.fill(0);
    }

    fn draw_image(&mut self, image: &Raster, dest: Rect, transform: &DrawTransform) {
        draw_transformed(&mut self.raster, image, dest, transform);
    }

    fn get_pixels(&self, region: PixelRect) -> Raster {
        extract_region(&self.raster, region)
    }

    fn put_pixels(&mut self, pixels: &Raster, x: i64, y: i64) {
        put_raster(&mut self.raster, pixels, x, y);
    }

    fn export(&self, format: ExportFormat) -> Result<Vec<u8>, EncodeError> {
        debug!(?format, "exporting canvas");
        encode_raster(&self.raster, format)
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }
}
