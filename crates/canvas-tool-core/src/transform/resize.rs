//! Raster resampling.
//!
//! Wraps the `image` crate's resize algorithms. Returns new `Raster`
//! instances without modifying the input.

use serde::{Deserialize, Serialize};

use crate::raster::{Raster, RasterError};

/// Filter type for resize operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    #[default]
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Resize a raster to exact dimensions.
///
/// # Errors
///
/// Returns `RasterError::Empty` for a zero target size, and
/// `RasterError::ResizeFailed` if the source buffer cannot be wrapped.
pub fn resize(
    raster: &Raster,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<Raster, RasterError> {
    if width == 0 || height == 0 {
        return Err(RasterError::Empty);
    }

    // Fast path: if dimensions match, just clone
    if raster.width == width && raster.height == height {
        return Ok(raster.clone());
    }

    let rgba = raster
        .to_rgba_image()
        .ok_or_else(|| RasterError::ResizeFailed("failed to create RgbaImage".to_string()))?;

    let resized = image::imageops::resize(&rgba, width, height, filter.to_image_filter());

    Ok(Raster::from_rgba_image(resized))
}
