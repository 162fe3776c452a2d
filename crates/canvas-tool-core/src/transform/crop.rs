//! Region extraction in whole-pixel coordinates.
//!
//! Behaves like reading image data back from a 2D canvas: the requested
//! rectangle may hang off any edge of the source, and the part that does is
//! returned as transparent black rather than being clipped away. The output
//! always has exactly the requested dimensions.

use crate::geometry::PixelRect;
use crate::raster::{Raster, CHANNELS};

/// Copy `region` out of `raster`.
///
/// # Example
///
/// ```
/// use canvas_tool_core::geometry::PixelRect;
/// use canvas_tool_core::raster::Raster;
/// use canvas_tool_core::transform::extract_region;
///
/// let raster = Raster::transparent(100, 100);
/// let region = extract_region(&raster, PixelRect::new(10, 10, 50, 30));
/// assert_eq!(region.width, 50);
/// assert_eq!(region.height, 30);
/// ```
pub fn extract_region(raster: &Raster, region: PixelRect) -> Raster {
    let mut output = Raster::transparent(region.width, region.height);
    if region.is_empty() || raster.is_empty() {
        return output;
    }

    // Overlap between the region and the source, in source coordinates.
    let left = region.x.max(0);
    let top = region.y.max(0);
    let right = (region.x + region.width as i64).min(raster.width as i64);
    let bottom = (region.y + region.height as i64).min(raster.height as i64);
    if left >= right || top >= bottom {
        return output;
    }

    let row_bytes = (right - left) as usize * CHANNELS;
    for src_y in top..bottom {
        let src_start = raster.index(left as u32, src_y as u32);
        let dst_x = (left - region.x) as u32;
        let dst_y = (src_y - region.y) as u32;
        let dst_start = output.index(dst_x, dst_y);

        output.pixels[dst_start..dst_start + row_bytes]
            .copy_from_slice(&raster.pixels[src_start..src_start + row_bytes]);
    }

    output
}


// ============================================================================
// Property-Based Tests
// ============================================================================
