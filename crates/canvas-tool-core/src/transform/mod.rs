//! Pixel-level raster operations used by the software surface and the editor.
//!
//! - [`extract_region`] reads a whole-pixel rectangle, filling anything
//!   outside the source with transparent black.
//! - [`resize`] resamples a raster to an exact size.
//! - [`draw_transformed`] composites a raster into another through a
//!   rotate/scale transform about a pivot, using inverse mapping.
//! - [`put_raster`] copies pixels verbatim, without blending.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner, y grows downwards
//! - Rotation angles are in radians, positive = clockwise on screen

mod composite;
mod crop;
mod resize;

pub use composite::{draw_transformed, put_raster, DrawTransform};
pub use crop::extract_region;
pub use resize::{resize, FilterType};
