//! Loading a source image into a [`Raster`](crate::raster::Raster).
//!
//! The format is sniffed from the bytes (PNG and JPEG are compiled in). Any
//! EXIF orientation tag is applied so the raster comes out the way a browser
//! would display the file, and the result is always RGBA8.

mod source;
mod types;

pub use source::{decode_image, decode_image_no_orientation, get_orientation};
pub use types::{DecodeError, Orientation};
