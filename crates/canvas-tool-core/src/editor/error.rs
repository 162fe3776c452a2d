use thiserror::Error;

use super::EditorMode;
use crate::decode::DecodeError;
use crate::encode::EncodeError;
use crate::raster::RasterError;

/// Errors raised by editing operations.
///
/// A failed operation leaves the committed placement untouched.
#[derive(Debug, Error, PartialEq)]
pub enum EditError {
    /// The operation does not apply in the current mode. Logged and
    /// swallowed by the editor, never returned to callers.
    #[error("{event} does not apply in {mode} mode")]
    InvalidModeTransition {
        mode: EditorMode,
        event: &'static str,
    },

    /// A crop or scale would produce an image less than one pixel wide or high.
    #[error("Degenerate region: {width} x {height}")]
    DegenerateRegion { width: f64, height: f64 },

    /// Viewport or fit bounds without a positive size, or a surface that
    /// does not match the viewport.
    #[error("Invalid viewport: {width} x {height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("Failed to load source image: {0}")]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Raster(#[from] RasterError),
}
