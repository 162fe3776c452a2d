//! Decode errors and EXIF orientation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a source image could not be loaded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// Neither PNG nor JPEG.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),
}

/// How the stored pixels must be turned to appear upright, from the EXIF
/// `Orientation` tag (values 1-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    #[default]
    Normal = 1,
    FlipHorizontal = 2,
    Rotate180 = 3,
    FlipVertical = 4,
    /// Mirrored across the main diagonal.
    Transpose = 5,
    Rotate90CW = 6,
    /// Mirrored across the anti-diagonal.
    Transverse = 7,
    Rotate270CW = 8,
}

impl Orientation {
    /// Upright width and height are the stored height and width.
    pub fn swaps_dimensions(self) -> bool {
        matches!(
            self,
            Orientation::Transpose
                | Orientation::Rotate90CW
                | Orientation::Transverse
                | Orientation::Rotate270CW
        )
    }
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}
