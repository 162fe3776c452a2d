//! Per-editor configuration.
//!
//! Every editor owns its own copy; nothing here is shared between sessions.

use serde::{Deserialize, Serialize};

use super::EditError;
use crate::geometry::Bounds;
use crate::transform::FilterType;

/// What a crop does with a selection dragged up or left of its start point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropPolicy {
    /// Swap the corners so the region covers what was selected.
    #[default]
    Normalize,
    /// Refuse the crop with `EditError::DegenerateRegion`.
    Reject,
}

/// Stroke style of the crop selection outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineStyle {
    /// CSS colour.
    pub stroke: String,
    pub stroke_width: f64,
    pub fill: String,
}

impl Default for OutlineStyle {
    fn default() -> Self {
        Self {
            stroke: "#409EFF".to_string(),
            stroke_width: 1.0,
            fill: "transparent".to_string(),
        }
    }
}

/// Editor configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
    /// Box the image is scaled down to fit on load and after a crop.
    /// Defaults to the viewport.
    pub fit_bounds: Option<Bounds>,
    pub crop_policy: CropPolicy,
    /// Maximum number of snapshots kept in the history log.
    pub history_limit: usize,
    /// Filter used when a raster is rebuilt at a new size.
    pub resample: FilterType,
    pub outline: OutlineStyle,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            fit_bounds: None,
            crop_policy: CropPolicy::default(),
            history_limit: 50,
            resample: FilterType::default(),
            outline: OutlineStyle::default(),
        }
    }
}

impl EditorOptions {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn viewport(&self) -> Bounds {
        Bounds::new(self.width as f64, self.height as f64)
    }

    /// Fit bounds, falling back to the viewport.
    pub fn effective_fit_bounds(&self) -> Bounds {
        self.fit_bounds.unwrap_or_else(|| self.viewport())
    }

    /// Check that both the viewport and the fit bounds have positive size.
    pub fn validate(&self) -> Result<(), EditError> {
        let viewport = self.viewport();
        if !viewport.is_valid() {
            return Err(EditError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let fit = self.effective_fit_bounds();
        if !fit.is_valid() {
            return Err(EditError::InvalidViewport {
                width: fit.width,
                height: fit.height,
            });
        }
        Ok(())
    }
}
