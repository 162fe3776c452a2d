//! Where the edited image sits in the viewport.

use serde::{Deserialize, Serialize};

use crate::geometry::{point_in_rect, Point, Rect};
use crate::raster::Raster;
use crate::ColorParams;

/// The image being edited and its position, size, rotation and colour state.
///
/// A new placement (with a new `revision`) is built for every destructive
/// commit; moving is the only edit that updates one in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub raster: Raster,
    /// Top-left corner in viewport coordinates. May lie outside the viewport.
    pub x: f64,
    pub y: f64,
    /// Displayed size.
    pub width: f64,
    pub height: f64,
    /// Cumulative zoom factor set by the last scale commit.
    pub scale: f64,
    /// Displayed size over natural size, from the last fit.
    pub fit_scale: f64,
    /// Cumulative rotation in degrees.
    pub angle: f64,
    pub color: ColorParams,
    /// Identifies the raster handle. Bumped on every rebuild.
    pub revision: u64,
}

impl Placement {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn center(&self) -> Point {
        self.rect().center()
    }

    /// Inclusive hit test against the displayed bounds.
    pub fn contains(&self, p: Point) -> bool {
        point_in_rect(p.x, p.y, self.x, self.y, self.width, self.height)
    }

    /// Same geometry and colour state over a new raster.
    pub fn with_raster(&self, raster: Raster, revision: u64) -> Placement {
        Placement {
            raster,
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            scale: self.scale,
            fit_scale: self.fit_scale,
            angle: self.angle,
            color: self.color,
            revision,
        }
    }

    pub fn snapshot(&self) -> PlacementSnapshot {
        PlacementSnapshot {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            scale: self.scale,
            fit_scale: self.fit_scale,
            angle: self.angle,
            color: self.color,
            raster_width: self.raster.width,
            raster_height: self.raster.height,
            revision: self.revision,
        }
    }
}

/// A [`Placement`] without its pixels, for the history log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlacementSnapshot {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub scale: f64,
    pub fit_scale: f64,
    pub angle: f64,
    pub color: ColorParams,
    pub raster_width: u32,
    pub raster_height: u32,
    pub revision: u64,
}
