//! Placement geometry: fitting, centring, rotated corners and hit testing.
//!
//! All coordinates are in viewport space, origin at the top-left corner, y
//! pointing down. Angles are in radians unless the name says otherwise; a
//! positive angle rotates clockwise on screen.

use serde::{Deserialize, Serialize};

/// A point in viewport coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A fixed-size drawable area, or a box a raster must fit inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `width / height`.
    pub fn ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Both sides finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Result of [`fit_to_bounds`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitResult {
    pub width: f64,
    pub height: f64,
    /// Displayed size divided by natural size.
    pub scale: f64,
}

/// An axis-aligned rectangle. Width and height may be negative until
/// [`Rect::normalized`] is called.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle spanned from `start` to `end`, keeping drag direction.
    pub fn from_corners(start: Point, end: Point) -> Self {
        Self::new(start.x, start.y, end.x - start.x, end.y - start.y)
    }

    /// Same area with non-negative width and height.
    pub fn normalized(&self) -> Self {
        let (x, width) = if self.width < 0.0 {
            (self.x + self.width, -self.width)
        } else {
            (self.x, self.width)
        };
        let (y, height) = if self.height < 0.0 {
            (self.y + self.height, -self.height)
        } else {
            (self.y, self.height)
        };
        Self::new(x, y, width, height)
    }

    pub fn is_reversed(&self) -> bool {
        self.width < 0.0 || self.height < 0.0
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains(&self, p: Point) -> bool {
        point_in_rect(p.x, p.y, self.x, self.y, self.width, self.height)
    }
}

/// Whole-pixel rectangle, as read from or written to a raster surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: i64, y: i64, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Round a normalized rectangle to whole pixels. Negative sizes become 0.
    pub fn from_rect(rect: &Rect) -> Self {
        Self {
            x: rect.x.round() as i64,
            y: rect.y.round() as i64,
            width: rect.width.round().max(0.0) as u32,
            height: rect.height.round().max(0.0) as u32,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Four corners of a (possibly rotated) rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corners {
    pub top_left: Point,
    pub bottom_left: Point,
    pub top_right: Point,
    pub bottom_right: Point,
}

impl Corners {
    /// Smallest axis-aligned rectangle containing all four corners.
    pub fn bounding_rect(&self) -> Rect {
        let points = self.to_quad();
        let mut min = points[0];
        let mut max = points[0];
        for p in &points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Corners in drawing order: top-left, bottom-left, bottom-right, top-right.
    pub fn to_quad(&self) -> [Point; 4] {
        [
            self.top_left,
            self.bottom_left,
            self.bottom_right,
            self.top_right,
        ]
    }
}

/// Length of the hypotenuse of a right triangle with legs `a` and `b`.
#[inline]
pub fn hypotenuse(a: f64, b: f64) -> f64 {
    (a * a + b * b).sqrt()
}

/// Angle (radians) whose tangent is `opposite / adjacent`.
#[inline]
pub fn diagonal_angle(opposite: f64, adjacent: f64) -> f64 {
    (opposite / adjacent).atan()
}

#[inline]
pub fn rad_to_deg(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}

/// Scale a natural size down so it fits inside `bounds`.
///
/// The binding axis is chosen by comparing aspect ratios rather than absolute
/// sizes: a source wider (relative to its height) than the bounds is clamped
/// on width, anything else on height. Sizes that already fit come back
/// unchanged with `scale = 1`.
pub fn fit_to_bounds(natural_width: f64, natural_height: f64, bounds: &Bounds) -> FitResult {
    if natural_width <= bounds.width && natural_height <= bounds.height {
        return FitResult {
            width: natural_width,
            height: natural_height,
            scale: 1.0,
        };
    }

    let natural_ratio = natural_width / natural_height;
    if natural_ratio > bounds.ratio() {
        let scale = bounds.width / natural_width;
        FitResult {
            width: bounds.width,
            height: natural_height * scale,
            scale,
        }
    } else {
        let scale = bounds.height / natural_height;
        FitResult {
            width: natural_width * scale,
            height: bounds.height,
            scale,
        }
    }
}

/// Top-left position that centres a `width x height` box in `viewport`.
pub fn center(viewport: &Bounds, width: f64, height: f64) -> Point {
    Point::new(
        viewport.width / 2.0 - width / 2.0,
        viewport.height / 2.0 - height / 2.0,
    )
}

/// Corners of the rectangle at `(x, y, width, height)` after rotating it
/// about its own centre by `angle`.
///
/// Each corner sits half a diagonal away from the centre; the diagonal's
/// angle to the horizontal (`atan(height / width)`) is offset by the rotation.
pub fn rotated_corners(x: f64, y: f64, width: f64, height: f64, angle: f64) -> Corners {
    let center = Point::new(x + width / 2.0, y + height / 2.0);
    let half_diagonal = hypotenuse(width, height) / 2.0;
    let main = diagonal_angle(height, width) + angle;
    // The anti-diagonal mirrors the main one: its angle is `diag - angle`.
    let anti = main - 2.0 * angle;

    Corners {
        top_left: Point::new(
            center.x - main.cos() * half_diagonal,
            center.y - main.sin() * half_diagonal,
        ),
        bottom_left: Point::new(
            center.x - anti.cos() * half_diagonal,
            center.y + anti.sin() * half_diagonal,
        ),
        top_right: Point::new(
            center.x + anti.cos() * half_diagonal,
            center.y - anti.sin() * half_diagonal,
        ),
        bottom_right: Point::new(
            center.x + main.cos() * half_diagonal,
            center.y + main.sin() * half_diagonal,
        ),
    }
}

/// Rotate `point` about `pivot` by `angle`.
pub fn rotate_about(point: Point, pivot: Point, angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    let dx = point.x - pivot.x;
    let dy = point.y - pivot.y;
    Point::new(
        pivot.x + dx * cos - dy * sin,
        pivot.y + dx * sin + dy * cos,
    )
}

/// Inclusive hit test.
#[inline]
pub fn point_in_rect(px: f64, py: f64, x: f64, y: f64, width: f64, height: f64) -> bool {
    px >= x && px <= x + width && py >= y && py <= y + height
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: sizes that already fit are returned untouched.
        #[test]
        fn prop_fitting_size_unchanged(
            w in 1.0f64..=100.0,
            h in 1.0f64..=100.0,
        ) {
            let fit = fit_to_bounds(w, h, &Bounds::new(100.0, 100.0));
            prop_assert_eq!(fit.width, w);
            prop_assert_eq!(fit.height, h);
            prop_assert_eq!(fit.scale, 1.0);
        }

        /// Property: oversized sources fit and keep their aspect ratio.
        #[test]
        fn prop_oversized_fits_and_keeps_ratio(
            w in 1.0f64..=5000.0,
            h in 1.0f64..=5000.0,
            bw in 10.0f64..=500.0,
            bh in 10.0f64..=500.0,
        ) {
            prop_assume!(w > bw || h > bh);
            let fit = fit_to_bounds(w, h, &Bounds::new(bw, bh));

            prop_assert!(fit.width <= bw + 1e-9, "width {} > {}", fit.width, bw);
            prop_assert!(fit.height <= bh + 1e-9, "height {} > {}", fit.height, bh);
            let ratio_in = w / h;
            let ratio_out = fit.width / fit.height;
            prop_assert!((ratio_in - ratio_out).abs() / ratio_in < 1e-9);
            prop_assert!((fit.width - w * fit.scale).abs() < 1e-6);
        }

        /// Property: the bounding box of a rotated rectangle keeps its centre.
        #[test]
        fn prop_rotation_keeps_center(
            w in 1.0f64..=200.0,
            h in 1.0f64..=200.0,
            angle in -6.3f64..=6.3,
        ) {
            let bbox = rotated_corners(0.0, 0.0, w, h, angle).bounding_rect();
            let c = bbox.center();
            prop_assert!((c.x - w / 2.0).abs() < 1e-6);
            prop_assert!((c.y - h / 2.0).abs() < 1e-6);
        }
    }
}
