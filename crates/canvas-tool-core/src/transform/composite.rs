//! Compositing a raster into a target through a rotate/scale transform.
//!
//! # Algorithm
//!
//! Inverse mapping: for each target pixel centre `p` inside the transformed
//! destination's bounding box, undo the transform to find where it lands in
//! the untransformed destination rectangle, then sample the source there with
//! bilinear interpolation and blend source-over onto the target.
//!
//! For a rotation θ and scale s about pivot c the inverse is:
//! ```text
//! q = c + R(-θ) · (p - c) / s
//! ```

use crate::geometry::{rotate_about, Point, Rect};
use crate::raster::{Raster, CHANNELS};

/// Rotation and uniform scale about a pivot point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawTransform {
    pub pivot: Point,
    /// Radians, positive = clockwise on screen.
    pub rotation: f64,
    pub scale: f64,
}

impl Default for DrawTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl DrawTransform {
    pub fn identity() -> Self {
        Self {
            pivot: Point::default(),
            rotation: 0.0,
            scale: 1.0,
        }
    }

    pub fn rotation(pivot: Point, radians: f64) -> Self {
        Self {
            pivot,
            rotation: radians,
            scale: 1.0,
        }
    }

    pub fn scaling(pivot: Point, scale: f64) -> Self {
        Self {
            pivot,
            rotation: 0.0,
            scale,
        }
    }

    pub fn is_identity(&self) -> bool {
        self.rotation == 0.0 && self.scale == 1.0
    }

    /// Map a point from destination space to target space.
    pub fn apply(&self, p: Point) -> Point {
        let scaled = Point::new(
            self.pivot.x + (p.x - self.pivot.x) * self.scale,
            self.pivot.y + (p.y - self.pivot.y) * self.scale,
        );
        rotate_about(scaled, self.pivot, self.rotation)
    }

    /// Map a point from target space back to destination space.
    pub fn invert(&self, p: Point) -> Point {
        let unrotated = rotate_about(p, self.pivot, -self.rotation);
        Point::new(
            self.pivot.x + (unrotated.x - self.pivot.x) / self.scale,
            self.pivot.y + (unrotated.y - self.pivot.y) / self.scale,
        )
    }
}

/// Draw `source` stretched into `dest`, then transformed, onto `target`.
///
/// Degenerate inputs (empty source, non-positive destination size, zero or
/// non-finite scale) draw nothing.
pub fn draw_transformed(
    target: &mut Raster,
    source: &Raster,
    dest: Rect,
    transform: &DrawTransform,
) {
    if source.is_empty()
        || target.is_empty()
        || dest.width <= 0.0
        || dest.height <= 0.0
        || !transform.scale.is_finite()
        || transform.scale <= 0.0
    {
        return;
    }

    // Bounding box of the transformed destination, clamped to the target.
    let corners = [
        Point::new(dest.x, dest.y),
        Point::new(dest.x + dest.width, dest.y),
        Point::new(dest.x, dest.y + dest.height),
        Point::new(dest.x + dest.width, dest.y + dest.height),
    ]
    .map(|p| transform.apply(p));
    let min_x = corners.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let max_x = corners.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    let min_y = corners.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let max_y = corners.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

    let x_start = min_x.floor().max(0.0) as u32;
    let y_start = min_y.floor().max(0.0) as u32;
    let x_end = (max_x.ceil().max(0.0) as u32).min(target.width);
    let y_end = (max_y.ceil().max(0.0) as u32).min(target.height);

    let sx = source.width as f64 / dest.width;
    let sy = source.height as f64 / dest.height;

    for py in y_start..y_end {
        for px in x_start..x_end {
            let q = transform.invert(Point::new(px as f64 + 0.5, py as f64 + 0.5));
            if q.x < dest.x || q.x >= dest.x + dest.width || q.y < dest.y || q.y >= dest.y + dest.height
            {
                continue;
            }

            let u = (q.x - dest.x) * sx - 0.5;
            let v = (q.y - dest.y) * sy - 0.5;
            let src = sample_bilinear(source, u, v);

            let idx = target.index(px, py);
            blend_over(&mut target.pixels[idx..idx + CHANNELS], src);
        }
    }
}

/// Copy `source` into `target` with its top-left at `(x, y)`, replacing
/// pixels outright. Parts falling outside the target are dropped.
pub fn put_raster(target: &mut Raster, source: &Raster, x: i64, y: i64) {
    let left = x.max(0);
    let top = y.max(0);
    let right = (x + source.width as i64).min(target.width as i64);
    let bottom = (y + source.height as i64).min(target.height as i64);
    if left >= right || top >= bottom {
        return;
    }

    let row_bytes = (right - left) as usize * CHANNELS;
    for dst_y in top..bottom {
        let src_start = source.index((left - x) as u32, (dst_y - y) as u32);
        let dst_start = target.index(left as u32, dst_y as u32);
        target.pixels[dst_start..dst_start + row_bytes]
            .copy_from_slice(&source.pixels[src_start..src_start + row_bytes]);
    }
}

/// Get a pixel as [f64; 4] from a raster at the given coordinates.
#[inline]
fn get_pixel_f64(raster: &Raster, px: u32, py: u32) -> [f64; 4] {
    let idx = raster.index(px, py);
    [
        raster.pixels[idx] as f64,
        raster.pixels[idx + 1] as f64,
        raster.pixels[idx + 2] as f64,
        raster.pixels[idx + 3] as f64,
    ]
}

/// Bilinear sample with edge clamping; `(u, v)` are texel-centre coordinates.
fn sample_bilinear(raster: &Raster, u: f64, v: f64) -> [f64; 4] {
    let max_x = (raster.width - 1) as f64;
    let max_y = (raster.height - 1) as f64;
    let u = u.clamp(0.0, max_x);
    let v = v.clamp(0.0, max_y);

    let x0 = u.floor() as u32;
    let y0 = v.floor() as u32;
    let x1 = (x0 + 1).min(raster.width - 1);
    let y1 = (y0 + 1).min(raster.height - 1);

    // Fractional distances
    let fx = u - x0 as f64;
    let fy = v - y0 as f64;

    let p00 = get_pixel_f64(raster, x0, y0);
    let p10 = get_pixel_f64(raster, x1, y0);
    let p01 = get_pixel_f64(raster, x0, y1);
    let p11 = get_pixel_f64(raster, x1, y1);

    let mut result = [0.0; 4];
    for i in 0..CHANNELS {
        result[i] = p00[i] * (1.0 - fx) * (1.0 - fy)
            + p10[i] * fx * (1.0 - fy)
            + p01[i] * (1.0 - fx) * fy
            + p11[i] * fx * fy;
    }
    result
}

/// Source-over blend of a straight-alpha sample onto a target pixel.
#[inline]
fn blend_over(dst: &mut [u8], src: [f64; 4]) {
    let sa = src[3] / 255.0;
    if sa <= 0.0 {
        return;
    }
    let da = dst[3] as f64 / 255.0;
    let out_a = sa + da * (1.0 - sa);

    for i in 0..3 {
        let c = (src[i] * sa + dst[i] as f64 * da * (1.0 - sa)) / out_a;
        dst[i] = c.round().clamp(0.0, 255.0) as u8;
    }
    dst[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    /// Opaque test image where red encodes x and green encodes y.
    fn test_image(width: u32, height: u32) -> Raster {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&[x as u8 * 10, y as u8 * 10, 7, 255]);
            }
        }
        Raster::new(width, height, pixels).unwrap()
    }

    #[test]
    fn test_identity_draw_copies_pixels() {
        let src = test_image(4, 3);
        let mut target = Raster::transparent(10, 10);
        draw_transformed(
            &mut target,
            &src,
            Rect::new(2.0, 5.0, 4.0, 3.0),
            &DrawTransform::identity(),
        );

        assert_eq!(target.pixel(2, 5), Some([0, 0, 7, 255]));
        assert_eq!(target.pixel(5, 7), Some([30, 20, 7, 255]));
        assert_eq!(target.pixel(1, 5), Some([0, 0, 0, 0]));
        assert_eq!(target.pixel(6, 5), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_draw_clips_to_target() {
        let src = test_image(4, 4);
        let mut target = Raster::transparent(3, 3);
        draw_transformed(
            &mut target,
            &src,
            Rect::new(-2.0, -2.0, 4.0, 4.0),
            &DrawTransform::identity(),
        );

        // Target (0, 0) shows source (2, 2)
        assert_eq!(target.pixel(0, 0), Some([20, 20, 7, 255]));
        assert_eq!(target.pixel(2, 2), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_stretch_draw() {
        let src = Raster::new(1, 1, vec![200, 100, 50, 255]).unwrap();
        let mut target = Raster::transparent(5, 5);
        draw_transformed(
            &mut target,
            &src,
            Rect::new(1.0, 1.0, 3.0, 3.0),
            &DrawTransform::identity(),
        );

        for y in 1..4 {
            for x in 1..4 {
                assert_eq!(target.pixel(x, y), Some([200, 100, 50, 255]));
            }
        }
        assert_eq!(target.pixel(0, 0), Some([0, 0, 0, 0]));
        assert_eq!(target.pixel(4, 4), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_quarter_turn_swaps_extent() {
        // 4x2 image centred at (5, 5) rotated 90 degrees covers x 4..6, y 3..7
        let src = Raster::new(4, 2, vec![255; 4 * 2 * 4]).unwrap();
        let mut target = Raster::transparent(10, 10);
        let dest = Rect::new(3.0, 4.0, 4.0, 2.0);
        draw_transformed(
            &mut target,
            &src,
            dest,
            &DrawTransform::rotation(dest.center(), FRAC_PI_2),
        );

        let covered: Vec<(u32, u32)> = (0..10)
            .flat_map(|y| (0..10).map(move |x| (x, y)))
            .filter(|&(x, y)| target.pixel(x, y).map(|p| p[3]) == Some(255))
            .collect();
        assert_eq!(covered.len(), 8);
        assert!(covered.iter().all(|&(x, y)| (4..6).contains(&x) && (3..7).contains(&y)));
    }

    #[test]
    fn test_half_turn_reverses_pixels() {
        let src = test_image(3, 1);
        let mut target = Raster::transparent(3, 1);
        let dest = Rect::new(0.0, 0.0, 3.0, 1.0);
        draw_transformed(&mut target, &src, dest, &DrawTransform::rotation(dest.center(), PI));

        assert_eq!(target.pixel(0, 0), Some([20, 0, 7, 255]));
        assert_eq!(target.pixel(2, 0), Some([0, 0, 7, 255]));
    }

    #[test]
    fn test_scale_about_center() {
        let src = Raster::new(2, 2, vec![255; 16]).unwrap();
        let mut target = Raster::transparent(10, 10);
        let dest = Rect::new(4.0, 4.0, 2.0, 2.0);
        draw_transformed(&mut target, &src, dest, &DrawTransform::scaling(dest.center(), 2.0));

        // Scaled box spans 3..7 on both axes
        assert_eq!(target.pixel(3, 3).map(|p| p[3]), Some(255));
        assert_eq!(target.pixel(6, 6).map(|p| p[3]), Some(255));
        assert_eq!(target.pixel(2, 2).map(|p| p[3]), Some(0));
        assert_eq!(target.pixel(7, 7).map(|p| p[3]), Some(0));
    }

    #[test]
    fn test_degenerate_inputs_draw_nothing() {
        let src = test_image(2, 2);
        let mut target = Raster::transparent(4, 4);
        draw_transformed(&mut target, &src, Rect::new(0.0, 0.0, 0.0, 2.0), &DrawTransform::identity());
        draw_transformed(
            &mut target,
            &src,
            Rect::new(0.0, 0.0, 2.0, 2.0),
            &DrawTransform::scaling(Point::default(), 0.0),
        );
        assert_eq!(target, Raster::transparent(4, 4));
    }

    #[test]
    fn test_transparent_source_keeps_target() {
        let src = Raster::transparent(2, 2);
        let mut target = Raster::new(2, 2, vec![9; 16]).unwrap();
        draw_transformed(&mut target, &src, Rect::new(0.0, 0.0, 2.0, 2.0), &DrawTransform::identity());
        assert_eq!(target.pixels, vec![9; 16]);
    }

    #[test]
    fn test_transform_apply_invert() {
        let t = DrawTransform {
            pivot: Point::new(3.0, 4.0),
            rotation: 0.6,
            scale: 1.7,
        };
        let p = Point::new(10.0, -2.0);
        let back = t.invert(t.apply(p));
        assert!((back.x - p.x).abs() < 1e-9);
        assert!((back.y - p.y).abs() < 1e-9);
    }

    #[test]
    fn test_put_raster_replaces_pixels() {
        let src = Raster::new(2, 1, vec![1, 2, 3, 0, 4, 5, 6, 128]).unwrap();
        let mut target = Raster::new(3, 2, vec![200; 24]).unwrap();
        put_raster(&mut target, &src, 1, 1);

        assert_eq!(target.pixel(1, 1), Some([1, 2, 3, 0]));
        assert_eq!(target.pixel(2, 1), Some([4, 5, 6, 128]));
        assert_eq!(target.pixel(0, 1), Some([200, 200, 200, 200]));
    }

    #[test]
    fn test_put_raster_clips() {
        let src = test_image(3, 3);
        let mut target = Raster::transparent(2, 2);
        put_raster(&mut target, &src, -1, -1);
        assert_eq!(target.pixel(0, 0), Some([10, 10, 7, 255]));
        assert_eq!(target.pixel(1, 1), Some([20, 20, 7, 255]));

        let mut target = Raster::transparent(2, 2);
        put_raster(&mut target, &src, 5, 5);
        assert_eq!(target, Raster::transparent(2, 2));
    }
}
