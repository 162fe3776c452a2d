//! Colour adjustment algorithms.
//!
//! Every function reads an RGBA buffer (4 bytes per pixel, row-major order)
//! and returns a newly allocated buffer of the same length. Alpha is never
//! touched, and a trailing incomplete pixel is copied through unchanged.
//!
//! ## Composition Order
//! 1. RGB channel offset
//! 2. Brightness / contrast
//! 3. Saturation (HSL)
//! 4. Grayscale

use crate::ColorParams;

/// Midpoint the contrast transform pivots around.
const CONTRAST_PIVOT: f64 = 127.5;

/// Apply every non-neutral stage of `params` in composition order.
///
/// Callers always pass the same baseline buffer; results are never fed back
/// in, so repeated edits do not accumulate rounding error.
pub fn apply_color_params(pixels: &[u8], params: &ColorParams) -> Vec<u8> {
    let mut out = pixels.to_vec();
    if params.is_neutral() {
        return out;
    }

    let offset = params.rgb_offset;
    if !offset.is_neutral() {
        out = apply_rgb_offset(&out, offset.r, offset.g, offset.b);
    }
    if params.brightness != 0.0 || params.contrast != 0.0 {
        out = apply_brightness_contrast(&out, params.brightness, params.contrast);
    }
    if params.saturation != 0.0 {
        out = apply_saturation(&out, params.saturation);
    }
    if params.grayscale {
        out = to_grayscale(&out);
    }
    out
}

/// Shift each colour channel by a signed offset, clamping to `[0, 255]`.
pub fn apply_rgb_offset(pixels: &[u8], dr: i32, dg: i32, db: i32) -> Vec<u8> {
    let mut out = pixels.to_vec();
    if dr == 0 && dg == 0 && db == 0 {
        return out;
    }

    for chunk in out.chunks_exact_mut(4) {
        chunk[0] = offset_channel(chunk[0], dr);
        chunk[1] = offset_channel(chunk[1], dg);
        chunk[2] = offset_channel(chunk[2], db);
    }
    out
}

#[inline]
fn offset_channel(value: u8, offset: i32) -> u8 {
    (value as i32 + offset).clamp(0, 255) as u8
}

/// Brightness then contrast, both roughly in `[-100, 100]`.
///
/// Each parameter maps to a multiplier `(param + 100) / 100`. Brightness
/// scales the channel; contrast then stretches it around 127.5.
pub fn apply_brightness_contrast(pixels: &[u8], brightness: f64, contrast: f64) -> Vec<u8> {
    let brightness_factor = (brightness + 100.0) / 100.0;
    let contrast_factor = (contrast + 100.0) / 100.0;

    let mut lut = [0u8; 256];
    for (value, slot) in lut.iter_mut().enumerate() {
        let v = value as f64 * brightness_factor;
        let v = (v - CONTRAST_PIVOT) * contrast_factor + CONTRAST_PIVOT;
        *slot = v.round().clamp(0.0, 255.0) as u8;
    }

    let mut out = pixels.to_vec();
    for chunk in out.chunks_exact_mut(4) {
        chunk[0] = lut[chunk[0] as usize];
        chunk[1] = lut[chunk[1] as usize];
        chunk[2] = lut[chunk[2] as usize];
    }
    out
}

/// Scale HSL saturation by `delta` percent: `S' = clamp(S + S * delta / 100, 0, 1)`.
///
/// Hue and lightness are preserved.
pub fn apply_saturation(pixels: &[u8], delta: f64) -> Vec<u8> {
    let mut out = pixels.to_vec();
    if delta == 0.0 {
        return out;
    }

    for chunk in out.chunks_exact_mut(4) {
        let (h, s, l) = rgb_to_hsl(
            chunk[0] as f64 / 255.0,
            chunk[1] as f64 / 255.0,
            chunk[2] as f64 / 255.0,
        );
        let s = (s + s * delta / 100.0).clamp(0.0, 1.0);
        let (r, g, b) = hsl_to_rgb(h, s, l);
        chunk[0] = to_u8(r);
        chunk[1] = to_u8(g);
        chunk[2] = to_u8(b);
    }
    out
}

/// Integer luma `(38R + 75G + 15B) >> 7` written to all three channels.
pub fn to_grayscale(pixels: &[u8]) -> Vec<u8> {
    let mut out = pixels.to_vec();
    for chunk in out.chunks_exact_mut(4) {
        let gray = ((chunk[0] as u32 * 38 + chunk[1] as u32 * 75 + chunk[2] as u32 * 15) >> 7) as u8;
        chunk[0] = gray;
        chunk[1] = gray;
        chunk[2] = gray;
    }
    out
}

/// Convert RGB in `[0, 1]` to HSL, all components in `[0, 1]`.
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h / 6.0, s, l)
}

/// Convert HSL in `[0, 1]` back to RGB. Hue is wrapped into `[0, 1)` first.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }

    let h = h.rem_euclid(1.0);
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    (
        hue_sector(p, q, h + 1.0 / 3.0),
        hue_sector(p, q, h),
        hue_sector(p, q, h - 1.0 / 3.0),
    )
}

#[inline]
fn hue_sector(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

#[inline]
fn to_u8(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}


// ============================================================================
// Property-Based Tests
// ============================================================================
