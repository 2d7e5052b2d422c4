// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The standard HSL ⇄ RGB algorithm. Computation stays in `f64` until the
//! final rounding step at the API boundary.

use crate::{HslColor, RgbColor};

/// Convert RGB channel values into hue/saturation/lightness.
///
/// Achromatic colors (all channels equal) report hue 0 and saturation 0.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rgb_to_hsl(rgb: RgbColor) -> HslColor {
    let r = f64::from(rgb.red) / 255.0;
    let g = f64::from(rgb.green) / 255.0;
    let b = f64::from(rgb.blue) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;

    if (max - min).abs() < f64::EPSILON {
        // Achromatic (gray): hue and saturation are both zero.
        return HslColor {
            hue: 0,
            saturation: 0,
            lightness: (lightness * 100.0).round() as u8,
        };
    }

    let d = max - min;
    let saturation = if lightness > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    // Hue is computed piecewise by whichever channel is max, normalized to
    // [0, 1) then scaled to degrees.
    let hue_sector = if (max - r).abs() < f64::EPSILON {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if (max - g).abs() < f64::EPSILON {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    let hue = hue_sector / 6.0;

    HslColor {
        hue: (hue * 360.0).round() as u16,
        saturation: (saturation * 100.0).round() as u8,
        lightness: (lightness * 100.0).round() as u8,
    }
}

/// Convert hue/saturation/lightness into RGB channel values.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hsl_to_rgb(hsl: HslColor) -> RgbColor {
    let h = f64::from(hsl.hue) / 360.0;
    let s = f64::from(hsl.saturation) / 100.0;
    let l = f64::from(hsl.lightness) / 100.0;

    let (r, g, b) = if s < f64::EPSILON {
        // Achromatic.
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };

    RgbColor {
        red: (r * 255.0).round() as u8,
        green: (g * 255.0).round() as u8,
        blue: (b * 255.0).round() as u8,
    }
}

/// The standard `hue2rgb(p, q, t)` piecewise helper, with `t` wrapped into
/// [0, 1).
fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
