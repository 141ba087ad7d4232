//! The OKLab pipeline written out explicitly.
//!
//! These functions use Björn Ottosson's published matrices directly instead of
//! going through `palette`, so the gamut solver and the simplified OKHSL
//! reading are pinned to known constants. All of them are total over finite
//! input.

use std::f64::consts::PI;

use crate::color::{parse_color, Color};
use crate::Result;

pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// Gamma-encoded sRGB in [0, 1] to OKLab `[L, a, b]`.
pub fn rgb_to_oklab(r: f64, g: f64, b: f64) -> [f64; 3] {
    let lr = srgb_to_linear(r);
    let lg = srgb_to_linear(g);
    let lb = srgb_to_linear(b);

    let l = 0.4122214708 * lr + 0.5363325363 * lg + 0.0514459929 * lb;
    let m = 0.2119034982 * lr + 0.6806995451 * lg + 0.1073969566 * lb;
    let s = 0.0883024619 * lr + 0.2817188376 * lg + 0.6299787005 * lb;

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    [
        0.2104542553 * l_ + 0.7936177850 * m_ - 0.0040720468 * s_,
        1.9779984951 * l_ - 2.4285922050 * m_ + 0.4505937099 * s_,
        0.0259040371 * l_ + 0.7827717662 * m_ - 0.8086757660 * s_,
    ]
}

/// Hue in degrees, normalized into [0, 360).
fn hue_degrees(a: f64, b: f64) -> f64 {
    (b.atan2(a) * 180.0 / PI).rem_euclid(360.0)
}

/// OKLab to `[L, C, H]`.
pub fn oklab_to_oklch(l: f64, a: f64, b: f64) -> [f64; 3] {
    let c = (a * a + b * b).sqrt();
    [l, c, hue_degrees(a, b)]
}

/// OKLab to a simplified OKHSL `[H, S, L]`.
///
/// Saturation is chroma relative to `L * (1 - L)`. That ratio has no value at
/// `L = 0` or `L = 1`, where the result is achromatic.
pub fn oklab_to_okhsl(l: f64, a: f64, b: f64) -> [f64; 3] {
    let c = (a * a + b * b).sqrt();
    let s = c / (l * (1.0 - l));
    let s = if s.is_finite() { s.clamp(0.0, 1.0) } else { 0.0 };

    [hue_degrees(a, b), s, l]
}

/// OKLCH (hue in degrees) to unclamped linear sRGB.
pub fn oklch_to_linear_rgb(l: f64, c: f64, h: f64) -> [f64; 3] {
    let h_rad = h * PI / 180.0;
    let a = c * h_rad.cos();
    let b = c * h_rad.sin();

    let l_ = l + 0.3963377774 * a + 0.2158037573 * b;
    let m_ = l - 0.1055613458 * a - 0.0638541728 * b;
    let s_ = l - 0.0894841775 * a - 1.2914855480 * b;

    let l3 = l_.powi(3);
    let m3 = m_.powi(3);
    let s3 = s_.powi(3);

    [
        4.0767416621 * l3 - 3.3077115913 * m3 + 0.2309699292 * s3,
        -1.2684380046 * l3 + 2.6097574011 * m3 - 0.3413193965 * s3,
        -0.0041960863 * l3 - 0.7034186147 * m3 + 1.7076147010 * s3,
    ]
}

/// OKLCH to gamma-encoded sRGB. Out of gamut inputs are not clamped.
pub fn oklch_to_rgb(l: f64, c: f64, h: f64) -> [f64; 3] {
    oklch_to_linear_rgb(l, c, h).map(|channel| {
        // the transfer curve is odd-symmetric for negative channels
        channel.signum() * linear_to_srgb(channel.abs())
    })
}

/// Reads any supported color string as `[L, C, H]`.
///
/// `oklch(...)` strings keep their exact channels. Everything else is read as
/// clamped sRGB and sent through [`rgb_to_oklab`].
pub fn hex_to_oklch(text: &str) -> Result<[f64; 3]> {
    match parse_color(text)? {
        Color::Oklch(lch) => Ok([lch.l, lch.chroma, lch.hue.into_positive_degrees()]),
        color => {
            let [r, g, b] = color.to_srgb();
            let [l, a, b] = rgb_to_oklab(r, g, b);
            Ok(oklab_to_oklch(l, a, b))
        }
    }
}
