//! Finds how much chroma sRGB can show at a given lightness and hue.

use crate::oklab::oklch_to_linear_rgb;

/// Slack on each side of the sRGB cube when testing membership.
pub const GAMUT_MARGIN: f64 = 1e-5;

/// The bisection stops once the chroma interval is narrower than this.
pub const CHROMA_EPSILON: f64 = 1e-7;

/// Whether every linear channel lies within the sRGB cube, give or take
/// [`GAMUT_MARGIN`].
pub fn in_gamut(rgb: [f64; 3]) -> bool {
    rgb.iter()
        .all(|&c| (-GAMUT_MARGIN..=1.0 + GAMUT_MARGIN).contains(&c))
}

/// The largest OKLCH chroma in [0, 1] that stays in sRGB for lightness `l`
/// and hue `h` (degrees).
///
/// Bisects on chroma, assuming membership flips once from in to out as chroma
/// grows. Hues where that does not hold get a smaller, still in-gamut answer.
pub fn max_chroma_in_gamut(l: f64, h: f64) -> f64 {
    let mut low = 0.0;
    let mut high = 1.0;
    let mut best = 0.0;

    while high - low > CHROMA_EPSILON {
        let c = (low + high) / 2.0;

        if in_gamut(oklch_to_linear_rgb(l, c, h)) {
            best = c;
            low = c;
        } else {
            high = c;
        }
    }

    best
}
