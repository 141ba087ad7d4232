//! The older "altitude" globe projection.
//!
//! Latitude is linear in lightness and the radius blends saturation towards 1
//! near the poles, so the sphere is never entered at the poles but the mapping
//! has no inverse. Kept for comparing against layouts made with it; new code
//! should use [`crate::geo`].

use std::f64::consts::PI;

use crate::color::{Color, Hsl};
use crate::geo::Geo;
use crate::oklab::oklab_to_okhsl;

/// Projects a color with the altitude formula.
pub fn color_to_geo_alt(color: &Color) -> Geo {
    let Hsl { h, s, l } = color.to_okhsl();

    let lightness_factor = ((l - 0.5).abs() * PI).sin();

    Geo {
        lat: (l - 0.5) * 180.0,
        lon: h % 360.0,
        r: s + (1.0 - s) * lightness_factor,
    }
}

/// Reads a latitude/longitude pair as a color with the simplified OKHSL.
///
/// Chroma peaks at 0.4 on the equator and falls linearly to 0 at the poles.
pub fn lat_lon_to_okhsl(lat: f64, lon: f64) -> Hsl {
    let l = (lat + 90.0) / 180.0;
    let h = lon.rem_euclid(360.0);
    let c = (0.5 - (l - 0.5).abs()) * 2.0 * 0.4;

    let h_rad = h * PI / 180.0;
    let [h, s, l] = oklab_to_okhsl(l, c * h_rad.cos(), c * h_rad.sin());

    Hsl::new(h, s, l)
}
