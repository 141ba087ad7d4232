//! Projects OKHSL colors onto the unit sphere and back.
//!
//! Lightness becomes height along the polar axis (`z = 2l - 1`), so black is
//! the south pole and white the north pole. Saturation scales the distance
//! from that axis up to the sphere's surface at the given height, and hue is
//! the longitude.

use std::f64::consts::PI;

use palette::Okhsl;
use serde::{Deserialize, Serialize};

use crate::color::{Color, Hsl};

/// Denominators below this are treated as the pole singularity.
const POLE_EPSILON: f64 = 1e-12;

/// A point on or inside the color globe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    /// Degrees in [-90, 90].
    pub lat: f64,
    /// Degrees, periodic in 360.
    pub lon: f64,
    /// Distance from the center, in [0, 1].
    #[serde(alias = "alt")]
    pub r: f64,
}

impl Geo {
    pub fn new(lat: f64, lon: f64, r: f64) -> Self {
        Geo { lat, lon, r }
    }
}

/// Places an OKHSL triple on the sphere.
///
/// `h` passes through as the longitude unreduced. `s` is expected in [0, 1];
/// larger values push `r` past 1.
pub fn hsl_to_geo(h: f64, s: f64, l: f64) -> Geo {
    let z = 2.0 * l - 1.0;
    let rz = s * (1.0 - z * z).max(0.0).sqrt();

    Geo {
        lat: z.atan2(rz) * 180.0 / PI,
        lon: h,
        r: rz.hypot(z),
    }
}

/// Reads the OKHSL triple back off a point on the sphere.
///
/// Longitude is reduced into [0, 360) and the radius is clamped to [0, 1]. At
/// the poles every saturation lands on the same point, so saturation comes
/// back as 0 there.
pub fn geo_to_hsl(geo: Geo) -> Hsl {
    let lat = geo.lat * PI / 180.0;
    let r = geo.r.clamp(0.0, 1.0);

    let z = r * lat.sin();
    let rz = r * lat.cos();

    let denominator = (1.0 - z * z).max(0.0).sqrt();
    let s = if denominator > POLE_EPSILON {
        rz / denominator
    } else {
        0.0
    };

    Hsl::new(geo.lon, s, (z + 1.0) / 2.0)
}

pub fn geo_to_color(geo: Geo) -> Color {
    let hsl = geo_to_hsl(geo);
    Color::Okhsl(Okhsl::new(hsl.h, hsl.s, hsl.l))
}

pub fn color_to_geo(color: &Color) -> Geo {
    let hsl = color.to_okhsl();
    hsl_to_geo(hsl.h, hsl.s, hsl.l)
}
