//! Maps colors onto a unit "color globe" and back.
//!
//! A color is read as OKHSL (hue, saturation, lightness) and projected into
//! spherical coordinates: hue becomes longitude, lightness runs from the south
//! pole (black) to the north pole (white), and saturation pushes the point
//! away from the lightness axis towards the surface.
//!
//! ```
//! use color_globe::{color_to_geo, parse_color};
//!
//! let black = parse_color("black").unwrap();
//! let geo = color_to_geo(&black);
//!
//! assert!((geo.lat + 90.0).abs() < 1e-6);
//! assert!((geo.r - 1.0).abs() < 1e-6);
//! ```
#[macro_use]
extern crate lazy_static;

use thiserror::Error;

pub mod color;
pub mod gamut;
pub mod geo;
pub mod legacy;
pub mod oklab;
pub mod point;

pub use color::{format_color, parse_color, Color, Hsl};
pub use gamut::max_chroma_in_gamut;
pub use geo::{color_to_geo, geo_to_color, geo_to_hsl, hsl_to_geo, Geo};
pub use point::Point;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid oklch color `{0}`")]
    MalformedFunctionalNotation(String),
    #[error("Unrecognized color `{input}`: {source}")]
    UnrecognizedColor {
        input: String,
        #[source]
        source: csscolorparser::ParseColorError,
    },
}
