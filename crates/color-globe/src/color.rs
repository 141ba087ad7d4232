use std::fmt;
use std::str::FromStr;

use palette::{convert::FromColorUnclamped, Okhsl, Oklab, Oklch, Srgb};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::gamut::max_chroma_in_gamut;
use crate::{Error, Result};

/// OKLab chroma below which a color sits on the lightness axis and has no hue.
const ACHROMATIC_CHROMA: f64 = 1e-5;

lazy_static! {
    static ref OKHSL_NOTATION: Regex = Regex::new(r"(?i)^okhsl\((.+)\)$").unwrap();
    static ref OKLCH_NOTATION: Regex =
        Regex::new(r"(?i)^oklch\(\s*([\d.]+)%\s+([\d.]+)\s+([\d.]+)\s*\)$").unwrap();
    static ref LEADING_NUMBER: Regex =
        Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").unwrap();
}

/// A parsed color, remembering the notation it was written in.
#[derive(Debug, Clone, Copy)]
pub enum Color {
    Srgb(Srgb<f64>),
    Okhsl(Okhsl<f64>),
    Oklch(Oklch<f64>),
}

/// The OKHSL channels of a color, ready for projection.
///
/// `h` is in [0, 360), `s` and `l` are in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Hsl {
            h: if h.is_nan() { 0.0 } else { h.rem_euclid(360.0) },
            s: if s.is_nan() { 0.0 } else { s.clamp(0.0, 1.0) },
            l: if l.is_nan() { 0.5 } else { l.clamp(0.0, 1.0) },
        }
    }

    fn from_okhsl(okhsl: Okhsl<f64>) -> Self {
        Hsl::new(
            okhsl.hue.into_positive_degrees(),
            okhsl.saturation,
            okhsl.lightness,
        )
    }
}

impl Color {
    fn to_oklab(self) -> Oklab<f64> {
        match self {
            Color::Srgb(rgb) => Oklab::from_color_unclamped(rgb),
            Color::Okhsl(okhsl) => Oklab::from_color_unclamped(okhsl),
            Color::Oklch(oklch) => Oklab::from_color_unclamped(oklch),
        }
    }

    /// Reads the color as OKHSL.
    ///
    /// Colors written in OKHSL keep their channels. Everything else goes
    /// through OKLab, and colors on the lightness axis get hue 0.
    pub fn to_okhsl(&self) -> Hsl {
        let okhsl = match *self {
            Color::Okhsl(okhsl) => okhsl,
            color => {
                let oklab = color.to_oklab();

                if oklab.a.hypot(oklab.b) < ACHROMATIC_CHROMA {
                    Okhsl::from_color_unclamped(Oklab::new(oklab.l, 0.0, 0.0))
                } else {
                    Okhsl::from_color_unclamped(oklab)
                }
            }
        };

        Hsl::from_okhsl(okhsl)
    }

    /// Gamma-encoded sRGB channels, clamped into the sRGB cube.
    pub fn to_srgb(&self) -> [f64; 3] {
        let rgb = match *self {
            Color::Srgb(rgb) => rgb,
            color => Srgb::from_color_unclamped(color.to_oklab()),
        };

        [rgb.red, rgb.green, rgb.blue].map(|c| if c.is_nan() { 0.0 } else { c.clamp(0.0, 1.0) })
    }

    /// `#RRGGBB`, after clipping into sRGB.
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_srgb().map(|c| (c * 255.0).round() as u8);

        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_color(self))
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_color(s)
    }
}

/// Parses `okhsl(H S L)`, `oklch(L% C H)` or any CSS color.
///
/// The okhsl notation never fails: unreadable channels become 0. The oklch
/// notation has a strict grammar and fails with
/// [`Error::MalformedFunctionalNotation`].
pub fn parse_color(text: &str) -> Result<Color> {
    let text = text.trim();

    if let Some(captures) = OKHSL_NOTATION.captures(text) {
        return Ok(Color::Okhsl(parse_okhsl_channels(&captures[1])));
    }

    if is_oklch_notation(text) {
        let [l, c, h] = parse_oklch(text)?;
        return Ok(Color::Oklch(Oklch::new(l, c, h)));
    }

    let parsed = csscolorparser::parse(text).map_err(|source| Error::UnrecognizedColor {
        input: text.to_string(),
        source,
    })?;

    Ok(Color::Srgb(Srgb::new(parsed.r, parsed.g, parsed.b)))
}

/// Renders a color in the notation it was parsed from.
///
/// sRGB colors become `#RRGGBB`. OKHSL and OKLCH keep their functional
/// notation, with channels pulled back inside the displayable range.
pub fn format_color(color: &Color) -> String {
    match *color {
        Color::Srgb(_) => color.to_hex(),
        Color::Okhsl(_) => {
            let hsl = color.to_okhsl();

            format!(
                "okhsl({} {}% {}%)",
                round_to(hsl.h, 1),
                round_to(hsl.s * 100.0, 1),
                round_to(hsl.l * 100.0, 1)
            )
        }
        Color::Oklch(oklch) => {
            let l = oklch.l.clamp(0.0, 1.0);
            let h = oklch.hue.into_positive_degrees();
            // the gamut margin leaves about 0.05 of chroma even at L = 0
            let c = oklch.chroma.clamp(0.0, max_chroma_in_gamut(l, h));

            format!(
                "oklch({}% {} {})",
                round_to(l * 100.0, 1),
                round_to(c, 4),
                round_to(h, 1)
            )
        }
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let rounded = (value * factor).round() / factor;

    // avoids printing "-0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

fn is_oklch_notation(text: &str) -> bool {
    text.get(..6)
        .map_or(false, |prefix| prefix.eq_ignore_ascii_case("oklch("))
}

/// Strict `oklch(L% C H)`, with L scaled down to [0, 1].
pub(crate) fn parse_oklch(text: &str) -> Result<[f64; 3]> {
    let captures = OKLCH_NOTATION
        .captures(text.trim())
        .ok_or_else(|| Error::MalformedFunctionalNotation(text.to_string()))?;

    let channel = |i: usize| leading_number(&captures[i]).unwrap_or(0.0);

    Ok([channel(1) / 100.0, channel(2), channel(3)])
}

fn parse_okhsl_channels(inner: &str) -> Okhsl<f64> {
    let mut channels = [0.0; 3];

    for (i, token) in inner.split_whitespace().take(3).enumerate() {
        let Some(value) = leading_number(token) else {
            continue;
        };

        channels[i] = match i {
            0 => value,
            _ if token.contains('%') => (value / 100.0).min(1.0),
            _ => value.min(1.0),
        };
    }

    let [h, s, l] = channels;
    Okhsl::new(h, s, l)
}

/// Reads the numeric prefix of a token, so `"80%"` is 80 and `"foo"` is nothing.
fn leading_number(token: &str) -> Option<f64> {
    LEADING_NUMBER
        .find(token)
        .and_then(|m| m.as_str().parse().ok())
}
