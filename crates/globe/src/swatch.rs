use color_globe::Color;
use owo_colors::{OwoColorize as _, Stream};

/// A two character block painted in the color, when the terminal allows it.
pub(crate) fn swatch(color: &Color) -> String {
    let [r, g, b] = color.to_srgb().map(|c| (c * 255.0).round() as u8);

    "██"
        .if_supports_color(Stream::Stdout, |s| s.truecolor(r, g, b))
        .to_string()
}
