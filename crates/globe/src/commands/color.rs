use crate::swatch::swatch;
use crate::Result;

use color_globe::{format_color, geo_to_color, Geo};

pub struct ColorArgs<'a, W: std::io::Write> {
    pub geo: Geo,
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: ColorArgs<W>) -> Result<()> {
    let color = geo_to_color(args.geo);

    writeln!(
        args.stdout,
        "{} {} {}",
        swatch(&color),
        color.to_hex(),
        format_color(&color)
    )?;

    Ok(())
}
