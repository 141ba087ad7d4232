use crate::swatch::swatch;
use crate::Result;

use color_globe::legacy::color_to_geo_alt;
use color_globe::{color_to_geo, format_color, parse_color};

pub struct GeoArgs<'a, W: std::io::Write> {
    pub color: &'a str,
    pub legacy: bool,
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: GeoArgs<W>) -> Result<()> {
    let color = parse_color(args.color)?;
    let hsl = color.to_okhsl();
    let geo = if args.legacy {
        color_to_geo_alt(&color)
    } else {
        color_to_geo(&color)
    };

    writeln!(
        args.stdout,
        "{} {} {}",
        swatch(&color),
        color.to_hex(),
        format_color(&color)
    )?;
    writeln!(
        args.stdout,
        "okhsl  h {:.3}  s {:.3}  l {:.3}",
        hsl.h, hsl.s, hsl.l
    )?;
    writeln!(
        args.stdout,
        "geo    lat {:.3}  lon {:.3}  r {:.3}",
        geo.lat, geo.lon, geo.r
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output_for(color: &str, legacy: bool) -> Result<String> {
        let mut fake_stdout = std::io::Cursor::new(Vec::new());

        run(GeoArgs {
            color,
            legacy,
            stdout: &mut fake_stdout,
        })?;

        Ok(String::from_utf8(fake_stdout.into_inner()).unwrap())
    }

    #[test]
    fn prints_black_at_the_south_pole() {
        let output = output_for("black", false).unwrap();

        assert!(output.contains("#000000"), "hex missing: {}", output);
        assert!(
            output.contains("lat -90.000  lon 0.000  r 1.000"),
            "geo missing: {}",
            output
        );
    }

    #[test]
    fn prints_the_okhsl_reading() {
        let output = output_for("okhsl(370 80% 40%)", false).unwrap();

        assert!(output.contains("okhsl(10 80% 40%)"), "{}", output);
        assert!(output.contains("h 10.000  s 0.800  l 0.400"), "{}", output);
    }

    #[test]
    fn can_use_the_legacy_projection() {
        let output = output_for("okhsl(50 80% 40%)", true).unwrap();

        assert!(output.contains("lat -18.000  lon 50.000  r 0.862"), "{}", output);
    }

    #[test]
    fn fails_on_malformed_oklch() {
        let result = output_for("oklch(50 0.1 20)", false);

        assert!(matches!(
            result,
            Err(crate::Error::Color(
                color_globe::Error::MalformedFunctionalNotation(_)
            ))
        ));
    }
}
