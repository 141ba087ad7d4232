use crate::Result;

use color_globe::point::points;

pub struct PointsArgs<'a, W: std::io::Write> {
    pub json: bool,
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: PointsArgs<W>) -> Result<()> {
    let points = points();

    if args.json {
        serde_json::to_writer_pretty(&mut *args.stdout, &points)?;
        writeln!(args.stdout)?;
        return Ok(());
    }

    for point in points {
        writeln!(
            args.stdout,
            "{:<8} {:<14} {} {:>8.3} {:>9.3} {:>6.3}",
            point.group, point.name, point.hex, point.geo.lat, point.geo.lon, point.geo.r
        )?;
    }

    Ok(())
}
