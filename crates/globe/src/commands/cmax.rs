use crate::Result;

use color_globe::max_chroma_in_gamut;

pub struct CmaxArgs<'a, W: std::io::Write> {
    pub lightness: f64,
    pub hue: f64,
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: CmaxArgs<W>) -> Result<()> {
    let chroma = max_chroma_in_gamut(args.lightness, args.hue);

    writeln!(args.stdout, "{:.6}", chroma)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_the_chroma_of_red() {
        let mut fake_stdout = std::io::Cursor::new(Vec::new());

        let result = run(CmaxArgs {
            lightness: 0.627955,
            hue: 29.2339,
            stdout: &mut fake_stdout,
        });

        assert!(result.is_ok());

        let output = String::from_utf8(fake_stdout.into_inner()).unwrap();
        assert!(output.starts_with("0.257"), "{}", output);
    }

    #[test]
    fn negative_hue_wraps_around() {
        let output_for = |hue: f64| {
            let mut fake_stdout = std::io::Cursor::new(Vec::new());
            run(CmaxArgs {
                lightness: 0.5,
                hue,
                stdout: &mut fake_stdout,
            })
            .unwrap();
            let output = String::from_utf8(fake_stdout.into_inner()).unwrap();
            output.trim().parse::<f64>().unwrap()
        };

        assert!((output_for(-30.0) - output_for(330.0)).abs() < 1e-5);
    }
}
