use clap::{CommandFactory, Parser, Subcommand, ValueEnum};

use color_globe::Geo;
use globe::commands::cmax::{run as cmax, CmaxArgs};
use globe::commands::color::{run as color, ColorArgs};
use globe::commands::geo::{run as geo, GeoArgs};
use globe::commands::points::{run as points, PointsArgs};

#[derive(Parser, Debug, Clone)]
#[command(about = "Globe, places colors on a sphere and back", long_about = None)]
#[command(version, about, long_about = None)]
struct Args {
    #[clap(long, global = true, default_value = "auto")]
    color: Color,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[clap(rename_all = "lowercase")]
enum Color {
    Always,
    Auto,
    Never,
}

impl Color {
    fn init(self) {
        // Set a supports-color override based on the variable passed in.
        match self {
            Color::Always => owo_colors::set_override(true),
            Color::Auto => {}
            Color::Never => owo_colors::set_override(false),
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Show where a color sits on the globe
    Geo {
        /// A CSS color, `okhsl(H S L)` or `oklch(L% C H)`
        color: String,
        /// Use the older altitude projection
        #[arg(long)]
        legacy: bool,
    },
    /// Show the color at a point on the globe
    Color {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        /// Distance from the center, 0 to 1
        #[arg(long, default_value_t = 1.0)]
        r: f64,
    },
    /// Show the largest in-gamut OKLCH chroma for a lightness (0 to 1) and hue
    Cmax {
        lightness: f64,
        /// Degrees, any sign
        #[arg(allow_negative_numbers = true)]
        hue: f64,
    },
    /// List the reference points drawn on the globe
    Points {
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let args = Args::parse();
    args.color.init();

    let mut stdout = std::io::stdout();

    let result = match args.command {
        Some(Commands::Geo { color, legacy }) => geo(GeoArgs {
            color: &color,
            legacy,
            stdout: &mut stdout,
        }),
        Some(Commands::Color { lat, lon, r }) => color(ColorArgs {
            geo: Geo::new(lat, lon, r),
            stdout: &mut stdout,
        }),
        Some(Commands::Cmax { lightness, hue }) => cmax(CmaxArgs {
            lightness,
            hue,
            stdout: &mut stdout,
        }),
        Some(Commands::Points { json }) => points(PointsArgs {
            json,
            stdout: &mut stdout,
        }),
        None => {
            let _ = Args::command().print_help();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
