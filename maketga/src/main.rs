use clap::Parser;
use log::{debug, info};
use std::{error::Error, path::PathBuf, str::FromStr};
use targa::{create_image, save_image, set_pixel, Color};

type Result<T> = std::result::Result<T, Box<dyn Error>>;

/// Pixel write given on the command line as `X,Y,COLOR`
#[derive(Clone, Debug, PartialEq)]
struct PixelArg {
    x: u16,
    y: u16,
    color: Color,
}

impl FromStr for PixelArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [x, y, color] = parts.as_slice() else {
            return Err(format!("expected X,Y,COLOR but got '{}'", s));
        };
        Ok(Self {
            x: x.parse().map_err(|e| format!("invalid x '{}': {}", x, e))?,
            y: y.parse().map_err(|e| format!("invalid y '{}': {}", y, e))?,
            color: color.parse().map_err(|e: targa::Error| e.to_string())?,
        })
    }
}

fn parse_color(s: &str) -> std::result::Result<Color, String> {
    s.parse().map_err(|e: targa::Error| e.to_string())
}

#[derive(Parser, Debug)]
#[clap(author, version, about = "Creates uncompressed 32-bit TGA images")]
struct Args {
    /// Output TGA file
    output: PathBuf,

    /// Image width in pixels
    #[clap(short = 'W', long)]
    width: u16,

    /// Image height in pixels
    #[clap(short = 'H', long)]
    height: u16,

    /// Background color (RRGGBB or RRGGBBAA)
    #[clap(short, long, default_value = "000000FF", value_parser = parse_color)]
    color: Color,

    /// Pixel to set, as X,Y,COLOR (can be repeated)
    #[clap(short, long = "pixel", value_parser = PixelArg::from_str)]
    pixels: Vec<PixelArg>,

    /// Count pixel Y coordinates from the top row
    #[clap(long)]
    top_down: bool,

    /// Verbose output
    #[clap(short, long)]
    verbose: bool,
}

fn run(args: &Args) -> Result<()> {
    let mut image = create_image(args.width, args.height, args.color)?;
    for p in &args.pixels {
        debug!("Setting pixel ({}, {}) to {:?}", p.x, p.y, p.color);
        set_pixel(p.x, p.y, &mut image, p.color, args.top_down)?;
    }
    save_image(&args.output, &image)?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    info!("maketga {}", env!("CARGO_PKG_VERSION"));
    run(&args)
}
