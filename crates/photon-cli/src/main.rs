//! photon - photo editor with an FFT spectrum view
//!
//! Each subcommand loads one PNG, applies one edit and writes the result.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use photon_ops::{ChannelScale, Filter, Rotation};
use std::path::PathBuf;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "photon")]
#[command(author, version, about = "Photo editor with an FFT spectrum view")]
#[command(long_about = "
Loads a PNG, applies one edit, and writes the result.

Examples:
  photon info photo.png                       # Size and channel stats
  photon rotate photo.png -a 90 -o out.png    # Quarter turn clockwise
  photon crop photo.png -x 10 -y 10 -w 200 -H 100 -o out.png
  photon crop photo.png --select 40,30,200,150 -o out.png
  photon scale photo.png --rgb 1.1,1,0.9 -o out.png
  photon fit photo.png -o preview.png         # Shrink to the display canvas
  photon spectrum photo.png -o spectrum.png   # Centered log-magnitude FFT
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// Editor config (YAML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display image information
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Rotate by 90, 180 or 270 degrees
    #[command(visible_alias = "r")]
    Rotate(RotateArgs),

    /// Crop to a rectangle or a display-space selection
    Crop(CropArgs),

    /// Scale the R, G and B channels
    Scale(ScaleArgs),

    /// Shrink to fit the display canvas
    Fit(FitArgs),

    /// Render the centered log-magnitude spectrum
    #[command(visible_alias = "fft")]
    Spectrum(SpectrumArgs),
}

#[derive(Args)]
struct InfoArgs {
    /// Input image(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Show per-channel statistics
    #[arg(short, long)]
    stats: bool,
}

#[derive(Args)]
struct RotateArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Angle: 90, 180, 270 (or cw, ccw)
    #[arg(short, long, default_value = "90", allow_hyphen_values = true)]
    angle: Rotation,
}

#[derive(Args)]
struct CropArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// X offset
    #[arg(short, required_unless_present = "select")]
    x: Option<u32>,

    /// Y offset
    #[arg(short, required_unless_present = "select")]
    y: Option<u32>,

    /// Width
    #[arg(short, required_unless_present = "select")]
    w: Option<u32>,

    /// Height
    #[arg(short = 'H', required_unless_present = "select")]
    h: Option<u32>,

    /// Corners x0,y0,x1,y1 on the fitted display canvas
    #[arg(long, conflicts_with_all = ["x", "y", "w", "h"])]
    select: Option<String>,
}

#[derive(Args)]
struct ScaleArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Factors as r,g,b
    #[arg(long)]
    rgb: ChannelScale,
}

#[derive(Args)]
struct FitArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Canvas width (overrides config)
    #[arg(long)]
    max_width: Option<u32>,

    /// Canvas height (overrides config)
    #[arg(long)]
    max_height: Option<u32>,

    /// Filter: nearest, bilinear (overrides config)
    #[arg(short, long)]
    filter: Option<Filter>,
}

#[derive(Args)]
struct SpectrumArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)?;

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Rotate(args) => commands::rotate::run(args, config),
        Commands::Crop(args) => commands::crop::run(args, config),
        Commands::Scale(args) => commands::scale::run(args, config),
        Commands::Fit(args) => commands::fit::run(args, config),
        Commands::Spectrum(args) => commands::spectrum::run(args, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_rotate() {
        let cli = Cli::try_parse_from(["photon", "rotate", "a.png", "-a", "-90", "-o", "b.png"]).unwrap();
        match cli.command {
            Commands::Rotate(args) => assert_eq!(args.angle, Rotation::Ccw90),
            _ => panic!("expected rotate"),
        }
    }

    #[test]
    fn test_parse_scale_and_verbosity() {
        let cli = Cli::try_parse_from(["photon", "-vv", "scale", "a.png", "--rgb", "1,0.5,2", "-o", "b.png"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Scale(args) => assert_eq!(args.rgb, ChannelScale::new(1.0, 0.5, 2.0).unwrap()),
            _ => panic!("expected scale"),
        }
    }

    #[test]
    fn test_crop_needs_rect_or_selection() {
        assert!(Cli::try_parse_from(["photon", "crop", "a.png", "-o", "b.png"]).is_err());
        assert!(Cli::try_parse_from(["photon", "crop", "a.png", "-o", "b.png", "--select", "0,0,5,5"]).is_ok());
        assert!(Cli::try_parse_from([
            "photon", "crop", "a.png", "-o", "b.png", "-x", "1", "-y", "1", "-w", "2", "-H", "2"
        ])
        .is_ok());
    }

    #[test]
    fn test_bad_scale_rejected() {
        assert!(Cli::try_parse_from(["photon", "scale", "a.png", "--rgb", "1,1", "-o", "b.png"]).is_err());
    }
}
