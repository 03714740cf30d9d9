//! Command-line front end: convert color notations and write wallpapers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use solid_wallpaper::{
    write_to_dir, ExportSettings, ImageFormat, Rgb, SizePx, DEFAULT_JPEG_QUALITY, PRESETS,
};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "solid-wallpaper", version, about = "Solid color wallpaper generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print a color as HEX, RGB and HSL.
    Convert {
        /// Color in HEX, rgb() or hsl() notation.
        color: String,
    },

    /// Write a solid-color wallpaper image.
    Render {
        /// Color in HEX, rgb() or hsl() notation.
        color: String,

        /// Image size as WIDTHxHEIGHT.
        #[arg(long, default_value_t = SizePx::default())]
        size: SizePx,

        #[arg(long, value_enum, default_value_t = ImageFormat::Png)]
        format: ImageFormat,

        /// JPEG quality between 0.5 and 1.0.
        #[arg(long, default_value_t = DEFAULT_JPEG_QUALITY)]
        quality: f32,

        /// Directory to write the image into.
        #[arg(long, short, default_value = ".")]
        out: PathBuf,
    },

    /// Print a random color as HEX, RGB and HSL.
    Random,

    /// List the built-in size presets.
    Presets,
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("solid_wallpaper=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_color(text: &str) -> Option<Rgb> {
    match text.parse::<Rgb>() {
        Ok(color) => Some(color),
        Err(err) => {
            error!("{err}");
            None
        }
    }
}

fn print_notations(color: Rgb) {
    println!("{}", color.to_hex());
    println!("{color}");
    println!("{}", color.to_hsl());
}

fn main() -> ExitCode {
    init_logging();

    match Cli::parse().command {
        Command::Convert { color } => {
            let Some(color) = parse_color(&color) else {
                return ExitCode::FAILURE;
            };
            print_notations(color);
        }
        Command::Random => print_notations(Rgb::random()),
        Command::Render {
            color,
            size,
            format,
            quality,
            out,
        } => {
            let Some(color) = parse_color(&color) else {
                return ExitCode::FAILURE;
            };
            let settings = ExportSettings::new(size, format).with_jpeg_quality(quality);
            match write_to_dir(color, &settings, &out) {
                Ok(path) => println!("{}", path.display()),
                Err(err) => {
                    error!("{err}");
                    return ExitCode::FAILURE;
                }
            }
        }
        Command::Presets => {
            for preset in PRESETS {
                println!("{:<14} {}", preset.label, preset.size);
            }
        }
    }

    ExitCode::SUCCESS
}
