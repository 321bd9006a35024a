//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{ColorChoice, Parser, Subcommand};
use image::Rgba;

use crate::image::background::{DEFAULT_TOLERANCE, TrimOptions};
use crate::image::codec::{DEFAULT_QUALITY, OutputFormat};
use crate::image::color::parse_color_arg;
use crate::image::convert::ConvertOptions;
use crate::image::recolor::{DEFAULT_ALPHA_THRESHOLD, Gradient, RecolorRule};

/// Single-file raster and SVG transformations
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Print decode and transform details
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Re-encode an image (format from --format or the output extension)
    #[command(name = "format-convert", visible_alias = "convert")]
    FormatConvert {
        #[command(flatten)]
        io: IoArgs,
        #[command(flatten)]
        args: ConvertArgs,
    },

    /// Pad an image with a transparent border
    #[command(name = "add-margins", visible_alias = "margin")]
    AddMargins {
        #[command(flatten)]
        io: IoArgs,

        /// Border width in pixels on every side
        #[arg(allow_hyphen_values = true)]
        margin: String,
    },

    /// Make each row transparent outside its outermost non-background pixels
    #[command(name = "trim-background", visible_alias = "trim")]
    TrimBackground {
        #[command(flatten)]
        io: IoArgs,
        #[command(flatten)]
        args: TrimArgs,
    },

    /// Replace transparent pixels with a solid color
    #[command(name = "flatten-to-white", visible_alias = "flatten")]
    FlattenToWhite {
        #[command(flatten)]
        io: IoArgs,
        #[command(flatten)]
        args: FlattenArgs,
    },

    /// Paint opaque pixels with a diagonal gradient
    #[command(name = "colorize-gradient", visible_alias = "colorize")]
    ColorizeGradient {
        #[command(flatten)]
        io: IoArgs,
        #[command(flatten)]
        args: ColorizeArgs,
    },

    /// Set SVG width, height and viewBox to the smaller side
    #[command(name = "square-svg", visible_alias = "square")]
    SquareSvg {
        #[command(flatten)]
        io: IoArgs,
    },
}

/// Positional input and output paths shared by every subcommand.
#[derive(clap::Args, Debug, Clone)]
pub struct IoArgs {
    /// File to read
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// File to write (replaced only on success)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,
}

/// format-convert arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Output format, overriding the output extension
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// JPEG quality
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_QUALITY,
        value_parser = clap::value_parser!(u8).range(1..=100)
    )]
    pub quality: u8,
}

/// trim-background arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct TrimArgs {
    /// Background color (#rrggbb or #rrggbbaa)
    #[arg(short, long, default_value = "#ffffff", value_parser = parse_color_arg)]
    pub background: Rgba<u8>,

    /// Per-channel tolerance around the background color
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: u8,
}

/// flatten-to-white arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct FlattenArgs {
    /// Pixels with alpha below this are transparent
    #[arg(short, long, default_value_t = DEFAULT_ALPHA_THRESHOLD)]
    pub threshold: u8,

    /// Fill color for transparent pixels
    #[arg(short, long, default_value = "#ffffff", value_parser = parse_color_arg)]
    pub fill: Rgba<u8>,
}

/// colorize-gradient arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ColorizeArgs {
    /// Pixels with alpha below this are transparent
    #[arg(short, long, default_value_t = DEFAULT_ALPHA_THRESHOLD)]
    pub threshold: u8,

    /// Gradient color at the bottom-left corner
    #[arg(short, long, default_value = "#800080", value_parser = parse_color_arg)]
    pub start: Rgba<u8>,

    /// Gradient color at the top-right corner
    #[arg(short, long, default_value = "#ff00ff", value_parser = parse_color_arg)]
    pub end: Rgba<u8>,
}

impl From<&ConvertArgs> for ConvertOptions {
    fn from(args: &ConvertArgs) -> Self {
        Self {
            format: args.format,
            quality: args.quality,
        }
    }
}

impl From<&TrimArgs> for TrimOptions {
    fn from(args: &TrimArgs) -> Self {
        Self {
            background: args.background,
            tolerance: args.tolerance,
        }
    }
}

impl FlattenArgs {
    pub fn rule(&self) -> RecolorRule {
        RecolorRule::Flatten { fill: self.fill }
    }
}

impl ColorizeArgs {
    pub fn rule(&self) -> RecolorRule {
        RecolorRule::Gradient(Gradient {
            start: self.start,
            end: self.end,
        })
    }
}

impl Commands {
    pub const fn io(&self) -> &IoArgs {
        match self {
            Self::FormatConvert { io, .. }
            | Self::AddMargins { io, .. }
            | Self::TrimBackground { io, .. }
            | Self::FlattenToWhite { io, .. }
            | Self::ColorizeGradient { io, .. }
            | Self::SquareSvg { io } => io,
        }
    }
}
