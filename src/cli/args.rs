use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "imgtools")]
#[command(version, about = "Utilities for image manipulation", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Get information about an image
    #[command(alias = "check")]
    Stat(StatArgs),
    /// Crop images
    Crop(CropArgs),
    /// Resize images
    Resize(ResizeArgs),
    /// Draw a colored box
    Draw(DrawArgs),
    /// Split a sprite-sheet into multiple images
    SpriteSheet(SpriteSheetArgs),
}

#[derive(Args, Debug, Clone)]
pub struct StatArgs {
    /// Path of the image
    #[arg(short, long)]
    pub input: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CropArgs {
    /// Paths, directories or globs of the images to crop
    #[arg(short, long, required = true, num_args = 1..)]
    pub input: Vec<String>,

    /// Output directory
    #[arg(short, long)]
    pub output: PathBuf,

    /// Size of the crop
    #[arg(short, long, required = true, num_args = 2, value_names = ["WIDTH", "HEIGHT"])]
    pub size: Vec<u32>,

    /// Base name of the output images [default: img]
    #[arg(short, long)]
    pub name: Option<String>,

    /// Offset of the crop [default: 0 0]
    #[arg(long, num_args = 2, value_names = ["X", "Y"])]
    pub offset: Option<Vec<u32>>,

    #[command(flatten)]
    pub png: PngArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ResizeArgs {
    /// Paths, directories or globs of the images to resize
    #[arg(short, long, required = true, num_args = 1..)]
    pub input: Vec<String>,

    /// Output directory
    #[arg(short, long)]
    pub output: PathBuf,

    /// Target size
    #[arg(short, long, required = true, num_args = 2, value_names = ["WIDTH", "HEIGHT"])]
    pub size: Vec<u32>,

    /// Base name of the output images [default: img]
    #[arg(short, long)]
    pub name: Option<String>,

    /// Resampling mode
    #[arg(short, long, value_enum, default_value_t = ResizeMode::Auto)]
    pub mode: ResizeMode,

    #[command(flatten)]
    pub png: PngArgs,
}

#[derive(Args, Debug, Clone)]
pub struct DrawArgs {
    /// Size of the box
    #[arg(short, long, required = true, num_args = 2, value_names = ["WIDTH", "HEIGHT"])]
    pub size: Vec<u32>,

    /// Output directory
    #[arg(short, long, default_value = "./")]
    pub output: PathBuf,

    /// File name of the output image [default: box-<w>x<h>-<color>.png]
    #[arg(short, long)]
    pub name: Option<String>,

    /// Color name or #RRGGBB / #RRGGBBAA hex value
    #[arg(short, long, default_value = "red")]
    pub color: String,

    /// Opacity of the box between 0 and 1
    #[arg(short, long)]
    pub alpha: Option<f32>,

    #[command(flatten)]
    pub png: PngArgs,
}

#[derive(Args, Debug, Clone)]
pub struct SpriteSheetArgs {
    /// Path to the sprite-sheet to split
    #[arg(short, long, required_unless_present = "config")]
    pub input: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, required_unless_present = "config")]
    pub output: Option<PathBuf>,

    /// Number of parts (columns and rows) to split the image into
    #[arg(short, long, num_args = 2, value_names = ["X", "Y"], required_unless_present = "config")]
    pub parts: Option<Vec<u32>>,

    /// Size of each part
    #[arg(short, long, num_args = 2, value_names = ["WIDTH", "HEIGHT"], required_unless_present = "config")]
    pub size: Option<Vec<u32>>,

    /// Crop every part to this size after splitting
    #[arg(short, long, num_args = 2, value_names = ["WIDTH", "HEIGHT"])]
    pub crop: Option<Vec<u32>>,

    /// Offset of the crop inside each part [default: 0 0]
    #[arg(long, num_args = 2, value_names = ["X", "Y"])]
    pub crop_offset: Option<Vec<u32>>,

    /// Base name of the output images [default: img]
    #[arg(short, long)]
    pub name: Option<String>,

    /// Skip fully transparent parts
    #[arg(long)]
    pub skip_empty: bool,

    /// Load settings from a JSON sheet config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub png: PngArgs,
}

/// Options shared by every command that writes PNG files
#[derive(Args, Debug, Clone, Default)]
pub struct PngArgs {
    /// Compress PNG output (0-6 or 'max'). Default level is 2 if flag is present without value.
    #[arg(long, value_name = "LEVEL", default_missing_value = "2", num_args = 0..=1)]
    pub compress: Option<CompressionLevel>,
}

/// Resampling mode used by `resize`
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum ResizeMode {
    /// Smooth (bilinear) resampling
    #[default]
    Auto,
    /// Nearest neighbor (best for pixel art)
    Nearest,
}

impl ResizeMode {
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            ResizeMode::Auto => image::imageops::FilterType::Triangle,
            ResizeMode::Nearest => image::imageops::FilterType::Nearest,
        }
    }
}

/// PNG compression level (0-6 or max)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionLevel {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression
    Max,
}

impl std::str::FromStr for CompressionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("max") {
            Ok(CompressionLevel::Max)
        } else {
            s.parse::<u8>()
                .map_err(|_e| format!("invalid compression level: {}", s))
                .and_then(|n| {
                    if n <= 6 {
                        Ok(CompressionLevel::Level(n))
                    } else {
                        Err(format!("compression level must be 0-6 or 'max', got {}", n))
                    }
                })
        }
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        CompressionLevel::Level(2)
    }
}
