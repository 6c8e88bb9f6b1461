use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImgtoolsError {
    #[error("Failed to load image '{path}': {source}")]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to encode image '{path}': {source}")]
    ImageSave {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("No .png images matched the input")]
    NoImages,

    #[error("Input path does not exist: {0}")]
    InputNotFound(PathBuf),

    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unrecognized color '{0}': expected a color name or #RRGGBB / #RRGGBBAA")]
    UnrecognizedColor(String),

    #[error(
        "Crop region {width}x{height} at ({x}, {y}) exceeds image bounds {image_width}x{image_height}"
    )]
    CropOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        image_width: u32,
        image_height: u32,
    },

    #[error("Offset of grid cell at row {row}, column {column} overflows with tile size {width}x{height}")]
    CellOffsetOverflow {
        row: u32,
        column: u32,
        width: u32,
        height: u32,
    },

    #[error("Failed to read metadata for '{path}': {source}")]
    Metadata {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create output directory '{path}': {source}")]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to compress PNG '{path}': {message}")]
    PngCompress { path: PathBuf, message: String },
}
