use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::Result;
use image::{ImageFormat, ImageResult, RgbaImage};

use crate::cli::CompressionLevel;
use crate::error::ImgtoolsError;

/// Encode an image as RGBA PNG in memory
pub fn encode_png(image: &RgbaImage) -> ImageResult<Vec<u8>> {
    let mut png_data = Cursor::new(Vec::new());
    image.write_to(&mut png_data, ImageFormat::Png)?;
    Ok(png_data.into_inner())
}

/// Save an image as PNG, optionally with compression
pub fn save_png(image: &RgbaImage, path: &Path, compress: Option<CompressionLevel>) -> Result<()> {
    let png_data = encode_png(image).map_err(|e| ImgtoolsError::ImageSave {
        path: path.to_path_buf(),
        source: e,
    })?;

    let output_data = if let Some(level) = compress {
        // Compress with oxipng
        let opts = match level {
            CompressionLevel::Level(n) => oxipng::Options::from_preset(n),
            CompressionLevel::Max => oxipng::Options::max_compression(),
        };
        oxipng::optimize_from_memory(&png_data, &opts).map_err(|e| {
            ImgtoolsError::PngCompress {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?
    } else {
        png_data
    };

    fs::write(path, output_data).map_err(|e| ImgtoolsError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
