use std::path::{Path, PathBuf};

use anyhow::Result;
use image::RgbaImage;
use log::debug;

use crate::cli::CompressionLevel;
use crate::config::DrawOptions;
use crate::output::{ensure_dir, save_png};

/// Render a solid box
pub fn render_box(options: &DrawOptions) -> RgbaImage {
    RgbaImage::from_pixel(
        options.size.width,
        options.size.height,
        options.fill().to_rgba(),
    )
}

/// Draw a solid box and write it into `output`. Returns the written path.
pub fn draw_box(
    output: &Path,
    options: &DrawOptions,
    compress: Option<CompressionLevel>,
) -> Result<PathBuf> {
    options.validate()?;
    ensure_dir(output)?;

    let image = render_box(options);
    let path = output.join(options.file_name());
    save_png(&image, &path, compress)?;

    debug!(
        "Saved {}x{} {} box to {}",
        options.size.width,
        options.size.height,
        options.fill(),
        path.display()
    );

    Ok(path)
}
