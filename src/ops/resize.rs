use std::path::{Path, PathBuf};

use anyhow::Result;
use image::imageops;
use log::{debug, info};

use crate::cli::CompressionLevel;
use crate::config::ResizeOptions;
use crate::input::load_image;
use crate::output::{ensure_dir, numbered_file_name, save_png};

/// Resize every input image to the same size.
///
/// Uses the same batch-wide numbering as `crop`. Returns the written paths.
pub fn resize_images(
    inputs: &[PathBuf],
    output: &Path,
    options: &ResizeOptions,
    compress: Option<CompressionLevel>,
) -> Result<Vec<PathBuf>> {
    options.validate()?;
    ensure_dir(output)?;

    let filter = options.mode.to_image_filter();
    let mut written = Vec::with_capacity(inputs.len());

    for (count, input) in (1u32..).zip(inputs) {
        let image = load_image(input)?;
        let resized = imageops::resize(&image, options.size.width, options.size.height, filter);

        let out_path = output.join(numbered_file_name(&options.name, count));
        save_png(&resized, &out_path, compress)?;
        debug!(
            "Saved {}x{} resized image to {}",
            options.size.width,
            options.size.height,
            out_path.display()
        );
        written.push(out_path);
    }

    info!("Resized {} images into {}", written.len(), output.display());
    Ok(written)
}
