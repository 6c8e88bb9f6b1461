use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};

use crate::cli::CompressionLevel;
use crate::config::CropOptions;
use crate::input::load_image;
use crate::output::{ensure_dir, numbered_file_name, save_png};
use crate::region::{Region, crop_region};

/// Crop every input image to the same region.
///
/// Outputs are numbered with one counter across the whole batch, so the
/// n-th processed file becomes `<name><n>.png`. Returns the written paths.
pub fn crop_images(
    inputs: &[PathBuf],
    output: &Path,
    options: &CropOptions,
    compress: Option<CompressionLevel>,
) -> Result<Vec<PathBuf>> {
    options.validate()?;
    ensure_dir(output)?;

    let region = Region::at(options.offset, options.size);
    let mut written = Vec::with_capacity(inputs.len());

    for (count, input) in (1u32..).zip(inputs) {
        let image = load_image(input)?;
        let cropped = crop_region(&image, region)
            .with_context(|| format!("failed to crop {}", input.display()))?;

        let out_path = output.join(numbered_file_name(&options.name, count));
        save_png(&cropped, &out_path, compress)?;
        debug!(
            "Saved {}x{} cropped image to {}",
            region.width,
            region.height,
            out_path.display()
        );
        written.push(out_path);
    }

    info!("Cropped {} images into {}", written.len(), output.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Dimensions, Offset};
    use image::{Rgba, RgbaImage};

    fn write_sheet(path: &Path) {
        RgbaImage::from_fn(8, 8, |x, y| Rgba([x as u8, y as u8, 0, 255]))
            .save(path)
            .unwrap();
    }

    #[test]
    fn test_crop_images_with_offset() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        write_sheet(&input);
        let out = dir.path().join("out");

        let options = CropOptions::new(Dimensions::new(3, 2)).offset(Offset::new(4, 5));
        let written = crop_images(&[input], &out, &options, None).unwrap();

        assert_eq!(written, vec![out.join("img1.png")]);
        let cropped = image::open(&written[0]).unwrap().into_rgba8();
        assert_eq!(cropped.dimensions(), (3, 2));
        assert_eq!(cropped.get_pixel(0, 0), &Rgba([4, 5, 0, 255]));
    }

    #[test]
    fn test_crop_images_out_of_bounds() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        write_sheet(&input);

        let options = CropOptions::new(Dimensions::new(8, 8)).offset(Offset::new(1, 0));
        let err = crop_images(&[input], dir.path(), &options, None).unwrap_err();

        assert!(format!("{err:#}").contains("exceeds image bounds"));
    }

    #[test]
    fn test_crop_images_rejects_zero_size() {
        let dir = tempfile::tempdir().unwrap();
        let options = CropOptions::new(Dimensions::new(0, 2));

        assert!(crop_images(&[], dir.path(), &options, None).is_err());
    }
}
