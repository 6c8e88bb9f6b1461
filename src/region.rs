use image::{RgbaImage, imageops};

use crate::config::{Dimensions, Offset};
use crate::error::ImgtoolsError;

/// A rectangular area of an image in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn at(offset: Offset, size: Dimensions) -> Self {
        Self::new(offset.x, offset.y, size.width, size.height)
    }

    /// True if the whole region lies inside an image of the given size.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        let right = self.x.checked_add(self.width);
        let bottom = self.y.checked_add(self.height);
        matches!((right, bottom), (Some(r), Some(b)) if r <= width && b <= height)
    }
}

/// Extract `region` from `image` into a new buffer.
///
/// Regions reaching past the image edge are rejected instead of clamped.
pub fn crop_region(image: &RgbaImage, region: Region) -> Result<RgbaImage, ImgtoolsError> {
    let (width, height) = image.dimensions();
    if !region.fits_within(width, height) {
        return Err(ImgtoolsError::CropOutOfBounds {
            x: region.x,
            y: region.y,
            width: region.width,
            height: region.height,
            image_width: width,
            image_height: height,
        });
    }

    Ok(imageops::crop_imm(image, region.x, region.y, region.width, region.height).to_image())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn gradient(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, 0, 255]))
    }

    #[test]
    fn test_crop_inside_bounds() {
        let img = gradient(8, 8);

        let cropped = crop_region(&img, Region::new(2, 3, 4, 2)).unwrap();

        assert_eq!(cropped.dimensions(), (4, 2));
        assert_eq!(cropped.get_pixel(0, 0), &Rgba([2, 3, 0, 255]));
        assert_eq!(cropped.get_pixel(3, 1), &Rgba([5, 4, 0, 255]));
    }

    #[test]
    fn test_crop_full_image() {
        let img = gradient(5, 7);
        let cropped = crop_region(&img, Region::new(0, 0, 5, 7)).unwrap();
        assert_eq!(cropped, img);
    }

    #[test]
    fn test_crop_out_of_bounds() {
        let img = gradient(8, 8);

        let err = crop_region(&img, Region::new(4, 0, 5, 8)).unwrap_err();
        assert!(matches!(
            err,
            ImgtoolsError::CropOutOfBounds {
                x: 4,
                width: 5,
                image_width: 8,
                ..
            }
        ));

        assert!(crop_region(&img, Region::new(0, 8, 1, 1)).is_err());
    }

    #[test]
    fn test_fits_within_overflow() {
        let region = Region::new(u32::MAX, 0, 2, 1);
        assert!(!region.fits_within(u32::MAX, 1));
    }
}
