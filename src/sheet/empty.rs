use image::RgbaImage;

/// True if every pixel has an alpha of exactly zero.
///
/// Zero-sized images count as empty.
pub fn is_fully_transparent(image: &RgbaImage) -> bool {
    image.pixels().all(|pixel| pixel[3] == 0)
}
