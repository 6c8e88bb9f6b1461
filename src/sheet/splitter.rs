use image::RgbaImage;
use log::debug;

use super::is_fully_transparent;
use crate::config::SplitOptions;
use crate::error::ImgtoolsError;
use crate::output::{encode_png, numbered_file_name};
use crate::region::{Region, crop_region};

/// One tile cut from a sprite sheet
#[derive(Debug, Clone)]
pub struct Tile {
    /// 1-based output index, counting emitted tiles only
    pub index: u32,
    /// Grid row the tile was cut from (0-based)
    pub row: u32,
    /// Grid column the tile was cut from (0-based)
    pub column: u32,
    /// Output file name: `<name><index>.png`
    pub file_name: String,
    /// Tile pixels, after the secondary crop if one is set
    pub image: RgbaImage,
}

impl Tile {
    /// Encode the tile as PNG bytes
    pub fn encode(&self) -> image::ImageResult<Vec<u8>> {
        encode_png(&self.image)
    }
}

/// Lazily cuts tiles out of a sprite sheet in row-major order.
///
/// Created by [`split`]. Yields at most `columns * rows` tiles; after an
/// error is yielded the iterator is exhausted.
#[derive(Debug)]
pub struct Tiles<'a> {
    source: &'a RgbaImage,
    options: &'a SplitOptions,
    row: u32,
    column: u32,
    emitted: u32,
    skipped: u32,
    failed: bool,
}

/// Split `source` into tiles according to `options`.
///
/// Options are validated before any tile is cut.
pub fn split<'a>(
    source: &'a RgbaImage,
    options: &'a SplitOptions,
) -> Result<Tiles<'a>, ImgtoolsError> {
    options.validate()?;

    Ok(Tiles {
        source,
        options,
        row: 0,
        column: 0,
        emitted: 0,
        skipped: 0,
        failed: false,
    })
}

impl Tiles<'_> {
    /// Number of tiles yielded so far
    pub fn emitted(&self) -> u32 {
        self.emitted
    }

    /// Number of empty tiles dropped so far
    pub fn skipped(&self) -> u32 {
        self.skipped
    }

    /// Primary region of grid cell (`row`, `column`), or `None` on overflow.
    fn cell_region(&self, row: u32, column: u32) -> Option<Region> {
        let size = self.options.tile_size;
        Some(Region::new(
            size.width.checked_mul(column)?,
            size.height.checked_mul(row)?,
            size.width,
            size.height,
        ))
    }

    fn cut(&self, row: u32, column: u32) -> Result<RgbaImage, ImgtoolsError> {
        let size = self.options.tile_size;
        let region = self
            .cell_region(row, column)
            .ok_or(ImgtoolsError::CellOffsetOverflow {
                row,
                column,
                width: size.width,
                height: size.height,
            })?;

        let part = crop_region(self.source, region)?;

        match self.options.crop {
            Some(crop) => crop_region(&part, Region::at(self.options.crop_offset, crop)),
            None => Ok(part),
        }
    }

    fn advance(&mut self) {
        self.column += 1;
        if self.column == self.options.grid.columns {
            self.column = 0;
            self.row += 1;
        }
    }
}

impl Iterator for Tiles<'_> {
    type Item = Result<Tile, ImgtoolsError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.failed && self.row < self.options.grid.rows {
            let (row, column) = (self.row, self.column);
            self.advance();

            let image = match self.cut(row, column) {
                Ok(image) => image,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            };

            if self.options.skip_empty && is_fully_transparent(&image) {
                debug!("Skipping empty part at row {}, column {}", row, column);
                self.skipped += 1;
                continue;
            }

            self.emitted += 1;
            return Some(Ok(Tile {
                index: self.emitted,
                row,
                column,
                file_name: numbered_file_name(&self.options.name, self.emitted),
                image,
            }));
        }

        None
    }
}
