use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};

use crate::cli::CompressionLevel;
use crate::config::SplitOptions;
use crate::input::load_image;
use crate::output::{ensure_dir, save_png};
use crate::sheet::split;

/// What a sprite-sheet split wrote
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetReport {
    /// Written tile paths in output order
    pub written: Vec<PathBuf>,
    /// Number of empty cells that were skipped
    pub skipped: u32,
}

/// Split the sprite-sheet at `input` into tiles written to `output`.
///
/// Tiles are written one at a time as they are cut. On error, tiles
/// written before the failing cell stay on disk.
pub fn split_sheet(
    input: &Path,
    output: &Path,
    options: &SplitOptions,
    compress: Option<CompressionLevel>,
) -> Result<SheetReport> {
    options.validate()?;
    let sheet = load_image(input)?;

    info!(
        "Splitting {} into {}x{} parts ({} cells) of size {}x{}",
        input.display(),
        options.grid.columns,
        options.grid.rows,
        options.grid.cells(),
        options.tile_size.width,
        options.tile_size.height
    );

    ensure_dir(output)?;

    let mut tiles = split(&sheet, options)?;
    let mut written = Vec::new();

    for tile in tiles.by_ref() {
        let tile = tile.with_context(|| format!("failed to split {}", input.display()))?;
        let path = output.join(&tile.file_name);
        save_png(&tile.image, &path, compress)?;
        debug!(
            "Saved {}x{} image to {}",
            tile.image.width(),
            tile.image.height(),
            path.display()
        );
        written.push(path);
    }

    let skipped = tiles.skipped();
    info!(
        "Wrote {} tiles to {} ({} empty skipped)",
        written.len(),
        output.display(),
        skipped
    );

    Ok(SheetReport { written, skipped })
}
