use serde::{Deserialize, Serialize};

use crate::error::ImgtoolsError;

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Reject zero-sized dimensions. `what` names the option in the error.
    pub fn validate(&self, what: &str) -> Result<(), ImgtoolsError> {
        if self.width == 0 || self.height == 0 {
            return Err(ImgtoolsError::InvalidArgument(format!(
                "{what} must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

impl From<[u32; 2]> for Dimensions {
    fn from([width, height]: [u32; 2]) -> Self {
        Self { width, height }
    }
}

/// A pixel offset from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub x: u32,
    pub y: u32,
}

impl Offset {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl From<[u32; 2]> for Offset {
    fn from([x, y]: [u32; 2]) -> Self {
        Self { x, y }
    }
}

/// Number of tiles to cut from a sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub columns: u32,
    pub rows: u32,
}

impl Grid {
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    pub fn validate(&self) -> Result<(), ImgtoolsError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(ImgtoolsError::InvalidArgument(format!(
                "parts must be at least 1x1, got {}x{}",
                self.columns, self.rows
            )));
        }
        Ok(())
    }

    /// Total number of cells in the grid
    pub fn cells(&self) -> u64 {
        u64::from(self.columns) * u64::from(self.rows)
    }
}

impl From<[u32; 2]> for Grid {
    fn from([columns, rows]: [u32; 2]) -> Self {
        Self { columns, rows }
    }
}

/// Convert a two-value command line option into a fixed pair.
pub fn pair(values: &[u32], what: &str) -> Result<[u32; 2], ImgtoolsError> {
    match values {
        [a, b] => Ok([*a, *b]),
        _ => Err(ImgtoolsError::InvalidArgument(format!(
            "{what} takes exactly two values, got {}",
            values.len()
        ))),
    }
}

/// Sprite-sheet configuration file structure.
///
/// All paths in the config are relative to the config file location.
/// Every field is optional; command line arguments take precedence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SheetConfig {
    /// Sprite-sheet image path
    pub input: Option<String>,
    /// Output directory for the tiles
    pub output_dir: Option<String>,
    /// Base name for output files (img1.png, img2.png, ...)
    pub name: Option<String>,
    /// Number of parts as [columns, rows]
    pub parts: Option<[u32; 2]>,
    /// Size of each part as [width, height]
    pub size: Option<[u32; 2]>,
    /// Secondary crop as [width, height]
    pub crop: Option<[u32; 2]>,
    /// Offset of the secondary crop as [x, y]
    pub crop_offset: Option<[u32; 2]>,
    /// Skip fully transparent parts
    pub skip_empty: bool,
}
