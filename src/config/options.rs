use super::types::{Dimensions, Grid, Offset};
use crate::cli::ResizeMode;
use crate::color::Color;
use crate::error::ImgtoolsError;

/// Default base name for numbered output files
pub const DEFAULT_NAME: &str = "img";

fn validate_name(name: &str) -> Result<(), ImgtoolsError> {
    if name.is_empty() {
        return Err(ImgtoolsError::InvalidArgument(
            "output name must not be empty".to_string(),
        ));
    }
    if name.contains(['/', '\\']) {
        return Err(ImgtoolsError::InvalidArgument(format!(
            "output name must not contain path separators: {name}"
        )));
    }
    Ok(())
}

/// Settings for splitting a sprite sheet into tiles.
///
/// Defaults: no secondary crop, crop offset `(0, 0)`, empty tiles kept,
/// output name `img`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOptions {
    pub grid: Grid,
    pub tile_size: Dimensions,
    pub crop: Option<Dimensions>,
    pub crop_offset: Offset,
    pub skip_empty: bool,
    pub name: String,
}

impl SplitOptions {
    pub fn new(grid: Grid, tile_size: Dimensions) -> Self {
        Self {
            grid,
            tile_size,
            crop: None,
            crop_offset: Offset::default(),
            skip_empty: false,
            name: DEFAULT_NAME.to_string(),
        }
    }

    pub fn crop(mut self, crop: Option<Dimensions>) -> Self {
        self.crop = crop;
        self
    }

    pub fn crop_offset(mut self, offset: Offset) -> Self {
        self.crop_offset = offset;
        self
    }

    pub fn skip_empty(mut self, skip: bool) -> Self {
        self.skip_empty = skip;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn validate(&self) -> Result<(), ImgtoolsError> {
        self.grid.validate()?;
        self.tile_size.validate("size")?;
        if let Some(crop) = &self.crop {
            crop.validate("crop")?;
        }
        validate_name(&self.name)
    }
}

/// Settings for the `crop` command. Defaults: offset `(0, 0)`, name `img`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropOptions {
    pub size: Dimensions,
    pub offset: Offset,
    pub name: String,
}

impl CropOptions {
    pub fn new(size: Dimensions) -> Self {
        Self {
            size,
            offset: Offset::default(),
            name: DEFAULT_NAME.to_string(),
        }
    }

    pub fn offset(mut self, offset: Offset) -> Self {
        self.offset = offset;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn validate(&self) -> Result<(), ImgtoolsError> {
        self.size.validate("size")?;
        validate_name(&self.name)
    }
}

/// Settings for the `resize` command. Defaults: mode `auto`, name `img`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeOptions {
    pub size: Dimensions,
    pub mode: ResizeMode,
    pub name: String,
}

impl ResizeOptions {
    pub fn new(size: Dimensions) -> Self {
        Self {
            size,
            mode: ResizeMode::default(),
            name: DEFAULT_NAME.to_string(),
        }
    }

    pub fn mode(mut self, mode: ResizeMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn validate(&self) -> Result<(), ImgtoolsError> {
        self.size.validate("size")?;
        validate_name(&self.name)
    }
}

/// Settings for the `draw` command.
///
/// Defaults: no extra opacity, file name `box-<w>x<h>-<color>.png`.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawOptions {
    pub size: Dimensions,
    pub color: Color,
    /// The color as given by the user, used in the default file name
    pub color_label: String,
    pub alpha: Option<f32>,
    pub name: Option<String>,
}

impl DrawOptions {
    /// Build options for a box of `size` filled with the named or hex color.
    pub fn new(size: Dimensions, color: &str) -> Result<Self, ImgtoolsError> {
        Ok(Self {
            size,
            color: color.parse()?,
            color_label: color.to_string(),
            alpha: None,
            name: None,
        })
    }

    pub fn alpha(mut self, alpha: Option<f32>) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    pub fn validate(&self) -> Result<(), ImgtoolsError> {
        self.size.validate("size")?;
        if let Some(alpha) = self.alpha
            && !(0.0..=1.0).contains(&alpha)
        {
            return Err(ImgtoolsError::InvalidArgument(format!(
                "alpha must be between 0 and 1, got {alpha}"
            )));
        }
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        Ok(())
    }

    /// Output file name; a custom name without extension gets `.png`.
    pub fn file_name(&self) -> String {
        match &self.name {
            Some(name) if std::path::Path::new(name).extension().is_some() => name.clone(),
            Some(name) => format!("{name}.png"),
            None => format!(
                "box-{}x{}-{}.png",
                self.size.width,
                self.size.height,
                self.color_label.trim_start_matches('#')
            ),
        }
    }

    /// The fill color with the optional opacity applied.
    pub fn fill(&self) -> Color {
        match self.alpha {
            Some(alpha) => self.color.with_opacity(alpha),
            None => self.color,
        }
    }
}
