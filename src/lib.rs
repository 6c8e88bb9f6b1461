pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod input;
pub mod ops;
pub mod output;
pub mod region;
pub mod sheet;

pub use cli::{CliArgs, Command, CompressionLevel, ResizeMode};
pub use color::{Color, NamedColor};
pub use config::{CropOptions, Dimensions, DrawOptions, Grid, Offset, ResizeOptions, SplitOptions};
pub use error::ImgtoolsError;
pub use region::{Region, crop_region};
pub use sheet::{Tile, Tiles, split};
