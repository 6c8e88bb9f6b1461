mod load;
mod options;
mod types;

pub use load::LoadedConfig;
pub use options::{CropOptions, DEFAULT_NAME, DrawOptions, ResizeOptions, SplitOptions};
pub use types::{Dimensions, Grid, Offset, SheetConfig, pair};
