mod args;

pub use args::{
    CliArgs, Command, CompressionLevel, CropArgs, DrawArgs, PngArgs, ResizeArgs, ResizeMode,
    SpriteSheetArgs, StatArgs,
};
