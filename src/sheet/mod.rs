mod empty;
mod splitter;

pub use empty::is_fully_transparent;
pub use splitter::{Tile, Tiles, split};
