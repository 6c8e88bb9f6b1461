mod crop;
mod draw;
mod resize;
mod sprite_sheet;
pub mod stat;

pub use crop::crop_images;
pub use draw::{draw_box, render_box};
pub use resize::resize_images;
pub use sprite_sheet::{SheetReport, split_sheet};
pub use stat::{ImageStat, inspect};
