mod format;
mod naming;

pub use format::{encode_png, save_png};
pub use naming::{ensure_dir, numbered_file_name};
