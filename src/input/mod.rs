mod loader;

pub use loader::{load_image, resolve_inputs};
