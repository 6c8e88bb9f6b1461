use std::fs;
use std::path::Path;

use crate::error::ImgtoolsError;

/// File name for the `index`-th output of a batch: `<name><index>.png`
pub fn numbered_file_name(name: &str, index: u32) -> String {
    format!("{name}{index}.png")
}

/// Create the output directory (and parents) if it doesn't exist
pub fn ensure_dir(path: &Path) -> Result<(), ImgtoolsError> {
    fs::create_dir_all(path).map_err(|e| ImgtoolsError::OutputDir {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_file_name() {
        assert_eq!(numbered_file_name("img", 1), "img1.png");
        assert_eq!(numbered_file_name("hero_walk_", 12), "hero_walk_12.png");
    }

    #[test]
    fn test_ensure_dir_nested_and_existing() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());

        // Already existing directories are fine
        ensure_dir(&nested).unwrap();
    }

    #[test]
    fn test_ensure_dir_over_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("taken");
        fs::write(&file, b"x").unwrap();

        assert!(matches!(
            ensure_dir(&file),
            Err(ImgtoolsError::OutputDir { .. })
        ));
    }
}
