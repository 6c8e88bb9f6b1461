use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::{ImageReader, RgbaImage};
use log::{debug, warn};

use crate::error::ImgtoolsError;

/// Resolve input arguments into the ordered list of PNG files to process.
///
/// Each argument is a glob pattern, a directory (walked recursively) or a
/// file path. Matches of one argument are sorted by path; arguments keep
/// the order they were given in.
pub fn resolve_inputs(inputs: &[impl AsRef<str>]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for input in inputs {
        let input = input.as_ref();
        let mut matched = Vec::new();

        if is_glob_pattern(input) {
            let entries = glob::glob(input).map_err(|e| ImgtoolsError::InvalidGlob {
                pattern: input.to_string(),
                source: e,
            })?;

            for entry in entries {
                let path = entry.with_context(|| format!("failed to read glob entry: {}", input))?;
                if path.is_file() && is_png(&path) {
                    matched.push(path);
                }
            }
        } else {
            let path = Path::new(input);
            if !path.exists() {
                return Err(ImgtoolsError::InputNotFound(path.to_path_buf()).into());
            }

            if path.is_file() {
                if is_png(path) {
                    matched.push(path.to_path_buf());
                }
            } else if path.is_dir() {
                collect_from_directory(path, &mut matched)?;
            }
        }

        if matched.is_empty() {
            warn!("No .png images matched '{}'", input);
        } else {
            debug!("'{}' matched {} images", input, matched.len());
        }

        matched.sort();
        paths.extend(matched);
    }

    if paths.is_empty() {
        return Err(ImgtoolsError::NoImages.into());
    }

    Ok(paths)
}

/// Decode an image file into RGBA8.
pub fn load_image(path: &Path) -> Result<RgbaImage, ImgtoolsError> {
    let img = ImageReader::open(path)
        .map_err(|e| ImgtoolsError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .with_guessed_format()
        .map_err(|e| ImgtoolsError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .decode()
        .map_err(|e| ImgtoolsError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .into_rgba8();

    Ok(img)
}

fn collect_from_directory(dir: &Path, paths: &mut Vec<PathBuf>) -> Result<()> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    for entry in entries {
        let path = entry?.path();

        if path.is_file() && is_png(&path) {
            paths.push(path);
        } else if path.is_dir() {
            collect_from_directory(&path, paths)?;
        }
    }

    Ok(())
}

/// Check if a pattern contains glob characters.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?') || pattern.contains('[')
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use std::fs;

    fn write_png(path: &Path) {
        RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 255]))
            .save(path)
            .unwrap();
    }

    #[test]
    fn test_is_glob_pattern() {
        assert!(is_glob_pattern("*.png"));
        assert!(is_glob_pattern("sprites/**/*.png"));
        assert!(is_glob_pattern("sprite?.png"));
        assert!(is_glob_pattern("sprite[0-9].png"));
        assert!(!is_glob_pattern("sprite.png"));
        assert!(!is_glob_pattern("sprites/hero.png"));
    }

    #[test]
    fn test_is_png() {
        assert!(is_png(Path::new("a.png")));
        assert!(is_png(Path::new("dir/A.PNG")));
        assert!(!is_png(Path::new("a.jpg")));
        assert!(!is_png(Path::new("png")));
    }

    #[test]
    fn test_resolve_glob_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("b.png"));
        write_png(&dir.path().join("a.png"));
        fs::write(dir.path().join("notes.txt"), "x").unwrap();

        let pattern = format!("{}/*", dir.path().display());
        let paths = resolve_inputs(&[pattern]).unwrap();

        assert_eq!(
            paths,
            vec![dir.path().join("a.png"), dir.path().join("b.png")]
        );
    }

    #[test]
    fn test_resolve_keeps_argument_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.png");
        let z = dir.path().join("z.png");
        write_png(&a);
        write_png(&z);

        let inputs = [z.display().to_string(), a.display().to_string()];
        let paths = resolve_inputs(&inputs).unwrap();

        assert_eq!(paths, vec![z, a]);
    }

    #[test]
    fn test_resolve_directory_recursive() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        write_png(&dir.path().join("top.png"));
        write_png(&dir.path().join("nested").join("deep.png"));

        let paths = resolve_inputs(&[dir.path().display().to_string()]).unwrap();

        assert_eq!(paths.len(), 2);
        assert!(paths.contains(&dir.path().join("nested").join("deep.png")));
    }

    #[test]
    fn test_resolve_missing_path() {
        let err = resolve_inputs(&["/definitely/not/here.png"]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ImgtoolsError>(),
            Some(ImgtoolsError::InputNotFound(_))
        ));
    }

    #[test]
    fn test_resolve_no_matches() {
        let dir = tempfile::tempdir().unwrap();
        let pattern = format!("{}/*.png", dir.path().display());

        let err = resolve_inputs(&[pattern]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ImgtoolsError>(),
            Some(ImgtoolsError::NoImages)
        ));
    }

    #[test]
    fn test_load_image_not_an_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        fs::write(&path, b"not a png").unwrap();

        assert!(matches!(
            load_image(&path),
            Err(ImgtoolsError::ImageLoad { .. })
        ));
    }
}
