use std::fmt;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use image::ImageReader;
use serde::Serialize;

use crate::error::ImgtoolsError;

/// File and image metadata reported by `stat`
#[derive(Debug, Clone, Serialize)]
pub struct ImageStat {
    pub path: PathBuf,
    pub file_name: String,
    pub width: u32,
    pub height: u32,
    /// File size in bytes
    pub size: u64,
    pub created: Option<DateTime<Utc>>,
    pub accessed: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
}

/// Read file metadata and image dimensions for `path`.
///
/// Only the image header is decoded.
pub fn inspect(path: &Path) -> Result<ImageStat> {
    let metadata = std::fs::metadata(path).map_err(|e| ImgtoolsError::Metadata {
        path: path.to_path_buf(),
        source: e,
    })?;

    let (width, height) = ImageReader::open(path)
        .map_err(|e| ImgtoolsError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .with_guessed_format()
        .map_err(|e| ImgtoolsError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .into_dimensions()
        .map_err(|e| ImgtoolsError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(ImageStat {
        path: path.to_path_buf(),
        file_name,
        width,
        height,
        size: metadata.len(),
        created: utc(metadata.created()),
        accessed: utc(metadata.accessed()),
        modified: utc(metadata.modified()),
    })
}

/// Print the report for `path` to stdout, as text or pretty JSON.
#[allow(clippy::print_stdout)]
pub fn run(path: &Path, json: bool) -> Result<()> {
    let stat = inspect(path)?;

    if json {
        let report =
            serde_json::to_string_pretty(&stat).context("failed to serialize image stat")?;
        println!("{}", report);
    } else {
        print!("{}", stat);
    }

    Ok(())
}

// Platforms without a birth time report an error here; the field stays empty.
fn utc(time: std::io::Result<SystemTime>) -> Option<DateTime<Utc>> {
    time.ok().map(DateTime::<Utc>::from)
}

fn format_time(time: Option<&DateTime<Utc>>) -> String {
    time.map(|t| t.format("%a, %d %b %Y %H:%M:%S GMT").to_string())
        .unwrap_or_default()
}

impl fmt::Display for ImageStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Image size: {}x{}", self.width, self.height)?;
        writeln!(f, "File name: {}", self.file_name)?;
        writeln!(f, "File size: {} bytes", self.size)?;
        writeln!(f, "File creation time: {}", format_time(self.created.as_ref()))?;
        writeln!(f, "File last access time: {}", format_time(self.accessed.as_ref()))?;
        writeln!(
            f,
            "File last modification time: {}",
            format_time(self.modified.as_ref())
        )
    }
}
