use std::fs;
use std::path::Path;

use image::{Rgba, RgbaImage};
use imgtools::config::{Dimensions, Grid, Offset, SplitOptions};
use imgtools::error::ImgtoolsError;
use imgtools::ops::split_sheet;

/// 64x64 sheet with a distinct opaque color per 32x32 quadrant
fn write_quadrant_sheet(path: &Path) {
    RgbaImage::from_fn(64, 64, |x, y| match (x < 32, y < 32) {
        (true, true) => Rgba([255, 0, 0, 255]),
        (false, true) => Rgba([0, 255, 0, 255]),
        (true, false) => Rgba([0, 0, 255, 255]),
        (false, false) => Rgba([255, 255, 0, 255]),
    })
    .save(path)
    .unwrap();
}

fn pixel(path: &Path, x: u32, y: u32) -> Rgba<u8> {
    *image::open(path).unwrap().into_rgba8().get_pixel(x, y)
}

#[test]
fn splits_quadrants_in_row_major_order() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sheet.png");
    write_quadrant_sheet(&input);
    let out = dir.path().join("tiles");

    let options = SplitOptions::new(Grid::new(2, 2), Dimensions::new(32, 32));
    let report = split_sheet(&input, &out, &options, None).unwrap();

    let names: Vec<_> = report
        .written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["img1.png", "img2.png", "img3.png", "img4.png"]);
    assert_eq!(report.skipped, 0);

    assert_eq!(pixel(&out.join("img1.png"), 0, 0), Rgba([255, 0, 0, 255]));
    assert_eq!(pixel(&out.join("img2.png"), 0, 0), Rgba([0, 255, 0, 255]));
    assert_eq!(pixel(&out.join("img3.png"), 0, 0), Rgba([0, 0, 255, 255]));
    assert_eq!(pixel(&out.join("img4.png"), 31, 31), Rgba([255, 255, 0, 255]));
}

#[test]
fn skip_empty_renumbers_without_gaps() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sheet.png");
    let mut sheet = RgbaImage::from_pixel(32, 32, Rgba([9, 9, 9, 255]));
    for y in 0..16 {
        for x in 16..32 {
            sheet.put_pixel(x, y, Rgba([0, 0, 0, 0]));
        }
    }
    sheet.save(&input).unwrap();

    let options = SplitOptions::new(Grid::new(2, 2), Dimensions::new(16, 16)).skip_empty(true);
    let report = split_sheet(&input, dir.path(), &options, None).unwrap();

    assert_eq!(report.written.len(), 3);
    assert_eq!(report.skipped, 1);
    assert!(dir.path().join("img3.png").exists());
    assert!(!dir.path().join("img4.png").exists());
}

#[test]
fn secondary_crop_sets_tile_size() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sheet.png");
    write_quadrant_sheet(&input);

    let options = SplitOptions::new(Grid::new(2, 2), Dimensions::new(32, 32))
        .crop(Some(Dimensions::new(10, 6)))
        .crop_offset(Offset::new(20, 20))
        .name("part");
    let report = split_sheet(&input, dir.path(), &options, None).unwrap();

    for path in &report.written {
        let tile = image::open(path).unwrap().into_rgba8();
        assert_eq!(tile.dimensions(), (10, 6));
    }
    assert!(dir.path().join("part4.png").exists());
}

#[test]
fn repeated_runs_write_identical_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sheet.png");
    write_quadrant_sheet(&input);
    let out = dir.path().join("tiles");
    let options = SplitOptions::new(Grid::new(4, 4), Dimensions::new(16, 16));

    let first = split_sheet(&input, &out, &options, None).unwrap();
    let before: Vec<_> = first.written.iter().map(|p| fs::read(p).unwrap()).collect();

    let second = split_sheet(&input, &out, &options, None).unwrap();
    let after: Vec<_> = second.written.iter().map(|p| fs::read(p).unwrap()).collect();

    assert_eq!(first.written, second.written);
    assert_eq!(before, after);
}

#[test]
fn out_of_bounds_keeps_earlier_tiles() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sheet.png");
    write_quadrant_sheet(&input);

    // Only two 32px columns fit in a 64px sheet
    let options = SplitOptions::new(Grid::new(3, 1), Dimensions::new(32, 32));
    let err = split_sheet(&input, dir.path(), &options, None).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ImgtoolsError>(),
        Some(ImgtoolsError::CropOutOfBounds { x: 64, .. })
    ));
    assert!(dir.path().join("img1.png").exists());
    assert!(dir.path().join("img2.png").exists());
    assert!(!dir.path().join("img3.png").exists());
}

#[test]
fn undecodable_sheet_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sheet.png");
    fs::write(&input, b"garbage").unwrap();
    let out = dir.path().join("tiles");

    let options = SplitOptions::new(Grid::new(1, 1), Dimensions::new(1, 1));
    let err = split_sheet(&input, &out, &options, None).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ImgtoolsError>(),
        Some(ImgtoolsError::ImageLoad { .. })
    ));
    assert!(!out.exists());
}
