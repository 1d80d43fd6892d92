//! Screenshot export round-trips through real files

use std::fs::File;
use std::path::Path;

use rustview_core::display::Frame;
use rustview_core::screenshot::{GENERATOR_KEYWORD, ScreenshotError, save_screenshot};

/// An 8x8 RGBA gradient frame.
fn test_frame() -> Frame {
    let (width, height) = (8u32, 8u32);
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            data.extend_from_slice(&[(x * 32) as u8, (y * 32) as u8, 128, 255]);
        }
    }
    Frame::new(width, height, data).expect("frame dimensions match data")
}

fn generator_text(path: &Path) -> Vec<(String, String)> {
    let decoder = png::Decoder::new(File::open(path).expect("open png"));
    let reader = decoder.read_info().expect("read png info");
    reader
        .info()
        .uncompressed_latin1_text
        .iter()
        .map(|chunk| (chunk.keyword.clone(), chunk.text.clone()))
        .collect()
}

#[test]
fn png_extension_saves_in_place_and_round_trips_pixels() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("shot.png");
    let frame = test_frame();

    let written = save_screenshot(&frame, &path).expect("save");
    assert_eq!(written, path);

    let reloaded = image::open(&written).expect("reload").to_rgba8();
    assert_eq!(reloaded.width(), frame.width);
    assert_eq!(reloaded.height(), frame.height);
    assert_eq!(reloaded.into_raw(), frame.data);
}

#[test]
fn bmp_extension_saves_in_place() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("shot.bmp");

    let written = save_screenshot(&test_frame(), &path).expect("save");
    assert_eq!(written, path);

    let reloaded = image::open(&written).expect("reload");
    assert_eq!(reloaded.width(), 8);
    assert_eq!(reloaded.height(), 8);
}

#[test]
fn jpeg_extension_saves_without_alpha() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("shot.jpg");

    let written = save_screenshot(&test_frame(), &path).expect("save");
    assert_eq!(written, path);

    let reloaded = image::open(&written).expect("reload");
    assert_eq!(reloaded.width(), 8);
    assert_eq!(reloaded.height(), 8);
}

#[test]
fn unknown_extension_falls_back_to_tagged_png() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("capture.dat");

    let written = save_screenshot(&test_frame(), &path).expect("save");
    assert_eq!(written, dir.path().join("capture.dat.png"));
    assert!(written.exists());
    assert!(!path.exists());

    let text = generator_text(&written);
    assert!(
        text.iter().any(|(keyword, _)| keyword == GENERATOR_KEYWORD),
        "missing generator chunk, found: {text:?}"
    );
}

#[test]
fn extensionless_path_falls_back_to_png() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("capture");

    let written = save_screenshot(&test_frame(), &path).expect("save");
    assert_eq!(written, dir.path().join("capture.png"));

    let reloaded = image::open(&written).expect("reload").to_rgba8();
    assert_eq!(reloaded.into_raw(), test_frame().data);
}

#[test]
fn tga_extension_saves_in_place() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("shot.tga");

    let written = save_screenshot(&test_frame(), &path).expect("save");
    assert_eq!(written, path);

    let reloaded = image::open(&written).expect("reload").to_rgba8();
    assert_eq!(reloaded.into_raw(), test_frame().data);
}

#[test]
fn unwritable_directory_reports_io_failure() {
    let frame = test_frame();
    let result = save_screenshot(&frame, Path::new("/nonexistent/dir/shot.png"));
    match result {
        Err(ScreenshotError::Io { path, .. }) => {
            assert_eq!(path, Path::new("/nonexistent/dir/shot.png"));
        }
        other => panic!("expected io error, got {other:?}"),
    }
}
