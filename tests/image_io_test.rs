//! Tests for PNG decoding, size checks and preview encoding.

mod common;

use common::fixtures;
use eink_pack::{convert, ConvertParams, Rgba, Target};
use inkpack::error::ImageError;
use inkpack::services::{decode_png, encode_preview_png, read_png, write_preview};
use pretty_assertions::assert_eq;

#[test]
fn test_read_png_round_trips_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let pixels = fixtures::gradient(8, 2);
    let path = fixtures::write_png(dir.path(), "ramp.png", &pixels, 8, 2);

    let image = read_png(&path).unwrap();

    assert_eq!((image.width, image.height), (8, 2));
    assert_eq!(image.pixels, pixels);
}

#[test]
fn test_size_check_against_board() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixtures::write_png(dir.path(), "big.png", &fixtures::gradient(9, 2), 9, 2);
    let image = read_png(&path).unwrap();

    assert!(image.check_size(9, 2).is_ok());
    let err = image.check_size(8, 2).unwrap_err();
    assert!(matches!(
        err,
        ImageError::SizeMismatch {
            width: 9,
            expected_width: 8,
            ..
        }
    ));
}

#[test]
fn test_garbage_is_a_decode_error() {
    let err = decode_png(b"definitely not a png").unwrap_err();
    assert!(matches!(err, ImageError::Decode(_)), "{err:?}");
}

#[test]
fn test_missing_file_is_io_error() {
    let err = read_png(std::path::Path::new("/nonexistent/input.png")).unwrap_err();
    assert!(matches!(err, ImageError::Io(_)), "{err:?}");
}

#[test]
fn test_preview_png_decodes_to_preview_pixels() {
    let pixels = fixtures::solid(4, 3, Rgba::rgb(220, 0, 0));
    let image = convert(&pixels, 4, 3, &Target::white_black_red(), "bwr", &ConvertParams::default())
        .unwrap();

    let bytes = encode_preview_png(&image).unwrap();
    common::assert_png(&bytes);

    let decoded = decode_png(&bytes).unwrap();
    assert_eq!((decoded.width, decoded.height), (4, 3));
    assert_eq!(decoded.pixels, image.preview());
}

#[test]
fn test_write_preview_reports_size() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preview.png");
    let image = convert(
        &fixtures::gradient(8, 2),
        8,
        2,
        &Target::Mono,
        "bw",
        &ConvertParams::default(),
    )
    .unwrap();

    let written = write_preview(&path, &image).unwrap();
    assert_eq!(written as u64, std::fs::metadata(&path).unwrap().len());
    common::assert_png(&std::fs::read(&path).unwrap());
}
