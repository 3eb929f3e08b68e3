use std::fs;
use std::path::Path;

use bluecode_images::{run, ConvertError, OutputFormat, Plan, VariantSpec};
use image::{GenericImageView, Rgb, RgbImage};
use tempfile::TempDir;
use ui::gallery::SizeVariant;

fn small_plan(format: OutputFormat) -> Plan {
    Plan {
        format,
        thumb: VariantSpec {
            variant: SizeVariant::Thumb,
            max_width: 40,
            quality: 70,
        },
        full: VariantSpec {
            variant: SizeVariant::Full,
            max_width: 80,
            quality: 80,
        },
    }
}

fn write_png(dir: &Path, name: &str, width: u32, height: u32) {
    let img = RgbImage::from_pixel(width, height, Rgb([20, 90, 200]));
    img.save(dir.join(name)).unwrap();
}

fn dims(path: &Path) -> (u32, u32) {
    image::open(path).unwrap().dimensions()
}

#[test]
fn writes_both_variants_with_expected_sizes() {
    let dir = TempDir::new().unwrap();
    write_png(dir.path(), "wide.png", 200, 100);
    write_png(dir.path(), "tiny.png", 30, 20);

    let summary = run(dir.path(), &small_plan(OutputFormat::Webp)).unwrap();
    assert_eq!(summary.converted, 2);
    assert!(summary.is_success());

    assert_eq!(dims(&dir.path().join("wide-thumb.webp")), (40, 20));
    assert_eq!(dims(&dir.path().join("wide-full.webp")), (80, 40));
    assert_eq!(dims(&dir.path().join("tiny-thumb.webp")), (30, 20));
    assert_eq!(dims(&dir.path().join("tiny-full.webp")), (30, 20));
}

#[test]
fn jpeg_output_uses_jpg_extension() {
    let dir = TempDir::new().unwrap();
    write_png(dir.path(), "shot.png", 120, 60);

    run(dir.path(), &small_plan(OutputFormat::Jpeg)).unwrap();
    assert_eq!(dims(&dir.path().join("shot-thumb.jpg")), (40, 20));
    assert_eq!(dims(&dir.path().join("shot-full.jpg")), (80, 40));
}

#[test]
fn ignores_non_images_and_existing_variants() {
    let dir = TempDir::new().unwrap();
    write_png(dir.path(), "cover.png", 100, 100);
    write_png(dir.path(), "cover-thumb.png", 10, 10);
    fs::write(dir.path().join("README.txt"), "not an image").unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    write_png(&dir.path().join("nested"), "deep.png", 50, 50);

    let summary = run(dir.path(), &small_plan(OutputFormat::Webp)).unwrap();
    assert_eq!(summary.converted, 1);
    assert!(!dir.path().join("cover-thumb-thumb.webp").exists());
    assert!(!dir.path().join("nested/deep-thumb.webp").exists());
}

#[test]
fn empty_directory_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let summary = run(dir.path(), &Plan::default()).unwrap();
    assert_eq!(summary.converted, 0);
    assert!(summary.is_success());
}

#[test]
fn broken_file_is_counted_and_others_still_convert() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("broken.png"), b"definitely not png bytes").unwrap();
    write_png(dir.path(), "good.png", 60, 30);

    let summary = run(dir.path(), &small_plan(OutputFormat::Webp)).unwrap();
    assert_eq!(summary.converted, 1);
    assert_eq!(summary.failed, 1);
    assert!(!summary.is_success());
    assert!(dir.path().join("good-full.webp").exists());
}

#[test]
fn missing_directory_is_reported() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    let err = run(&missing, &Plan::default()).unwrap_err();
    assert!(matches!(err, ConvertError::ReadDir { .. }));
    assert_eq!(err.path(), &missing);
}

#[test]
fn rerun_overwrites_previous_output() {
    let dir = TempDir::new().unwrap();
    write_png(dir.path(), "again.png", 100, 50);
    let plan = small_plan(OutputFormat::Webp);

    run(dir.path(), &plan).unwrap();
    let second = run(dir.path(), &plan).unwrap();
    assert_eq!(second.converted, 1);
    assert_eq!(dims(&dir.path().join("again-thumb.webp")), (40, 20));
}
