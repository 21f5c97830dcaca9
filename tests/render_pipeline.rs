//! End-to-end library pipeline: load, resolve, lay out, render, export,
//! decode back.

use gloss_lib::{
    encode_png, load_rgba, render, resolve_layout, save_png, Settings, SizePreset,
};
use image::{Rgba, RgbaImage};
use tempfile::TempDir;

#[test]
fn full_pipeline_round_trips_through_png() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("shot.png");
    let output = dir.path().join("nested/out.png");

    let source = RgbaImage::from_pixel(120, 80, Rgba([40, 90, 160, 255]));
    source.save(&input).expect("write source");

    let loaded = load_rgba(&input).expect("load");
    let settings = Settings::default().resolve();
    let surface = render(&loaded, &settings);
    save_png(&surface, &output).expect("save");

    let decoded = image::open(&output).expect("reopen").to_rgba8();
    // 120x80 plus medium padding on both sides
    assert_eq!(decoded.dimensions(), (280, 240));
    // source pixel in the center survives untouched
    assert_eq!(decoded.get_pixel(140, 120).0, [40, 90, 160, 255]);
    // default pink-purple gradient in the top-left padding area
    let corner = decoded.get_pixel(0, 0).0;
    assert_eq!(corner[3], 255);
    assert_ne!(corner, [40, 90, 160, 255]);
}

#[test]
fn layout_and_render_agree_on_canvas_size() {
    let settings = Settings {
        proportion: "16:9".to_string(),
        padding: SizePreset::None,
        theme: "browser-dark".to_string(),
        shadow: SizePreset::None,
        ..Settings::default()
    }
    .resolve();

    let source = RgbaImage::from_pixel(1000, 464, Rgba([0, 0, 0, 255]));
    let layout = resolve_layout(source.width(), source.height(), &settings);
    let surface = render(&source, &settings);
    assert_eq!(surface.dimensions(), layout.surface_size());
    // 464 + 36 bar = 500 content height, 16:9 from width 1000 gives 562.5
    assert_eq!(surface.dimensions(), (1000, 563));
}

#[test]
fn encode_matches_save() {
    let source = RgbaImage::from_pixel(16, 16, Rgba([200, 10, 10, 255]));
    let settings = Settings::default().resolve();
    let surface = render(&source, &settings);

    let bytes = encode_png(&surface).expect("encode");
    let decoded = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(decoded.dimensions(), surface.dimensions());
}

#[test]
fn non_png_input_formats_decode() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("shot.bmp");
    let source = RgbaImage::from_pixel(8, 8, Rgba([1, 2, 3, 255]));
    source.save(&input).expect("write bmp");

    let loaded = load_rgba(&input).expect("load bmp");
    assert_eq!(loaded.dimensions(), (8, 8));
}
