use gloss_lib::GlossOutput;
use image::RgbaImage;
use std::process::Command;
use tempfile::TempDir;

fn write_image(path: &std::path::Path, width: u32, height: u32, color: [u8; 4]) {
    let img = RgbaImage::from_pixel(width, height, image::Rgba(color));
    img.save(path).expect("write image");
}

#[test]
fn render_succeeds_and_emits_render_json() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("shot.png");
    let output = dir.path().join("out.png");
    write_image(&input, 100, 50, [10, 20, 30, 255]);

    let result = Command::new(env!("CARGO_BIN_EXE_gloss"))
        .args([
            "render",
            "--input",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
            "--format",
            "json",
        ])
        .output()
        .expect("run gloss");
    assert_eq!(result.status.code(), Some(0));
    assert!(output.exists(), "output PNG should be written");

    let stdout = String::from_utf8(result.stdout).expect("utf8");
    let body: GlossOutput = serde_json::from_str(stdout.trim()).expect("parse output schema");
    match body {
        GlossOutput::Render(render) => {
            // 100x50 source with default medium padding
            assert_eq!(render.canvas_width, 260);
            assert_eq!(render.canvas_height, 210);
            assert!(!render.copied);
        }
        other => panic!("unexpected output mode: {other:?}"),
    }
}

#[test]
fn render_reports_missing_input_as_error() {
    let dir = TempDir::new().expect("tempdir");
    let result = Command::new(env!("CARGO_BIN_EXE_gloss"))
        .args([
            "render",
            "--input",
            dir.path().join("missing.png").to_str().unwrap(),
            "--output",
            dir.path().join("out.png").to_str().unwrap(),
            "--format",
            "json",
        ])
        .output()
        .expect("run gloss");
    assert_eq!(result.status.code(), Some(1));

    let stdout = String::from_utf8(result.stdout).expect("utf8");
    let body: GlossOutput = serde_json::from_str(stdout.trim()).expect("parse output schema");
    match body {
        GlossOutput::Error(err) => {
            assert!(err.error.message.contains("not found"), "{}", err.error.message);
        }
        other => panic!("unexpected output mode: {other:?}"),
    }
}

#[test]
fn render_rejects_invalid_color_flag() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("shot.png");
    write_image(&input, 10, 10, [0, 0, 0, 255]);

    let result = Command::new(env!("CARGO_BIN_EXE_gloss"))
        .args([
            "render",
            "--input",
            input.to_str().unwrap(),
            "--output",
            dir.path().join("out.png").to_str().unwrap(),
            "--bg-color1",
            "not-a-color",
            "--format",
            "json",
        ])
        .output()
        .expect("run gloss");
    assert_eq!(result.status.code(), Some(1));

    let stdout = String::from_utf8(result.stdout).expect("utf8");
    assert!(stdout.contains("\"mode\":\"error\""), "{stdout}");
}

#[test]
fn render_rejects_malformed_custom_ratio_at_parse_time() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("shot.png");
    write_image(&input, 10, 10, [0, 0, 0, 255]);

    let result = Command::new(env!("CARGO_BIN_EXE_gloss"))
        .args([
            "render",
            "--input",
            input.to_str().unwrap(),
            "--custom-ratio",
            "16:10",
        ])
        .output()
        .expect("run gloss");
    // clap rejects the value before the command runs
    assert_ne!(result.status.code(), Some(0));
}

#[test]
fn render_accepts_settings_file_with_flag_overrides() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("shot.png");
    let output = dir.path().join("out.png");
    let settings = dir.path().join("gloss.toml");
    write_image(&input, 80, 80, [50, 60, 70, 255]);
    std::fs::write(
        &settings,
        "padding = \"large\"\nbackgroundTheme = \"midnight\"\n",
    )
    .expect("write settings");

    let result = Command::new(env!("CARGO_BIN_EXE_gloss"))
        .args([
            "render",
            "--input",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
            "--settings",
            settings.to_str().unwrap(),
            "--padding",
            "none",
            "--format",
            "json",
        ])
        .output()
        .expect("run gloss");
    assert_eq!(result.status.code(), Some(0));

    let stdout = String::from_utf8(result.stdout).expect("utf8");
    let body: GlossOutput = serde_json::from_str(stdout.trim()).expect("parse output schema");
    match body {
        // --padding none beats the TOML's large
        GlossOutput::Render(render) => assert_eq!(render.canvas_width, 80),
        other => panic!("unexpected output mode: {other:?}"),
    }
}

#[test]
fn render_with_invalid_settings_file_fails() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("shot.png");
    let settings = dir.path().join("gloss.toml");
    write_image(&input, 10, 10, [0, 0, 0, 255]);
    std::fs::write(&settings, "padding = \"gigantic\"\n").expect("write settings");

    let result = Command::new(env!("CARGO_BIN_EXE_gloss"))
        .args([
            "render",
            "--input",
            input.to_str().unwrap(),
            "--settings",
            settings.to_str().unwrap(),
            "--format",
            "json",
        ])
        .output()
        .expect("run gloss");
    assert_eq!(result.status.code(), Some(1));
}

#[test]
fn presets_lists_each_catalog_as_json() {
    for catalog in ["themes", "backgrounds", "proportions"] {
        let result = Command::new(env!("CARGO_BIN_EXE_gloss"))
            .args(["presets", catalog, "--format", "json"])
            .output()
            .expect("run gloss");
        assert_eq!(result.status.code(), Some(0), "{catalog} failed");

        let stdout = String::from_utf8(result.stdout).expect("utf8");
        let body: GlossOutput = serde_json::from_str(stdout.trim()).expect("parse output schema");
        match body {
            GlossOutput::Presets(presets) => {
                assert_eq!(presets.catalog, catalog);
                assert!(!presets.sections.is_empty());
            }
            other => panic!("unexpected output mode: {other:?}"),
        }
    }
}

#[test]
fn presets_rejects_unknown_catalog() {
    let result = Command::new(env!("CARGO_BIN_EXE_gloss"))
        .args(["presets", "fonts"])
        .output()
        .expect("run gloss");
    assert_ne!(result.status.code(), Some(0));
}
