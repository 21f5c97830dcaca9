use std::path::PathBuf;
use std::process::ExitCode;

use gloss_lib::output::{PresetListing, PresetsOutput, RenderOutput, SectionListing};
use gloss_lib::{
    load_rgba, parse_hex, render, resolve_layout, save_png, Anchor, CustomRatio, GlossError,
    GlossOutput, Settings, SizePreset, BACKGROUND_SECTIONS, DEFAULT_EXPORT_FILENAME,
    GLOSS_OUTPUT_VERSION, PROPORTION_SECTIONS, THEME_SECTIONS,
};

use crate::cli::{CatalogKind, OutputFormat};
use crate::formatting::{render_error, write_output};

/// Run the render command.
#[allow(clippy::too_many_arguments)]
pub fn run_render(
    verbose: bool,
    input: PathBuf,
    output: Option<PathBuf>,
    copy: bool,
    settings_path: Option<PathBuf>,
    proportion: Option<String>,
    custom_ratio: Option<CustomRatio>,
    theme: Option<String>,
    padding: Option<SizePreset>,
    background: Option<String>,
    bg_color1: Option<String>,
    bg_color2: Option<String>,
    gradient_angle: Option<f64>,
    radius: Option<SizePreset>,
    position: Option<Anchor>,
    shadow: Option<SizePreset>,
    screenshot_border: Option<SizePreset>,
    image_border: Option<SizePreset>,
    format: OutputFormat,
) -> ExitCode {
    // Explicit color flags are validated up front; everything funneled
    // through the settings snapshot degrades instead.
    for (flag, value) in [("--bg-color1", &bg_color1), ("--bg-color2", &bg_color2)] {
        if let Some(hex) = value {
            if let Err(err) = parse_hex(hex) {
                log::debug!("rejecting {flag} value '{hex}'");
                return render_error(GlossError::from(err), format);
            }
        }
    }

    let mut settings = match settings_path {
        Some(path) => match Settings::from_toml_file(&path) {
            Ok(settings) => settings,
            Err(err) => return render_error(err, format),
        },
        None => Settings::default(),
    };
    apply_overrides(
        &mut settings,
        proportion,
        custom_ratio,
        theme,
        padding,
        background,
        bg_color1,
        bg_color2,
        gradient_angle,
        radius,
        position,
        shadow,
        screenshot_border,
        image_border,
    );

    if verbose {
        eprintln!("Loading {}\u{2026}", input.display());
    }
    let source = match load_rgba(&input) {
        Ok(image) => image,
        Err(err) => return render_error(err.into(), format),
    };

    let resolved = settings.resolve();
    let layout = resolve_layout(source.width(), source.height(), &resolved);
    let surface = render(&source, &resolved);
    let (canvas_width, canvas_height) = layout.surface_size();

    // --copy alone skips the file; any other combination writes one.
    let output_path = match (output, copy) {
        (Some(path), _) => Some(path),
        (None, true) => None,
        (None, false) => Some(PathBuf::from(DEFAULT_EXPORT_FILENAME)),
    };
    if let Some(path) = &output_path {
        if let Err(err) = save_png(&surface, path) {
            return render_error(err, format);
        }
    }

    let mut copied = false;
    if copy {
        match gloss_lib::copy_to_clipboard(&surface) {
            Ok(()) => copied = true,
            Err(err) => log::warn!("clipboard copy failed: {err}"),
        }
    }

    let body = GlossOutput::Render(RenderOutput {
        version: GLOSS_OUTPUT_VERSION.to_string(),
        input,
        output_path,
        copied,
        canvas_width,
        canvas_height,
        content_x: layout.content_x,
        content_y: layout.content_y,
        bar_height: layout.bar_height,
    });
    if let Err(err) = write_output(&body, format) {
        return render_error(err, format);
    }
    ExitCode::SUCCESS
}

#[allow(clippy::too_many_arguments)]
fn apply_overrides(
    settings: &mut Settings,
    proportion: Option<String>,
    custom_ratio: Option<CustomRatio>,
    theme: Option<String>,
    padding: Option<SizePreset>,
    background: Option<String>,
    bg_color1: Option<String>,
    bg_color2: Option<String>,
    gradient_angle: Option<f64>,
    radius: Option<SizePreset>,
    position: Option<Anchor>,
    shadow: Option<SizePreset>,
    screenshot_border: Option<SizePreset>,
    image_border: Option<SizePreset>,
) {
    if let Some(value) = proportion {
        settings.proportion = value;
    }
    if let Some(value) = custom_ratio {
        settings.custom_ratio = Some(value);
        settings.proportion = "custom".to_string();
    }
    if let Some(value) = theme {
        settings.theme = value;
    }
    if let Some(value) = padding {
        settings.padding = value;
    }
    if let Some(value) = background {
        settings.background_theme = value;
    }
    // Literal colors or an angle switch the backdrop to the custom gradient.
    if bg_color1.is_some() || bg_color2.is_some() || gradient_angle.is_some() {
        settings.background_theme = "custom".to_string();
    }
    if let Some(value) = bg_color1 {
        settings.bg_color1 = value;
    }
    if let Some(value) = bg_color2 {
        settings.bg_color2 = value;
    }
    if let Some(value) = gradient_angle {
        settings.gradient_angle = value;
    }
    if let Some(value) = radius {
        settings.inner_radius = value;
    }
    if let Some(value) = position {
        settings.position = value;
    }
    if let Some(value) = shadow {
        settings.shadow = value;
    }
    if let Some(value) = screenshot_border {
        settings.screenshot_border = value;
    }
    if let Some(value) = image_border {
        settings.image_border = value;
    }
}

/// Run the presets command.
pub fn run_presets(catalog: CatalogKind, format: OutputFormat) -> ExitCode {
    let (name, sections) = match catalog {
        CatalogKind::Themes => (
            "themes",
            THEME_SECTIONS
                .iter()
                .map(|section| SectionListing {
                    id: section.id.to_string(),
                    label: section.label.to_string(),
                    presets: section
                        .frames
                        .iter()
                        .map(|frame| PresetListing {
                            id: frame.id.to_string(),
                            label: frame.label.to_string(),
                            description: frame.description.to_string(),
                        })
                        .collect(),
                })
                .collect(),
        ),
        CatalogKind::Backgrounds => (
            "backgrounds",
            BACKGROUND_SECTIONS
                .iter()
                .map(|section| SectionListing {
                    id: section.id.to_string(),
                    label: section.label.to_string(),
                    presets: section
                        .presets
                        .iter()
                        .map(|preset| PresetListing {
                            id: preset.id.to_string(),
                            label: preset.label.to_string(),
                            description: preset.description.to_string(),
                        })
                        .collect(),
                })
                .collect(),
        ),
        CatalogKind::Proportions => (
            "proportions",
            PROPORTION_SECTIONS
                .iter()
                .map(|section| SectionListing {
                    id: section.id.to_string(),
                    label: section.label.to_string(),
                    presets: section
                        .presets
                        .iter()
                        .map(|preset| PresetListing {
                            id: preset.id.to_string(),
                            label: preset.label.to_string(),
                            description: preset.description.to_string(),
                        })
                        .collect(),
                })
                .collect(),
        ),
    };

    let body = GlossOutput::Presets(PresetsOutput {
        version: GLOSS_OUTPUT_VERSION.to_string(),
        catalog: name.to_string(),
        sections,
    });
    if let Err(err) = write_output(&body, format) {
        return render_error(err, format);
    }
    ExitCode::SUCCESS
}
