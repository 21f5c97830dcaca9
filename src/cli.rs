use clap::{Parser, Subcommand, ValueEnum};
use gloss_lib::{Anchor, CustomRatio, SizePreset};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gloss")]
#[command(
    version,
    about = "Gloss - Decorate screenshots with gradients, frames, and shadows",
    long_about = "Gloss\n\nModes:\n- render: place a screenshot on a gradient backdrop with padding, rounded corners, a drop shadow, an optional window-chrome bar, and borders, then export a PNG.\n- presets: list the built-in proportion, theme, and background catalogs.\n\nUse --help on any subcommand for details."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decorate a screenshot and export the result
    Render {
        #[arg(
            long,
            value_name = "PATH",
            help = "Input screenshot (PNG, JPEG, GIF, WebP, BMP, or TIFF)"
        )]
        input: PathBuf,

        #[arg(
            long,
            value_name = "PATH",
            help = "Output PNG path (default: beautified-screenshot.png unless --copy is used alone)"
        )]
        output: Option<PathBuf>,

        #[arg(long, help = "Copy the result to the system clipboard")]
        copy: bool,

        #[arg(
            long,
            value_name = "PATH",
            help = "Settings snapshot (TOML, camelCase keys); individual flags override it"
        )]
        settings: Option<PathBuf>,

        #[arg(long, help = "Canvas proportion preset id (auto, 1:1, 16:9, ...)")]
        proportion: Option<String>,

        #[arg(
            long,
            value_name = "WxH",
            help = "Explicit ratio such as 16x10; implies --proportion custom"
        )]
        custom_ratio: Option<CustomRatio>,

        #[arg(long, help = "Window-chrome theme id (none, browser-dark, macos-light, ...)")]
        theme: Option<String>,

        #[arg(long, help = "Padding step (none, small, medium, large)")]
        padding: Option<SizePreset>,

        #[arg(long, help = "Background preset id (pink-purple, midnight, solid-white, ...)")]
        background: Option<String>,

        #[arg(
            long,
            value_name = "HEX",
            help = "First gradient color (e.g. #ec4899); selects the custom background"
        )]
        bg_color1: Option<String>,

        #[arg(
            long,
            value_name = "HEX",
            help = "Second gradient color; selects the custom background"
        )]
        bg_color2: Option<String>,

        #[arg(
            long,
            value_name = "DEGREES",
            help = "Gradient angle for the custom background"
        )]
        gradient_angle: Option<f64>,

        #[arg(long, help = "Corner radius step (none, small, medium, large)")]
        radius: Option<SizePreset>,

        #[arg(
            long,
            help = "Content position (center, top-left, top, top-right, left, right, bottom-left, bottom, bottom-right)"
        )]
        position: Option<Anchor>,

        #[arg(long, help = "Shadow step (none, small, medium, large)")]
        shadow: Option<SizePreset>,

        #[arg(long, help = "Border around the screenshot (none, small, medium, large)")]
        screenshot_border: Option<SizePreset>,

        #[arg(long, help = "Border around the whole canvas (none, small, medium, large)")]
        image_border: Option<SizePreset>,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,
    },

    /// List a built-in preset catalog
    Presets {
        #[arg(value_enum, help = "Catalog to list")]
        catalog: CatalogKind,

        #[arg(long, value_enum, default_value = "pretty", help = "Output format")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Pretty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogKind {
    Themes,
    Backgrounds,
    Proportions,
}

pub fn parse() -> Cli {
    Cli::parse()
}
