//! Gloss Library
//!
//! A library for decorating screenshots: the source image is placed on a
//! gradient backdrop with padding, rounded corners, a drop shadow, an
//! optional simulated window-chrome bar, and optional borders, then exported
//! as PNG to a file or the system clipboard.
//!
//! # Module Overview
//!
//! - [`catalog`] - Static preset catalogs (proportions, themes, backgrounds)
//! - [`settings`] - Declarative settings and catalog resolution
//! - [`layout`] - Canvas sizing and content placement
//! - [`render`] - The compositor
//! - [`zoom`] - Preview display-scale arithmetic
//! - [`export`] - PNG file and clipboard export
//! - [`output`] - JSON output schemas
//!
//! # Example
//!
//! ```no_run
//! use gloss_lib::{load_rgba, render, save_png, Settings};
//! use std::path::Path;
//!
//! # fn example() -> gloss_lib::Result<()> {
//! let source = load_rgba(Path::new("screenshot.png"))?;
//! let settings = Settings::default();
//! let surface = render(&source, &settings.resolve());
//! save_png(&surface, Path::new("beautified-screenshot.png"))?;
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod color;
pub mod draw;
pub mod error;
pub mod export;
pub mod image_loader;
pub mod layout;
pub mod output;
pub mod render;
pub mod settings;
pub mod zoom;

pub use catalog::{
    background_by_id, frame_by_id, proportion_by_id, BackgroundPreset, ChromeFrame, Control,
    ControlKind, ControlSide, ProportionPreset, BACKGROUND_SECTIONS, PROPORTION_SECTIONS,
    THEME_SECTIONS,
};
pub use color::{parse_hex, ColorParseError, TRANSPARENT};
pub use error::{ErrorCategory, ErrorPayload, GlossError, Result};
pub use export::{copy_to_clipboard, encode_png, save_png, DEFAULT_EXPORT_FILENAME};
pub use image_loader::{load_image, load_rgba, ImageLoadError};
pub use layout::{resolve_layout, Layout};
pub use output::{
    ErrorOutput, GlossOutput, PresetListing, PresetsOutput, RenderOutput, SectionListing,
    GLOSS_OUTPUT_VERSION,
};
pub use render::{render, render_into};
pub use settings::{
    Anchor, CustomRatio, ResolvedSettings, Settings, ShadowSpec, SizePreset, SHADOW_OPACITY,
};
pub use zoom::{display_scale, Viewport, ZoomMode, VIEWPORT_INSET};
