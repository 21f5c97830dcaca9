use std::fmt;
use std::path::Path;
use std::str::FromStr;

use image::Rgba;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{background_by_id, frame_by_id, proportion_by_id, ChromeFrame};
use crate::color::{self, TRANSPARENT};
use crate::error::{GlossError, Result};

/// Pixel padding per preset step.
const PADDING_PX: [f64; 4] = [0.0, 40.0, 80.0, 120.0];
/// Corner radius per preset step.
const RADIUS_PX: [f64; 4] = [0.0, 8.0, 16.0, 24.0];
/// Border stroke width per preset step.
const BORDER_PX: [f64; 4] = [0.0, 2.0, 4.0, 6.0];

/// Shadow fill opacity, fixed regardless of shadow size.
pub const SHADOW_OPACITY: f64 = 0.3;

/// Four-step size scale shared by padding, radius, shadow, and border axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizePreset {
    #[default]
    None,
    Small,
    Medium,
    Large,
}

impl SizePreset {
    fn step(self) -> usize {
        match self {
            SizePreset::None => 0,
            SizePreset::Small => 1,
            SizePreset::Medium => 2,
            SizePreset::Large => 3,
        }
    }

    pub fn padding_px(self) -> f64 {
        PADDING_PX[self.step()]
    }

    pub fn radius_px(self) -> f64 {
        RADIUS_PX[self.step()]
    }

    pub fn border_px(self) -> f64 {
        BORDER_PX[self.step()]
    }

    pub fn shadow(self) -> Option<ShadowSpec> {
        match self {
            SizePreset::None => None,
            SizePreset::Small => Some(ShadowSpec {
                blur: 10.0,
                offset_y: 4.0,
            }),
            SizePreset::Medium => Some(ShadowSpec {
                blur: 25.0,
                offset_y: 10.0,
            }),
            SizePreset::Large => Some(ShadowSpec {
                blur: 50.0,
                offset_y: 20.0,
            }),
        }
    }
}

#[derive(Debug, Error)]
#[error("Invalid size '{0}': expected none, small, medium, or large")]
pub struct SizePresetParseError(String);

impl FromStr for SizePreset {
    type Err = SizePresetParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "none" => Ok(SizePreset::None),
            "small" => Ok(SizePreset::Small),
            "medium" => Ok(SizePreset::Medium),
            "large" => Ok(SizePreset::Large),
            other => Err(SizePresetParseError(other.to_string())),
        }
    }
}

impl fmt::Display for SizePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SizePreset::None => "none",
            SizePreset::Small => "small",
            SizePreset::Medium => "medium",
            SizePreset::Large => "large",
        };
        f.write_str(name)
    }
}

/// Blur radius and vertical offset of the drop shadow, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowSpec {
    pub blur: f64,
    pub offset_y: f64,
}

/// One of nine named placements for the content rectangle within the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    #[default]
    Center,
    TopLeft,
    Top,
    TopRight,
    Left,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

/// Horizontal/vertical alignment of an anchor along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisAlign {
    Start,
    Center,
    End,
}

impl Anchor {
    pub fn horizontal(self) -> AxisAlign {
        match self {
            Anchor::TopLeft | Anchor::Left | Anchor::BottomLeft => AxisAlign::Start,
            Anchor::Top | Anchor::Center | Anchor::Bottom => AxisAlign::Center,
            Anchor::TopRight | Anchor::Right | Anchor::BottomRight => AxisAlign::End,
        }
    }

    pub fn vertical(self) -> AxisAlign {
        match self {
            Anchor::TopLeft | Anchor::Top | Anchor::TopRight => AxisAlign::Start,
            Anchor::Left | Anchor::Center | Anchor::Right => AxisAlign::Center,
            Anchor::BottomLeft | Anchor::Bottom | Anchor::BottomRight => AxisAlign::End,
        }
    }
}

#[derive(Debug, Error)]
#[error("Invalid position '{0}': expected center, top-left, top, top-right, left, right, bottom-left, bottom, or bottom-right")]
pub struct AnchorParseError(String);

impl FromStr for Anchor {
    type Err = AnchorParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "center" => Ok(Anchor::Center),
            "top-left" => Ok(Anchor::TopLeft),
            "top" => Ok(Anchor::Top),
            "top-right" => Ok(Anchor::TopRight),
            "left" => Ok(Anchor::Left),
            "right" => Ok(Anchor::Right),
            "bottom-left" => Ok(Anchor::BottomLeft),
            "bottom" => Ok(Anchor::Bottom),
            "bottom-right" => Ok(Anchor::BottomRight),
            other => Err(AnchorParseError(other.to_string())),
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Anchor::Center => "center",
            Anchor::TopLeft => "top-left",
            Anchor::Top => "top",
            Anchor::TopRight => "top-right",
            Anchor::Left => "left",
            Anchor::Right => "right",
            Anchor::BottomLeft => "bottom-left",
            Anchor::Bottom => "bottom",
            Anchor::BottomRight => "bottom-right",
        };
        f.write_str(name)
    }
}

/// Explicit width:height ratio, used when `proportion` is `"custom"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomRatio {
    pub width: u32,
    pub height: u32,
}

impl CustomRatio {
    pub fn as_ratio(self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

#[derive(Debug, Error)]
pub enum CustomRatioParseError {
    #[error("Invalid custom ratio format: expected WIDTHxHEIGHT (e.g., 16x10)")]
    InvalidFormat,
    #[error("Custom ratio sides must be positive integers")]
    NotPositive,
}

impl FromStr for CustomRatio {
    type Err = CustomRatioParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('x').collect();
        if parts.len() != 2 {
            return Err(CustomRatioParseError::InvalidFormat);
        }
        let width: u32 = parts[0]
            .trim()
            .parse()
            .map_err(|_| CustomRatioParseError::InvalidFormat)?;
        let height: u32 = parts[1]
            .trim()
            .parse()
            .map_err(|_| CustomRatioParseError::InvalidFormat)?;
        if width == 0 || height == 0 {
            return Err(CustomRatioParseError::NotPositive);
        }
        Ok(CustomRatio { width, height })
    }
}

impl fmt::Display for CustomRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Declarative decoration settings: one field per independent axis, each a
/// closed set of literal values or a preset id resolved against the catalogs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub proportion: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_ratio: Option<CustomRatio>,
    pub theme: String,
    pub padding: SizePreset,
    pub background_theme: String,
    pub bg_color1: String,
    pub bg_color2: String,
    pub gradient_angle: f64,
    pub inner_radius: SizePreset,
    pub position: Anchor,
    pub shadow: SizePreset,
    pub screenshot_border: SizePreset,
    pub image_border: SizePreset,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            proportion: "auto".to_string(),
            custom_ratio: None,
            theme: "none".to_string(),
            padding: SizePreset::Medium,
            background_theme: "pink-purple".to_string(),
            bg_color1: "#ec4899".to_string(),
            bg_color2: "#8b5cf6".to_string(),
            gradient_angle: 135.0,
            inner_radius: SizePreset::Small,
            position: Anchor::Center,
            shadow: SizePreset::Medium,
            screenshot_border: SizePreset::None,
            image_border: SizePreset::None,
        }
    }
}

impl Settings {
    /// Load a settings snapshot from a TOML file. Missing fields keep their
    /// defaults.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            GlossError::config(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;
        toml::from_str(&raw).map_err(|e| {
            GlossError::config(format!(
                "Invalid settings file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Fold catalog lookups and value tables into the numeric snapshot the
    /// layout resolver and compositor consume. Unresolvable preset ids
    /// degrade to "no effect" rather than failing.
    pub fn resolve(&self) -> ResolvedSettings {
        let ratio = if self.proportion == "custom" {
            self.custom_ratio.map(CustomRatio::as_ratio)
        } else {
            match proportion_by_id(&self.proportion) {
                Some(preset) => preset.ratio,
                None => {
                    log::warn!(
                        "unknown proportion id '{}', falling back to auto",
                        self.proportion
                    );
                    None
                }
            }
        };

        let frame = match frame_by_id(&self.theme) {
            Some(frame) => Some(frame).filter(|f| f.bar_height > 0.0),
            None => {
                if self.theme != "none" {
                    log::warn!("unknown theme id '{}', rendering without a frame", self.theme);
                }
                None
            }
        };

        let (bg_color1, bg_color2, gradient_angle) = if self.background_theme == "custom" {
            let c1 = color::parse_hex(&self.bg_color1).unwrap_or(TRANSPARENT);
            let c2 = color::parse_hex(&self.bg_color2).unwrap_or(TRANSPARENT);
            (c1, c2, self.gradient_angle)
        } else {
            match background_by_id(&self.background_theme) {
                Some(preset) => (preset.color1, preset.color2, preset.angle),
                None => {
                    log::warn!(
                        "unknown background id '{}', rendering transparent background",
                        self.background_theme
                    );
                    (TRANSPARENT, TRANSPARENT, 0.0)
                }
            }
        };

        ResolvedSettings {
            ratio,
            frame,
            padding: self.padding.padding_px(),
            corner_radius: self.inner_radius.radius_px(),
            bg_color1,
            bg_color2,
            gradient_angle,
            position: self.position,
            shadow: self.shadow.shadow(),
            screenshot_border: self.screenshot_border.border_px(),
            image_border: self.image_border.border_px(),
        }
    }
}

/// Catalog-resolved settings snapshot: every enum axis folded into its
/// numeric or visual attributes.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedSettings {
    pub ratio: Option<f64>,
    pub frame: Option<&'static ChromeFrame>,
    pub padding: f64,
    pub corner_radius: f64,
    pub bg_color1: Rgba<u8>,
    pub bg_color2: Rgba<u8>,
    pub gradient_angle: f64,
    pub position: Anchor,
    pub shadow: Option<ShadowSpec>,
    pub screenshot_border: f64,
    pub image_border: f64,
}
