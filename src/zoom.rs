//! Preview zoom arithmetic: maps a rendered canvas and a viewport to the
//! scale a previewer should display the canvas at. Pure math, no rendering.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Horizontal and vertical space the viewport chrome reserves around the
/// preview, per axis.
pub const VIEWPORT_INSET: f64 = 32.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1440,
            height: 900,
        }
    }
}

impl Viewport {
    /// Usable preview area after the chrome inset, floored at zero.
    fn usable(self) -> (f64, f64) {
        let w = (self.width as f64 - VIEWPORT_INSET).max(0.0);
        let h = (self.height as f64 - VIEWPORT_INSET).max(0.0);
        (w, h)
    }
}

#[derive(Debug, Error)]
pub enum ViewportParseError {
    #[error("Invalid viewport format: expected WIDTHxHEIGHT (e.g., 1440x900)")]
    InvalidFormat,
    #[error("Invalid width: {0}")]
    InvalidWidth(String),
    #[error("Invalid height: {0}")]
    InvalidHeight(String),
    #[error("Viewport sides must be positive")]
    NotPositive,
}

impl FromStr for Viewport {
    type Err = ViewportParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('x').collect();
        if parts.len() != 2 {
            return Err(ViewportParseError::InvalidFormat);
        }
        let width: u32 = parts[0]
            .trim()
            .parse()
            .map_err(|_| ViewportParseError::InvalidWidth(parts[0].to_string()))?;
        let height: u32 = parts[1]
            .trim()
            .parse()
            .map_err(|_| ViewportParseError::InvalidHeight(parts[1].to_string()))?;
        if width == 0 || height == 0 {
            return Err(ViewportParseError::NotPositive);
        }
        Ok(Viewport { width, height })
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// How a previewer scales the rendered canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZoomMode {
    /// Shrink to fit the viewport, never enlarge.
    #[default]
    Fit,
    Half,
    Actual,
    Double,
    /// Scale so the canvas width fills the usable viewport width.
    MatchWidth,
}

#[derive(Debug, Error)]
#[error("Invalid zoom '{0}': expected fit, 50, 100, 200, or match-width")]
pub struct ZoomModeParseError(String);

impl FromStr for ZoomMode {
    type Err = ZoomModeParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "fit" => Ok(ZoomMode::Fit),
            "50" => Ok(ZoomMode::Half),
            "100" => Ok(ZoomMode::Actual),
            "200" => Ok(ZoomMode::Double),
            "match-width" => Ok(ZoomMode::MatchWidth),
            other => Err(ZoomModeParseError(other.to_string())),
        }
    }
}

impl fmt::Display for ZoomMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ZoomMode::Fit => "fit",
            ZoomMode::Half => "50",
            ZoomMode::Actual => "100",
            ZoomMode::Double => "200",
            ZoomMode::MatchWidth => "match-width",
        };
        f.write_str(name)
    }
}

/// Display scale for a rendered surface inside `viewport`. `None` means
/// native size (no transform is applied at all), which fit mode reports
/// whenever the surface already fits.
pub fn display_scale(
    surface_width: u32,
    surface_height: u32,
    viewport: Viewport,
    mode: ZoomMode,
) -> Option<f64> {
    let sw = surface_width.max(1) as f64;
    let sh = surface_height.max(1) as f64;
    let (vw, vh) = viewport.usable();

    match mode {
        ZoomMode::Fit => {
            let scale = (vw / sw).min(vh / sh);
            if scale < 1.0 {
                Some(scale)
            } else {
                None
            }
        }
        ZoomMode::Half => Some(0.5),
        ZoomMode::Actual => None,
        ZoomMode::Double => Some(2.0),
        ZoomMode::MatchWidth => Some(vw / sw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_viewport() {
        let vp: Viewport = "1440x900".parse().unwrap();
        assert_eq!(vp.width, 1440);
        assert_eq!(vp.height, 900);
        assert_eq!(vp.to_string(), "1440x900");
    }

    #[test]
    fn parse_rejects_malformed_viewports() {
        assert!("1440".parse::<Viewport>().is_err());
        assert!("1440x".parse::<Viewport>().is_err());
        assert!("ax900".parse::<Viewport>().is_err());
        assert!("0x900".parse::<Viewport>().is_err());
    }

    #[test]
    fn parse_zoom_ids() {
        assert_eq!("fit".parse::<ZoomMode>().unwrap(), ZoomMode::Fit);
        assert_eq!("50".parse::<ZoomMode>().unwrap(), ZoomMode::Half);
        assert_eq!("100".parse::<ZoomMode>().unwrap(), ZoomMode::Actual);
        assert_eq!("200".parse::<ZoomMode>().unwrap(), ZoomMode::Double);
        assert_eq!(
            "match-width".parse::<ZoomMode>().unwrap(),
            ZoomMode::MatchWidth
        );
        assert!("75".parse::<ZoomMode>().is_err());
    }

    #[test]
    fn fit_shrinks_oversized_surfaces() {
        let viewport: Viewport = "1000x1000".parse().unwrap();
        let scale = display_scale(2000, 1000, viewport, ZoomMode::Fit).expect("scaled");
        assert!((scale - 0.484).abs() < 1e-12);
    }

    #[test]
    fn fit_reports_native_when_surface_fits() {
        let viewport = Viewport::default();
        assert_eq!(display_scale(400, 300, viewport, ZoomMode::Fit), None);
        // exactly the usable area still counts as fitting
        assert_eq!(display_scale(1408, 868, viewport, ZoomMode::Fit), None);
    }

    #[test]
    fn fixed_steps_ignore_the_viewport() {
        let viewport: Viewport = "100x100".parse().unwrap();
        assert_eq!(
            display_scale(5000, 5000, viewport, ZoomMode::Half),
            Some(0.5)
        );
        assert_eq!(display_scale(5000, 5000, viewport, ZoomMode::Actual), None);
        assert_eq!(
            display_scale(10, 10, viewport, ZoomMode::Double),
            Some(2.0)
        );
    }

    #[test]
    fn match_width_tracks_usable_width() {
        let viewport: Viewport = "1032x800".parse().unwrap();
        let scale = display_scale(500, 2000, viewport, ZoomMode::MatchWidth).expect("scaled");
        assert!((scale - 2.0).abs() < 1e-12);
        // may exceed native size, unlike fit
        assert!(display_scale(100, 100, viewport, ZoomMode::MatchWidth).unwrap() > 1.0);
    }
}
