use crate::color::ColorParseError;
use crate::image_loader::ImageLoadError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GlossError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    #[error("Color error: {0}")]
    Color(#[from] ColorParseError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl GlossError {
    pub fn config(message: impl Into<String>) -> Self {
        GlossError::Config(message.into())
    }

    pub fn to_payload(&self) -> ErrorPayload {
        match self {
            GlossError::Io(e) => ErrorPayload::new(
                ErrorCategory::Io,
                e.to_string(),
                "Check file paths and permissions.",
            ),
            GlossError::Image(e) => ErrorPayload::new(
                ErrorCategory::Image,
                e.to_string(),
                "Verify the input image path/format and readability.",
            ),
            GlossError::Clipboard(e) => ErrorPayload::new(
                ErrorCategory::Clipboard,
                e.to_string(),
                "Clipboard access failed; retry, or export to a file with --output instead.",
            ),
            GlossError::Color(e) => ErrorPayload::new(
                ErrorCategory::Config,
                e.to_string(),
                "Use a hex color like #ec4899 for --bg-color1/--bg-color2.",
            ),
            GlossError::Serialization(e) => ErrorPayload::new(
                ErrorCategory::Config,
                e.to_string(),
                "Check serialization inputs; run with --verbose for details.",
            ),
            GlossError::Config(msg) => {
                let lower = msg.to_ascii_lowercase();
                if lower.contains("settings file") {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Check the --settings TOML file (camelCase keys, e.g. backgroundTheme = \"pink-purple\").",
                    )
                } else if lower.contains("custom-ratio") || lower.contains("custom ratio") {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Pass --custom-ratio WIDTHxHEIGHT with positive integers (e.g. 16x10).",
                    )
                } else {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Check flags and paths; run `gloss presets themes|backgrounds|proportions` to list valid ids.",
                    )
                }
            }
        }
    }
}

impl From<ImageLoadError> for GlossError {
    fn from(err: ImageLoadError) -> Self {
        match err {
            ImageLoadError::Load(e) => GlossError::Image(e),
            ImageLoadError::NotFound(path) => {
                GlossError::Config(format!("Input file not found: {}", path))
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GlossError>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Config,
    Io,
    Image,
    Clipboard,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub category: ErrorCategory,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}

impl ErrorPayload {
    pub fn new(category: ErrorCategory, message: String, remediation: impl Into<String>) -> Self {
        Self {
            category,
            message,
            remediation: Some(remediation.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_file_errors_get_toml_remediation() {
        let err = GlossError::Config("Failed to read settings file: bad.toml".to_string());
        let payload = err.to_payload();
        assert_eq!(payload.category, ErrorCategory::Config);
        let remediation = payload.remediation.unwrap_or_default();
        assert!(
            remediation.contains("TOML"),
            "expected TOML remediation, got: {remediation}"
        );
    }

    #[test]
    fn custom_ratio_errors_get_format_hint() {
        let err = GlossError::Config("Invalid --custom-ratio value".to_string());
        let remediation = err.to_payload().remediation.unwrap_or_default();
        assert!(
            remediation.contains("WIDTHxHEIGHT"),
            "expected ratio format hint, got: {remediation}"
        );
    }

    #[test]
    fn generic_config_errors_point_at_preset_listing() {
        let err = GlossError::Config("Unknown flag combination".to_string());
        let remediation = err.to_payload().remediation.unwrap_or_default();
        assert!(
            remediation.contains("gloss presets"),
            "expected preset listing hint, got: {remediation}"
        );
    }

    #[test]
    fn missing_input_maps_to_config_category() {
        let err = GlossError::from(ImageLoadError::NotFound("shot.png".to_string()));
        assert_eq!(err.to_payload().category, ErrorCategory::Config);
    }

    #[test]
    fn color_errors_mention_hex_flags() {
        let err = GlossError::from(ColorParseError::InvalidHex("oops".to_string()));
        let remediation = err.to_payload().remediation.unwrap_or_default();
        assert!(remediation.contains("--bg-color1"));
    }
}
