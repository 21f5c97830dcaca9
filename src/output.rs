use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ErrorPayload;

/// Schema version for output payloads.
pub const GLOSS_OUTPUT_VERSION: &str = "0.1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum GlossOutput {
    Render(RenderOutput),
    Presets(PresetsOutput),
    Error(ErrorOutput),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOutput {
    pub version: String,
    pub input: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,
    pub copied: bool,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub content_x: f64,
    pub content_y: f64,
    pub bar_height: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetsOutput {
    pub version: String,
    pub catalog: String,
    pub sections: Vec<SectionListing>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionListing {
    pub id: String,
    pub label: String,
    pub presets: Vec<PresetListing>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetListing {
    pub id: String,
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorOutput {
    pub version: String,
    pub error: ErrorPayload,
}

impl GlossOutput {
    pub fn error(payload: ErrorPayload) -> Self {
        GlossOutput::Error(ErrorOutput {
            version: GLOSS_OUTPUT_VERSION.to_string(),
            error: payload,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorCategory, ErrorPayload};

    #[test]
    fn render_output_serializes_camel_case_with_mode_tag() {
        let output = GlossOutput::Render(RenderOutput {
            version: GLOSS_OUTPUT_VERSION.to_string(),
            input: PathBuf::from("shot.png"),
            output_path: Some(PathBuf::from("out.png")),
            copied: false,
            canvas_width: 960,
            canvas_height: 960,
            content_x: 80.0,
            content_y: 180.0,
            bar_height: 0.0,
        });
        let json = serde_json::to_value(&output).expect("serialize");
        assert_eq!(json["mode"], "render");
        assert_eq!(json["canvasWidth"], 960);
        assert_eq!(json["outputPath"], "out.png");
        assert_eq!(json["barHeight"], 0.0);
    }

    #[test]
    fn absent_output_path_is_omitted() {
        let output = GlossOutput::Render(RenderOutput {
            version: GLOSS_OUTPUT_VERSION.to_string(),
            input: PathBuf::from("shot.png"),
            output_path: None,
            copied: true,
            canvas_width: 1,
            canvas_height: 1,
            content_x: 0.0,
            content_y: 0.0,
            bar_height: 0.0,
        });
        let json = serde_json::to_value(&output).expect("serialize");
        assert!(json.get("outputPath").is_none());
        assert_eq!(json["copied"], true);
    }

    #[test]
    fn error_output_carries_category_and_remediation() {
        let output = GlossOutput::error(ErrorPayload::new(
            ErrorCategory::Config,
            "Unknown theme".to_string(),
            "List ids with `gloss presets themes`.",
        ));
        let json = serde_json::to_value(&output).expect("serialize");
        assert_eq!(json["mode"], "error");
        assert_eq!(json["error"]["category"], "config");
        assert!(json["error"]["remediation"]
            .as_str()
            .unwrap()
            .contains("presets"));
    }

    #[test]
    fn presets_output_round_trips() {
        let output = GlossOutput::Presets(PresetsOutput {
            version: GLOSS_OUTPUT_VERSION.to_string(),
            catalog: "backgrounds".to_string(),
            sections: vec![SectionListing {
                id: "vibrant".to_string(),
                label: "Vibrant".to_string(),
                presets: vec![PresetListing {
                    id: "pink-purple".to_string(),
                    label: "Pink Purple".to_string(),
                    description: "Default gradient".to_string(),
                }],
            }],
        });
        let json = serde_json::to_string(&output).expect("serialize");
        let back: GlossOutput = serde_json::from_str(&json).expect("deserialize");
        match back {
            GlossOutput::Presets(p) => {
                assert_eq!(p.catalog, "backgrounds");
                assert_eq!(p.sections[0].presets[0].id, "pink-purple");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
