use std::fmt::Write as FmtWrite;
use std::io::IsTerminal;
use std::process::ExitCode;

use gloss_lib::{GlossError, GlossOutput};

use crate::cli::OutputFormat;

/// Write output in the requested format.
pub fn write_output(body: &GlossOutput, format: OutputFormat) -> Result<(), GlossError> {
    match format {
        OutputFormat::Json => {
            let content = serde_json::to_string(body)?;
            println!("{content}");
        }
        OutputFormat::Pretty => write_pretty_output(body)?,
    }
    Ok(())
}

/// Render an error and return the failure exit code.
pub fn render_error(err: GlossError, format: OutputFormat) -> ExitCode {
    let payload = GlossOutput::error(err.to_payload());
    match format {
        OutputFormat::Json => {
            let content =
                serde_json::to_string(&payload).unwrap_or_else(|_| "{\"mode\":\"error\"}".into());
            println!("{content}");
        }
        OutputFormat::Pretty => {
            if let Err(write_err) = write_pretty_output(&payload) {
                eprintln!("Failed to write error output: {}", write_err);
            }
        }
    }
    ExitCode::from(1)
}

/// Pretty output goes to humans on a terminal; pipelines still get JSON.
fn write_pretty_output(body: &GlossOutput) -> Result<(), GlossError> {
    if std::io::stdout().is_terminal() {
        println!("{}", format_pretty(body));
        return Ok(());
    }
    let content = serde_json::to_string_pretty(body)?;
    println!("{content}");
    Ok(())
}

/// Format output for human consumption.
pub fn format_pretty(body: &GlossOutput) -> String {
    match body {
        GlossOutput::Render(out) => {
            let mut buf = String::new();
            match &out.output_path {
                Some(path) => {
                    writeln!(
                        buf,
                        "Saved {} ({}x{} canvas)",
                        path.display(),
                        out.canvas_width,
                        out.canvas_height
                    )
                    .ok();
                }
                None => {
                    writeln!(
                        buf,
                        "Rendered {}x{} canvas",
                        out.canvas_width, out.canvas_height
                    )
                    .ok();
                }
            }
            writeln!(
                buf,
                "Content at ({:.1}, {:.1}), bar {:.0}px",
                out.content_x, out.content_y, out.bar_height
            )
            .ok();
            if out.copied {
                writeln!(buf, "Copied to clipboard").ok();
            }
            buf.trim_end().to_string()
        }
        GlossOutput::Presets(out) => {
            let mut buf = String::new();
            writeln!(buf, "{} presets:", out.catalog).ok();
            for section in &out.sections {
                writeln!(buf, "\n{}", section.label).ok();
                for preset in &section.presets {
                    writeln!(buf, "  {:<18} {}", preset.id, preset.description).ok();
                }
            }
            buf.trim_end().to_string()
        }
        GlossOutput::Error(out) => {
            let mut buf = String::new();
            writeln!(buf, "Error: {}", out.error.message).ok();
            if let Some(remediation) = &out.error.remediation {
                writeln!(buf, "Hint: {remediation}").ok();
            }
            buf.trim_end().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloss_lib::output::{PresetListing, PresetsOutput, RenderOutput, SectionListing};
    use gloss_lib::{ErrorCategory, ErrorPayload, GLOSS_OUTPUT_VERSION};
    use std::path::PathBuf;

    #[test]
    fn pretty_render_mentions_path_and_canvas() {
        let body = GlossOutput::Render(RenderOutput {
            version: GLOSS_OUTPUT_VERSION.to_string(),
            input: PathBuf::from("shot.png"),
            output_path: Some(PathBuf::from("out.png")),
            copied: true,
            canvas_width: 960,
            canvas_height: 960,
            content_x: 80.0,
            content_y: 180.0,
            bar_height: 36.0,
        });
        let text = format_pretty(&body);
        assert!(text.contains("out.png"));
        assert!(text.contains("960x960"));
        assert!(text.contains("Copied to clipboard"));
    }

    #[test]
    fn pretty_error_includes_hint() {
        let body = GlossOutput::error(ErrorPayload::new(
            ErrorCategory::Config,
            "Unknown theme".to_string(),
            "List ids with `gloss presets themes`.",
        ));
        let text = format_pretty(&body);
        assert!(text.starts_with("Error: Unknown theme"));
        assert!(text.contains("Hint:"));
    }

    #[test]
    fn pretty_presets_lists_ids() {
        let body = GlossOutput::Presets(PresetsOutput {
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
        let text = format_pretty(&body);
        assert!(text.contains("Vibrant"));
        assert!(text.contains("pink-purple"));
    }
}
