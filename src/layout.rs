use crate::settings::{Anchor, AxisAlign, ResolvedSettings};

/// Resolved canvas geometry for one render pass. All values are in pixels;
/// fractional positions are legal and rounded only at surface allocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub content_x: f64,
    pub content_y: f64,
    pub bar_height: f64,
}

impl Layout {
    /// Pixel dimensions of the output surface, never below 1x1.
    pub fn surface_size(&self) -> (u32, u32) {
        let w = self.canvas_width.round().max(1.0) as u32;
        let h = self.canvas_height.round().max(1.0) as u32;
        (w, h)
    }
}

/// Map source dimensions and resolved settings to canvas dimensions and
/// content placement. Pure arithmetic; degenerate combinations are not
/// rejected here, drawing no-ops on them downstream.
pub fn resolve_layout(source_width: u32, source_height: u32, settings: &ResolvedSettings) -> Layout {
    let bar_height = settings.frame.map_or(0.0, |f| f.bar_height);
    let content_width = source_width as f64;
    let content_height = source_height as f64 + bar_height;
    let padding = settings.padding;

    let (canvas_width, canvas_height) = match settings.ratio {
        None => {
            // Off-center anchors reserve an extra padding step so the content
            // cannot touch the canvas edge when pushed toward a corner.
            let margin = if settings.position == Anchor::Center {
                2.0 * padding
            } else {
                3.0 * padding
            };
            (content_width + margin, content_height + margin)
        }
        Some(ratio) if (ratio - 1.0).abs() < f64::EPSILON => {
            let side = content_width.max(content_height) + 2.0 * padding;
            (side, side)
        }
        Some(ratio) => {
            let mut width = content_width + 2.0 * padding;
            let mut height = width / ratio;
            if height < content_height + 2.0 * padding {
                height = content_height + 2.0 * padding;
                width = height * ratio;
            }
            (width, height)
        }
    };

    let content_x = place_axis(
        settings.position.horizontal(),
        canvas_width,
        content_width,
        padding,
    );
    let content_y = place_axis(
        settings.position.vertical(),
        canvas_height,
        content_height,
        padding,
    );

    Layout {
        canvas_width,
        canvas_height,
        content_x,
        content_y,
        bar_height,
    }
}

fn place_axis(align: AxisAlign, canvas: f64, content: f64, padding: f64) -> f64 {
    match align {
        AxisAlign::Start => padding,
        AxisAlign::Center => (canvas - content) / 2.0,
        AxisAlign::End => canvas - content - padding,
    }
}
