//! Pixel-level drawing primitives used by the compositor: coverage-based
//! rounded-rectangle fills and strokes, discs, capsule line strokes, and
//! source-over blending. Coverage comes from signed distance evaluated at
//! pixel centers, which gives deterministic, lightly antialiased edges.

use image::{Rgba, RgbaImage};

/// Axis-aligned rectangle in canvas space, fractional coordinates allowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Shrink the rectangle by `amount` on every side.
    pub fn inset(&self, amount: f64) -> Rect {
        Rect {
            x: self.x + amount,
            y: self.y + amount,
            width: self.width - 2.0 * amount,
            height: self.height - 2.0 * amount,
        }
    }

    fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Rounded-rectangle clip region; coverage multiplies into everything drawn
/// while the clip is active.
#[derive(Debug, Clone, Copy)]
pub struct Clip {
    pub rect: Rect,
    pub radius: f64,
}

impl Clip {
    pub fn coverage(&self, px: f64, py: f64) -> f64 {
        fill_coverage(rounded_rect_sdf(px, py, &self.rect, self.radius))
    }
}

/// Signed distance from a point to a rounded rectangle boundary; negative
/// inside.
pub fn rounded_rect_sdf(px: f64, py: f64, rect: &Rect, radius: f64) -> f64 {
    let max_radius = (rect.width.min(rect.height) / 2.0).max(0.0);
    let radius = radius.clamp(0.0, max_radius);
    let cx = rect.x + rect.width / 2.0;
    let cy = rect.y + rect.height / 2.0;
    let hx = rect.width / 2.0;
    let hy = rect.height / 2.0;
    let qx = (px - cx).abs() - (hx - radius);
    let qy = (py - cy).abs() - (hy - radius);
    let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
    qx.max(qy).min(0.0) + outside - radius
}

fn fill_coverage(distance: f64) -> f64 {
    (0.5 - distance).clamp(0.0, 1.0)
}

fn stroke_coverage(distance: f64, stroke_width: f64) -> f64 {
    (stroke_width / 2.0 + 0.5 - distance.abs()).clamp(0.0, 1.0)
}

/// Source-over blend of `color` at `alpha` onto one pixel. Out-of-bounds
/// writes and zero alpha are no-ops.
pub fn blend_pixel(surface: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>, alpha: f64) {
    if alpha <= 0.0 || x < 0 || y < 0 || x >= surface.width() as i64 || y >= surface.height() as i64
    {
        return;
    }
    let alpha = alpha.clamp(0.0, 1.0) * (color.0[3] as f64 / 255.0);
    if alpha <= 0.0 {
        return;
    }

    let dst = surface.get_pixel_mut(x as u32, y as u32);
    let inv = 1.0 - alpha;
    for i in 0..3 {
        let src_c = color.0[i] as f64;
        let dst_c = dst.0[i] as f64;
        dst.0[i] = (src_c * alpha + dst_c * inv).round() as u8;
    }
    let dst_a = dst.0[3] as f64 / 255.0;
    dst.0[3] = ((alpha + dst_a * inv) * 255.0).round() as u8;
}

/// Pixel bounding box of a rect expanded by `margin`, clamped to the surface.
fn bounds(surface: &RgbaImage, rect: &Rect, margin: f64) -> Option<(i64, i64, i64, i64)> {
    let x0 = (rect.x - margin).floor() as i64;
    let y0 = (rect.y - margin).floor() as i64;
    let x1 = (rect.x + rect.width + margin).ceil() as i64;
    let y1 = (rect.y + rect.height + margin).ceil() as i64;
    let x0 = x0.max(0);
    let y0 = y0.max(0);
    let x1 = x1.min(surface.width() as i64);
    let y1 = y1.min(surface.height() as i64);
    if x0 >= x1 || y0 >= y1 {
        return None;
    }
    Some((x0, y0, x1, y1))
}

/// Fill a rounded rectangle, optionally restricted by a clip region.
pub fn fill_rounded_rect(
    surface: &mut RgbaImage,
    rect: &Rect,
    radius: f64,
    color: Rgba<u8>,
    clip: Option<&Clip>,
) {
    if rect.is_degenerate() || color.0[3] == 0 {
        return;
    }
    let Some((x0, y0, x1, y1)) = bounds(surface, rect, 1.0) else {
        return;
    };
    for y in y0..y1 {
        for x in x0..x1 {
            let (px, py) = (x as f64 + 0.5, y as f64 + 0.5);
            let mut alpha = fill_coverage(rounded_rect_sdf(px, py, rect, radius));
            if let Some(clip) = clip {
                alpha *= clip.coverage(px, py);
            }
            blend_pixel(surface, x, y, color, alpha);
        }
    }
}

/// Stroke a rounded rectangle outline centered on the rect boundary.
pub fn stroke_rounded_rect(
    surface: &mut RgbaImage,
    rect: &Rect,
    radius: f64,
    stroke_width: f64,
    color: Rgba<u8>,
) {
    if rect.is_degenerate() || stroke_width <= 0.0 || color.0[3] == 0 {
        return;
    }
    let margin = stroke_width / 2.0 + 1.0;
    let Some((x0, y0, x1, y1)) = bounds(surface, rect, margin) else {
        return;
    };
    for y in y0..y1 {
        for x in x0..x1 {
            let (px, py) = (x as f64 + 0.5, y as f64 + 0.5);
            let alpha = stroke_coverage(rounded_rect_sdf(px, py, rect, radius), stroke_width);
            blend_pixel(surface, x, y, color, alpha);
        }
    }
}

/// Fill a disc of the given radius, optionally clipped.
pub fn fill_disc(
    surface: &mut RgbaImage,
    cx: f64,
    cy: f64,
    radius: f64,
    color: Rgba<u8>,
    clip: Option<&Clip>,
) {
    if radius <= 0.0 || color.0[3] == 0 {
        return;
    }
    let rect = Rect::new(cx - radius, cy - radius, 2.0 * radius, 2.0 * radius);
    let Some((x0, y0, x1, y1)) = bounds(surface, &rect, 1.0) else {
        return;
    };
    for y in y0..y1 {
        for x in x0..x1 {
            let (px, py) = (x as f64 + 0.5, y as f64 + 0.5);
            let distance = ((px - cx).powi(2) + (py - cy).powi(2)).sqrt() - radius;
            let mut alpha = fill_coverage(distance);
            if let Some(clip) = clip {
                alpha *= clip.coverage(px, py);
            }
            blend_pixel(surface, x, y, color, alpha);
        }
    }
}

/// Stroke a line segment with round caps (capsule coverage), optionally
/// clipped.
#[allow(clippy::too_many_arguments)]
pub fn stroke_line(
    surface: &mut RgbaImage,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    stroke_width: f64,
    color: Rgba<u8>,
    clip: Option<&Clip>,
) {
    if stroke_width <= 0.0 || color.0[3] == 0 {
        return;
    }
    let half = stroke_width / 2.0;
    let rect = Rect::new(
        x1.min(x2) - half,
        y1.min(y2) - half,
        (x2 - x1).abs() + stroke_width,
        (y2 - y1).abs() + stroke_width,
    );
    let Some((x0, y0, bx1, by1)) = bounds(surface, &rect, 1.0) else {
        return;
    };
    let dx = x2 - x1;
    let dy = y2 - y1;
    let len_sq = dx * dx + dy * dy;
    for y in y0..by1 {
        for x in x0..bx1 {
            let (px, py) = (x as f64 + 0.5, y as f64 + 0.5);
            let t = if len_sq > 0.0 {
                (((px - x1) * dx + (py - y1) * dy) / len_sq).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let nx = x1 + t * dx;
            let ny = y1 + t * dy;
            let distance = ((px - nx).powi(2) + (py - ny).powi(2)).sqrt() - half;
            let mut alpha = fill_coverage(distance);
            if let Some(clip) = clip {
                alpha *= clip.coverage(px, py);
            }
            blend_pixel(surface, x, y, color, alpha);
        }
    }
}
