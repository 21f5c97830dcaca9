//! The compositor: repaints the whole output surface for a given
//! (source image, resolved settings) pair. Layer order is fixed:
//! background, shadow, then chrome bar and source image inside the
//! content clip, then borders.

use image::{imageops, GrayImage, Luma, Rgba, RgbaImage};

use crate::catalog::{ChromeFrame, Control, ControlKind, ControlSide};
use crate::color::{is_transparent, lerp};
use crate::draw::{self, Clip, Rect};
use crate::layout::{resolve_layout, Layout};
use crate::settings::{ResolvedSettings, ShadowSpec, SHADOW_OPACITY};

/// Gap between the bar edge and the first control, and between circle
/// controls.
const CONTROL_EDGE_GAP: f64 = 20.0;
const CONTROL_PITCH: f64 = 20.0;
/// Icon controls on the right side get extra room so glyphs do not overlap.
const ICON_EXTRA_GAP: f64 = 26.0;
const GLYPH_STROKE: f64 = 1.5;
/// Small manual correction so glyphs sit visually centered in the bar.
const GLYPH_BASELINE_NUDGE: f64 = 0.5;

/// Compose the decorated screenshot onto a fresh surface sized from the
/// resolved layout. Every settings combination yields a surface; degenerate
/// geometry simply draws nothing.
pub fn render(source: &RgbaImage, settings: &ResolvedSettings) -> RgbaImage {
    let layout = resolve_layout(source.width(), source.height(), settings);
    let (width, height) = layout.surface_size();
    let mut surface = RgbaImage::new(width, height);
    log::debug!(
        "rendering {}x{} source onto {}x{} canvas",
        source.width(),
        source.height(),
        width,
        height
    );

    paint_background(&mut surface, settings);

    let content = Rect::new(
        layout.content_x,
        layout.content_y,
        source.width() as f64,
        source.height() as f64 + layout.bar_height,
    );
    let radius = settings.corner_radius.max(0.0);

    if let Some(shadow) = settings.shadow {
        paint_shadow(&mut surface, &content, radius, shadow);
    }

    let clip = Clip {
        rect: content,
        radius,
    };
    if let Some(frame) = settings.frame {
        if layout.bar_height > 0.0 {
            paint_chrome_bar(&mut surface, frame, &content, &clip);
        }
    }
    paint_source(&mut surface, source, &content, layout.bar_height, &clip);

    paint_borders(&mut surface, settings, &content, &layout);

    surface
}

/// Replace `surface` with a freshly composed pass; the buffer is resized to
/// the recomputed canvas dimensions.
pub fn render_into(surface: &mut RgbaImage, source: &RgbaImage, settings: &ResolvedSettings) {
    *surface = render(source, settings);
}

fn paint_background(surface: &mut RgbaImage, settings: &ResolvedSettings) {
    let c1 = settings.bg_color1;
    let c2 = settings.bg_color2;
    if is_transparent(c1) && is_transparent(c2) {
        return;
    }
    if c1 == c2 {
        for pixel in surface.pixels_mut() {
            *pixel = c1;
        }
        return;
    }

    // Gradient axis: a vector scaled by the canvas extents, rotated around
    // the canvas center by the configured angle.
    let width = surface.width() as f64;
    let height = surface.height() as f64;
    let angle = settings.gradient_angle.to_radians();
    let (cx, cy) = (width / 2.0, height / 2.0);
    let x1 = cx - angle.cos() * width;
    let y1 = cy - angle.sin() * height;
    let x2 = cx + angle.cos() * width;
    let y2 = cy + angle.sin() * height;
    let dx = x2 - x1;
    let dy = y2 - y1;
    let len_sq = dx * dx + dy * dy;

    for (x, y, pixel) in surface.enumerate_pixels_mut() {
        let px = x as f64 + 0.5;
        let py = y as f64 + 0.5;
        let t = if len_sq > 0.0 {
            ((px - x1) * dx + (py - y1) * dy) / len_sq
        } else {
            0.0
        };
        *pixel = lerp(c1, c2, t);
    }
}

fn paint_shadow(surface: &mut RgbaImage, content: &Rect, radius: f64, shadow: ShadowSpec) {
    let shadow_rect = Rect::new(
        content.x,
        content.y + shadow.offset_y,
        content.width,
        content.height,
    );
    if shadow_rect.width <= 0.0 || shadow_rect.height <= 0.0 {
        return;
    }

    let mut mask = GrayImage::new(surface.width(), surface.height());
    for (x, y, pixel) in mask.enumerate_pixels_mut() {
        let px = x as f64 + 0.5;
        let py = y as f64 + 0.5;
        let distance = draw::rounded_rect_sdf(px, py, &shadow_rect, radius);
        let coverage = (0.5 - distance).clamp(0.0, 1.0);
        *pixel = Luma([(coverage * 255.0).round() as u8]);
    }

    // Canvas-style shadowBlur maps to roughly twice the gaussian sigma.
    let sigma = (shadow.blur / 2.0) as f32;
    let blurred = if sigma > 0.0 {
        imageops::blur(&mask, sigma)
    } else {
        mask
    };

    let black = Rgba([0, 0, 0, 255]);
    for (x, y, pixel) in blurred.enumerate_pixels() {
        let alpha = pixel.0[0] as f64 / 255.0 * SHADOW_OPACITY;
        draw::blend_pixel(surface, x as i64, y as i64, black, alpha);
    }
}

fn paint_chrome_bar(surface: &mut RgbaImage, frame: &ChromeFrame, content: &Rect, clip: &Clip) {
    let bar = Rect::new(content.x, content.y, content.width, frame.bar_height);
    draw::fill_rounded_rect(surface, &bar, 0.0, frame.bar_color, Some(clip));

    let center_y = content.y + frame.bar_height / 2.0;
    match frame.controls_side {
        ControlSide::Left => {
            for (index, control) in frame.controls.iter().enumerate() {
                let center_x = content.x + CONTROL_EDGE_GAP + index as f64 * CONTROL_PITCH;
                paint_control(surface, control, index, center_x, center_y, clip);
            }
        }
        ControlSide::Right => {
            let mut offset = CONTROL_EDGE_GAP;
            for (index, control) in frame.controls.iter().enumerate() {
                let center_x = content.x + content.width - offset;
                paint_control(surface, control, index, center_x, center_y, clip);
                offset += match control.kind {
                    ControlKind::Icon => CONTROL_PITCH + ICON_EXTRA_GAP,
                    ControlKind::Circle => CONTROL_PITCH,
                };
            }
        }
    }
}

fn paint_control(
    surface: &mut RgbaImage,
    control: &Control,
    index: usize,
    center_x: f64,
    center_y: f64,
    clip: &Clip,
) {
    match control.kind {
        ControlKind::Circle => {
            draw::fill_disc(
                surface,
                center_x,
                center_y,
                control.size / 2.0,
                control.color,
                Some(clip),
            );
        }
        ControlKind::Icon => paint_glyph(surface, index, center_x, center_y, control, clip),
    }
}

/// Window-control glyph by declaration index: 0 minimize, 1 maximize,
/// 2 close. Indexes past the 3-slot table reuse the minimize glyph.
fn paint_glyph(
    surface: &mut RgbaImage,
    index: usize,
    center_x: f64,
    center_y: f64,
    control: &Control,
    clip: &Clip,
) {
    let center_y = center_y + GLYPH_BASELINE_NUDGE;
    let half = control.size / 2.0;
    let color = control.color;
    match index {
        1 => {
            // maximize: a stroked square
            let side = control.size * 0.7;
            let (x0, y0) = (center_x - side / 2.0, center_y - side / 2.0);
            let (x1, y1) = (center_x + side / 2.0, center_y + side / 2.0);
            draw::stroke_line(surface, x0, y0, x1, y0, GLYPH_STROKE, color, Some(clip));
            draw::stroke_line(surface, x1, y0, x1, y1, GLYPH_STROKE, color, Some(clip));
            draw::stroke_line(surface, x1, y1, x0, y1, GLYPH_STROKE, color, Some(clip));
            draw::stroke_line(surface, x0, y1, x0, y0, GLYPH_STROKE, color, Some(clip));
        }
        2 => {
            // close: two diagonals
            let arm = half * 0.8;
            draw::stroke_line(
                surface,
                center_x - arm,
                center_y - arm,
                center_x + arm,
                center_y + arm,
                GLYPH_STROKE,
                color,
                Some(clip),
            );
            draw::stroke_line(
                surface,
                center_x - arm,
                center_y + arm,
                center_x + arm,
                center_y - arm,
                GLYPH_STROKE,
                color,
                Some(clip),
            );
        }
        _ => {
            // minimize, and the fallback for indexes past the glyph table
            draw::stroke_line(
                surface,
                center_x - half,
                center_y,
                center_x + half,
                center_y,
                GLYPH_STROKE,
                color,
                Some(clip),
            );
        }
    }
}

fn paint_source(
    surface: &mut RgbaImage,
    source: &RgbaImage,
    content: &Rect,
    bar_height: f64,
    clip: &Clip,
) {
    let origin_x = content.x;
    let origin_y = content.y + bar_height;
    let src_w = source.width() as i64;
    let src_h = source.height() as i64;

    let x0 = origin_x.floor().max(0.0) as i64;
    let y0 = origin_y.floor().max(0.0) as i64;
    let x1 = ((origin_x + src_w as f64).ceil() as i64).min(surface.width() as i64);
    let y1 = ((origin_y + src_h as f64).ceil() as i64).min(surface.height() as i64);

    for y in y0..y1 {
        for x in x0..x1 {
            let px = x as f64 + 0.5;
            let py = y as f64 + 0.5;
            let sx = (px - origin_x).floor() as i64;
            let sy = (py - origin_y).floor() as i64;
            if sx < 0 || sy < 0 || sx >= src_w || sy >= src_h {
                continue;
            }
            let alpha = clip.coverage(px, py);
            if alpha <= 0.0 {
                continue;
            }
            let pixel = *source.get_pixel(sx as u32, sy as u32);
            draw::blend_pixel(surface, x, y, pixel, alpha);
        }
    }
}

fn paint_borders(
    surface: &mut RgbaImage,
    settings: &ResolvedSettings,
    content: &Rect,
    layout: &Layout,
) {
    let radius = settings.corner_radius.max(0.0);

    let width = settings.screenshot_border;
    if width > 0.0 {
        let rect = content.inset(width / 2.0);
        let stroke_radius = (radius - width / 2.0).max(0.0);
        draw::stroke_rounded_rect(surface, &rect, stroke_radius, width, settings.bg_color1);
    }

    let width = settings.image_border;
    if width > 0.0 {
        let canvas = Rect::new(0.0, 0.0, layout.canvas_width, layout.canvas_height);
        let rect = canvas.inset(width / 2.0);
        let stroke_radius = (radius - width / 2.0).max(0.0);
        draw::stroke_rounded_rect(surface, &rect, stroke_radius, width, settings.bg_color2);
    }
}
