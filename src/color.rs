use image::Rgba;
use palette::Srgb;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ColorParseError {
    #[error("Invalid hex color '{0}': expected #rgb or #rrggbb")]
    InvalidHex(String),
}

/// Fully transparent black, the "no effect" background fill.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Parse a CSS-style hex color (`#rrggbb` or `#rgb`, leading `#` optional)
/// into an opaque RGBA pixel.
pub fn parse_hex(value: &str) -> Result<Rgba<u8>, ColorParseError> {
    let srgb: Srgb<u8> = value
        .trim()
        .parse()
        .map_err(|_| ColorParseError::InvalidHex(value.to_string()))?;
    Ok(Rgba([srgb.red, srgb.green, srgb.blue, 255]))
}

/// Linear interpolation between two pixels, `t` in [0, 1].
pub fn lerp(from: Rgba<u8>, to: Rgba<u8>, t: f64) -> Rgba<u8> {
    let t = t.clamp(0.0, 1.0);
    let mut out = [0u8; 4];
    for (i, slot) in out.iter_mut().enumerate() {
        let a = from.0[i] as f64;
        let b = to.0[i] as f64;
        *slot = (a + (b - a) * t).round() as u8;
    }
    Rgba(out)
}

/// True when the pixel contributes nothing when composited.
pub fn is_transparent(color: Rgba<u8>) -> bool {
    color.0[3] == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(parse_hex("#ec4899").unwrap(), Rgba([0xec, 0x48, 0x99, 255]));
    }

    #[test]
    fn parses_without_hash_and_short_form() {
        assert_eq!(parse_hex("ffffff").unwrap(), Rgba([255, 255, 255, 255]));
        assert_eq!(parse_hex("#f0a").unwrap(), Rgba([0xff, 0x00, 0xaa, 255]));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_hex("#zzzzzz").is_err());
        assert!(parse_hex("not-a-color").is_err());
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let black = Rgba([0, 0, 0, 255]);
        let white = Rgba([255, 255, 255, 255]);
        assert_eq!(lerp(black, white, 0.0), black);
        assert_eq!(lerp(black, white, 1.0), white);
        assert_eq!(lerp(black, white, 0.5), Rgba([128, 128, 128, 255]));
    }

    #[test]
    fn lerp_clamps_t() {
        let a = Rgba([10, 20, 30, 255]);
        let b = Rgba([200, 100, 50, 255]);
        assert_eq!(lerp(a, b, -1.0), a);
        assert_eq!(lerp(a, b, 2.0), b);
    }

    #[test]
    fn transparency_check() {
        assert!(is_transparent(TRANSPARENT));
        assert!(!is_transparent(Rgba([0, 0, 0, 1])));
    }
}
