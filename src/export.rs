//! PNG export targets: file on disk and the system clipboard.

use std::borrow::Cow;
use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageOutputFormat, RgbaImage};

use crate::error::Result;

pub const DEFAULT_EXPORT_FILENAME: &str = "beautified-screenshot.png";

/// Encode a rendered surface as PNG bytes.
pub fn encode_png(surface: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(surface.clone())
        .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)?;
    Ok(bytes)
}

/// Write the surface as a PNG file, creating parent directories as needed.
pub fn save_png(surface: &RgbaImage, path: &Path) -> Result<()> {
    let bytes = encode_png(surface)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, bytes)?;
    log::info!("wrote {}", path.display());
    Ok(())
}

/// Place the surface on the system clipboard as raw RGBA image data.
pub fn copy_to_clipboard(surface: &RgbaImage) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_image(arboard::ImageData {
        width: surface.width() as usize,
        height: surface.height() as usize,
        bytes: Cow::Borrowed(surface.as_raw().as_slice()),
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::TempDir;

    #[test]
    fn encoded_bytes_carry_png_signature() {
        let surface = RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 255]));
        let bytes = encode_png(&surface).expect("encode");
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("nested/deep/out.png");
        let surface = RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 255]));
        save_png(&surface, &path).expect("save");

        let reread = image::open(&path).expect("reopen").to_rgba8();
        assert_eq!(reread.dimensions(), (3, 2));
        assert_eq!(reread.get_pixel(1, 1).0, [10, 20, 30, 255]);
    }

    #[test]
    fn alpha_survives_the_png_round_trip() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("alpha.png");
        let surface = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 0]));
        save_png(&surface, &path).expect("save");
        let reread = image::open(&path).expect("reopen").to_rgba8();
        assert_eq!(reread.get_pixel(0, 0).0[3], 0);
    }
}
