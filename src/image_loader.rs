use std::path::Path;

use image::{DynamicImage, ImageError, RgbaImage};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageLoadError {
    #[error("Failed to load image: {0}")]
    Load(#[from] ImageError),
    #[error("File not found: {0}")]
    NotFound(String),
}

/// Open a screenshot in any decodable format. The format is sniffed from the
/// file content, not the extension.
pub fn load_image(path: &Path) -> Result<DynamicImage, ImageLoadError> {
    if !path.exists() {
        return Err(ImageLoadError::NotFound(path.display().to_string()));
    }
    Ok(image::open(path)?)
}

/// Load a screenshot and normalize it to 8-bit RGBA, the only pixel layout
/// the compositor works in.
pub fn load_rgba(path: &Path) -> Result<RgbaImage, ImageLoadError> {
    Ok(load_image(path)?.to_rgba8())
}
