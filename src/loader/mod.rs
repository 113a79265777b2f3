pub mod file_image_loader;

use crate::error::error::TexError;
use image::RgbaImage;
use std::path::Path;

/// Turns a path into RGBA pixels.
pub trait ImageLoader {
    fn decode(&self, path: &Path) -> Result<RgbaImage, TexError>;
}
