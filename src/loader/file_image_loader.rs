use crate::error::error::TexError;
use crate::error::kind::ErrorKind;
use crate::loader::ImageLoader;
use image::RgbaImage;
use std::path::Path;

/// Reads any format the `image` crate was built with.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileImageLoader;

impl ImageLoader for FileImageLoader {
    fn decode(&self, path: &Path) -> Result<RgbaImage, TexError> {
        let img = image::open(path)?.to_rgba8();
        let (w, h) = img.dimensions();
        if w == 0 || h == 0 {
            return Err(TexError::new(ErrorKind::ImageEmpty { path: path.to_path_buf() })
                .with_arg("width", w)
                .with_arg("height", h));
        }
        Ok(img)
    }
}
