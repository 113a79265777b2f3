use crate::error::error::TexError;
use crate::loader::ImageLoader;
use image::RgbaImage;
use std::path::{Path, PathBuf};

/// One input of a load: where it came from and what the loader produced.
#[derive(Debug)]
pub struct SourceImage {
    pub path: PathBuf,
    pub decoded: Result<RgbaImage, TexError>,
}

impl SourceImage {
    pub fn new(path: impl Into<PathBuf>, image: RgbaImage) -> Self {
        Self { path: path.into(), decoded: Ok(image) }
    }

    pub fn failed(path: impl Into<PathBuf>, err: TexError) -> Self {
        Self { path: path.into(), decoded: Err(err) }
    }

    pub fn decode<L: ImageLoader + ?Sized>(path: &Path, loader: &L) -> Self {
        Self { path: path.to_path_buf(), decoded: loader.decode(path) }
    }
}
