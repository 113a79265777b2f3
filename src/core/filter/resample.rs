use crate::core::filter::MipFilter;
use crate::core::filter::kaiser::downsample_kaiser;
use image::RgbaImage;
use image::imageops::{FilterType, resize};

impl MipFilter {
    /// Downscale `src` to `size`x`size`.
    pub fn downsample(self, src: &RgbaImage, size: u32) -> RgbaImage {
        match self {
            MipFilter::Nearest => resize(src, size, size, FilterType::Nearest),
            MipFilter::Bilinear => resize(src, size, size, FilterType::Triangle),
            MipFilter::Kaiser => downsample_kaiser(src, size),
        }
    }
}
