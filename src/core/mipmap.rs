use image::RgbaImage;

/// Borrowed view of one level of a loaded chain.
#[derive(Debug, Clone, Copy)]
pub struct Mipmap<'a> {
    pub width: u32,
    pub height: u32,
    pub image: &'a RgbaImage,
}

impl<'a> From<&'a RgbaImage> for Mipmap<'a> {
    fn from(image: &'a RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self { width, height, image }
    }
}
