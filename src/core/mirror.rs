use image::RgbaImage;
use image::imageops::{flip_horizontal, flip_vertical, rotate180};

/// Returns `img` flipped along the requested axes.
pub fn mirrored(img: RgbaImage, horizontal: bool, vertical: bool) -> RgbaImage {
    match (horizontal, vertical) {
        (false, false) => img,
        (true, false) => flip_horizontal(&img),
        (false, true) => flip_vertical(&img),
        (true, true) => rotate180(&img),
    }
}
