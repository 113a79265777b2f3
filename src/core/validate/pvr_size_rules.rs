use crate::core::consts::{TEXTURE_SIZE_MAX, TEXTURE_SIZE_MIN, TEXTURE_STRIDE_MAX, TEXTURE_STRIDE_MIN};
use crate::core::types::texture_flags::TextureFlags;
use crate::core::validate::SizeValidator;
use crate::util::is_pow2::is_pow2;

/// Size rules of the PVR2DC.
///
/// - Stride textures: width in `[32, 992]` and a multiple of 32, height a
///   power of two in `[8, 1024]`.
/// - Everything else: both sides powers of two up to 1024. Mipmapped inputs
///   may go down to 1x1, others must be at least 8.
#[derive(Debug, Default, Clone, Copy)]
pub struct PvrSizeRules;

impl SizeValidator for PvrSizeRules {
    fn is_valid_size(&self, width: u32, height: u32, flags: TextureFlags) -> bool {
        if flags.contains(TextureFlags::STRIDED) {
            let w_ok = (TEXTURE_STRIDE_MIN..=TEXTURE_STRIDE_MAX).contains(&width) && width % 32 == 0;
            let h_ok = (TEXTURE_SIZE_MIN..=TEXTURE_SIZE_MAX).contains(&height) && is_pow2(height);
            return w_ok && h_ok;
        }
        let min = if flags.contains(TextureFlags::MIPMAPPED) { 1 } else { TEXTURE_SIZE_MIN };
        let side_ok = |v: u32| (min..=TEXTURE_SIZE_MAX).contains(&v) && is_pow2(v);
        side_ok(width) && side_ok(height)
    }
}
