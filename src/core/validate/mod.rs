pub mod pvr_size_rules;

use crate::core::types::texture_flags::TextureFlags;

/// Decides whether a `width`x`height` input is usable for a texture type.
pub trait SizeValidator {
    fn is_valid_size(&self, width: u32, height: u32, flags: TextureFlags) -> bool;
}

impl<F> SizeValidator for F
where
    F: Fn(u32, u32, TextureFlags) -> bool,
{
    fn is_valid_size(&self, width: u32, height: u32, flags: TextureFlags) -> bool {
        self(width, height, flags)
    }
}
