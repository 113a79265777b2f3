use crate::core::filter::MipFilter;
use crate::core::types::texture_type::TextureType;

/// Everything a load needs besides the inputs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    pub texture_type: TextureType,
    /// Filter for synthesized levels; ignored without `MIPMAPPED`.
    pub filter: MipFilter,
    pub mirror_v: bool,
    pub mirror_h: bool,
}

impl LoadOptions {
    #[inline]
    pub fn mipmapped(&self) -> bool {
        self.texture_type
            .is_mipmapped()
    }
}
