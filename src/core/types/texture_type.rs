use crate::core::filter::MipFilter;
use crate::core::types::pixel_format::PixelFormat;
use crate::core::types::texture_flags::TextureFlags;
use crate::error::error::TexError;
use crate::error::kind::ErrorKind;

pub const PIXELFORMAT_SHIFT: u32 = 27;
pub const PIXELFORMAT_MASK: u32 = 7;
pub const STRIDE_SETTING_MASK: u32 = 0x1F;

/// Texture type word: pixel format, flag bits and the stride setting.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureType {
    pub format: PixelFormat,
    pub flags: TextureFlags,
    pub stride_setting: u32,
}

impl TextureType {
    pub fn new(format: PixelFormat, flags: TextureFlags) -> Self {
        Self { format, flags, stride_setting: 0 }
    }

    pub fn from_format_name(name: &str, flags: TextureFlags) -> Result<Self, TexError> {
        let format = PixelFormat::from_name(name).ok_or_else(|| TexError::new(ErrorKind::UnsupportedFormat { name: name.to_string() }))?;
        Ok(Self::new(format, flags))
    }

    pub fn from_bits(bits: u32) -> Result<Self, TexError> {
        let raw = (bits >> PIXELFORMAT_SHIFT) & PIXELFORMAT_MASK;
        let format = PixelFormat::try_from(raw).map_err(|_| TexError::new(ErrorKind::UnsupportedFormat { name: raw.to_string() }))?;
        Ok(Self { format, flags: TextureFlags::from_bits_truncate(bits), stride_setting: bits & STRIDE_SETTING_MASK })
    }

    pub fn bits(&self) -> u32 {
        ((self.format as u32) << PIXELFORMAT_SHIFT) | self.flags.bits() | (self.stride_setting & STRIDE_SETTING_MASK)
    }

    #[inline]
    pub fn is_mipmapped(&self) -> bool {
        self.flags
            .contains(TextureFlags::MIPMAPPED)
    }

    #[inline]
    pub fn is_strided(&self) -> bool {
        self.flags
            .contains(TextureFlags::STRIDED)
    }

    #[inline]
    pub fn is_format(&self, format: PixelFormat) -> bool {
        self.format == format
    }

    #[inline]
    pub fn is_paletted(&self) -> bool {
        self.format.is_paletted()
    }

    #[inline]
    pub fn is_16bpp(&self) -> bool {
        !self.is_paletted()
    }

    /// Nearest-neighbour for paletted formats so that no new colors appear.
    pub fn default_filter(&self) -> MipFilter {
        if self.is_paletted() { MipFilter::Nearest } else { MipFilter::Bilinear }
    }

    /// Stride textures store `width / 32` in bits 0..4 once the width is known.
    pub fn with_stride_setting(mut self, width: u32) -> Self {
        self.stride_setting = (width / 32) & STRIDE_SETTING_MASK;
        self
    }

    /// Flag combinations the hardware cannot use.
    pub fn check(&self) -> Result<(), TexError> {
        if !self.is_strided() {
            return Ok(());
        }
        let reason = if self
            .flags
            .contains(TextureFlags::COMPRESSED)
        {
            "stride textures can't be compressed"
        } else if !self
            .flags
            .contains(TextureFlags::NONTWIDDLED)
        {
            "stride textures can't be twiddled"
        } else if self.is_mipmapped() {
            "stride textures can't have mipmaps"
        } else if self.is_paletted() || self.is_format(PixelFormat::BUMPMAP) {
            "only RGB565, ARGB1555, ARGB4444 and YUV422 can be strided"
        } else {
            return Ok(());
        };
        Err(TexError::new(ErrorKind::InvalidTextureType { reason }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRIDE: TextureFlags = TextureFlags::STRIDED.union(TextureFlags::NONTWIDDLED);

    #[test]
    fn bits_round_trip_through_the_word() {
        let tt = TextureType::new(PixelFormat::PAL8BPP, TextureFlags::MIPMAPPED | TextureFlags::COMPRESSED);
        assert_eq!(tt.bits(), (6 << 27) | (1 << 31) | (1 << 30));
        assert_eq!(TextureType::from_bits(tt.bits()).ok(), Some(tt));
    }

    #[test]
    fn format_names_resolve() {
        let tt = TextureType::from_format_name("RGB565", TextureFlags::empty()).unwrap();
        assert_eq!(tt.format, PixelFormat::RGB565);
        let err = TextureType::from_format_name("RGB888", TextureFlags::empty()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnsupportedFormat { name: "RGB888".into() });
    }

    #[test]
    fn paletted_formats_default_to_nearest() {
        assert_eq!(TextureType::new(PixelFormat::PAL4BPP, TextureFlags::empty()).default_filter(), MipFilter::Nearest);
        assert_eq!(TextureType::new(PixelFormat::ARGB4444, TextureFlags::empty()).default_filter(), MipFilter::Bilinear);
    }

    #[test]
    fn stride_rules() {
        assert!(TextureType::new(PixelFormat::RGB565, STRIDE).check().is_ok());
        assert!(TextureType::new(PixelFormat::YUV422, STRIDE).check().is_ok());

        let bad = [
            TextureType::new(PixelFormat::RGB565, STRIDE | TextureFlags::COMPRESSED),
            TextureType::new(PixelFormat::RGB565, TextureFlags::STRIDED),
            TextureType::new(PixelFormat::RGB565, STRIDE | TextureFlags::MIPMAPPED),
            TextureType::new(PixelFormat::PAL8BPP, STRIDE),
            TextureType::new(PixelFormat::BUMPMAP, STRIDE),
        ];
        for tt in bad {
            let err = tt.check().unwrap_err();
            assert_eq!(err.key(), "error-texture-type", "{tt:?}");
        }
    }

    #[test]
    fn stride_setting_is_width_over_32() {
        let tt = TextureType::new(PixelFormat::RGB565, STRIDE).with_stride_setting(640);
        assert_eq!(tt.stride_setting, 20);
        assert_eq!(tt.bits() & STRIDE_SETTING_MASK, 20);
    }
}
