use bitflags::bitflags;

bitflags! {
    /// Flag bits of the texture type word. Pixel format (bits 27..29) and
    /// stride setting (bits 0..4) live in `TextureType`.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TextureFlags: u32 {
        const STRIDED = 1 << 25;
        const NONTWIDDLED = 1 << 26;
        const COMPRESSED = 1 << 30;
        const MIPMAPPED = 1 << 31;
    }
}
