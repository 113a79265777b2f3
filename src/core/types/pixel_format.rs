use num_enum::TryFromPrimitive;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
#[repr(u32)]
pub enum PixelFormat {
    ARGB1555 = 0,
    RGB565 = 1,
    ARGB4444 = 2,
    YUV422 = 3,
    BUMPMAP = 4,
    PAL4BPP = 5,
    PAL8BPP = 6,
}

impl Default for PixelFormat {
    fn default() -> Self {
        PixelFormat::ARGB1555
    }
}

impl PixelFormat {
    pub const ALL: [PixelFormat; 7] = [PixelFormat::ARGB1555, PixelFormat::RGB565, PixelFormat::ARGB4444, PixelFormat::YUV422, PixelFormat::BUMPMAP, PixelFormat::PAL4BPP, PixelFormat::PAL8BPP];

    pub fn name(self) -> &'static str {
        match self {
            PixelFormat::ARGB1555 => "ARGB1555",
            PixelFormat::RGB565 => "RGB565",
            PixelFormat::ARGB4444 => "ARGB4444",
            PixelFormat::YUV422 => "YUV422",
            PixelFormat::BUMPMAP => "BUMPMAP",
            PixelFormat::PAL4BPP => "PAL4BPP",
            PixelFormat::PAL8BPP => "PAL8BPP",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.name() == name)
    }

    pub fn is_paletted(self) -> bool {
        matches!(self, PixelFormat::PAL4BPP | PixelFormat::PAL8BPP)
    }
}
