// Min/max size supported by the PVR2DC
pub const TEXTURE_SIZE_MIN: u32 = 8;
pub const TEXTURE_SIZE_MAX: u32 = 1024;
pub const TEXTURE_STRIDE_MIN: u32 = 32;
pub const TEXTURE_STRIDE_MAX: u32 = 992;
