pub mod pixel_format;
pub mod texture_flags;
pub mod texture_type;
