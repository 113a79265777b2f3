pub mod core;
pub mod error;
pub mod export;
pub mod loader;
pub mod run;
mod util;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod config;

pub use crate::core::builder::MipmapBuilder;
pub use crate::core::consts::{TEXTURE_SIZE_MAX, TEXTURE_SIZE_MIN};
pub use crate::core::filter::MipFilter;
pub use crate::core::options::LoadOptions;
pub use crate::core::source::SourceImage;
pub use crate::core::types::pixel_format::PixelFormat;
pub use crate::core::types::texture_flags::TextureFlags;
pub use crate::core::types::texture_type::TextureType;
pub use crate::error::error::TexError;
pub use crate::error::kind::ErrorKind;
pub use crate::util::next_pow2::next_pow2;
