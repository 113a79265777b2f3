pub mod access;
pub mod load;
pub mod unload;

use crate::core::chain::MipChain;
use crate::core::observer::LoadObserver;
use crate::core::observer::log_observer::LogObserver;
use crate::core::validate::SizeValidator;
use crate::core::validate::pvr_size_rules::PvrSizeRules;
use std::fmt;

/// Owns a texture's mipmap chain.
///
/// The builder has two states once loaded:
/// - without `MIPMAPPED` there is one image and it may be rectangular;
/// - with `MIPMAPPED` there are square images from the largest input down to
///   1x1, with no gaps.
pub struct MipmapBuilder {
    chain: MipChain,
    /// Ascending sizes of `chain`, refreshed once per successful load.
    keys: Vec<u32>,
    /// Bounding size over all inputs of the last load.
    texture_size: (u32, u32),
    validator: Box<dyn SizeValidator + Send + Sync>,
    observer: Box<dyn LoadObserver + Send + Sync>,
}

impl MipmapBuilder {
    pub fn new() -> Self {
        Self { chain: MipChain::default(), keys: Vec::new(), texture_size: (0, 0), validator: Box::new(PvrSizeRules), observer: Box::new(LogObserver) }
    }

    pub fn with_validator(mut self, validator: impl SizeValidator + Send + Sync + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }

    pub fn with_observer(mut self, observer: impl LoadObserver + Send + Sync + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }
}

impl Default for MipmapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MipmapBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MipmapBuilder")
            .field("keys", &self.keys)
            .field("texture_size", &self.texture_size)
            .finish_non_exhaustive()
    }
}
