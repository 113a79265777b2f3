pub mod fill_gaps;

use image::RgbaImage;
use std::collections::BTreeMap;

/// Images keyed by width, at most one per size.
///
/// Keys of a mipmapped chain are powers of two; a single stride texture may
/// be keyed by any multiple of 32.
#[derive(Debug, Clone, Default)]
pub struct MipChain {
    levels: BTreeMap<u32, RgbaImage>,
}

impl MipChain {
    /// Insert `image` under `size`, replacing any previous image of that size.
    #[inline]
    pub fn insert(&mut self, size: u32, image: RgbaImage) -> Option<RgbaImage> {
        self.levels.insert(size, image)
    }

    #[inline]
    pub fn get(&self, size: u32) -> Option<&RgbaImage> {
        self.levels.get(&size)
    }

    #[inline]
    pub fn contains(&self, size: u32) -> bool {
        self.levels
            .contains_key(&size)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn clear(&mut self) {
        self.levels.clear();
    }

    /// Sizes in ascending order.
    pub fn sizes(&self) -> Vec<u32> {
        self.levels
            .keys()
            .copied()
            .collect()
    }
}
