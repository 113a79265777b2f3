use crate::core::chain::MipChain;
use crate::core::consts::TEXTURE_SIZE_MAX;
use crate::core::filter::MipFilter;
use crate::core::observer::LoadObserver;

impl MipChain {
    /// Generate every missing level below an existing one by scaling down the
    /// level above it. Walks from `TEXTURE_SIZE_MAX / 2` to 1, so a generated
    /// level feeds the next smaller one.
    pub fn fill_gaps(&mut self, filter: MipFilter, observer: &dyn LoadObserver) {
        let mut size = TEXTURE_SIZE_MAX / 2;
        while size >= 1 {
            if !self.contains(size) {
                if let Some(parent) = self.get(size * 2) {
                    let mip = filter.downsample(parent, size);
                    self.insert(size, mip);
                    observer.level_generated(size, filter);
                }
            }
            size /= 2;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::observer::null_observer::NullObserver;
    use image::{Rgba, RgbaImage};

    fn solid(size: u32, v: u8) -> RgbaImage {
        RgbaImage::from_pixel(size, size, Rgba([v, v, v, 255]))
    }

    #[test]
    fn fills_down_to_one() {
        let mut chain = MipChain::default();
        chain.insert(64, solid(64, 10));
        chain.fill_gaps(MipFilter::Bilinear, &NullObserver);
        assert_eq!(chain.sizes(), vec![1, 2, 4, 8, 16, 32, 64]);
        for size in chain.sizes() {
            assert_eq!(chain.get(size).unwrap().dimensions(), (size, size));
        }
    }

    #[test]
    fn keeps_supplied_levels() {
        let mut chain = MipChain::default();
        chain.insert(32, solid(32, 10));
        chain.insert(8, solid(8, 200));
        chain.fill_gaps(MipFilter::Nearest, &NullObserver);
        assert_eq!(chain.sizes(), vec![1, 2, 4, 8, 16, 32]);
        assert_eq!(chain.get(8).unwrap().get_pixel(0, 0).0, [200, 200, 200, 255]);
        // 4 comes from the supplied 8, not from 16
        assert_eq!(chain.get(4).unwrap().get_pixel(0, 0).0, [200, 200, 200, 255]);
        assert_eq!(chain.get(16).unwrap().get_pixel(0, 0).0, [10, 10, 10, 255]);
    }

    #[test]
    fn empty_chain_stays_empty() {
        let mut chain = MipChain::default();
        chain.fill_gaps(MipFilter::Kaiser, &NullObserver);
        assert!(chain.is_empty());
    }
}
