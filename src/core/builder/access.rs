use crate::core::builder::MipmapBuilder;
use crate::core::mipmap::Mipmap;
use image::RgbaImage;

impl MipmapBuilder {
    #[inline]
    pub fn has_mipmaps(&self) -> bool {
        self.chain.len() > 1
    }

    #[inline]
    pub fn has_size(&self, size: u32) -> bool {
        self.chain.contains(size)
    }

    #[inline]
    pub fn get_by_size(&self, size: u32) -> Option<&RgbaImage> {
        self.chain.get(size)
    }

    /// Image at `index` in ascending size order, or descending when
    /// `ascending` is false. `None` once `index` reaches the level count.
    pub fn get_by_index(&self, index: usize, ascending: bool) -> Option<&RgbaImage> {
        if index >= self.keys.len() {
            return None;
        }
        let index = if ascending { index } else { self.keys.len() - index - 1 };
        self.chain.get(self.keys[index])
    }

    /// All levels, smallest first when `ascending`.
    pub fn levels(&self, ascending: bool) -> impl Iterator<Item = Mipmap<'_>> + '_ {
        (0..self.keys.len()).filter_map(move |i| {
            self.get_by_index(i, ascending)
                .map(Mipmap::from)
        })
    }

    /// Sizes of the loaded levels, ascending.
    #[inline]
    pub fn keys(&self) -> &[u32] {
        &self.keys
    }

    #[inline]
    pub fn image_count(&self) -> usize {
        self.chain.len()
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.texture_size.0
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.texture_size.1
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.texture_size
    }
}
