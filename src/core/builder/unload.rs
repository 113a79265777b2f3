use crate::core::builder::MipmapBuilder;

impl MipmapBuilder {
    /// Drop every level. Afterwards the builder behaves like a new one.
    pub fn unload(&mut self) {
        self.texture_size = (0, 0);
        self.chain.clear();
        self.keys.clear();
    }
}
