use crate::core::builder::MipmapBuilder;
use crate::core::chain::MipChain;
use crate::core::consts::TEXTURE_SIZE_MIN;
use crate::core::mirror::mirrored;
use crate::core::options::LoadOptions;
use crate::core::source::SourceImage;
use crate::error::error::TexError;
use crate::error::kind::ErrorKind;
use crate::loader::ImageLoader;
use std::path::Path;

impl MipmapBuilder {
    /// Load all `inputs`. An image whose width was already loaded replaces
    /// the previous one.
    ///
    /// Without `MIPMAPPED` only one input may be given and it may be
    /// rectangular. With `MIPMAPPED` any number of square inputs may be
    /// given and missing levels are generated with `opts.filter`.
    ///
    /// The chain is built aside and only replaces the current one on
    /// success; any error leaves the builder unloaded.
    pub fn load<I>(&mut self, inputs: I, opts: &LoadOptions) -> Result<(), TexError>
    where
        I: IntoIterator<Item = SourceImage>,
        I::IntoIter: ExactSizeIterator,
    {
        self.unload();
        match self.assemble(inputs.into_iter(), opts) {
            Ok((chain, texture_size)) => {
                self.keys = chain.sizes();
                self.chain = chain;
                self.texture_size = texture_size;
                self.observer
                    .load_finished(self.keys.len(), texture_size.0, texture_size.1);
                Ok(())
            }
            Err(e) => {
                self.observer.load_failed(&e);
                Err(e)
            }
        }
    }

    /// Same as [`load`](Self::load), decoding each path with `loader` only
    /// when it is reached.
    pub fn load_files<P, L>(&mut self, paths: &[P], loader: &L, opts: &LoadOptions) -> Result<(), TexError>
    where
        P: AsRef<Path>,
        L: ImageLoader + ?Sized,
    {
        self.load(
            paths
                .iter()
                .map(|p| SourceImage::decode(p.as_ref(), loader)),
            opts,
        )
    }

    fn assemble(&self, inputs: impl ExactSizeIterator<Item = SourceImage>, opts: &LoadOptions) -> Result<(MipChain, (u32, u32)), TexError> {
        let mipmapped = opts.mipmapped();
        let flags = opts.texture_type.flags;

        if inputs.len() > 1 && !mipmapped {
            return Err(TexError::new(ErrorKind::TooManyInputsWithoutMipmap).with_arg("count", inputs.len()));
        }

        let mut chain = MipChain::default();
        let (mut width, mut height) = (0u32, 0u32);

        for SourceImage { path, decoded } in inputs {
            let img = decoded.map_err(|e| e.ctx(ErrorKind::ImageLoadFailed { path: path.clone() }))?;
            let (w, h) = img.dimensions();

            if !self
                .validator
                .is_valid_size(w, h, flags)
            {
                return Err(TexError::new(ErrorKind::InvalidTextureSize { path, width: w, height: h }));
            }
            if mipmapped && w != h {
                return Err(TexError::new(ErrorKind::NonSquareImage { path }));
            }

            width = width.max(w);
            height = height.max(h);
            chain.insert(w, mirrored(img, opts.mirror_h, opts.mirror_v));
            self.observer.image_loaded(&path, w, h);
        }

        if mipmapped {
            self.observer
                .filter_selected(opts.filter);
            chain.fill_gaps(opts.filter, self.observer.as_ref());
        }

        if width < TEXTURE_SIZE_MIN || height < TEXTURE_SIZE_MIN {
            return Err(TexError::new(ErrorKind::NoUsableImage)
                .with_arg("width", width)
                .with_arg("height", height));
        }

        Ok((chain, (width, height)))
    }
}
