use crate::core::filter::MipFilter;
use crate::core::observer::LoadObserver;
use crate::error::error::TexError;
use log::{debug, error, info};
use std::path::Path;

const TARGET: &str = "texmip::mipmap";

/// Forwards load progress to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl LoadObserver for LogObserver {
    fn image_loaded(&self, path: &Path, width: u32, height: u32) {
        debug!(target: TARGET, "Loaded image {} ({width}x{height})", path.display());
    }

    fn filter_selected(&self, filter: MipFilter) {
        debug!(target: TARGET, "Using {} filtering for mipmaps", filter.label());
    }

    fn level_generated(&self, size: u32, _filter: MipFilter) {
        debug!(target: TARGET, "Generated {size}x{size} mipmap");
    }

    fn load_finished(&self, levels: usize, width: u32, height: u32) {
        info!(target: TARGET, "Texture {width}x{height} ready with {levels} level(s)");
    }

    fn load_failed(&self, err: &TexError) {
        error!(target: TARGET, "{}", err.kind);
    }
}
