pub mod log_observer;
pub mod null_observer;

use crate::core::filter::MipFilter;
use crate::error::error::TexError;
use std::path::Path;

/// Receives progress of a load. The builder never prints on its own.
pub trait LoadObserver {
    fn image_loaded(&self, _path: &Path, _width: u32, _height: u32) {}
    fn filter_selected(&self, _filter: MipFilter) {}
    fn level_generated(&self, _size: u32, _filter: MipFilter) {}
    fn load_finished(&self, _levels: usize, _width: u32, _height: u32) {}
    fn load_failed(&self, _err: &TexError) {}
}
