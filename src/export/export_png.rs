use crate::core::builder::MipmapBuilder;
use crate::error::error::TexError;
use crate::error::kind::ErrorKind;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of one exported level: `<stem>_<width>x<height>.png`.
pub fn level_file_name(stem: &str, width: u32, height: u32) -> String {
    format!("{stem}_{width}x{height}.png")
}

impl MipmapBuilder {
    /// Save every loaded level as PNG into `out_dir`, largest first.
    pub fn export_png(&self, out_dir: &Path, stem: &str) -> Result<Vec<PathBuf>, TexError> {
        if self.image_count() == 0 {
            return Err(TexError::new(ErrorKind::NothingLoaded));
        }
        if !out_dir.as_os_str().is_empty() {
            fs::create_dir_all(out_dir)?;
        }

        let mut written = Vec::with_capacity(self.image_count());
        for mip in self.levels(false) {
            let path = out_dir.join(level_file_name(stem, mip.width, mip.height));
            mip.image.save(&path)?;
            written.push(path);
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_carry_the_level_size() {
        assert_eq!(level_file_name("wall", 640, 8), "wall_640x8.png");
    }

    #[test]
    fn nothing_to_export_before_a_load() {
        let dir = tempfile::tempdir().unwrap();
        let err = MipmapBuilder::new()
            .export_png(dir.path(), "wall")
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NothingLoaded);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
