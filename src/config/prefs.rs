use crate::core::filter::MipFilter;
use crate::error::error::TexError;
use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

/// Persisted defaults for the command line. Flags given on the command line
/// win over these.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MipPrefs {
    /// Mipmap filter; unset means the texture format's default. Unknown
    /// names or ids read back as bilinear.
    #[serde(deserialize_with = "lenient_filter")]
    pub filter: Option<MipFilter>,
    pub mirror_v: bool,
    pub mirror_h: bool,
    /// Where exported levels go; unset means next to the first input.
    pub out_dir: Option<PathBuf>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFilter {
    Id(u32),
    Name(String),
}

fn lenient_filter<'de, D: Deserializer<'de>>(d: D) -> Result<Option<MipFilter>, D::Error> {
    Ok(Option::<RawFilter>::deserialize(d)?.map(|raw| match raw {
        RawFilter::Id(id) => MipFilter::from_id(id),
        RawFilter::Name(name) => MipFilter::from_name(&name),
    }))
}

const APP: &str = env!("CARGO_PKG_NAME");
const CFG: Option<&str> = Some("prefs");

/// Prefs from the user config dir. Unreadable prefs fall back to defaults.
pub fn load_prefs() -> MipPrefs {
    match confy::load::<MipPrefs>(APP, CFG) {
        Ok(p) => p,
        Err(e) => {
            warn!("Ignoring unreadable preferences: {e}");
            MipPrefs::default()
        }
    }
}

pub fn save_prefs(prefs: &MipPrefs) -> Result<(), TexError> {
    confy::store(APP, CFG, prefs)?;
    Ok(())
}

pub fn load_prefs_from(path: &Path) -> Result<MipPrefs, TexError> {
    Ok(confy::load_path(path)?)
}

pub fn save_prefs_to(path: &Path, prefs: &MipPrefs) -> Result<(), TexError> {
    confy::store_path(path, prefs)?;
    Ok(())
}
