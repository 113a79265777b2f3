use crate::cli::args::Cli;
use crate::cli::resolve_out_dir::resolve_out_dir;
use crate::config::prefs::MipPrefs;
use crate::core::builder::MipmapBuilder;
use crate::core::options::LoadOptions;
use crate::core::types::texture_flags::TextureFlags;
use crate::core::types::texture_type::TextureType;
use crate::error::error::TexError;
use crate::error::kind::ErrorKind;
use crate::loader::file_image_loader::FileImageLoader;
use log::info;
use std::path::PathBuf;

/// What a run produced.
#[derive(Debug)]
pub struct BuildReport {
    pub texture_type: TextureType,
    pub width: u32,
    pub height: u32,
    pub written: Vec<PathBuf>,
}

/// Saved prefs with every option given on the command line applied on top.
pub fn effective_prefs(cli: &Cli, prefs: &MipPrefs) -> MipPrefs {
    MipPrefs {
        filter: cli.filter.or(prefs.filter),
        mirror_v: cli.mirror_v.unwrap_or(prefs.mirror_v),
        mirror_h: cli.mirror_h.unwrap_or(prefs.mirror_h),
        out_dir: cli
            .out_dir
            .clone()
            .or_else(|| prefs.out_dir.clone()),
    }
}

/// Flags, format and prefs folded into load options.
pub fn load_options(cli: &Cli, prefs: &MipPrefs) -> Result<LoadOptions, TexError> {
    let mut flags = TextureFlags::empty();
    flags.set(TextureFlags::MIPMAPPED, cli.mipmap);
    flags.set(TextureFlags::COMPRESSED, cli.compress);
    if cli.stride {
        flags |= TextureFlags::STRIDED | TextureFlags::NONTWIDDLED;
    }

    let texture_type = TextureType::from_format_name(&cli.format, flags)?;
    texture_type.check()?;

    let eff = effective_prefs(cli, prefs);
    let filter = eff
        .filter
        .unwrap_or_else(|| texture_type.default_filter());

    Ok(LoadOptions { texture_type, filter, mirror_v: eff.mirror_v, mirror_h: eff.mirror_h })
}

pub fn build_mips(cli: &Cli, prefs: &MipPrefs) -> Result<BuildReport, TexError> {
    let opts = load_options(cli, prefs)?;
    let first = cli
        .inputs
        .first()
        .ok_or_else(|| TexError::new(ErrorKind::Cli).with_arg("msg", "no input file(s) specified"))?;

    let mut builder = MipmapBuilder::new();
    builder.load_files(&cli.inputs, &FileImageLoader, &opts)?;

    let mut texture_type = opts.texture_type;
    if texture_type.is_strided() {
        texture_type = texture_type.with_stride_setting(builder.width());
    }

    let out_dir = resolve_out_dir(first, cli.out_dir.as_deref(), prefs.out_dir.as_deref());
    let stem = first
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "texture".to_string());
    let written = builder.export_png(&out_dir, &stem)?;

    for path in &written {
        info!("Saved {}", path.display());
    }
    info!("Texture type 0x{:08X} ({}), {}x{}, {} level(s)", texture_type.bits(), texture_type.format.name(), builder.width(), builder.height(), written.len());

    Ok(BuildReport { texture_type, width: builder.width(), height: builder.height(), written })
}
