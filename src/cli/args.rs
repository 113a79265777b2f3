use crate::core::filter::MipFilter;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "texmip", version, about = "Builds mipmap chains for PVR2DC textures", long_about = "texmip loads one or more images, checks them against the PVR2DC texture size rules and writes every level of the resulting mipmap chain as PNG.\n\nTexture formats: ARGB1555 RGB565 ARGB4444 YUV422 BUMPMAP PAL4BPP PAL8BPP")]
pub struct Cli {
    /// Input file(s). More than one requires --mipmap.
    #[arg(short = 'i', long = "in", value_name = "FILE", required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Output directory for the PNG levels.
    #[arg(short = 'o', long = "out", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Texture format.
    #[arg(short = 'f', long = "format", value_name = "FORMAT")]
    pub format: String,

    /// Generate/allow mipmaps.
    #[arg(short = 'm', long = "mipmap")]
    pub mipmap: bool,

    /// Mark the texture as compressed.
    #[arg(short = 'c', long = "compress")]
    pub compress: bool,

    /// Stride texture (non-twiddled, width a multiple of 32).
    #[arg(short = 's', long = "stride")]
    pub stride: bool,

    /// Filter for generated mipmaps. Paletted formats default to nearest.
    #[arg(long = "filter", value_enum)]
    pub filter: Option<MipFilter>,

    /// Mirror the texture vertically. `--mirrorv=false` overrides saved prefs.
    #[arg(long = "mirrorv", value_name = "BOOL", action = ArgAction::Set, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub mirror_v: Option<bool>,

    /// Mirror the texture horizontally. `--mirrorh=false` overrides saved prefs.
    #[arg(long = "mirrorh", value_name = "BOOL", action = ArgAction::Set, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub mirror_h: Option<bool>,

    /// Extra printouts.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Store the effective filter, mirroring and output directory as defaults.
    #[arg(long = "save-prefs")]
    pub save_prefs: bool,
}
