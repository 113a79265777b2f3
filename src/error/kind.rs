use crate::error::args::ArgVal;
use std::fmt;
use std::path::PathBuf;

/// What went wrong. Variants that concern a single input carry its path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Several inputs were given for a texture without `MIPMAPPED`.
    TooManyInputsWithoutMipmap,
    /// The image loader could not decode the input.
    ImageLoadFailed { path: PathBuf },
    /// The size validator rejected the input dimensions.
    InvalidTextureSize { path: PathBuf, width: u32, height: u32 },
    /// Mipmapped inputs must be square.
    NonSquareImage { path: PathBuf },
    /// No input reached `TEXTURE_SIZE_MIN` in both dimensions.
    NoUsableImage,
    /// Export was asked for before a successful load.
    NothingLoaded,
    /// The decoder produced a zero-sized image.
    ImageEmpty { path: PathBuf },
    UnsupportedFormat { name: String },
    InvalidTextureType { reason: &'static str },
    Io,
    Image,
    Config,
    Cli,
}

impl ErrorKind {
    pub fn key(&self) -> &'static str {
        match self {
            ErrorKind::TooManyInputsWithoutMipmap => "error-too-many-inputs",
            ErrorKind::ImageLoadFailed { .. } => "error-image-load",
            ErrorKind::InvalidTextureSize { .. } => "error-texture-size",
            ErrorKind::NonSquareImage { .. } => "error-image-not-square",
            ErrorKind::NoUsableImage => "error-no-usable-image",
            ErrorKind::NothingLoaded => "error-nothing-loaded",
            ErrorKind::ImageEmpty { .. } => "error-image-empty",
            ErrorKind::UnsupportedFormat { .. } => "error-unsupported-format",
            ErrorKind::InvalidTextureType { .. } => "error-texture-type",
            ErrorKind::Io => "io-error",
            ErrorKind::Image => "image-error",
            ErrorKind::Config => "config-error",
            ErrorKind::Cli => "cli-error",
        }
    }

    /// Arguments the kind contributes to the error's argument map.
    pub fn args(&self) -> Vec<(&'static str, ArgVal)> {
        match self {
            ErrorKind::ImageLoadFailed { path } | ErrorKind::NonSquareImage { path } | ErrorKind::ImageEmpty { path } => vec![("path", ArgVal::from(path.as_path()))],
            ErrorKind::InvalidTextureSize { path, width, height } => vec![("path", ArgVal::from(path.as_path())), ("width", ArgVal::from(*width)), ("height", ArgVal::from(*height))],
            ErrorKind::UnsupportedFormat { name } => vec![("format", ArgVal::from(name.as_str()))],
            ErrorKind::InvalidTextureType { reason } => vec![("reason", ArgVal::from(*reason))],
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::TooManyInputsWithoutMipmap => f.write_str("only one input image may be given for a texture without mipmaps"),
            ErrorKind::ImageLoadFailed { path } => write!(f, "failed to load image {}", path.display()),
            ErrorKind::InvalidTextureSize { path, width, height } => write!(f, "image {} has an invalid texture size {width}x{height}", path.display()),
            ErrorKind::NonSquareImage { path } => write!(f, "image {} is not square; inputs for mipmapped textures must be square", path.display()),
            ErrorKind::NoUsableImage => f.write_str("at least one input image must be 8x8 or larger"),
            ErrorKind::NothingLoaded => f.write_str("no texture is loaded"),
            ErrorKind::ImageEmpty { path } => write!(f, "image {} decoded to zero pixels", path.display()),
            ErrorKind::UnsupportedFormat { name } => write!(f, "unsupported texture format {name:?}"),
            ErrorKind::InvalidTextureType { reason } => f.write_str(reason),
            ErrorKind::Io => f.write_str("i/o error"),
            ErrorKind::Image => f.write_str("image codec error"),
            ErrorKind::Config => f.write_str("preferences error"),
            ErrorKind::Cli => f.write_str("command line error"),
        }
    }
}
