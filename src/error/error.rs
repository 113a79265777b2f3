use crate::error::args::ArgVal;
use crate::error::cause::Cause;
use crate::error::kind::ErrorKind;
use std::{collections::BTreeMap, fmt, io, sync::Arc};

#[derive(Debug, Clone)]
pub struct TexError {
    pub kind: ErrorKind,
    pub args: BTreeMap<&'static str, ArgVal>,
    pub causes: Vec<Cause>,
}

impl TexError {
    /// Wrap this error as the cause of a new one.
    #[inline]
    pub fn ctx(self, kind: ErrorKind) -> TexError {
        TexError::new(kind).push_tex(self)
    }

    #[inline]
    pub fn new(kind: ErrorKind) -> Self {
        let args = kind.args().into_iter().collect();
        Self { kind, args, causes: Vec::new() }
    }

    #[inline]
    pub fn key(&self) -> &'static str {
        self.kind.key()
    }

    #[inline]
    pub fn with_arg(mut self, name: &'static str, val: impl Into<ArgVal>) -> Self {
        self.args.insert(name, val.into());
        self
    }

    #[inline]
    pub fn push_tex(mut self, cause: TexError) -> Self {
        self.causes.push(Cause::Tex(cause));
        self
    }

    #[inline]
    pub fn push_std(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.causes
            .push(Cause::Std(Arc::new(cause)));
        self
    }
}

impl fmt::Display for TexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.key())?;
        let mut first = true;
        for (k, v) in &self.args {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{k}={v:?}")?;
        }
        write!(f, ")")
    }
}

impl std::error::Error for TexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.causes
            .iter()
            .find_map(|c| match c {
                Cause::Tex(e) => Some(e as &dyn std::error::Error),
                Cause::Std(e) => Some(e.as_ref() as &dyn std::error::Error),
            })
    }
}

impl From<ErrorKind> for TexError {
    fn from(kind: ErrorKind) -> Self {
        TexError::new(kind)
    }
}

impl From<io::Error> for TexError {
    fn from(e: io::Error) -> Self {
        TexError::new(ErrorKind::Io)
            .with_arg("msg", e.to_string())
            .push_std(e)
    }
}

impl From<image::ImageError> for TexError {
    fn from(e: image::ImageError) -> Self {
        TexError::new(ErrorKind::Image)
            .with_arg("msg", e.to_string())
            .push_std(e)
    }
}

#[cfg(feature = "cli")]
impl From<confy::ConfyError> for TexError {
    fn from(e: confy::ConfyError) -> Self {
        TexError::new(ErrorKind::Config)
            .with_arg("msg", e.to_string())
            .push_std(e)
    }
}
