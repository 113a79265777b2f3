use crate::error::cause::Cause;
use crate::error::error::TexError;
use std::fmt::{self};

/// Renders the messages of an error and its causes as an indented tree.
pub struct TreeFmt<'a> {
    pub root: &'a TexError,
}

impl<'a> TreeFmt<'a> {
    pub fn message(root: &'a TexError) -> Self {
        Self { root }
    }
}

impl fmt::Display for TreeFmt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_line(f: &mut fmt::Formatter<'_>, err: &TexError, indent: usize) -> fmt::Result {
            for _ in 0..indent {
                f.write_str("  ")?;
            }
            writeln!(f, "{}", err.kind)?;
            for c in &err.causes {
                match c {
                    Cause::Tex(a) => write_line(f, a, indent + 1)?,
                    Cause::Std(e) => {
                        for _ in 0..(indent + 1) {
                            f.write_str("  ")?;
                        }
                        writeln!(f, "{e}")?;
                    }
                }
            }
            Ok(())
        }

        write_line(f, self.root, 0)
    }
}
