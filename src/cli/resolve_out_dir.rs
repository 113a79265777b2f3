use std::path::{Path, PathBuf};

/// Output directory: explicit, then preferred, then the first input's directory.
pub fn resolve_out_dir(first_input: &Path, provided: Option<&Path>, preferred: Option<&Path>) -> PathBuf {
    if let Some(p) = provided.or(preferred) {
        return p.to_path_buf();
    }
    first_input
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
}
