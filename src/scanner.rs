use crate::error::Result;
use glob::glob;
use std::path::PathBuf;

/// Expands an OS-style glob pattern (including `**` segments) into the
/// concrete files it names. Order is whatever the filesystem enumeration
/// yields; an empty result is valid. Directories matched by the pattern are
/// dropped, as are entries the walk cannot read.
pub fn expand(target: &str) -> Result<Vec<PathBuf>> {
    let paths = glob(target)?
        .filter_map(std::result::Result::ok)
        .filter(|p| p.is_file())
        .collect();
    Ok(paths)
}
