//! Listing of per-crate patch directories.

use crate::error::VendorLintError;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Names directly under `patches_dir`, minus `ignored` entries such as the
/// directory's README.
pub fn list_patch_entries(
    patches_dir: &Path,
    ignored: &[String],
) -> Result<BTreeSet<String>, VendorLintError> {
    let read_dir_error = |source: std::io::Error| VendorLintError::ReadDir {
        path: patches_dir.display().to_string(),
        source,
    };
    let mut out = BTreeSet::new();
    for entry in fs::read_dir(patches_dir).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        let name = entry.file_name().into_string().map_err(|raw| {
            VendorLintError::NonUtf8PatchEntry {
                path: patches_dir.display().to_string(),
                name: Path::new(&raw).display().to_string(),
            }
        })?;
        if ignored.iter().any(|ignored| *ignored == name) {
            continue;
        }
        out.insert(name);
    }
    Ok(out)
}
