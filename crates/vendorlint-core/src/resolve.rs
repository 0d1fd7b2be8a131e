//! Sources of the currently resolved crate ids.
//!
//! Resolution itself happens elsewhere (`cargo`, `gnrt`); this module only
//! reads its output, either a `Cargo.lock` or a plain id list.

use crate::crate_id::CrateId;
use crate::error::VendorLintError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const PLACEHOLDER_MARKER: &str = "placeholder";

/// Anything that can enumerate the resolved dependency ids of one tree.
///
/// `root_package` names the package owning the tree, when known.
pub trait CrateIdSource {
    fn crate_ids(&self, root_package: Option<&str>) -> Result<Vec<CrateId>, VendorLintError>;
}

#[derive(Debug, Deserialize)]
struct Lockfile {
    #[serde(default)]
    package: Vec<LockedPackage>,
}

#[derive(Debug, Deserialize)]
struct LockedPackage {
    name: String,
    version: String,
    #[serde(default)]
    source: Option<String>,
}

/// Ids from the `[[package]]` entries of a `Cargo.lock`.
///
/// Packages without a `source` are local path packages. Other than the root
/// package itself, those are placeholders standing in for removed crates.
pub fn parse_lockfile(
    text: &str,
    path: &str,
    root_package: Option<&str>,
) -> Result<Vec<CrateId>, VendorLintError> {
    let lockfile: Lockfile = toml::from_str(text).map_err(|source| VendorLintError::ParseToml {
        path: path.to_string(),
        source,
    })?;
    Ok(lockfile
        .package
        .into_iter()
        .map(|package| {
            let is_root = root_package == Some(package.name.as_str());
            if package.source.is_none() && !is_root {
                CrateId::placeholder(package.name, package.version)
            } else {
                CrateId::new(package.name, package.version)
            }
        })
        .collect())
}

/// Ids from a list file: one `name@version` per line, optionally followed by
/// the `placeholder` marker. Blank lines and `#` comments are skipped.
pub fn parse_crate_id_list(text: &str, path: &str) -> Result<Vec<CrateId>, VendorLintError> {
    let mut out = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let list_error = |reason: String| VendorLintError::InvalidCrateIdList {
            path: path.to_string(),
            line: idx + 1,
            reason,
        };
        let mut tokens = line.split_whitespace();
        let Some(id_token) = tokens.next() else {
            continue;
        };
        let id = CrateId::parse(id_token).map_err(|err| list_error(err.to_string()))?;
        let id = match (tokens.next(), tokens.next()) {
            (None, _) => id,
            (Some(PLACEHOLDER_MARKER), None) => {
                CrateId::placeholder(id.crate_name(), id.version())
            }
            (Some(other), _) => {
                return Err(list_error(format!(
                    "unexpected `{other}` after crate id (only `{PLACEHOLDER_MARKER}` is allowed)"
                )));
            }
        };
        out.push(id);
    }
    Ok(out)
}

fn read_text(path: &Path) -> Result<String, VendorLintError> {
    fs::read_to_string(path).map_err(|source| VendorLintError::ReadFile {
        path: path.display().to_string(),
        source,
    })
}

#[derive(Debug, Clone)]
pub struct LockfileSource {
    path: PathBuf,
}

impl LockfileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CrateIdSource for LockfileSource {
    fn crate_ids(&self, root_package: Option<&str>) -> Result<Vec<CrateId>, VendorLintError> {
        let text = read_text(&self.path)?;
        parse_lockfile(&text, &self.path.display().to_string(), root_package)
    }
}

#[derive(Debug, Clone)]
pub struct CrateIdListSource {
    path: PathBuf,
}

impl CrateIdListSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CrateIdSource for CrateIdListSource {
    fn crate_ids(&self, _root_package: Option<&str>) -> Result<Vec<CrateId>, VendorLintError> {
        let text = read_text(&self.path)?;
        parse_crate_id_list(&text, &self.path.display().to_string())
    }
}
