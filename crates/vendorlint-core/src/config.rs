//! Lint configuration: knobs that differ between vendored trees.
//!
//! Every field has a default, so an empty file (or no file) is valid.

use crate::error::VendorLintError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_SEPARATOR_WIDTH: usize = 72;
pub const DEFAULT_CLEANUP_BUG_TEMPLATE: &str = "https://crbug.com/<bug number>";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LintConfig {
    /// Name of the package that owns the vendored tree. Falls back to the
    /// manifest's `[package].name`.
    pub root_package: Option<String>,
    /// Entries under the patches directory that are not patch sets.
    pub ignored_patch_entries: Vec<String>,
    /// Value suggested for `multiversion_cleanup_bug`.
    pub cleanup_bug_template: String,
    /// Width of the dashed line between reported problems.
    pub separator_width: usize,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            root_package: None,
            ignored_patch_entries: vec!["README.md".to_string()],
            cleanup_bug_template: DEFAULT_CLEANUP_BUG_TEMPLATE.to_string(),
            separator_width: DEFAULT_SEPARATOR_WIDTH,
        }
    }
}

impl LintConfig {
    pub fn load(path: &Path) -> Result<Self, VendorLintError> {
        let text = fs::read_to_string(path).map_err(|source| VendorLintError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&text, &path.display().to_string())
    }

    pub fn parse(text: &str, path: &str) -> Result<Self, VendorLintError> {
        toml::from_str(text).map_err(|source| VendorLintError::ParseToml {
            path: path.to_string(),
            source,
        })
    }

    pub fn with_root_package(mut self, root_package: Option<String>) -> Self {
        if root_package.is_some() {
            self.root_package = root_package;
        }
        self
    }
}
