//! The inputs of one run, loaded up front.

use crate::config::LintConfig;
use crate::crate_id::CrateId;
use crate::document::{Manifest, OverrideConfig};
use crate::error::VendorLintError;
use crate::patches::list_patch_entries;
use crate::resolve::CrateIdSource;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, info};

/// Paths of the inputs, as they should appear in messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPaths {
    pub manifest: String,
    pub config: String,
    pub patches: String,
}

impl Default for InputPaths {
    fn default() -> Self {
        Self {
            manifest: "Cargo.toml".to_string(),
            config: "gnrt_config.toml".to_string(),
            patches: "patches".to_string(),
        }
    }
}

/// Everything one run looks at. Loaded once; never mutated by the checks.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub manifest: Manifest,
    pub override_config: OverrideConfig,
    pub crate_ids: Vec<CrateId>,
    pub patch_entries: BTreeSet<String>,
    pub paths: InputPaths,
    pub lint_config: LintConfig,
}

impl Snapshot {
    /// Reads the manifest, the resolved ids, the override document, and the
    /// patches directory. Any unreadable input fails the whole load.
    pub fn load(
        manifest_path: &Path,
        config_path: &Path,
        patches_dir: &Path,
        crate_ids: &dyn CrateIdSource,
        lint_config: LintConfig,
    ) -> Result<Self, VendorLintError> {
        let manifest = Manifest::load(manifest_path)?;
        debug!(path = %manifest_path.display(), "loaded manifest");

        let root_package = lint_config
            .root_package
            .as_deref()
            .or_else(|| manifest.package_name());
        let crate_ids = crate_ids.crate_ids(root_package)?;
        debug!(count = crate_ids.len(), "resolved crate ids");

        let override_config = OverrideConfig::load(config_path)?;
        debug!(path = %config_path.display(), "loaded override config");

        let patch_entries = list_patch_entries(patches_dir, &lint_config.ignored_patch_entries)?;
        debug!(count = patch_entries.len(), path = %patches_dir.display(), "listed patches");

        let snapshot = Self {
            manifest,
            override_config,
            crate_ids,
            patch_entries,
            paths: InputPaths {
                manifest: manifest_path.display().to_string(),
                config: config_path.display().to_string(),
                patches: patches_dir.display().to_string(),
            },
            lint_config,
        };
        info!(
            crate_ids = snapshot.crate_ids.len(),
            root_package = snapshot.root_package().unwrap_or("<none>"),
            "snapshot loaded"
        );
        Ok(snapshot)
    }

    /// The root package: configured explicitly, else the manifest's package.
    pub fn root_package(&self) -> Option<&str> {
        self.lint_config
            .root_package
            .as_deref()
            .or_else(|| self.manifest.package_name())
    }
}
