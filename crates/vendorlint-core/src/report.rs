//! Runs every check over one input snapshot and aggregates the outcome.

use crate::checks::{
    check_explicit_allow_unsafe, check_manifest_sorted, check_multiversion_crates,
    check_nonapplicable_config_entries, check_nonapplicable_patches, check_override_sorted,
};
use crate::diagnostic::Diagnostic;
use crate::render::render_diagnostics;
use crate::snapshot::Snapshot;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub diagnostics: Vec<Diagnostic>,
    separator_width: usize,
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn failure_classes(&self) -> Vec<&'static str> {
        let mut classes: Vec<&'static str> = self
            .diagnostics
            .iter()
            .map(Diagnostic::failure_class)
            .collect();
        classes.sort_unstable();
        classes.dedup();
        classes
    }

    /// All diagnostics as text, separated by a dashed line.
    pub fn render(&self) -> String {
        render_diagnostics(&self.diagnostics, self.separator_width)
    }
}

/// Runs the checks in their fixed order and keeps every non-empty result.
///
/// The override document is assumed well-formed once it has loaded; its sort
/// check is advisory and does not gate the checks after it.
pub fn run_checks(snapshot: &Snapshot) -> Report {
    let paths = &snapshot.paths;
    let ids = &snapshot.crate_ids;
    let config = &snapshot.override_config;

    let results = [
        (
            "manifest_sorted",
            check_manifest_sorted(&snapshot.manifest, &paths.manifest),
        ),
        (
            "override_sorted",
            check_override_sorted(config, &paths.config),
        ),
        (
            "explicit_allow_unsafe",
            check_explicit_allow_unsafe(ids, config, &paths.config, snapshot.root_package()),
        ),
        (
            "multiversion_crates",
            check_multiversion_crates(
                ids,
                config,
                &paths.config,
                &snapshot.lint_config.cleanup_bug_template,
            ),
        ),
        (
            "nonapplicable_config_entries",
            check_nonapplicable_config_entries(ids, config, &paths.config),
        ),
        (
            "nonapplicable_patches",
            check_nonapplicable_patches(ids, &snapshot.patch_entries, &paths.patches),
        ),
    ];

    let mut diagnostics = Vec::new();
    for (check, result) in results {
        match result {
            Some(diagnostic) => {
                debug!(
                    check,
                    failure_class = diagnostic.failure_class(),
                    "check failed"
                );
                diagnostics.push(diagnostic);
            }
            None => debug!(check, "check passed"),
        }
    }

    Report {
        diagnostics,
        separator_width: snapshot.lint_config.separator_width,
    }
}
