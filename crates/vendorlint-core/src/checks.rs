//! Individual consistency checks.
//!
//! Each check is a pure function over already-loaded inputs and returns at
//! most one [`Diagnostic`]. None of them stops another from running.

use crate::crate_id::{CrateId, real_crate_names};
use crate::diagnostic::{Diagnostic, MultiversionCrate};
use crate::document::{
    ALLOW_UNSAFE_KEY, DocumentKind, MULTIVERSION_CLEANUP_BUG_KEY, Manifest, OverrideConfig,
};
use crate::sort_order::check_table_sorted;
use std::collections::{BTreeMap, BTreeSet};

pub const MANIFEST_TABLE: &str = "dependencies";
pub const OVERRIDE_TABLE: &str = "crate";

/// `[dependencies]` of the manifest must be two-phase sorted.
pub fn check_manifest_sorted(manifest: &Manifest, manifest_path: &str) -> Option<Diagnostic> {
    let entries = match manifest.dependencies() {
        Ok(entries) => entries,
        Err(malformed) => {
            return Some(Diagnostic::MalformedDocument {
                document: DocumentKind::Manifest,
                path: manifest_path.to_string(),
                reason: malformed.reason,
            });
        }
    };
    check_table_sorted(&entries).map(|problem| Diagnostic::UnsortedTable {
        document: DocumentKind::Manifest,
        path: manifest_path.to_string(),
        table: MANIFEST_TABLE.to_string(),
        problem,
    })
}

/// `[crate]` of the override document must be two-phase sorted.
pub fn check_override_sorted(config: &OverrideConfig, config_path: &str) -> Option<Diagnostic> {
    let entries = match config.crate_entries() {
        Ok(entries) => entries,
        Err(malformed) => {
            return Some(Diagnostic::MalformedDocument {
                document: DocumentKind::OverrideConfig,
                path: config_path.to_string(),
                reason: malformed.reason,
            });
        }
    };
    check_table_sorted(&entries).map(|problem| Diagnostic::UnsortedTable {
        document: DocumentKind::OverrideConfig,
        path: config_path.to_string(),
        table: OVERRIDE_TABLE.to_string(),
        problem,
    })
}

/// Sorted members of `candidates` that are not in `allowed`.
pub fn orphans(allowed: &BTreeSet<String>, candidates: &BTreeSet<String>) -> Vec<String> {
    candidates.difference(allowed).cloned().collect()
}

/// Every `[crate.<name>]` entry must name a real crate.
pub fn check_nonapplicable_config_entries(
    crate_ids: &[CrateId],
    config: &OverrideConfig,
    config_path: &str,
) -> Option<Diagnostic> {
    let real = real_crate_names(crate_ids);
    let stale = orphans(&real, &config.configured_crate_names());
    if stale.is_empty() {
        return None;
    }
    Some(Diagnostic::NonapplicableConfigEntries {
        config_path: config_path.to_string(),
        crates: stale,
    })
}

/// Every patch directory must be named after a real crate.
pub fn check_nonapplicable_patches(
    crate_ids: &[CrateId],
    patch_entries: &BTreeSet<String>,
    patches_dir: &str,
) -> Option<Diagnostic> {
    let real = real_crate_names(crate_ids);
    let stale = orphans(&real, patch_entries);
    if stale.is_empty() {
        return None;
    }
    Some(Diagnostic::NonapplicablePatches {
        patches_dir: patches_dir.to_string(),
        entries: stale,
    })
}

/// Every real crate other than the root must say whether it may use `unsafe`.
///
/// Ids are visited in sorted order; a crate with several versions is reported
/// once.
pub fn check_explicit_allow_unsafe(
    crate_ids: &[CrateId],
    config: &OverrideConfig,
    config_path: &str,
    root_package: Option<&str>,
) -> Option<Diagnostic> {
    let mut sorted: Vec<&CrateId> = crate_ids.iter().collect();
    sorted.sort_by_key(|id| id.to_string());

    let mut missing: Vec<String> = Vec::new();
    for id in sorted {
        let name = id.crate_name();
        if root_package == Some(name) || id.is_placeholder() {
            continue;
        }
        if config.extra_kv(name).contains(ALLOW_UNSAFE_KEY) {
            continue;
        }
        if !missing.iter().any(|seen| seen == name) {
            missing.push(name.to_string());
        }
    }

    if missing.is_empty() {
        return None;
    }
    Some(Diagnostic::MissingAllowUnsafe {
        config_path: config_path.to_string(),
        root_package: root_package.map(str::to_string),
        crates: missing,
    })
}

/// Crates resolved to more than one version need a bug tracking the cleanup.
pub fn check_multiversion_crates(
    crate_ids: &[CrateId],
    config: &OverrideConfig,
    config_path: &str,
    cleanup_bug_template: &str,
) -> Option<Diagnostic> {
    // Repeated ids (one version from two sources) count once.
    let mut by_name: BTreeMap<&str, BTreeSet<String>> = BTreeMap::new();
    for id in crate_ids {
        by_name
            .entry(id.crate_name())
            .or_default()
            .insert(id.to_string());
    }

    let mut untracked = Vec::new();
    for (name, ids) in by_name {
        if ids.len() < 2 {
            continue;
        }
        if config.extra_kv(name).contains(MULTIVERSION_CLEANUP_BUG_KEY) {
            continue;
        }
        untracked.push(MultiversionCrate {
            name: name.to_string(),
            ids: ids.into_iter().collect(),
        });
    }

    if untracked.is_empty() {
        return None;
    }
    Some(Diagnostic::UntrackedMultiversion {
        config_path: config_path.to_string(),
        cleanup_bug_template: cleanup_bug_template.to_string(),
        crates: untracked,
    })
}
