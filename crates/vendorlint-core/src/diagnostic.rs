//! Structured records describing one detected inconsistency each.
//!
//! Records carry the data needed to explain and fix the problem; turning them
//! into text is the job of [`crate::render`].

use crate::document::DocumentKind;
use crate::sort_order::SortProblem;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The document parsed, but a table the checks rely on has the wrong shape.
    MalformedDocument {
        document: DocumentKind,
        path: String,
        reason: String,
    },

    /// A table is not in two-phase sorted order.
    UnsortedTable {
        document: DocumentKind,
        path: String,
        table: String,
        problem: SortProblem,
    },

    /// Real crates without an explicit `allow_unsafe` annotation.
    MissingAllowUnsafe {
        config_path: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        root_package: Option<String>,
        crates: Vec<String>,
    },

    /// Crates resolved to several versions without a cleanup bug.
    UntrackedMultiversion {
        config_path: String,
        cleanup_bug_template: String,
        crates: Vec<MultiversionCrate>,
    },

    /// `[crate.*]` entries naming no real crate.
    NonapplicableConfigEntries {
        config_path: String,
        crates: Vec<String>,
    },

    /// Patch directory entries naming no real crate.
    NonapplicablePatches {
        patches_dir: String,
        entries: Vec<String>,
    },
}

/// One crate name together with every id it resolved to, sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultiversionCrate {
    pub name: String,
    pub ids: Vec<String>,
}

impl Diagnostic {
    /// Stable class name used in machine-readable output.
    pub fn failure_class(&self) -> &'static str {
        match self {
            Self::MalformedDocument { .. } => "malformed_document",
            Self::UnsortedTable { .. } => "unsorted_table",
            Self::MissingAllowUnsafe { .. } => "missing_allow_unsafe",
            Self::UntrackedMultiversion { .. } => "untracked_multiversion",
            Self::NonapplicableConfigEntries { .. } => "nonapplicable_config_entries",
            Self::NonapplicablePatches { .. } => "nonapplicable_patches",
        }
    }

    /// Names this diagnostic is about: crate names, patch entries, or table keys.
    pub fn subjects(&self) -> Vec<&str> {
        match self {
            Self::MalformedDocument { .. } => Vec::new(),
            Self::UnsortedTable { problem, .. } => match problem {
                SortProblem::SimpleAfterTable {
                    key,
                    first_table_key,
                } => vec![key.as_str(), first_table_key.as_str()],
                SortProblem::OutOfOrder { before, after } => {
                    vec![before.as_str(), after.as_str()]
                }
            },
            Self::MissingAllowUnsafe { crates, .. }
            | Self::NonapplicableConfigEntries { crates, .. } => {
                crates.iter().map(String::as_str).collect()
            }
            Self::UntrackedMultiversion { crates, .. } => {
                crates.iter().map(|krate| krate.name.as_str()).collect()
            }
            Self::NonapplicablePatches { entries, .. } => {
                entries.iter().map(String::as_str).collect()
            }
        }
    }
}
