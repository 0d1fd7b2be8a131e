//! Human-readable rendering of diagnostics.
//!
//! Messages are written for the maintainer who has to edit the documents:
//! each one names the file to touch and, where possible, the exact TOML to add.

use crate::diagnostic::{Diagnostic, MultiversionCrate};
use crate::document::{ALLOW_UNSAFE_KEY, MULTIVERSION_CLEANUP_BUG_KEY};
use std::fmt;

const SNIPPET_INDENT: &str = "    ";

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedDocument { path, reason, .. } => {
                write!(f, "Malformed `{path}` file?  {reason}")
            }
            Self::UnsortedTable {
                path,
                table,
                problem,
                ..
            } => write!(
                f,
                "Please sort `[{table}]` table in `{path}`.  Example problem: {problem}"
            ),
            Self::MissingAllowUnsafe {
                config_path,
                root_package,
                crates,
            } => {
                let owner = match root_package {
                    Some(root) => format!("`{root}`"),
                    None => "the vendored tree".to_string(),
                };
                write!(
                    f,
                    "ERROR: Please ensure that `{config_path}` explicitly specifies \
                     `{ALLOW_UNSAFE_KEY} = ...` for all crates that {owner} depends on.  \
                     This helps reviewers to check at a glance if a given crate contains \
                     `unsafe` Rust code.\n"
                )?;
                for name in crates {
                    write!(
                        f,
                        "\n{SNIPPET_INDENT}[crate.{name}.extra_kv]\n\
                         {SNIPPET_INDENT}{ALLOW_UNSAFE_KEY} = false (or true if needed)"
                    )?;
                }
                Ok(())
            }
            Self::UntrackedMultiversion {
                config_path,
                cleanup_bug_template,
                crates,
            } => {
                write!(
                    f,
                    "ERROR: Transitive dependency graph includes multiple versions of the \
                     same crate.  Please open a bug to track removing one of the versions \
                     and put a link to the bug into `{config_path}` like this:"
                )?;
                for krate in crates {
                    write!(f, "\n\n")?;
                    write_multiversion_snippet(f, krate, cleanup_bug_template)?;
                }
                Ok(())
            }
            Self::NonapplicableConfigEntries {
                config_path,
                crates,
            } => write!(
                f,
                "Some entries in `{config_path}` are not needed, because they don't apply \
                 to actual crates: {}",
                crates.join(", ")
            ),
            Self::NonapplicablePatches {
                patches_dir,
                entries,
            } => write!(
                f,
                "Some files/directories under `{patches_dir}` are not needed, because they \
                 don't apply to actual crates: {}",
                entries.join(", ")
            ),
        }
    }
}

fn write_multiversion_snippet(
    f: &mut fmt::Formatter<'_>,
    krate: &MultiversionCrate,
    cleanup_bug_template: &str,
) -> fmt::Result {
    let name = &krate.name;
    write!(
        f,
        "{SNIPPET_INDENT}# TODO: Remove multiple versions of the `{name}` crate:\n\
         {SNIPPET_INDENT}# {}\n\
         {SNIPPET_INDENT}[crate.{name}.extra_kv]\n\
         {SNIPPET_INDENT}{MULTIVERSION_CLEANUP_BUG_KEY} = \"{cleanup_bug_template}\"",
        krate.ids.join(", ")
    )
}

/// Joins rendered diagnostics with a blank-line-padded dashed separator.
pub fn render_diagnostics(diagnostics: &[Diagnostic], separator_width: usize) -> String {
    let separator = format!("\n\n{}\n\n", "-".repeat(separator_width));
    diagnostics
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(&separator)
}
