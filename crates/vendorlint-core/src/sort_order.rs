//! Two-phase table ordering, a subset of what `cargo-sort` enforces.
//!
//! Given
//!
//! ```toml
//! [dependencies]
//! bar = "4.5.6"
//! foo = "1.2.3"
//!
//! [dependencies.baz]
//! version = "7.8.9"
//! ```
//!
//! the simple run is `bar, foo` and the elaborate run is `baz`. Each run must
//! be ascending and no simple entry may follow an elaborate one.

use crate::document::{EntryShape, TableEntry};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "problem", rename_all = "snake_case")]
pub enum SortProblem {
    /// A simple string entry written after the table entry `first_table_key`.
    SimpleAfterTable { key: String, first_table_key: String },
    /// `before` sorts ahead of `after` but is written after it.
    OutOfOrder { before: String, after: String },
}

impl fmt::Display for SortProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SimpleAfterTable {
                key,
                first_table_key,
            } => write!(
                f,
                "Simple string entries should appear before table entries: \
                 `{key}` should appear before `{first_table_key}`."
            ),
            Self::OutOfOrder { before, after } => {
                write!(f, "`{before}` should appear before `{after}`.")
            }
        }
    }
}

/// First ordering problem in `entries`, or `None` if the table is sorted.
pub fn check_table_sorted(entries: &[TableEntry]) -> Option<SortProblem> {
    let mut simple_keys: Vec<&str> = Vec::new();
    let mut elaborate_keys: Vec<&str> = Vec::new();
    let mut first_table_key: Option<&str> = None;

    for entry in entries {
        match (entry.shape, first_table_key) {
            (EntryShape::Simple, None) => simple_keys.push(&entry.key),
            (EntryShape::Simple, Some(first)) => {
                return Some(SortProblem::SimpleAfterTable {
                    key: entry.key.clone(),
                    first_table_key: first.to_string(),
                });
            }
            (EntryShape::Elaborate, _) => {
                first_table_key.get_or_insert(&entry.key);
                elaborate_keys.push(&entry.key);
            }
        }
    }

    first_descending_pair(&simple_keys).or_else(|| first_descending_pair(&elaborate_keys))
}

fn first_descending_pair(keys: &[&str]) -> Option<SortProblem> {
    keys.windows(2)
        .find(|pair| pair[0] > pair[1])
        .map(|pair| SortProblem::OutOfOrder {
            before: pair[1].to_string(),
            after: pair[0].to_string(),
        })
}
