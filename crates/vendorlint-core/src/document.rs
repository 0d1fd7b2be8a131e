//! Typed, order-preserving views over the two TOML documents.
//!
//! Parsing keeps document order (`toml` is built with `preserve_order`) so the
//! sort-order rules can observe entries exactly as they are written.

use crate::error::VendorLintError;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Metadata key declaring whether a crate may contain `unsafe` code.
pub const ALLOW_UNSAFE_KEY: &str = "allow_unsafe";
/// Metadata key linking the bug that tracks removing extra crate versions.
pub const MULTIVERSION_CLEANUP_BUG_KEY: &str = "multiversion_cleanup_bug";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Manifest,
    OverrideConfig,
}

/// A parsed document whose shape does not match what the checks expect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Malformed {
    pub reason: String,
}

impl Malformed {
    fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// How a table entry is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryShape {
    /// `foo = "1.2.3"`
    Simple,
    /// `foo = { ... }`, `[table.foo]`, or anything else that is not a string.
    Elaborate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry {
    pub key: String,
    pub shape: EntryShape,
}

impl TableEntry {
    pub fn simple(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            shape: EntryShape::Simple,
        }
    }

    pub fn elaborate(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            shape: EntryShape::Elaborate,
        }
    }
}

fn table_entries(table: &toml::Table) -> Vec<TableEntry> {
    table
        .iter()
        .map(|(key, value)| match value {
            toml::Value::String(_) => TableEntry::simple(key.clone()),
            _ => TableEntry::elaborate(key.clone()),
        })
        .collect()
}

fn parse_document(text: &str, path: &str) -> Result<toml::Table, VendorLintError> {
    toml::from_str::<toml::Table>(text).map_err(|source| VendorLintError::ParseToml {
        path: path.to_string(),
        source,
    })
}

fn read_document(path: &Path) -> Result<toml::Table, VendorLintError> {
    let text = fs::read_to_string(path).map_err(|source| VendorLintError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    parse_document(&text, &path.display().to_string())
}

/// The vendored-dependency manifest (`Cargo.toml`).
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    root: toml::Table,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self, VendorLintError> {
        Ok(Self {
            root: read_document(path)?,
        })
    }

    /// Parse manifest text; `path` only labels parse errors.
    pub fn parse(text: &str, path: &str) -> Result<Self, VendorLintError> {
        Ok(Self {
            root: parse_document(text, path)?,
        })
    }

    /// `[package].name`, when the manifest declares a package.
    pub fn package_name(&self) -> Option<&str> {
        self.root
            .get("package")
            .and_then(toml::Value::as_table)
            .and_then(|package| package.get("name"))
            .and_then(toml::Value::as_str)
    }

    /// Entries of `[dependencies]` in document order.
    pub fn dependencies(&self) -> Result<Vec<TableEntry>, Malformed> {
        self.root
            .get("dependencies")
            .and_then(toml::Value::as_table)
            .map(table_entries)
            .ok_or_else(|| Malformed::new("`dependencies` is not a table."))
    }
}

/// The per-crate override document (`gnrt_config.toml`).
#[derive(Debug, Clone, Default)]
pub struct OverrideConfig {
    root: toml::Table,
}

impl OverrideConfig {
    pub fn load(path: &Path) -> Result<Self, VendorLintError> {
        Ok(Self {
            root: read_document(path)?,
        })
    }

    pub fn parse(text: &str, path: &str) -> Result<Self, VendorLintError> {
        Ok(Self {
            root: parse_document(text, path)?,
        })
    }

    fn crate_table(&self) -> Result<Option<&toml::Table>, Malformed> {
        match self.root.get("crate") {
            None => Ok(None),
            Some(toml::Value::Table(crates)) => Ok(Some(crates)),
            Some(_) => Err(Malformed::new("`crate` is not a table.")),
        }
    }

    /// Entries of `[crate]` in document order. A missing table is empty.
    pub fn crate_entries(&self) -> Result<Vec<TableEntry>, Malformed> {
        Ok(self.crate_table()?.map(table_entries).unwrap_or_default())
    }

    /// Crate names configured under `[crate]`; empty if the table is malformed.
    pub fn configured_crate_names(&self) -> BTreeSet<String> {
        match self.crate_table() {
            Ok(Some(crates)) => crates.keys().cloned().collect(),
            Ok(None) | Err(_) => BTreeSet::new(),
        }
    }

    /// `[crate.<name>.extra_kv]`; empty when any level is absent or not a table.
    pub fn extra_kv(&self, crate_name: &str) -> ExtraKv<'_> {
        let table = self
            .crate_table()
            .ok()
            .flatten()
            .and_then(|crates| crates.get(crate_name))
            .and_then(toml::Value::as_table)
            .and_then(|crate_cfg| crate_cfg.get("extra_kv"))
            .and_then(toml::Value::as_table);
        ExtraKv(table)
    }
}

/// Free-form per-crate metadata.
#[derive(Debug, Clone, Copy)]
pub struct ExtraKv<'a>(Option<&'a toml::Table>);

impl ExtraKv<'_> {
    pub fn contains(&self, key: &str) -> bool {
        self.0.is_some_and(|table| table.contains_key(key))
    }
}
