//! Dependency identifiers (`name@version`) and their normalization to crate
//! names.

use crate::error::VendorLintError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// One resolved dependency: a crate name at a concrete version.
///
/// Placeholder ids stand for synthetic packages (local stand-ins that are not
/// backed by a vendored crate). They never count as real crates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CrateId {
    name: String,
    version: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    placeholder: bool,
}

impl CrateId {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            placeholder: false,
        }
    }

    pub fn placeholder(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            placeholder: true,
            ..Self::new(name, version)
        }
    }

    /// Parse a `name@version` id.
    pub fn parse(raw: &str) -> Result<Self, VendorLintError> {
        let trimmed = raw.trim();
        let Some((name, version)) = trimmed.split_once('@') else {
            return Err(VendorLintError::invalid_crate_id(
                raw,
                "expected `name@version`",
            ));
        };
        if name.is_empty() {
            return Err(VendorLintError::invalid_crate_id(raw, "empty crate name"));
        }
        if version.is_empty() {
            return Err(VendorLintError::invalid_crate_id(raw, "empty version"));
        }
        Ok(Self::new(name, version))
    }

    /// Canonical crate name. Every version of a crate maps to the same name.
    pub fn crate_name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }
}

impl fmt::Display for CrateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}

/// Names of the crates that are actually vendored: placeholders are dropped
/// and the remaining ids are collapsed to their crate names.
pub fn real_crate_names<'a, I>(ids: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a CrateId>,
{
    ids.into_iter()
        .filter(|id| !id.is_placeholder())
        .map(|id| id.crate_name().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_name_and_version() {
        let id = CrateId::parse("serde_json@1.0.140").expect("id should parse");
        assert_eq!(id.crate_name(), "serde_json");
        assert_eq!(id.version(), "1.0.140");
        assert!(!id.is_placeholder());
        assert_eq!(id.to_string(), "serde_json@1.0.140");
    }

    #[test]
    fn parse_keeps_build_metadata_in_version() {
        let id = CrateId::parse("foo@1.0.0+wasi-0.2").expect("id should parse");
        assert_eq!(id.crate_name(), "foo");
        assert_eq!(id.version(), "1.0.0+wasi-0.2");
    }

    #[test]
    fn parse_rejects_malformed_ids() {
        for raw in ["foo", "@1.0.0", "foo@", ""] {
            let err = CrateId::parse(raw).expect_err("id should be rejected");
            assert!(
                matches!(err, VendorLintError::InvalidCrateId { .. }),
                "unexpected error for {raw:?}: {err}"
            );
        }
    }

    #[test]
    fn real_crate_names_drop_placeholders() {
        let ids = [
            CrateId::new("foo", "1.2.3"),
            CrateId::new("foo", "2.0.0"),
            CrateId::placeholder("cxx", "1.0.0"),
            CrateId::new("bar", "4.5.6"),
        ];
        let names = real_crate_names(&ids);
        assert_eq!(
            names.into_iter().collect::<Vec<_>>(),
            vec!["bar".to_string(), "foo".to_string()]
        );
    }

    #[test]
    fn real_crate_names_ignore_input_order() {
        let forward = [
            CrateId::new("a", "1.0.0"),
            CrateId::new("b", "1.0.0"),
            CrateId::placeholder("c", "1.0.0"),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();
        assert_eq!(real_crate_names(&forward), real_crate_names(&reversed));
    }
}
