//! Error types for loading vendorlint inputs.
//!
//! Consistency problems are never errors: they are [`crate::Diagnostic`]
//! records. Errors here mean an input could not be loaded at all.

/// Failures while reading or parsing the inputs of a check run.
#[derive(Debug, thiserror::Error)]
pub enum VendorLintError {
    #[error("failed to read file: {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to list directory: {path}: {source}")]
    ReadDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A patch directory entry whose name is not UTF-8 cannot name a crate.
    #[error("non-UTF-8 entry under {path}: {name}")]
    NonUtf8PatchEntry { path: String, name: String },

    #[error("invalid toml at {path}: {source}")]
    ParseToml {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// A dependency identifier that is not `name@version`.
    #[error("invalid crate id `{raw}`: {reason}")]
    InvalidCrateId { raw: String, reason: String },

    /// A line of a crate-id list file that cannot be interpreted.
    #[error("{path}:{line}: {reason}")]
    InvalidCrateIdList {
        path: String,
        line: usize,
        reason: String,
    },
}

impl VendorLintError {
    pub(crate) fn invalid_crate_id(raw: &str, reason: impl Into<String>) -> Self {
        Self::InvalidCrateId {
            raw: raw.to_string(),
            reason: reason.into(),
        }
    }
}
