//! # Vendorlint Core
//!
//! Consistency rules between the three descriptions of a vendored crate
//! tree: the manifest (`Cargo.toml`), the per-crate override document
//! (`gnrt_config.toml`), and the `patches/` directory, all measured against
//! the ids the resolver currently produces.
//!
//! ## Architecture
//!
//! ```text
//! CrateId / real_crate_names   ← name@version, placeholders dropped
//!     │
//! Manifest / OverrideConfig    ← typed, order-preserving TOML views
//!     │
//! checks::*                    ← pure functions, one Option<Diagnostic> each
//!     │
//! run_checks(&Snapshot)        ← fixed order, every failure collected
//!     │
//! Report::render               ← text with dashed separators
//! ```
//!
//! Checks never fail fast: a run reports every problem it can see.

pub mod checks;
pub mod config;
pub mod crate_id;
pub mod diagnostic;
pub mod document;
pub mod error;
pub mod patches;
pub mod render;
pub mod report;
pub mod resolve;
pub mod snapshot;
pub mod sort_order;

pub use config::LintConfig;
pub use crate_id::{CrateId, real_crate_names};
pub use diagnostic::{Diagnostic, MultiversionCrate};
pub use document::{DocumentKind, EntryShape, Manifest, OverrideConfig, TableEntry};
pub use error::VendorLintError;
pub use report::{Report, run_checks};
pub use resolve::{CrateIdListSource, CrateIdSource, LockfileSource};
pub use snapshot::{InputPaths, Snapshot};
pub use sort_order::{SortProblem, check_table_sorted};
