use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "vendorlint",
    about = "Vendorlint: consistency checks for a vendored crate tree and its per-crate config",
    version
)]
pub struct Cli {
    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run every consistency check and exit non-zero on any problem
    Check {
        #[command(flatten)]
        inputs: InputArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the resolved crate ids the checks would use
    CrateIds {
        #[command(flatten)]
        resolve: ResolveArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Where the resolved crate ids come from.
#[derive(Args, Clone, Debug)]
pub struct ResolveArgs {
    /// Path to the vendored tree's manifest
    #[arg(long, default_value = "Cargo.toml")]
    pub manifest: PathBuf,

    /// Path to the lockfile listing resolved packages
    #[arg(long, default_value = "Cargo.lock")]
    pub lockfile: PathBuf,

    /// Path to a `name@version` list (one per line); replaces the lockfile
    #[arg(long)]
    pub crate_ids: Option<PathBuf>,

    /// Root package name (defaults to the manifest's `[package].name`)
    #[arg(long)]
    pub root_package: Option<String>,

    /// Optional vendorlint TOML configuration
    #[arg(long)]
    pub lint_config: Option<PathBuf>,
}

#[derive(Args, Clone, Debug)]
pub struct InputArgs {
    #[command(flatten)]
    pub resolve: ResolveArgs,

    /// Path to the per-crate override config
    #[arg(long, default_value = "gnrt_config.toml")]
    pub config: PathBuf,

    /// Directory holding one patch directory per crate
    #[arg(long, default_value = "patches")]
    pub patches: PathBuf,
}
