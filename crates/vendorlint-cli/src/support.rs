use crate::cli::ResolveArgs;
use vendorlint_core::{CrateIdListSource, CrateIdSource, LintConfig, LockfileSource};

/// Exit status for inputs that could not be loaded.
pub const EXIT_LOAD_ERROR: i32 = 2;
/// Exit status when at least one check reported a problem.
pub const EXIT_CHECK_FAILED: i32 = 1;

pub fn init_tracing(verbose: bool) {
    tracing_subscriber::fmt()
        .with_max_level(if verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();
}

pub fn exit_with_error(err: impl std::fmt::Display) -> ! {
    eprintln!("error: {err}");
    std::process::exit(EXIT_LOAD_ERROR);
}

/// Lint config from `--lint-config` (or defaults), with `--root-package` applied.
pub fn lint_config_or_exit(resolve: &ResolveArgs) -> LintConfig {
    let config = match &resolve.lint_config {
        Some(path) => LintConfig::load(path).unwrap_or_else(|err| exit_with_error(err)),
        None => LintConfig::default(),
    };
    config.with_root_package(resolve.root_package.clone())
}

/// An explicit id list wins over the lockfile.
pub fn crate_id_source(resolve: &ResolveArgs) -> Box<dyn CrateIdSource> {
    match &resolve.crate_ids {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading crate ids from list");
            Box::new(CrateIdListSource::new(path))
        }
        None => {
            tracing::debug!(path = %resolve.lockfile.display(), "reading crate ids from lockfile");
            Box::new(LockfileSource::new(&resolve.lockfile))
        }
    }
}

pub fn render_json_or_exit(payload: &serde_json::Value, what: &str) -> String {
    serde_json::to_string_pretty(payload).unwrap_or_else(|err| {
        exit_with_error(format!("failed to render {what} payload: {err}"))
    })
}
