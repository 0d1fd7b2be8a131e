use crate::cli::InputArgs;
use crate::support::{
    EXIT_CHECK_FAILED, crate_id_source, exit_with_error, lint_config_or_exit,
    render_json_or_exit,
};
use serde_json::json;
use vendorlint_core::{Snapshot, run_checks};

const CHECK_KIND: &str = "vendorlint.check.v1";

pub fn run(inputs: InputArgs, json_output: bool) {
    let lint_config = lint_config_or_exit(&inputs.resolve);
    let source = crate_id_source(&inputs.resolve);

    let snapshot = Snapshot::load(
        &inputs.resolve.manifest,
        &inputs.config,
        &inputs.patches,
        source.as_ref(),
        lint_config,
    )
    .unwrap_or_else(|err| exit_with_error(err));

    let report = run_checks(&snapshot);
    let result = if report.is_success() {
        "accepted"
    } else {
        "rejected"
    };
    tracing::info!(
        result,
        problems = report.diagnostics.len(),
        "vendorlint check finished"
    );

    if json_output {
        let payload = json!({
            "schema": 1,
            "checkKind": CHECK_KIND,
            "result": result,
            "failureClasses": report.failure_classes(),
            "crateIds": snapshot.crate_ids.len(),
            "patches": snapshot.patch_entries.len(),
            "diagnostics": report.diagnostics,
        });
        println!("{}", render_json_or_exit(&payload, "check"));
    } else if report.is_success() {
        println!(
            "[vendorlint] OK (crateIds={}, patches={})",
            snapshot.crate_ids.len(),
            snapshot.patch_entries.len()
        );
    } else {
        println!("{}", report.render());
        println!();
        println!(
            "[vendorlint] FAIL (crateIds={}, problems={})",
            snapshot.crate_ids.len(),
            report.diagnostics.len()
        );
    }

    if !report.is_success() {
        std::process::exit(EXIT_CHECK_FAILED);
    }
}
