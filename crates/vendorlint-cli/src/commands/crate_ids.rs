use crate::cli::ResolveArgs;
use crate::support::{crate_id_source, exit_with_error, lint_config_or_exit, render_json_or_exit};
use serde_json::json;
use vendorlint_core::{Manifest, real_crate_names};

pub fn run(resolve: ResolveArgs, json_output: bool) {
    let lint_config = lint_config_or_exit(&resolve);
    let manifest = Manifest::load(&resolve.manifest).unwrap_or_else(|err| exit_with_error(err));
    let root_package = lint_config
        .root_package
        .as_deref()
        .or_else(|| manifest.package_name());

    let mut ids = crate_id_source(&resolve)
        .crate_ids(root_package)
        .unwrap_or_else(|err| exit_with_error(err));
    ids.sort();

    if json_output {
        let payload = json!({
            "schema": 1,
            "rootPackage": root_package,
            "crateIds": ids,
            "realCrateNames": real_crate_names(&ids),
        });
        println!("{}", render_json_or_exit(&payload, "crate-ids"));
        return;
    }

    // Same shape the `--crate-ids` list file accepts.
    for id in &ids {
        if id.is_placeholder() {
            println!("{id} placeholder");
        } else {
            println!("{id}");
        }
    }
}
