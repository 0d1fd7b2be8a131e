//! End-to-end runs of the full check suite over small vendored trees.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use vendorlint_core::{
    CrateId, CrateIdListSource, Diagnostic, LintConfig, LockfileSource, Manifest, OverrideConfig,
    Snapshot, run_checks,
};

const SORTED_MANIFEST: &str = r#"
[dependencies]
bar = "4.5.6"
foo = "1.2.3"
"#;

const ANNOTATED_CONFIG: &str = r#"
[crate.bar.extra_kv]
allow_unsafe = true

[crate.foo.extra_kv]
allow_unsafe = false
"#;

fn snapshot(manifest: &str, config: &str, ids: &[&str]) -> Snapshot {
    Snapshot {
        manifest: Manifest::parse(manifest, "Cargo.toml").expect("manifest should parse"),
        override_config: OverrideConfig::parse(config, "gnrt_config.toml")
            .expect("config should parse"),
        crate_ids: ids
            .iter()
            .map(|raw| CrateId::parse(raw).expect("id should parse"))
            .collect(),
        ..Snapshot::default()
    }
}

struct TempDirGuard {
    path: PathBuf,
}

impl TempDirGuard {
    fn new(prefix: &str) -> Self {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "vendorlint-scenarios-{prefix}-{}-{unique}",
            std::process::id()
        ));
        fs::create_dir_all(&path).expect("temp dir should be created");
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDirGuard {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

#[test]
fn consistent_tree_passes() {
    let report = run_checks(&snapshot(
        SORTED_MANIFEST,
        ANNOTATED_CONFIG,
        &["foo@1.2.3", "bar@4.5.6"],
    ));
    assert!(report.is_success(), "unexpected:\n{}", report.render());
    assert_eq!(report.render(), "");
}

#[test]
fn missing_override_entry_reports_only_allow_unsafe() {
    let report = run_checks(&snapshot(
        SORTED_MANIFEST,
        "[crate.foo.extra_kv]\nallow_unsafe = false\n",
        &["foo@1.2.3", "bar@4.5.6"],
    ));
    assert!(!report.is_success());
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].subjects(), vec!["bar"]);
    insta::assert_snapshot!(report.render(), @r"
ERROR: Please ensure that `gnrt_config.toml` explicitly specifies `allow_unsafe = ...` for all crates that the vendored tree depends on.  This helps reviewers to check at a glance if a given crate contains `unsafe` Rust code.

    [crate.bar.extra_kv]
    allow_unsafe = false (or true if needed)
");
}

#[test]
fn root_and_placeholders_never_need_allow_unsafe() {
    let mut snap = snapshot(
        "[package]\nname = \"chromium\"\n\n[dependencies]\nfoo = \"1\"\n",
        "",
        &["chromium@0.1.0", "foo@1.0.0"],
    );
    snap.crate_ids.push(CrateId::placeholder("cxx", "1.0.0"));

    let report = run_checks(&snap);
    assert_eq!(report.diagnostics.len(), 1);
    let text = report.render();
    assert!(text.contains("[crate.foo.extra_kv]"));
    assert!(text.contains("crates that `chromium` depends on"));
    assert!(!text.contains("[crate.chromium.extra_kv]"));
    assert!(!text.contains("[crate.cxx.extra_kv]"));
}

#[test]
fn multiversion_needs_cleanup_bug() {
    let config = "[crate.foo.extra_kv]\nallow_unsafe = false\n";
    let report = run_checks(&snapshot(
        "[dependencies]\nfoo = \"2.0.0\"\n",
        config,
        &["foo@2.0.0", "foo@1.2.3"],
    ));
    assert_eq!(report.diagnostics.len(), 1);
    insta::assert_snapshot!(report.render(), @r#"
ERROR: Transitive dependency graph includes multiple versions of the same crate.  Please open a bug to track removing one of the versions and put a link to the bug into `gnrt_config.toml` like this:

    # TODO: Remove multiple versions of the `foo` crate:
    # foo@1.2.3, foo@2.0.0
    [crate.foo.extra_kv]
    multiversion_cleanup_bug = "https://crbug.com/<bug number>"
"#);

    let tracked = format!("{config}multiversion_cleanup_bug = \"https://crbug.com/123\"\n");
    let report = run_checks(&snapshot(
        "[dependencies]\nfoo = \"2.0.0\"\n",
        &tracked,
        &["foo@2.0.0", "foo@1.2.3"],
    ));
    assert!(report.is_success(), "unexpected:\n{}", report.render());
}

#[test]
fn stale_config_entries_and_patches_are_reported_together() {
    let mut snap = snapshot(
        SORTED_MANIFEST,
        &format!("{ANNOTATED_CONFIG}\n[crate.zzz.extra_kv]\nallow_unsafe = false\n"),
        &["foo@1.2.3", "bar@4.5.6"],
    );
    snap.patch_entries = ["foo", "old", "older"]
        .into_iter()
        .map(str::to_string)
        .collect::<BTreeSet<_>>();

    let report = run_checks(&snap);
    let rendered = report.render();
    assert_eq!(report.diagnostics.len(), 2);
    assert!(rendered.contains(
        "Some entries in `gnrt_config.toml` are not needed, because they don't apply to actual crates: zzz"
    ));
    assert!(rendered.contains(
        "Some files/directories under `patches` are not needed, because they don't apply to actual crates: old, older"
    ));
    assert!(rendered.contains(&format!("\n\n{}\n\n", "-".repeat(72))));
}

#[test]
fn unsorted_manifest_does_not_hide_other_problems() {
    let report = run_checks(&snapshot(
        "[dependencies]\nfoo = \"1.2.3\"\n\n[dependencies.baz]\nversion = \"7.8.9\"\n\n[dependencies.bar]\nversion = \"4.5.6\"\n",
        "",
        &["foo@1.2.3"],
    ));
    let classes: Vec<&str> = report
        .diagnostics
        .iter()
        .map(Diagnostic::failure_class)
        .collect();
    assert_eq!(classes, vec!["unsorted_table", "missing_allow_unsafe"]);
    assert_eq!(
        report.diagnostics[0].to_string(),
        "Please sort `[dependencies]` table in `Cargo.toml`.  Example problem: `bar` should appear before `baz`."
    );
}

#[test]
fn diagnostics_serialize_with_kind_tags() {
    let report = run_checks(&snapshot(
        "[dependencies]\nfoo = \"1\"\n",
        "crate = \"oops\"\n",
        &["foo@1.0.0"],
    ));
    let value = serde_json::to_value(&report.diagnostics).expect("diagnostics should serialize");
    assert_eq!(value[0]["kind"], "malformed_document");
    assert_eq!(value[0]["document"], "override_config");
    assert_eq!(value[1]["kind"], "missing_allow_unsafe");
    assert_eq!(value[1]["crates"], serde_json::json!(["foo"]));
}

#[test]
fn snapshot_loads_from_disk() {
    let temp = TempDirGuard::new("load");
    let root = temp.path();
    fs::write(
        root.join("Cargo.toml"),
        "[package]\nname = \"chromium\"\nversion = \"0.1.0\"\n\n[dependencies]\nbar = \"4.5.6\"\n",
    )
    .expect("manifest should be written");
    fs::write(
        root.join("Cargo.lock"),
        r#"version = 3

[[package]]
name = "bar"
version = "4.5.6"
source = "registry+https://github.com/rust-lang/crates.io-index"

[[package]]
name = "chromium"
version = "0.1.0"

[[package]]
name = "cxx"
version = "1.0.0"
"#,
    )
    .expect("lockfile should be written");
    fs::write(
        root.join("gnrt_config.toml"),
        "[crate.bar.extra_kv]\nallow_unsafe = false\n",
    )
    .expect("config should be written");
    fs::create_dir_all(root.join("patches/bar")).expect("patch dir should be created");
    fs::write(root.join("patches/README.md"), "patches\n").expect("readme should be written");

    let snap = Snapshot::load(
        &root.join("Cargo.toml"),
        &root.join("gnrt_config.toml"),
        &root.join("patches"),
        &LockfileSource::new(root.join("Cargo.lock")),
        LintConfig::default(),
    )
    .expect("snapshot should load");

    assert_eq!(snap.root_package(), Some("chromium"));
    assert_eq!(snap.crate_ids.len(), 3);
    assert!(snap.crate_ids.iter().any(|id| id.is_placeholder() && id.crate_name() == "cxx"));
    assert_eq!(
        snap.patch_entries.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["bar"]
    );
    let report = run_checks(&snap);
    assert!(report.is_success(), "unexpected:\n{}", report.render());
}

#[test]
fn snapshot_load_fails_on_bad_id_list() {
    let temp = TempDirGuard::new("bad-ids");
    let root = temp.path();
    fs::write(root.join("Cargo.toml"), "[dependencies]\n").expect("manifest should be written");
    fs::write(root.join("gnrt_config.toml"), "").expect("config should be written");
    fs::write(root.join("ids.txt"), "foo\n").expect("ids should be written");
    fs::create_dir_all(root.join("patches")).expect("patch dir should be created");

    let err = Snapshot::load(
        &root.join("Cargo.toml"),
        &root.join("gnrt_config.toml"),
        &root.join("patches"),
        &CrateIdListSource::new(root.join("ids.txt")),
        LintConfig::default(),
    )
    .expect_err("invalid id list should fail the load");
    assert!(err.to_string().contains("ids.txt:1"));
}
