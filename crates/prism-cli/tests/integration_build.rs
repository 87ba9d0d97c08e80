//! End-to-end tests of the `prism` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_project(root: &Path) {
    fs::write(
        root.join("package.json"),
        r#"{
  "name": "vue-thin-modal",
  "version": "0.3.0",
  "homepage": "https://github.com/ktsn/vue-thin-modal",
  "author": { "name": "katashin", "url": "https://github.com/ktsn" }
}"#,
    )
    .unwrap();
    fs::create_dir_all(root.join("src")).unwrap();
    fs::write(
        root.join("src/index.js"),
        "export const mode = process.env.NODE_ENV;\nexport function open() { return mode; }\n",
    )
    .unwrap();
    fs::write(root.join("src/style.css"), ".modal { color: red; }\n").unwrap();
}

fn prism(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("prism").unwrap();
    cmd.arg("--cwd").arg(cwd).arg("--no-color");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_build_emits_every_artifact() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path());

    prism(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("vue-thin-modal.cjs.js"))
        .stdout(predicate::str::contains("vue-thin-modal.min.js"))
        .stdout(predicate::str::contains("vue-thin-modal.css"))
        .stdout(predicate::str::contains("kb"));

    let dist = temp.path().join("dist");
    for file in [
        "vue-thin-modal.cjs.js",
        "vue-thin-modal.esm.js",
        "vue-thin-modal.js",
        "vue-thin-modal.min.js",
        "vue-thin-modal.css",
    ] {
        assert!(dist.join(file).is_file(), "missing {file}");
    }

    let banner_line = " * Copyright (c) 2017-present katashin (https://github.com/ktsn)";
    let esm = fs::read_to_string(dist.join("vue-thin-modal.esm.js")).unwrap();
    assert!(esm.contains(banner_line));
}

#[test]
fn test_build_subcommand_with_out_dir() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path());

    prism(temp.path())
        .args(["build", "--out-dir", "lib", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp.path().join("lib/vue-thin-modal.min.js").is_file());
    assert!(!temp.path().join("dist").exists());
}

#[test]
fn test_each_artifact_is_reported_once() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path());

    let output = prism(temp.path()).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 5, "{stdout}");
    assert_eq!(
        lines.iter().filter(|l| l.contains("vue-thin-modal.cjs.js ")).count(),
        1
    );
    assert!(!stderr.contains("vue-thin-modal.cjs.js 0."), "{stderr}");
}

#[test]
fn test_missing_stylesheet_fails_the_build() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path());
    fs::remove_file(temp.path().join("src/style.css")).unwrap();

    prism(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("style.css"));

    assert!(!temp.path().join("dist/vue-thin-modal.cjs.js").exists());
}

#[test]
fn test_missing_manifest_exits_with_error() {
    let temp = TempDir::new().unwrap();

    prism(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("package.json"));
}

#[test]
fn test_missing_entry_exits_with_build_error() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path());
    fs::remove_file(temp.path().join("src/index.js")).unwrap();

    prism(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("BUILD_ERROR"));

    assert!(!temp.path().join("dist/vue-thin-modal.cjs.js").exists());
}

#[test]
fn test_missing_cwd_is_reported() {
    let temp = TempDir::new().unwrap();

    prism(&temp.path().join("missing"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_profiles_lists_destinations() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path());

    prism(temp.path())
        .arg("profiles")
        .assert()
        .success()
        .stdout(predicate::str::contains("commonjs"))
        .stdout(predicate::str::contains("umd-prod"))
        .stdout(predicate::str::contains("global=VueThinModal"));

    assert!(!temp.path().join("dist").exists());
}

#[test]
fn test_profiles_json_honours_package_settings() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path());
    fs::write(temp.path().join("prism.toml"), "outDir = \"build\"\nglobalName = \"ThinModal\"\n")
        .unwrap();

    let output = prism(temp.path())
        .args(["profiles", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let profiles = value["profiles"].as_array().unwrap();
    assert_eq!(profiles.len(), 4);
    assert_eq!(profiles[3]["globalName"], "ThinModal");
    assert!(
        profiles[3]["destination"]
            .as_str()
            .unwrap()
            .ends_with("vue-thin-modal.min.js")
    );
    assert!(
        profiles[0]["destination"]
            .as_str()
            .unwrap()
            .contains("build")
    );
}
