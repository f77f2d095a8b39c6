//! Integration tests for the unipack binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn unipack(root: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("unipack").expect("binary built");
    cmd.env_remove("BUILD_TYPE")
        .env_remove("NODE_ENV")
        .env_remove("RUST_LOG")
        .env("APP_ROOT_PATH", root.path())
        .env("NO_COLOR", "1");
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.output().expect("run unipack");
    assert!(
        output.status.success(),
        "unipack failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn generate_defaults_to_server_production() {
    let root = TempDir::new().unwrap();
    let tree = stdout_json(unipack(&root).arg("generate"));

    assert_eq!(tree["target"], "node");
    assert_eq!(tree["entry"], serde_json::json!(["./server"]));
    assert_eq!(tree["output"]["libraryTarget"], "commonjs2");
    assert_eq!(tree["devtool"], "source-map");
}

#[test]
fn generate_server_development() {
    let root = TempDir::new().unwrap();
    let tree = stdout_json(unipack(&root).args(["generate", "--target", "server", "--flavor", "development"]));

    assert_eq!(
        tree["entry"],
        serde_json::json!(["webpack-hot-middleware/client", "./server"])
    );
    let names: Vec<&str> = tree["plugins"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"HotModuleReplacementPlugin"));
    assert!(!names.contains(&"UglifyJsPlugin"));
}

#[test]
fn environment_selects_axes_when_flags_are_absent() {
    let root = TempDir::new().unwrap();
    let tree = stdout_json(
        unipack(&root)
            .env("BUILD_TYPE", "client")
            .env("NODE_ENV", "development")
            .arg("generate"),
    );

    assert_eq!(tree["target"], "web");
    assert_eq!(tree["entry"][0], "webpack/hot/poll?1000");
}

#[test]
fn flags_override_environment() {
    let root = TempDir::new().unwrap();
    let tree = stdout_json(
        unipack(&root)
            .env("BUILD_TYPE", "client")
            .env("NODE_ENV", "development")
            .args(["generate", "--target", "server", "--flavor", "production"]),
    );

    assert_eq!(tree["target"], "node");
    assert_eq!(tree["entry"], serde_json::json!(["./server"]));
}

#[test]
fn unknown_environment_values_are_clamped() {
    let root = TempDir::new().unwrap();
    let tree = stdout_json(
        unipack(&root)
            .env("BUILD_TYPE", "edge")
            .env("NODE_ENV", "test")
            .arg("generate"),
    );

    assert_eq!(tree["target"], "node");
    assert_eq!(tree["devtool"], "source-map");
}

#[test]
fn root_flag_sets_output_paths() {
    let root = TempDir::new().unwrap();
    let other = TempDir::new().unwrap();
    let tree = stdout_json(unipack(&root).args(["generate", "--target", "client", "--root"]).arg(other.path()));

    let expected = std::path::absolute(other.path()).unwrap().join("public");
    assert_eq!(tree["output"]["path"], expected.to_str().unwrap());
}

#[test]
fn registry_prints_default_and_named_groups() {
    let root = TempDir::new().unwrap();
    let registry = stdout_json(unipack(&root).args(["registry", "--compact"]));

    assert_eq!(registry["target"], "node");
    for flavor in ["production", "development"] {
        assert_eq!(registry[flavor]["server"]["target"], "node");
        assert_eq!(registry[flavor]["client"]["target"], "web");
    }
}

#[test]
fn classify_reports_externals() {
    let root = TempDir::new().unwrap();
    unipack(&root)
        .args(["classify", "react", "--dir", "/app/src"])
        .assert()
        .success()
        .stdout("commonjs2 react\n");

    unipack(&root)
        .args(["classify", "./routes", "--dir", "/app/src"])
        .assert()
        .success()
        .stdout("bundle\n");

    unipack(&root)
        .args(["classify", "react", "--dir", "/app/src", "--target", "client"])
        .assert()
        .success()
        .stdout("bundle\n");
}

#[test]
fn relative_root_is_reported() {
    let root = TempDir::new().unwrap();
    unipack(&root)
        .env("APP_ROOT_PATH", "relative/app")
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("absolute"));
}

#[test]
fn unknown_flag_value_is_rejected() {
    let root = TempDir::new().unwrap();
    unipack(&root)
        .args(["generate", "--flavor", "staging"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("staging"));
}

#[test]
fn numeric_env_values_are_clamped_not_rejected() {
    let root = TempDir::new().unwrap();
    let registry = stdout_json(
        unipack(&root)
            .env("BUILD_TYPE", "42")
            .env("NODE_ENV", "1")
            .arg("registry"),
    );

    assert_eq!(registry["target"], "node");
    assert_eq!(registry["devtool"], "source-map");
}
