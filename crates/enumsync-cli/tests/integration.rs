//! Integration tests for the enumsync binary

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated home, config file and cache directory for one test
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let cache = dir.path().join("cache");
        fs::write(
            dir.path().join("enumsync.toml"),
            format!("cache-path = {:?}\n", cache.to_string_lossy()),
        )
        .unwrap();
        Sandbox { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn cache_entry(&self) -> PathBuf {
        self.path().join("cache").join("frontend_enums.json")
    }

    fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("enumsync");
        cmd.current_dir(self.path())
            .env("HOME", self.path())
            .env("ENUMSYNC_CONFIG", self.path().join("enumsync.toml"))
            .env_remove("RUST_LOG");
        cmd
    }

    fn definitions_dir(&self) -> PathBuf {
        let dir = self.path().join("Enums");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("Priority.toml"),
            r#"name = "Priority"
capabilities = ["EnumHelpers"]

[[cases]]
name = "LOW"
value = "low"
label = "Low"

[[cases]]
name = "HIGH"
value = "high"
label = "High"
"#,
        )
        .unwrap();
        fs::write(
            dir.join("Internal.toml"),
            "name = \"Internal\"\n\n[[cases]]\nname = \"A\"\nvalue = \"a\"\n",
        )
        .unwrap();
        dir
    }
}

#[test]
fn test_version() {
    Sandbox::new()
        .cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("enumsync"));
}

#[test]
fn test_help() {
    Sandbox::new()
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("payload"));
}

#[test]
fn test_invalid_command() {
    Sandbox::new().cmd().arg("invalid").assert().failure();
}

#[test]
fn test_generate_enums_writes_declarations() {
    let sandbox = Sandbox::new();
    let output = sandbox.path().join("resources/js/types/enums.d.ts");

    sandbox
        .cmd()
        .args(["generate", "enums", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("UserStatus, UserRole"));

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.starts_with("// Auto-generated enum types"));
    assert!(content.contains(
        "export type UserStatusValue = 'active' | 'inactive' | 'pending' | 'suspended';"
    ));
    assert!(content.contains("export type UserRoleValue = 'user' | 'admin';"));
    assert!(content.contains("declare module '@inertiajs/vue3'"));
    assert!(!output.with_extension("ts.tmp").exists());
}

#[test]
fn test_generate_enums_default_output_path() {
    let sandbox = Sandbox::new();
    sandbox.cmd().args(["generate", "enums"]).assert().success();
    assert!(sandbox
        .path()
        .join("resources/js/types/enums.d.ts")
        .is_file());
}

#[test]
fn test_generate_enums_from_definition_directory() {
    let sandbox = Sandbox::new();
    let source = sandbox.definitions_dir();
    let output = sandbox.path().join("enums.d.ts");

    sandbox
        .cmd()
        .args(["generate", "enums", "--source"])
        .arg(&source)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("export type PriorityValue = 'low' | 'high';"));
    assert!(!content.contains("Internal"));
    assert!(!content.contains("UserStatus"));
}

#[test]
fn test_generate_with_no_enums_writes_nothing() {
    let sandbox = Sandbox::new();
    let empty = sandbox.path().join("NoEnums");
    fs::create_dir_all(&empty).unwrap();
    let output = sandbox.path().join("enums.d.ts");

    sandbox
        .cmd()
        .args(["generate", "enums", "--source"])
        .arg(&empty)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("No enums"));

    assert!(!output.exists());
}

#[test]
fn test_generate_write_failure_exits_nonzero() {
    let sandbox = Sandbox::new();
    let blocker = sandbox.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    sandbox
        .cmd()
        .args(["generate", "enums", "--output"])
        .arg(blocker.join("enums.d.ts"))
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_generate_page_props() {
    let sandbox = Sandbox::new();
    let output = sandbox.path().join("inertia.d.ts");

    sandbox
        .cmd()
        .args(["generate", "page-props", "--output"])
        .arg(&output)
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("  UserStatus: EnumValue[];"));
    assert!(content.contains("  enums?: Enums;"));
}

#[test]
fn test_list_built_in_enums() {
    Sandbox::new()
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("UserStatus"))
        .stdout(predicate::str::contains("UserRole"))
        .stdout(predicate::str::contains("承認待ち"));
}

#[test]
fn test_list_unknown_enum_fails() {
    Sandbox::new()
        .cmd()
        .args(["list", "UserKind"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not registered"));
}

#[test]
fn test_payload_is_shared_props_json() {
    let sandbox = Sandbox::new();
    let assert = sandbox.cmd().arg("payload").assert().success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let props: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    let status = props["enums"]["UserStatus"].as_array().unwrap();
    assert_eq!(status.len(), 4);
    assert_eq!(status[0]["value"], "active");
    assert_eq!(status[0]["name"], "ACTIVE");
    assert_eq!(status[0]["label"], "アクティブ");
    assert!(sandbox.cache_entry().is_file());
}

#[test]
fn test_payload_no_cache_uses_requested_source() {
    let sandbox = Sandbox::new();
    sandbox.cmd().arg("payload").assert().success();

    let source = sandbox.definitions_dir();
    sandbox
        .cmd()
        .args(["payload", "--no-cache", "--source"])
        .arg(&source)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Priority\""))
        .stdout(predicate::str::contains("UserStatus").not());
}

#[test]
fn test_cached_payload_is_not_reused_for_another_source() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .arg("payload")
        .assert()
        .success()
        .stdout(predicate::str::contains("UserStatus"));

    let source = sandbox.definitions_dir();
    sandbox
        .cmd()
        .args(["payload", "--source"])
        .arg(&source)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Priority\""))
        .stdout(predicate::str::contains("UserStatus").not());

    // back to the built-in enums without clearing anything
    sandbox
        .cmd()
        .arg("payload")
        .assert()
        .success()
        .stdout(predicate::str::contains("UserStatus"))
        .stdout(predicate::str::contains("Priority").not());
}

#[test]
fn test_cache_clear_removes_payload() {
    let sandbox = Sandbox::new();
    sandbox.cmd().arg("payload").assert().success();
    assert!(sandbox.cache_entry().exists());

    sandbox.cmd().args(["cache", "clear"]).assert().success();
    assert!(!sandbox.cache_entry().exists());

    // clearing twice is fine
    sandbox.cmd().args(["cache", "clear"]).assert().success();
}

#[test]
fn test_cache_path_shows_configured_dir() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["cache", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cache"));
}

#[test]
fn test_config_show_and_set() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["config", "set", "props-module", "@inertiajs/react"])
        .assert()
        .success();

    sandbox
        .cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("props-module"))
        .stdout(predicate::str::contains("@inertiajs/react"));

    let output = sandbox.path().join("enums.d.ts");
    sandbox
        .cmd()
        .args(["generate", "enums", "--output"])
        .arg(&output)
        .assert()
        .success();
    assert!(fs::read_to_string(&output)
        .unwrap()
        .contains("declare module '@inertiajs/react'"));
}

#[test]
fn test_config_set_rejects_unknown_key() {
    Sandbox::new()
        .cmd()
        .args(["config", "set", "verbosity", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_config_set_rejects_invalid_ttl() {
    Sandbox::new()
        .cmd()
        .args(["config", "set", "cache-ttl", "soon"])
        .assert()
        .failure();
}

#[test]
fn test_config_path_honors_env() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("enumsync.toml"));
}
