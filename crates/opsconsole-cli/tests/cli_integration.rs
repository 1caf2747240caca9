//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end against a
//! temporary asset directory.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

const PROFILE: &str = r#"{
    "id": 1,
    "username": "ops",
    "role": "admin",
    "email": "ops@example.com",
    "isEnabled": true,
    "isInit": false,
    "permissions": { "hostIds": [1, 2, 3], "labelIds": [] }
}"#;

const CONFIG_ROWS: &str = r#"{
    "count": 3,
    "list": [
        { "id": 1, "type": "ssh", "fieldName": "SshKey", "fieldValue": "", "fieldDescription": "Private key" },
        { "id": 2, "type": "ai", "fieldName": "ApiKey", "fieldValue": "sk-1", "fieldDescription": "Token" },
        { "id": 3, "type": "ssh", "fieldName": "Port", "fieldValue": "22", "fieldDescription": "Port" }
    ]
}"#;

fn write_icon(root: &Path, prefix: &str, name: &str) {
    let dir = root.join("icons").join(prefix);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(format!("{}.svg", name)), "<svg viewBox=\"0 0 24 24\"/>").unwrap();
}

/// Asset directory with one icon, the default font and a profile
fn assets() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_icon(dir.path(), "logos", "ubuntu");
    std::fs::create_dir_all(dir.path().join("fonts")).unwrap();
    std::fs::write(
        dir.path().join("fonts").join("CascadiaCode.woff2"),
        b"wOF2\x00\x01\x00\x00",
    )
    .unwrap();
    std::fs::write(dir.path().join("profile.json"), PROFILE).unwrap();
    dir
}

/// Create a CLI command rooted at the given asset directory
fn cli_cmd(assets: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("opsconsole").expect("Failed to find opsconsole binary");
    cmd.arg("--assets-dir").arg(assets.path());
    cmd
}

// ============================================================================
// Locale Command Tests
// ============================================================================

#[test]
fn test_locale_get_default_locale() {
    let dir = assets();

    cli_cmd(&dir)
        .args(["locale", "get", "sys.menu.host"])
        .assert()
        .success()
        .stdout("主机管理\n");
}

#[test]
fn test_locale_get_english() {
    let dir = assets();

    cli_cmd(&dir)
        .args(["locale", "get", "sys.menu.host", "--locale", "en_US"])
        .assert()
        .success()
        .stdout("Host Management\n");
}

#[test]
fn test_locale_get_unknown_key_prints_key() {
    let dir = assets();

    cli_cmd(&dir)
        .args(["locale", "get", "no.such.key"])
        .assert()
        .success()
        .stdout("no.such.key\n");
}

#[test]
fn test_locale_get_rejects_unsupported_locale() {
    let dir = assets();

    cli_cmd(&dir)
        .args(["locale", "get", "sys.menu.host", "--locale", "fr_FR"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("fr_FR"));
}

#[test]
fn test_locale_dump_shows_later_fragment_override() {
    let dir = assets();

    cli_cmd(&dir)
        .args(["locale", "dump", "--locale", "en_US"])
        .assert()
        .success()
        .stdout(predicate::str::contains("common.copied = Copied to clipboard\n"))
        .stdout(predicate::str::contains("sys.menu.quickCommand = Quick Commands\n"));
}

#[test]
fn test_locale_list() {
    let dir = assets();

    cli_cmd(&dir)
        .args(["locale", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("zh_CN"))
        .stdout(predicate::str::contains("en_US"))
        .stdout(predicate::str::contains("(default)"));
}

// ============================================================================
// Icon Command Tests
// ============================================================================

#[test]
fn test_icons_resolve() {
    let dir = assets();

    cli_cmd(&dir)
        .args(["icons", "resolve", "logos:ubuntu"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<svg"));
}

#[test]
fn test_icons_resolve_missing_fails() {
    let dir = assets();

    cli_cmd(&dir)
        .args(["icons", "resolve", "logos:missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("logos:missing"));
}

#[test]
fn test_icons_preload_reports_failures_independently() {
    let dir = assets();

    cli_cmd(&dir)
        .args(["icons", "preload", "logos:ubuntu", "logos:missing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded: 1"))
        .stdout(predicate::str::contains("FAILED logos:missing"));
}

#[test]
fn test_icons_catalog_lookup() {
    let dir = assets();

    cli_cmd(&dir)
        .args(["icons", "file", "notes.md"])
        .assert()
        .success()
        .stdout("catppuccin:markdown\n");

    cli_cmd(&dir)
        .args(["icons", "os", "Ubuntu 22.04.3 LTS"])
        .assert()
        .success()
        .stdout("logos:ubuntu\n");
}

// ============================================================================
// Font Command Tests
// ============================================================================

#[test]
fn test_fonts_preload() {
    let dir = assets();

    cli_cmd(&dir)
        .args(["fonts", "preload"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded: Cascadia Code"));
}

#[test]
fn test_fonts_preload_fails_without_font_file() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["fonts", "preload"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Font preload failed"));
}

// ============================================================================
// Config Command Tests
// ============================================================================

#[test]
fn test_config_transform_groups_rows() {
    let dir = assets();
    let rows = dir.path().join("rows.json");
    std::fs::write(&rows, CONFIG_ROWS).unwrap();

    let output = cli_cmd(&dir)
        .args(["config", "transform"])
        .arg(&rows)
        .output()
        .unwrap();
    assert!(output.status.success());

    let groups: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let groups = groups.as_array().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["id"], "ssh-config");
    assert_eq!(groups[0]["items"].as_array().unwrap().len(), 2);
    assert_eq!(groups[0]["items"][0]["type"], "textarea");
    assert_eq!(groups[1]["title"], "aiConfig");
    assert_eq!(groups[1]["items"][0]["type"], "password");
}

// ============================================================================
// User Command Tests
// ============================================================================

#[test]
fn test_user_show() {
    let dir = assets();

    cli_cmd(&dir)
        .args(["user", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("User: ops"))
        .stdout(predicate::str::contains("Role: admin"))
        .stdout(predicate::str::contains("Hosts: 3"));
}

#[test]
fn test_user_show_without_profile_is_guest() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["user", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("User: Guest"))
        .stdout(predicate::str::contains("Profile unavailable"));
}

#[test]
fn test_user_show_json_with_explicit_profile() {
    let dir = TempDir::new().unwrap();
    let profile = dir.path().join("me.json");
    std::fs::write(&profile, PROFILE).unwrap();

    cli_cmd(&dir)
        .arg("--profile")
        .arg(&profile)
        .args(["user", "show", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"username\": \"ops\""))
        .stdout(predicate::str::contains("\"hostIds\""));
}
