#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::TempDir;

fn gitdep_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gitdep").unwrap();
    cmd.env("GITDEPEND_HOME", home).env_remove("RUST_LOG");
    cmd
}

fn write_script(path: &Path, body: &str) {
    fs::write(path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

fn make_repo(dir: &Path, manifest: &str) {
    fs::create_dir_all(dir.join(".git")).unwrap();
    fs::write(dir.join("GitDepend.json"), manifest).unwrap();
}

/// A dependency whose build script drops `{id}.{version}.nupkg` into `out/`
/// and exits with `exit_code`.
fn make_dependency(dir: &Path, id: &str, version: &str, exit_code: i32) {
    make_repo(
        dir,
        r#"{ "build": { "script": "build.sh" }, "packages": { "directory": "out" } }"#,
    );
    write_script(
        &dir.join("build.sh"),
        &format!("mkdir -p out\ntouch built\ntouch out/{id}.{version}.nupkg\nexit {exit_code}"),
    );
}

/// Point the tools at stand-ins: nuget logs its arguments, git does nothing.
fn write_tools_config(home: &Path) -> std::path::PathBuf {
    let log = home.join("nuget.log");
    let nuget = home.join("nuget.sh");
    write_script(&nuget, &format!("echo \"$@\" >> '{}'", log.display()));
    fs::write(
        home.join("config.toml"),
        format!("[tools]\ngit = 'true'\nnuget = '{}'\n", nuget.display()),
    )
    .unwrap();
    log
}

#[test]
fn test_update_builds_harvests_and_updates_solutions() {
    let tmp = TempDir::new().unwrap();
    let home = tmp.path().join("home");
    fs::create_dir_all(&home).unwrap();
    let log = write_tools_config(&home);

    let app = tmp.path().join("app");
    make_repo(&app, r#"{ "dependencies": [ { "directory": "../lib" } ] }"#);
    fs::write(app.join("App.sln"), "").unwrap();
    make_dependency(&tmp.path().join("lib"), "MyLib", "1.2.3", 0);

    gitdep_cmd(&home)
        .args(["update", "--dir"])
        .arg(&app)
        .assert()
        .success()
        .stderr(predicate::str::contains("Building"));

    assert!(tmp.path().join("lib/built").exists());
    assert!(home.join("cache/MyLib.1.2.3.nupkg").is_file());

    let calls = fs::read_to_string(log).unwrap();
    assert!(calls.contains("update"));
    assert!(calls.contains("App.sln -Id MyLib -Version 1.2.3"));
}

#[test]
fn test_update_cache_dir_flag_overrides_config() {
    let tmp = TempDir::new().unwrap();
    let home = tmp.path().join("home");
    fs::create_dir_all(&home).unwrap();
    write_tools_config(&home);

    let app = tmp.path().join("app");
    make_repo(&app, r#"{ "dependencies": [ { "directory": "../lib" } ] }"#);
    make_dependency(&tmp.path().join("lib"), "MyLib", "2.0.0", 0);
    let cache = tmp.path().join("my-cache");

    gitdep_cmd(&home)
        .args(["update", "--cache-dir"])
        .arg(&cache)
        .arg("--dir")
        .arg(&app)
        .assert()
        .success();

    assert!(cache.join("MyLib.2.0.0.nupkg").is_file());
    assert!(!home.join("cache/MyLib.2.0.0.nupkg").exists());
}

#[test]
fn test_update_stops_at_first_failed_build() {
    let tmp = TempDir::new().unwrap();
    let home = tmp.path().join("home");
    fs::create_dir_all(&home).unwrap();
    let log = write_tools_config(&home);

    let app = tmp.path().join("app");
    make_repo(
        &app,
        r#"{ "dependencies": [ { "directory": "../broken" }, { "directory": "../later" } ] }"#,
    );
    fs::write(app.join("App.sln"), "").unwrap();
    make_dependency(&tmp.path().join("broken"), "Broken", "1.0.0", 7);
    make_dependency(&tmp.path().join("later"), "Later", "1.0.0", 0);

    gitdep_cmd(&home)
        .args(["update", "--dir"])
        .arg(&app)
        .assert()
        .code(7);

    assert!(tmp.path().join("broken/built").exists());
    assert!(!tmp.path().join("later/built").exists());
    assert!(!log.exists());
}

#[test]
fn test_update_missing_build_script_exits_with_script_failure() {
    let tmp = TempDir::new().unwrap();
    let home = tmp.path().join("home");
    fs::create_dir_all(&home).unwrap();
    write_tools_config(&home);

    let app = tmp.path().join("app");
    make_repo(&app, r#"{ "dependencies": [ { "directory": "../lib" } ] }"#);
    make_repo(&tmp.path().join("lib"), r#"{ "build": { "script": "nope.sh" } }"#);

    gitdep_cmd(&home)
        .args(["update", "--dir"])
        .arg(&app)
        .assert()
        .code(2);
}
