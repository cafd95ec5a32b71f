//! Integration tests for the `jamfctl` binary.
//!
//! Argument parsing, help output, shell completions and error handling run
//! without a server; the end-to-end cases point the binary at a wiremock
//! server.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use wiremock::matchers::{basic_auth, bearer_token, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `jamfctl` binary with env isolation.
///
/// Clears all `JAMF_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn jamf_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("jamfctl");
    cmd.env("HOME", "/tmp/jamfctl-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/jamfctl-test-nonexistent")
        .env_remove("JAMF_PROFILE")
        .env_remove("JAMF_INSTANCE")
        .env_remove("JAMF_BASE_URL")
        .env_remove("JAMF_TOKEN")
        .env_remove("JAMF_USERNAME")
        .env_remove("JAMF_PASSWORD")
        .env_remove("JAMF_OUTPUT")
        .env_remove("JAMF_INSECURE")
        .env_remove("JAMF_TIMEOUT")
        .env_remove("RUST_LOG");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

/// Run the binary off the async runtime so the mock server keeps serving.
async fn run_blocking(mut cmd: assert_cmd::Command) -> std::process::Output {
    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = jamf_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    jamf_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("Jamf")
            .and(predicate::str::contains("users"))
            .and(predicate::str::contains("user-groups"))
            .and(predicate::str::contains("accounts"))
            .and(predicate::str::contains("sites")),
    );
}

#[test]
fn test_version_flag() {
    jamf_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("jamfctl"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    jamf_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    jamf_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Man pages ───────────────────────────────────────────────────────

#[test]
fn test_man_page_renders_roff() {
    jamf_cmd()
        .arg("man")
        .assert()
        .success()
        .stdout(predicate::str::contains(".TH").and(predicate::str::contains("jamfctl")));
}

#[test]
fn test_man_page_for_unknown_command() {
    jamf_cmd()
        .args(["man", "devices"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown command 'devices'"));
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = jamf_cmd().arg("foobar").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = combined_output(&output);
    assert!(
        text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_sites_list_without_config() {
    jamf_cmd()
        .args(["sites", "list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No Jamf server configured"));
}

#[test]
fn test_unknown_profile() {
    jamf_cmd()
        .args(["--profile", "staging", "users", "list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("staging"));
}

#[test]
fn test_users_get_rejects_non_numeric_id() {
    jamf_cmd()
        .args(["--instance", "https://acme.jamfcloud.com", "users", "get", "abc"])
        .assert()
        .code(2);
}

#[test]
fn test_malformed_config_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config_dir = dir.path().join("jamfctl");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "[profiles.prod\ninstance = ").unwrap();

    let output = jamf_cmd()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["sites", "list"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1), "{}", combined_output(&output));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("config loading failed"), "{stderr}");
    assert!(!stderr.contains("No Jamf server configured"), "{stderr}");
}

#[test]
fn test_config_path_prints_toml_location() {
    jamf_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

// ── End to end ──────────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_sites_list_with_token_flag() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/JSSResource/sites"))
        .and(bearer_token("tok-123"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "sites": [{ "id": 1, "name": "HQ" }, { "id": 2, "name": "Branch" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = jamf_cmd();
    cmd.args([
        "--instance",
        &server.uri(),
        "--token",
        "tok-123",
        "-o",
        "json-compact",
        "sites",
        "list",
    ]);
    let output = run_blocking(cmd).await;

    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        r#"[{"id":1,"name":"HQ"},{"id":2,"name":"Branch"}]"#
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_users_list_issues_token_from_password() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/token"))
        .and(basic_auth("admin", "s3cret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": "issued",
            "expires": "2030-01-01T00:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/JSSResource/users"))
        .and(bearer_token("issued"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "users": [{ "id": 7, "name": "jdoe" }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/JSSResource/users/id/7"))
        .and(bearer_token("issued"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "user": { "id": 7, "name": "jdoe", "full_name": "Jane Doe" }
        })))
        .mount(&server)
        .await;

    let mut cmd = jamf_cmd();
    cmd.env("JAMF_PASSWORD", "s3cret").args([
        "--instance",
        &server.uri(),
        "--username",
        "admin",
        "-o",
        "plain",
        "users",
        "list",
    ]);
    let output = run_blocking(cmd).await;

    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "7");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_failed_detail_fetch_prints_no_partial_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/JSSResource/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "users": [{ "id": 1, "name": "a" }, { "id": 2, "name": "b" }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/JSSResource/users/id/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "user": { "id": 1, "name": "a" }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/JSSResource/users/id/2"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>boom</html>"))
        .mount(&server)
        .await;

    let mut cmd = jamf_cmd();
    cmd.args([
        "--instance",
        &server.uri(),
        "--token",
        "t",
        "-o",
        "plain",
        "users",
        "list",
    ]);
    let output = run_blocking(cmd).await;

    assert_eq!(output.status.code(), Some(1), "{}", combined_output(&output));
    assert!(output.stdout.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_whoami_with_rejected_token_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/auth"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "httpStatus": 401,
            "errors": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = jamf_cmd();
    cmd.args(["--instance", &server.uri(), "--token", "expired", "auth", "whoami"]);
    let output = run_blocking(cmd).await;

    assert_eq!(output.status.code(), Some(1), "{}", combined_output(&output));
    assert!(output.stdout.is_empty());
}
