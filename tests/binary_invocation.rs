//! Tests that run the compiled `ipreco` binary.

mod helpers;

use helpers::google_dns_document;
use httptest::{matchers::*, responders::*, Expectation, Server};
use std::process::{Command, Output};

fn run_ipreco(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ipreco"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("CLICOLOR_FORCE")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run ipreco")
}

#[test]
fn test_invalid_ip_exits_non_zero_without_request() {
    // Any request to this server would fail verification on drop
    let server = Server::run();
    let base_url = server.url_str("/");

    let output = run_ipreco(&["--no-banner", "--base-url", &base_url, "not-an-ip"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid IP address"), "stderr: {stderr}");
}

#[test]
fn test_unknown_flag_prints_usage() {
    let output = run_ipreco(&["--bogus"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr: {stderr}");
}

#[test]
fn test_end_to_end_report() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/8.8.8.8"))
            .respond_with(json_encoded(google_dns_document())),
    );
    let base_url = server.url_str("/");

    let output = run_ipreco(&["--base-url", &base_url, "8.8.8.8"]);
    assert!(output.status.success(), "status: {:?}", output.status);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Target IP: 8.8.8.8"), "stdout: {stdout}");
    assert!(
        stdout
            .lines()
            .any(|line| line == "8.8.8.8 -> GOOGLE - Google LLC (US) - ASN: 15169"),
        "stdout: {stdout}"
    );
    assert!(stdout.contains(" *  Timezone: America/Chicago"));
}

#[test]
fn test_http_error_exits_with_failure() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/8.8.8.8"))
            .respond_with(status_code(404)),
    );
    let base_url = server.url_str("/");

    let output = run_ipreco(&["--no-banner", "--base-url", &base_url, "8.8.8.8"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Code 404."), "stderr: {stderr}");
}

#[test]
fn test_data_shape_error_exits_with_distinct_code() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/8.8.8.8"))
            .respond_with(json_encoded(serde_json::json!({"ip": "8.8.8.8"}))),
    );
    let base_url = server.url_str("/");

    let output = run_ipreco(&["--no-banner", "--base-url", &base_url, "8.8.8.8"]);
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("network.hosts.start"), "stderr: {stderr}");
}
