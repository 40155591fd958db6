//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with a controlled environment and verify
//! exit codes and output. HTTP endpoints are served by mockito.

use std::process::Command;

const REQUIRED: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

/// Run the CLI with the required variables removed, then `vars` applied.
fn run_cli(args: &[&str], vars: &[(&str, &str)]) -> (i32, String, String) {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_homework-bot"));
    cmd.current_dir(env!("CARGO_MANIFEST_DIR"))
        .env("RUST_LOG", "debug")
        .args(args);
    for key in REQUIRED {
        cmd.env_remove(key);
    }
    for (key, value) in vars {
        cmd.env(key, value);
    }
    let output = cmd.output().expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn tokens<'a>(extra: &[(&'a str, &'a str)]) -> Vec<(&'a str, &'a str)> {
    let mut vars = vec![
        ("PRACTICUM_TOKEN", "p-token"),
        ("TELEGRAM_TOKEN", "123:ABC"),
        ("TELEGRAM_CHAT_ID", "4242"),
        ("HTTP_TIMEOUT_SECS", "5"),
    ];
    vars.extend_from_slice(extra);
    vars
}

#[test]
fn test_run_without_config_exits_nonzero() {
    let (code, _stdout, stderr) = run_cli(&["run", "--once"], &[]);
    assert_eq!(code, 1, "run must halt without configuration");
    assert!(stderr.contains("PRACTICUM_TOKEN"));
    assert!(stderr.contains("TELEGRAM_TOKEN"));
    assert!(stderr.contains("TELEGRAM_CHAT_ID"));
}

#[test]
fn test_check_reports_missing_var() {
    let (code, stdout, _stderr) = run_cli(
        &["check"],
        &[("PRACTICUM_TOKEN", "p"), ("TELEGRAM_TOKEN", "t")],
    );
    assert_eq!(code, 1);
    assert!(stdout.contains("TELEGRAM_CHAT_ID"));
    assert!(stdout.contains("missing"));
}

#[test]
fn test_check_passes_with_config() {
    let (code, stdout, _stderr) = run_cli(&["check"], &tokens(&[]));
    assert_eq!(code, 0);
    assert!(!stdout.contains("missing"));
}

#[test]
fn test_verdicts_json() {
    let (code, stdout, _stderr) = run_cli(&["verdicts", "--json"], &[]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("verdicts JSON");
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["status"], "approved");
}

#[test]
fn test_run_once_notifies_status_change() {
    let mut practicum = mockito::Server::new();
    let mut telegram = mockito::Server::new();

    let status = practicum
        .mock("GET", "/statuses/")
        .match_header("authorization", "OAuth p-token")
        .match_query(mockito::Matcher::UrlEncoded("from_date".into(), "0".into()))
        .with_status(200)
        .with_body(r#"{"homeworks": [{"status": "rejected", "homework_name": "Project 2"}], "current_date": 1700000000}"#)
        .create();
    let sent = telegram
        .mock("POST", "/bot123:ABC/sendMessage")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({
            "chat_id": "4242",
            "text": "Status changed for submission \"Project 2\". reviewed, has remarks"
        })))
        .with_status(200)
        .with_body(r#"{"ok": true}"#)
        .create();

    let endpoint = format!("{}/statuses/", practicum.url());
    let api = telegram.url();
    let (code, stdout, _stderr) = run_cli(
        &["run", "--once", "--from-date", "0"],
        &tokens(&[
            ("PRACTICUM_ENDPOINT", endpoint.as_str()),
            ("TELEGRAM_API_URL", api.as_str()),
        ]),
    );

    assert_eq!(code, 0);
    assert!(stdout.contains("notification sent"));
    status.assert();
    sent.assert();
}

#[test]
fn test_send_reports_delivery_failure() {
    let mut telegram = mockito::Server::new();
    let _rejected = telegram
        .mock("POST", "/bot123:ABC/sendMessage")
        .with_status(400)
        .with_body(r#"{"ok": false, "description": "Bad Request: chat not found"}"#)
        .create();

    let api = telegram.url();
    let (code, _stdout, stderr) = run_cli(&["send", "hello"], &tokens(&[("TELEGRAM_API_URL", api.as_str())]));
    assert_eq!(code, 1);
    assert!(stderr.contains("chat not found"));
}
