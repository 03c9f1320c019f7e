//! CLI integration tests for unleech.

use std::path::PathBuf;
use std::process::Command;

fn unleech_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_unleech"))
}

/// Pair-substitution encoding of `plain` under `key` (inverse of the
/// decoder for ASCII payloads).
fn encode(plain: &str, key: &str) -> String {
    let key_codes: Vec<u32> = key.chars().map(u32::from).collect();
    let mut out = String::new();
    for (i, ch) in plain.chars().enumerate() {
        let masked = u32::from(ch) ^ key_codes[i % key_codes.len()];
        out.push(char::from_u32(u32::from(b'a') + masked / 26).unwrap());
        out.push(char::from_u32(u32::from(b'a') + masked % 26).unwrap());
    }
    out
}

/// Decimal character codes for the carrier text `-1;x="<key>";`.
fn carrier_for(key: &str) -> String {
    format!("-1;x=\"{key}\";")
        .chars()
        .map(|c| u32::from(c).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

const REDIRECT: &str = "<script>window.top.location='http://example.com/gate.php';</script>";

fn write_injected_page(name: &str) -> PathBuf {
    let html = format!(
        "<html><body>\
         <div>Welcome to our site</div>\
         <div>{}</div>\
         <div>{}</div>\
         </body></html>",
        carrier_for("key"),
        encode(REDIRECT, "key"),
    );
    let path = std::env::temp_dir().join(name);
    std::fs::write(&path, html).unwrap();
    path
}

#[test]
fn test_cli_help() {
    let output = unleech_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute unleech");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("unleech"));
    assert!(stdout.contains("--selector"));
    assert!(stdout.contains("--json"));
    assert!(stdout.contains("--show-key"));
}

#[test]
fn test_cli_version() {
    let output = unleech_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute unleech");

    assert!(output.status.success());
}

#[test]
fn test_cli_nonexistent_file() {
    let output = unleech_cmd()
        .arg("/nonexistent/file/path")
        .output()
        .expect("Failed to execute unleech");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not exist") || stderr.contains("No such file"));
}

#[test]
fn test_cli_recovers_payload() {
    let path = write_injected_page("unleech_test_recover.html");

    let output = unleech_cmd()
        .arg("--simple")
        .arg(&path)
        .output()
        .expect("Failed to execute unleech");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(REDIRECT));

    let _ = std::fs::remove_file(path);
}

#[test]
fn test_cli_show_key() {
    let path = write_injected_page("unleech_test_show_key.html");

    let output = unleech_cmd()
        .arg("--show-key")
        .arg(&path)
        .output()
        .expect("Failed to execute unleech");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "key");

    let _ = std::fs::remove_file(path);
}

#[test]
fn test_cli_json_output() {
    let path = write_injected_page("unleech_test_json.html");

    let output = unleech_cmd()
        .arg("--json")
        .arg(&path)
        .output()
        .expect("Failed to execute unleech");

    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("JSON output should parse");
    assert_eq!(parsed["key"], "key");
    assert_eq!(parsed["payloads"][0]["value"], REDIRECT);
    assert_eq!(parsed["payloads"][0]["kind"], "Markup");

    let _ = std::fs::remove_file(path);
}

#[test]
fn test_cli_key_not_found_exits_nonzero() {
    let path = std::env::temp_dir().join("unleech_test_clean.html");
    std::fs::write(&path, "<html><body><div>nothing here</div></body></html>").unwrap();

    let output = unleech_cmd()
        .arg(&path)
        .output()
        .expect("Failed to execute unleech");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no decode key"));

    let _ = std::fs::remove_file(path);
}

#[test]
fn test_cli_key_override() {
    // payload only, no carrier on the page
    let html = format!("<div>{}</div>", encode(REDIRECT, "Moz13"));
    let path = std::env::temp_dir().join("unleech_test_override.html");
    std::fs::write(&path, html).unwrap();

    let output = unleech_cmd()
        .arg("--simple")
        .arg("--key")
        .arg("Moz13")
        .arg(&path)
        .output()
        .expect("Failed to execute unleech");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains(REDIRECT));

    let _ = std::fs::remove_file(path);
}

#[test]
fn test_cli_no_payloads_is_success() {
    // key present but nothing decodes to plausible output
    let html = format!("<div>{}</div>", carrier_for("key"));
    let path = std::env::temp_dir().join("unleech_test_empty.html");
    std::fs::write(&path, html).unwrap();

    let output = unleech_cmd()
        .arg("--no-color")
        .arg(&path)
        .output()
        .expect("Failed to execute unleech");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No payloads recovered"));

    let _ = std::fs::remove_file(path);
}
