mod common;

use common::TestEnv;
use predicates::str::contains;
use serde_json::json;
use std::io::{BufRead, BufReader};
use std::process::{Command as StdCommand, Stdio};

#[test]
fn csv_file_to_json_and_back() {
    let env = TestEnv::new();
    let csv = env.write_file("people.csv", "name,city\n\"Doe, Jane\",Oslo\nBob\n");

    let out = env.run_json(&["convert", "csv-to-json", "--file", csv.to_str().unwrap()]);
    assert_eq!(out["ok"], true);
    assert_eq!(out["data"]["tool"], "csv-to-json");
    let records: serde_json::Value =
        serde_json::from_str(out["data"]["output"].as_str().unwrap()).unwrap();
    assert_eq!(
        records,
        json!([
            {"name": "Doe, Jane", "city": "Oslo"},
            {"name": "Bob", "city": ""}
        ])
    );

    let json_path = env.write_file("people.json", &records.to_string());
    let back = env.run_text(&["convert", "json-to-csv", "-f", json_path.to_str().unwrap()]);
    assert!(back.starts_with("name,city\n\"Doe, Jane\",Oslo\nBob,"));
}

#[test]
fn yaml_round_trip_through_stdin() {
    let env = TestEnv::new();
    let yaml = env.run_json_stdin(&["convert", "json-to-yaml"], r#"{"a":[1,2],"b":{"c":true}}"#);
    let yaml_text = yaml["data"]["output"].as_str().unwrap().to_string();

    let back = env.run_json_stdin(&["convert", "yaml-to-json", "--indent", "0"], &yaml_text);
    let value: serde_json::Value =
        serde_json::from_str(back["data"]["output"].as_str().unwrap()).unwrap();
    assert_eq!(value, json!({"a": [1, 2], "b": {"c": true}}));
}

#[test]
fn base64_round_trip_preserves_unicode() {
    let env = TestEnv::new();
    let text = "héllo wörld ✓";
    let encoded = env.run_json(&["encode", "base64", text]);
    let token = encoded["data"]["output"].as_str().unwrap().to_string();

    let decoded = env.run_json(&["encode", "base64", "--decode", &token]);
    assert_eq!(decoded["data"]["output"], text);
}

#[test]
fn hash_all_algorithms_in_json() {
    let env = TestEnv::new();
    let out = env.run_json(&["hash", "abc", "--algorithm", "all"]);
    let reports = out["data"].as_array().unwrap();
    assert_eq!(reports.len(), 5);
    assert_eq!(reports[0]["algorithm"], "md5");
    assert_eq!(reports[0]["digest"], "900150983cd24fb0d6963f7d28e17f72");
}

#[test]
fn config_default_algorithm_is_honored() {
    let env = TestEnv::new();
    env.write_config("[defaults]\nhash_algorithm = \"md5\"\n");
    env.cmd()
        .args(["hash", "abc"])
        .assert()
        .success()
        .stdout("900150983cd24fb0d6963f7d28e17f72\n");
}

#[test]
fn explicit_config_flag_and_path() {
    let env = TestEnv::new();
    let path = env.write_file("custom.toml", "[server]\nport = 9191\n");

    let shown = env.run_json(&["--config", path.to_str().unwrap(), "config", "show"]);
    assert_eq!(shown["data"]["server"]["port"], 9191);
    assert_eq!(shown["data"]["server"]["host"], "127.0.0.1");

    let reported = env.run_json(&["--config", path.to_str().unwrap(), "config", "path"]);
    assert_eq!(reported["data"], path.to_str().unwrap());
}

#[test]
fn missing_explicit_config_fails() {
    let env = TestEnv::new();
    let missing = env.work.join("nope.toml");
    env.cmd()
        .args(["--config", missing.to_str().unwrap(), "tools", "list"])
        .assert()
        .failure();
}

#[test]
fn failures_produce_error_envelope() {
    let env = TestEnv::new();
    let err = env.run_json_failure(&["convert", "json-to-yaml", "{bad"]);
    assert_eq!(err["ok"], false);
    assert!(err["error"].as_str().unwrap().starts_with("invalid JSON"));

    let err = env.run_json_failure(&["number", "roman", "4000"]);
    assert_eq!(err["error"], "roman numerals cover 1 to 3999, got 4000");
}

#[test]
fn input_and_file_are_exclusive() {
    let env = TestEnv::new();
    let path = env.write_file("in.txt", "abc");
    env.cmd()
        .args(["encode", "hex", "abc", "--file", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(contains("not both"));
}

#[test]
fn json_validate_reports_position() {
    let env = TestEnv::new();
    let out = env.run_json(&["json", "validate", "{\n  \"a\": }"]);
    assert_eq!(out["data"]["valid"], false);
    assert_eq!(out["data"]["line"], 2);

    env.cmd()
        .args(["json", "validate", "[1, 2"])
        .assert()
        .failure()
        .stdout(contains("invalid JSON at line 1"));
}

#[test]
fn catalog_filters_by_category() {
    let env = TestEnv::new();
    let out = env.run_json(&["tools", "list", "--category", "units"]);
    let tools = out["data"].as_array().unwrap();
    assert_eq!(tools.len(), 8);
    assert!(tools.iter().all(|t| t["category"] == "units"));

    let found = env.run_json(&["tools", "search", "ROMAN"]);
    assert_eq!(found["data"][0]["id"], "roman-numerals");
}

#[test]
fn serve_answers_health_check() {
    let env = TestEnv::new();
    let mut child = StdCommand::new(env!("CARGO_BIN_EXE_wtk"))
        .env("HOME", &env.home)
        .args(["serve", "--host", "localhost", "--port", "0"])
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn server");

    let mut line = String::new();
    let stdout = child.stdout.take().expect("piped stdout");
    BufReader::new(stdout).read_line(&mut line).expect("read banner");
    let base = line
        .trim()
        .strip_prefix("listening on ")
        .expect("listening banner")
        .to_string();

    let resp = reqwest::blocking::get(format!("{}/api/health", base));
    child.kill().ok();
    child.wait().ok();

    let resp = resp.expect("health request");
    assert_eq!(resp.status().as_u16(), 200);
    let body: serde_json::Value =
        serde_json::from_str(&resp.text().expect("body text")).expect("json body");
    assert_eq!(body, json!({"status": "ok"}));
}
