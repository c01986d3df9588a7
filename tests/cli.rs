use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn cmd(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("wtk");
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn tools_list_shows_catalog() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["tools", "list"])
        .assert()
        .success()
        .stdout(contains("csv-to-json"))
        .stdout(contains("hash-generator"));
}

#[test]
fn base64_encode_inline() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["encode", "base64", "hello"])
        .assert()
        .success()
        .stdout("aGVsbG8=\n");
}

#[test]
fn hash_defaults_to_sha256() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["hash", "abc"])
        .assert()
        .success()
        .stdout(contains(
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        ));
}

#[test]
fn number_base_conversion() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["number", "base", "255", "--to", "16"])
        .assert()
        .success()
        .stdout("ff\n");
}

#[test]
fn negative_temperature_is_accepted() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["unit", "convert", "temperature", "-40", "--from", "c", "--to", "f"])
        .assert()
        .success()
        .stdout("-40 c = -40 f\n");
}

#[test]
fn case_conversion_from_stdin() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["text", "case", "--to", "snake"])
        .write_stdin("Hello World\n")
        .assert()
        .success()
        .stdout("hello_world\n");
}

#[test]
fn parse_failure_reports_error_and_exit_code() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["convert", "json-to-yaml", "{bad"])
        .assert()
        .code(1)
        .stderr(contains("error: invalid JSON"));
}

#[test]
fn unknown_tool_is_an_error() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["tools", "show", "does-not-exist"])
        .assert()
        .failure()
        .stderr(contains("tool not found: does-not-exist"));
}

#[test]
fn caesar_accepts_extreme_shift() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["cipher", "caesar", "abc", "--shift", "-9223372036854775808", "--decode"])
        .assert()
        .success()
        .stdout("ijk\n");
}

#[test]
fn xml_with_two_roots_is_rejected() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["xml", "format", "<a/><b/>"])
        .assert()
        .code(1)
        .stderr(contains("more than one root element"));
}
