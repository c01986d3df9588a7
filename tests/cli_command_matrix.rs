use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

fn run_help(home: &TempDir, args: &[&str]) {
    let mut cmd = cargo_bin_cmd!("wtk");
    cmd.env("HOME", home.path())
        .args(args)
        .arg("--help")
        .assert()
        .success();
}

#[test]
fn every_cli_command_has_help_path() {
    let home = TempDir::new().expect("temp home");

    // top-level
    run_help(&home, &[]);

    // single commands
    run_help(&home, &["hash"]);
    run_help(&home, &["color"]);
    run_help(&home, &["serve"]);

    // grouped subcommands
    for group in [
        "tools", "convert", "json", "xml", "encode", "cipher", "number", "unit", "calc", "text",
        "generate", "time", "jwt", "url", "config",
    ] {
        run_help(&home, &[group]);
    }

    run_help(&home, &["tools", "list"]);
    run_help(&home, &["tools", "search"]);
    run_help(&home, &["tools", "show"]);
    run_help(&home, &["tools", "categories"]);

    run_help(&home, &["convert", "csv-to-json"]);
    run_help(&home, &["convert", "json-to-csv"]);
    run_help(&home, &["convert", "json-to-yaml"]);
    run_help(&home, &["convert", "yaml-to-json"]);
    run_help(&home, &["convert", "markdown-to-html"]);

    run_help(&home, &["json", "format"]);
    run_help(&home, &["json", "minify"]);
    run_help(&home, &["json", "validate"]);
    run_help(&home, &["xml", "format"]);
    run_help(&home, &["xml", "minify"]);

    run_help(&home, &["encode", "base64"]);
    run_help(&home, &["encode", "url"]);
    run_help(&home, &["encode", "html"]);
    run_help(&home, &["encode", "hex"]);
    run_help(&home, &["cipher", "caesar"]);
    run_help(&home, &["cipher", "rot13"]);

    run_help(&home, &["number", "base"]);
    run_help(&home, &["number", "roman"]);
    run_help(&home, &["unit", "convert"]);
    run_help(&home, &["unit", "list"]);

    run_help(&home, &["calc", "bmi"]);
    run_help(&home, &["calc", "percent"]);
    run_help(&home, &["calc", "loan"]);
    run_help(&home, &["calc", "age"]);
    run_help(&home, &["calc", "date-diff"]);

    run_help(&home, &["text", "case"]);
    run_help(&home, &["text", "stats"]);
    run_help(&home, &["text", "reverse"]);
    run_help(&home, &["text", "slug"]);
    run_help(&home, &["text", "lines"]);
    run_help(&home, &["text", "lorem"]);
    run_help(&home, &["text", "regex"]);

    run_help(&home, &["generate", "uuid"]);
    run_help(&home, &["generate", "password"]);
    run_help(&home, &["generate", "number"]);

    run_help(&home, &["time", "from-unix"]);
    run_help(&home, &["time", "to-unix"]);
    run_help(&home, &["time", "now"]);

    run_help(&home, &["jwt", "decode"]);
    run_help(&home, &["url", "parse"]);
    run_help(&home, &["url", "check"]);

    run_help(&home, &["config", "show"]);
    run_help(&home, &["config", "path"]);
}
