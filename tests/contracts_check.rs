mod common;

use common::TestEnv;
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

fn load_schema(name: &str) -> Value {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = fs::read_to_string(root.join("docs/contracts").join(name)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn validate(schema_name: &str, data: &Value) {
    let schema = load_schema(schema_name);
    let validator = JSONSchema::compile(&schema).expect("compile schema");
    let msgs: Vec<String> = match validator.validate(data) {
        Ok(()) => return,
        Err(errors) => errors.map(|e| e.to_string()).collect(),
    };
    panic!("schema validation failed: {}", msgs.join(" | "));
}

#[test]
fn tools_list_matches_contract() {
    let env = TestEnv::new();
    validate("tool-list.schema.json", &env.run_json(&["tools", "list"]));
    validate(
        "tool-list.schema.json",
        &env.run_json(&["tools", "search", "json"]),
    );
}

#[test]
fn categories_match_contract() {
    let env = TestEnv::new();
    let out = env.run_json(&["tools", "categories"]);
    validate("categories.schema.json", &out);
    let total: u64 = out["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["tool_count"].as_u64().unwrap())
        .sum();
    let listed = env.run_json(&["tools", "list"]);
    assert_eq!(total as usize, listed["data"].as_array().unwrap().len());
}

#[test]
fn text_tools_match_contract() {
    let env = TestEnv::new();
    for args in [
        vec!["encode", "url", "a b&c"],
        vec!["encode", "html", "<p>"],
        vec!["cipher", "rot13", "Hello"],
        vec!["json", "minify", "{ \"a\" : 1 }"],
        vec!["xml", "format", "<a><b>x</b></a>"],
        vec!["text", "slug", "Hello World"],
        vec!["convert", "markdown-to-html", "# Title"],
    ] {
        validate("text-output.schema.json", &env.run_json(&args));
    }
}

#[test]
fn hash_reports_match_contract() {
    let env = TestEnv::new();
    validate("hash.schema.json", &env.run_json(&["hash", "abc"]));
    validate(
        "hash.schema.json",
        &env.run_json(&["hash", "abc", "-a", "all"]),
    );
}

#[test]
fn json_validation_matches_contract() {
    let env = TestEnv::new();
    validate(
        "json-validation.schema.json",
        &env.run_json(&["json", "validate", "{\"a\": 1}"]),
    );
    validate(
        "json-validation.schema.json",
        &env.run_json(&["json", "validate", "{\"a\": }"]),
    );
}

#[test]
fn failures_match_error_contract() {
    let env = TestEnv::new();
    for args in [
        vec!["tools", "show", "missing-tool"],
        vec!["encode", "base64", "--decode", "!!!"],
        vec!["number", "base", "12", "--from", "2"],
        vec!["unit", "convert", "length", "1", "--from", "m", "--to", "parsec"],
        vec!["color", "not-a-color"],
        vec!["serve"],
    ] {
        validate("error-envelope.schema.json", &env.run_json_failure(&args));
    }
}
