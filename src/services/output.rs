use crate::domain::models::{JsonErr, JsonOut, TextOutput};
use serde::Serialize;

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// Prints a text-producing tool's result; raw text unless `--json`.
pub fn print_text(json: bool, tool: &str, output: String) -> anyhow::Result<()> {
    print_one(
        json,
        TextOutput {
            tool: tool.to_string(),
            output,
        },
        |t| t.output.clone(),
    )
}

pub fn print_error(json: bool, err: &anyhow::Error) {
    if json {
        let body = JsonErr {
            ok: false,
            error: err.to_string(),
        };
        match serde_json::to_string_pretty(&body) {
            Ok(s) => println!("{}", s),
            Err(_) => println!("{{\"ok\": false}}"),
        }
    } else {
        eprintln!("error: {}", err);
    }
}
