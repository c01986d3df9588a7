use crate::cli::{ConvertCommands, InputArgs, JsonCommands, XmlCommands};
use crate::domain::models::Config;
use crate::services::formats;
use crate::services::input::read_input;
use crate::services::output::{print_one, print_text};
use tracing::debug;

fn read(input: &InputArgs) -> anyhow::Result<String> {
    read_input(input.input.as_deref(), input.file.as_ref())
}

pub fn handle_convert_commands(
    json: bool,
    command: &ConvertCommands,
    config: &Config,
) -> anyhow::Result<()> {
    let defaults = &config.defaults;
    match command {
        ConvertCommands::CsvToJson {
            input,
            delimiter,
            indent,
        } => {
            let text = read(input)?;
            let delimiter = delimiter.unwrap_or(defaults.csv_delimiter);
            debug!(tool = "csv-to-json", %delimiter, bytes = text.len());
            let indent = indent.unwrap_or(defaults.json_indent);
            let out = formats::csv_to_json(&text, delimiter, indent)?;
            print_text(json, "csv-to-json", out)?;
        }
        ConvertCommands::JsonToCsv { input, delimiter } => {
            let text = read(input)?;
            let delimiter = delimiter.unwrap_or(defaults.csv_delimiter);
            debug!(tool = "json-to-csv", %delimiter, bytes = text.len());
            print_text(json, "json-to-csv", formats::json_to_csv(&text, delimiter)?)?;
        }
        ConvertCommands::JsonToYaml { input } => {
            let text = read(input)?;
            debug!(tool = "json-to-yaml", bytes = text.len());
            print_text(json, "json-to-yaml", formats::json_to_yaml(&text)?)?;
        }
        ConvertCommands::YamlToJson { input, indent } => {
            let text = read(input)?;
            debug!(tool = "yaml-to-json", bytes = text.len());
            let out = formats::yaml_to_json(&text, indent.unwrap_or(defaults.json_indent))?;
            print_text(json, "yaml-to-json", out)?;
        }
        ConvertCommands::MarkdownToHtml { input } => {
            let text = read(input)?;
            debug!(tool = "markdown-to-html", bytes = text.len());
            print_text(json, "markdown-to-html", formats::markdown_to_html(&text))?;
        }
    }
    Ok(())
}

pub fn handle_json_commands(
    json: bool,
    command: &JsonCommands,
    config: &Config,
) -> anyhow::Result<()> {
    match command {
        JsonCommands::Format { input, indent } => {
            let text = read(input)?;
            let indent = indent.unwrap_or(config.defaults.json_indent);
            print_text(json, "json-formatter", formats::json_format(&text, indent)?)?;
        }
        JsonCommands::Minify { input } => {
            let text = read(input)?;
            print_text(json, "json-minifier", formats::json_minify(&text)?)?;
        }
        JsonCommands::Validate { input } => {
            let text = read(input)?;
            let report = formats::json_validate(&text);
            let valid = report.valid;
            print_one(json, report, |r| match (&r.error, r.line, r.column) {
                (Some(e), Some(line), Some(col)) => {
                    format!("invalid JSON at line {}, column {}: {}", line, col, e)
                }
                _ => "valid JSON".to_string(),
            })?;
            if !valid && !json {
                anyhow::bail!("validation failed");
            }
        }
    }
    Ok(())
}

pub fn handle_xml_commands(json: bool, command: &XmlCommands) -> anyhow::Result<()> {
    match command {
        XmlCommands::Format { input, indent } => {
            let text = read(input)?;
            print_text(json, "xml-formatter", formats::xml_format(&text, *indent)?)?;
        }
        XmlCommands::Minify { input } => {
            let text = read(input)?;
            print_text(json, "xml-minifier", formats::xml_minify(&text)?)?;
        }
    }
    Ok(())
}
