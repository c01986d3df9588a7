//! Data-format conversions: CSV, JSON, YAML, XML and Markdown.

use crate::domain::errors::ToolError;
use crate::domain::models::JsonValidation;
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use quick_xml::writer::Writer;
use serde::Serialize;
use serde_json::{Map, Value};

fn non_empty(text: &str) -> Result<&str, ToolError> {
    if text.trim().is_empty() {
        return Err(ToolError::EmptyInput);
    }
    Ok(text)
}

/// Serializes `value` with `indent` spaces per level; `0` means compact.
pub fn render_json(value: &Value, indent: usize) -> Result<String, ToolError> {
    if indent == 0 {
        return Ok(serde_json::to_string(value)?);
    }
    let pad = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(pad.as_bytes());
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|_| ToolError::NotUtf8)
}

/// Splits CSV text into records. Blank lines are skipped.
fn parse_csv(text: &str, delimiter: char) -> Result<Vec<Vec<String>>, ToolError> {
    let mut rows = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut quoted = false;
    let mut quoted_from = 0;
    let mut line = 1;
    let mut chars = text.trim_start_matches('\u{feff}').chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }
        match c {
            '"' if field.is_empty() => {
                in_quotes = true;
                quoted = true;
                quoted_from = line;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' | '\r' => {
                record.push(std::mem::take(&mut field));
                let blank = record.len() == 1 && record[0].is_empty() && !quoted;
                if !blank {
                    rows.push(std::mem::take(&mut record));
                }
                record.clear();
                quoted = false;
                line += 1;
            }
            c if c == delimiter => record.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(ToolError::CsvQuote(quoted_from));
    }
    if !field.is_empty() || !record.is_empty() || quoted {
        record.push(field);
        rows.push(record);
    }
    Ok(rows)
}

pub fn csv_to_records(text: &str, delimiter: char) -> Result<Vec<Value>, ToolError> {
    let mut rows = parse_csv(non_empty(text)?, delimiter)?.into_iter();
    let Some(header) = rows.next() else {
        return Err(ToolError::EmptyInput);
    };
    let header: Vec<String> = header.into_iter().map(|h| h.trim().to_string()).collect();
    for (i, name) in header.iter().enumerate() {
        if header[..i].contains(name) {
            return Err(ToolError::CsvDuplicateHeader(name.clone()));
        }
    }

    let mut out = Vec::new();
    for (i, row) in rows.enumerate() {
        if row.len() > header.len() {
            return Err(ToolError::CsvShape {
                row: i + 2,
                expected: header.len(),
                found: row.len(),
            });
        }
        let mut fields = row.into_iter();
        let mut obj = Map::new();
        for key in &header {
            let v = fields.next().unwrap_or_default();
            obj.insert(key.clone(), Value::String(v));
        }
        out.push(Value::Object(obj));
    }
    Ok(out)
}

pub fn csv_to_json(text: &str, delimiter: char, indent: usize) -> Result<String, ToolError> {
    let records = csv_to_records(text, delimiter)?;
    render_json(&Value::Array(records), indent)
}

fn csv_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn csv_escape(cell: &str, delimiter: char) -> String {
    if cell.contains(delimiter) || cell.contains('"') || cell.contains('\n') || cell.contains('\r')
    {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

pub fn json_to_csv(text: &str, delimiter: char) -> Result<String, ToolError> {
    let value: Value = serde_json::from_str(non_empty(text)?)?;
    let Value::Array(items) = value else {
        return Err(ToolError::NotRecordArray);
    };

    let mut header: Vec<String> = Vec::new();
    for item in &items {
        let Value::Object(obj) = item else {
            return Err(ToolError::NotRecordArray);
        };
        for key in obj.keys() {
            if !header.contains(key) {
                header.push(key.clone());
            }
        }
    }

    let sep = delimiter.to_string();
    let mut lines = Vec::with_capacity(items.len() + 1);
    lines.push(
        header
            .iter()
            .map(|h| csv_escape(h, delimiter))
            .collect::<Vec<_>>()
            .join(&sep),
    );
    for item in &items {
        let row: Vec<String> = header
            .iter()
            .map(|h| {
                let cell = item.get(h).map(csv_cell).unwrap_or_default();
                csv_escape(&cell, delimiter)
            })
            .collect();
        lines.push(row.join(&sep));
    }
    Ok(lines.join("\n"))
}

pub fn json_to_yaml(text: &str) -> Result<String, ToolError> {
    let value: Value = serde_json::from_str(non_empty(text)?)?;
    Ok(serde_yaml::to_string(&value)?)
}

pub fn yaml_to_json(text: &str, indent: usize) -> Result<String, ToolError> {
    let value: Value = serde_yaml::from_str(non_empty(text)?)?;
    render_json(&value, indent)
}

pub fn json_format(text: &str, indent: usize) -> Result<String, ToolError> {
    let value: Value = serde_json::from_str(non_empty(text)?)?;
    render_json(&value, indent.max(1))
}

pub fn json_minify(text: &str) -> Result<String, ToolError> {
    let value: Value = serde_json::from_str(non_empty(text)?)?;
    render_json(&value, 0)
}

pub fn json_validate(text: &str) -> JsonValidation {
    match serde_json::from_str::<Value>(text) {
        Ok(_) => JsonValidation {
            valid: true,
            error: None,
            line: None,
            column: None,
        },
        Err(e) => JsonValidation {
            valid: false,
            error: Some(e.to_string()),
            line: Some(e.line()),
            column: Some(e.column()),
        },
    }
}

fn rewrite_xml(text: &str, indent: usize) -> Result<String, ToolError> {
    let mut reader = Reader::from_str(non_empty(text)?);
    reader.config_mut().trim_text(true);
    let mut writer = if indent == 0 {
        Writer::new(Vec::new())
    } else {
        Writer::new_with_indent(Vec::new(), b' ', indent)
    };

    let mut depth: usize = 0;
    let mut elements = 0;
    let mut root_closed = false;
    loop {
        let event = match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(event) => event,
            Err(e) => {
                return Err(ToolError::Xml(format!(
                    "{} at byte {}",
                    e,
                    reader.error_position()
                )))
            }
        };
        match &event {
            Event::Start(_) | Event::Empty(_) if root_closed => {
                return Err(ToolError::Xml("more than one root element".to_string()));
            }
            Event::Text(t) if depth == 0 && !t.iter().all(u8::is_ascii_whitespace) => {
                return Err(ToolError::Xml("text outside the root element".to_string()));
            }
            Event::CData(_) | Event::GeneralRef(_) if depth == 0 => {
                return Err(ToolError::Xml("text outside the root element".to_string()));
            }
            Event::Start(_) => {
                depth += 1;
                elements += 1;
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                root_closed = depth == 0;
            }
            Event::Empty(_) => {
                elements += 1;
                root_closed = depth == 0;
            }
            _ => {}
        }
        writer
            .write_event(event)
            .map_err(|e| ToolError::Xml(e.to_string()))?;
    }

    if depth != 0 {
        return Err(ToolError::Xml("unclosed element at end of input".to_string()));
    }
    if elements == 0 {
        return Err(ToolError::Xml("no root element".to_string()));
    }
    String::from_utf8(writer.into_inner()).map_err(|_| ToolError::NotUtf8)
}

pub fn xml_format(text: &str, indent: usize) -> Result<String, ToolError> {
    rewrite_xml(text, indent.max(1))
}

pub fn xml_minify(text: &str) -> Result<String, ToolError> {
    rewrite_xml(text, 0)
}

pub fn markdown_to_html(text: &str) -> String {
    use pulldown_cmark::{html, Options, Parser};

    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    let parser = Parser::new_ext(text, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn csv_header_row_becomes_object_keys() {
        let records = csv_to_records("name,age\nada,36\ngrace,45\n", ',').unwrap();
        assert_eq!(
            Value::Array(records),
            json!([{"name": "ada", "age": "36"}, {"name": "grace", "age": "45"}])
        );
    }

    #[test]
    fn csv_missing_trailing_fields_are_empty_strings() {
        let records = csv_to_records("a,b,c\n1\n1,2\n", ',').unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], json!({"a": "1", "b": "", "c": ""}));
        assert_eq!(records[1], json!({"a": "1", "b": "2", "c": ""}));
    }

    #[test]
    fn csv_row_count_matches_object_count() {
        let text = "k\n1\n2\n3\n4\n5";
        assert_eq!(csv_to_records(text, ',').unwrap().len(), 5);
    }

    #[test]
    fn csv_handles_quotes_delimiters_and_crlf() {
        let text = "title,body\r\n\"Hello, world\",\"say \"\"hi\"\"\r\nagain\"\r\n";
        let records = csv_to_records(text, ',').unwrap();
        assert_eq!(
            records,
            vec![json!({"title": "Hello, world", "body": "say \"hi\"\r\nagain"})]
        );
    }

    #[test]
    fn csv_rejects_rows_longer_than_header() {
        let err = csv_to_records("a,b\n1,2,3\n", ',').unwrap_err();
        assert!(matches!(
            err,
            ToolError::CsvShape {
                row: 2,
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn csv_rejects_unterminated_quote() {
        let err = csv_to_records("a\n\"open\n", ',').unwrap_err();
        assert!(matches!(err, ToolError::CsvQuote(2)));
    }

    #[test]
    fn csv_keeps_quoted_empty_rows() {
        let records = csv_to_records("k\n\"\"\nx\n", ',').unwrap();
        assert_eq!(records, vec![json!({"k": ""}), json!({"k": "x"})]);
        let records = csv_to_records("k\n\n\"\"", ',').unwrap();
        assert_eq!(records, vec![json!({"k": ""})]);
    }

    #[test]
    fn csv_rejects_duplicate_headers() {
        let err = csv_to_records("a,b,a\n1,2,3\n", ',').unwrap_err();
        assert!(matches!(err, ToolError::CsvDuplicateHeader(ref h) if h == "a"));
    }

    #[test]
    fn csv_honours_custom_delimiter() {
        let records = csv_to_records("x;y\n1;2", ';').unwrap();
        assert_eq!(records, vec![json!({"x": "1", "y": "2"})]);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(csv_to_json("  \n", ',', 2), Err(ToolError::EmptyInput)));
        assert!(matches!(json_to_yaml(""), Err(ToolError::EmptyInput)));
    }

    #[test]
    fn json_to_csv_unions_keys_and_quotes_cells() {
        let text = r#"[{"a": 1, "b": "x,y"}, {"b": "q\"uote", "c": null, "a": true}]"#;
        let csv = json_to_csv(text, ',').unwrap();
        assert_eq!(csv, "a,b,c\n1,\"x,y\",\ntrue,\"q\"\"uote\",");
    }

    #[test]
    fn json_to_csv_rejects_non_record_input() {
        assert!(matches!(
            json_to_csv("{\"a\": 1}", ','),
            Err(ToolError::NotRecordArray)
        ));
        assert!(matches!(
            json_to_csv("[1, 2]", ','),
            Err(ToolError::NotRecordArray)
        ));
    }

    #[test]
    fn yaml_round_trip_preserves_json_values() {
        let original = json!({
            "name": "wtk",
            "tags": ["a", "b"],
            "count": 3,
            "ratio": 1.5,
            "nested": {"ok": true, "none": null}
        });
        let yaml = json_to_yaml(&original.to_string()).unwrap();
        let back: Value = serde_json::from_str(&yaml_to_json(&yaml, 2).unwrap()).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn yaml_parse_errors_surface() {
        assert!(matches!(yaml_to_json("a: [1, 2", 2), Err(ToolError::Yaml(_))));
    }

    #[test]
    fn json_format_and_minify() {
        assert_eq!(
            json_format("{\"a\":[1,2]}", 2).unwrap(),
            "{\n  \"a\": [\n    1,\n    2\n  ]\n}"
        );
        assert_eq!(json_format("{\"a\":1}", 4).unwrap(), "{\n    \"a\": 1\n}");
        assert_eq!(json_minify("{ \"a\" : [ 1 , 2 ] }").unwrap(), "{\"a\":[1,2]}");
    }

    #[test]
    fn json_validate_reports_position() {
        assert!(json_validate("[1, 2]").valid);
        let report = json_validate("{\n  \"a\": }");
        assert!(!report.valid);
        assert_eq!(report.line, Some(2));
        assert!(report.error.is_some());
    }

    #[test]
    fn xml_format_indents_nested_elements() {
        let out = xml_format("<root><item id=\"1\">one</item><empty/></root>", 2).unwrap();
        assert!(out.starts_with("<root>"));
        assert!(out.contains("\n  <item id=\"1\">one</item>"));
        assert!(out.contains("\n  <empty/>"));
        assert!(out.ends_with("</root>"));
    }

    #[test]
    fn xml_minify_drops_whitespace_between_elements() {
        let out = xml_minify("<a>\n  <b>x</b>\n</a>").unwrap();
        assert_eq!(out, "<a><b>x</b></a>");
    }

    #[test]
    fn xml_rejects_malformed_documents() {
        assert!(matches!(xml_format("<a><b></a>", 2), Err(ToolError::Xml(_))));
        assert!(matches!(xml_format("<a><b></b>", 2), Err(ToolError::Xml(_))));
        assert!(matches!(xml_format("just text", 2), Err(ToolError::Xml(_))));
        assert!(matches!(xml_format("<a/><b/>", 2), Err(ToolError::Xml(_))));
        assert!(matches!(xml_format("<a></a><b></b>", 2), Err(ToolError::Xml(_))));
        assert!(matches!(xml_format("<a/>junk", 2), Err(ToolError::Xml(_))));
        assert!(matches!(xml_minify("junk<a/>"), Err(ToolError::Xml(_))));
    }

    #[test]
    fn xml_allows_prolog_and_trailing_comments() {
        let out = xml_minify("<?xml version=\"1.0\"?>\n<a><b/></a>\n<!-- end -->\n").unwrap();
        assert!(out.contains("<a><b/></a>"));
    }

    #[test]
    fn markdown_renders_html() {
        let html = markdown_to_html("# Title\n\nsome *emphasis* and ~~strike~~");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<em>emphasis</em>"));
        assert!(html.contains("<del>strike</del>"));
    }
}
