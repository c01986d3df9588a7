use crate::cli::{GenerateCommands, InputArgs, TextCommands};
use crate::domain::models::Config;
use crate::services::generators::{self, PasswordOptions};
use crate::services::input::read_input;
use crate::services::output::{print_one, print_out, print_text};
use crate::services::text::{self, LineOptions};

fn read(input: &InputArgs) -> anyhow::Result<String> {
    read_input(input.input.as_deref(), input.file.as_ref())
}

/// Drops the single trailing newline a shell pipe adds.
fn strip_newline(mut s: String) -> String {
    if s.ends_with('\n') {
        s.pop();
        if s.ends_with('\r') {
            s.pop();
        }
    }
    s
}

pub fn handle_text_commands(json: bool, command: &TextCommands) -> anyhow::Result<()> {
    match command {
        TextCommands::Case { input, to } => {
            let t = strip_newline(read(input)?);
            print_text(json, "case-converter", text::convert_case(&t, *to))?;
        }
        TextCommands::Stats { input } => {
            let t = read(input)?;
            print_one(json, text::stats(&t), |s| {
                format!(
                    "characters\t{}\nwords\t{}\nlines\t{}\nsentences\t{}\nparagraphs\t{}\nreading minutes\t{}",
                    s.characters, s.words, s.lines, s.sentences, s.paragraphs, s.reading_minutes
                )
            })?;
        }
        TextCommands::Reverse { input } => {
            let t = strip_newline(read(input)?);
            print_text(json, "text-reverser", text::reverse(&t))?;
        }
        TextCommands::Slug { input } => {
            let t = read(input)?;
            print_text(json, "slug-generator", text::slugify(&t))?;
        }
        TextCommands::Lines {
            input,
            trim,
            remove_empty,
            unique,
            sort,
            reverse,
            ignore_case,
        } => {
            let t = read(input)?;
            let opts = LineOptions {
                trim: *trim,
                remove_empty: *remove_empty,
                unique: *unique,
                sort: *sort,
                reverse: *reverse,
                ignore_case: *ignore_case,
            };
            print_text(json, "line-tools", text::process_lines(&t, opts))?;
        }
        TextCommands::Lorem { unit, count } => {
            print_text(json, "lorem-ipsum", text::lorem(*unit, *count)?)?;
        }
        TextCommands::Regex {
            input,
            pattern,
            ignore_case,
        } => {
            let t = read(input)?;
            let found = text::regex_matches(pattern, &t, *ignore_case)?;
            print_out(json, &found, |m| format!("{}..{}\t{}", m.start, m.end, m.text))?;
        }
    }
    Ok(())
}

pub fn handle_generate_commands(
    json: bool,
    command: &GenerateCommands,
    config: &Config,
) -> anyhow::Result<()> {
    match command {
        GenerateCommands::Uuid { count } => {
            let ids = generators::uuids(*count)?;
            print_out(json, &ids, |id| id.clone())?;
        }
        GenerateCommands::Password {
            length,
            no_lowercase,
            no_uppercase,
            no_digits,
            no_symbols,
            exclude_ambiguous,
        } => {
            let opts = PasswordOptions {
                length: length.unwrap_or(config.defaults.password_length),
                lowercase: !no_lowercase,
                uppercase: !no_uppercase,
                digits: !no_digits,
                symbols: !no_symbols,
                exclude_ambiguous: *exclude_ambiguous,
            };
            print_text(json, "password-generator", generators::password(&opts)?)?;
        }
        GenerateCommands::Number { min, max, count } => {
            let values = generators::random_integers(*min, *max, *count)?;
            print_out(json, &values, |v| v.to_string())?;
        }
    }
    Ok(())
}
