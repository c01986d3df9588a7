//! Text utilities: case conversion, statistics, slugs, line tools, lorem
//! ipsum and regex testing.

use crate::domain::errors::ToolError;
use crate::domain::models::{RegexMatch, TextStats};
use regex::RegexBuilder;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    Upper,
    Lower,
    Title,
    Sentence,
    Camel,
    Pascal,
    Snake,
    Kebab,
    Constant,
}

/// Splits identifiers and prose into words at separators and at
/// lower-to-upper (`fooBar`) and acronym (`HTTPServer`) boundaries.
pub fn split_words(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();
    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower) {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

fn sentence_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut capitalize_next = true;
    for c in text.chars() {
        if capitalize_next && c.is_alphabetic() {
            out.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            out.extend(c.to_lowercase());
        }
        if matches!(c, '.' | '!' | '?') {
            capitalize_next = true;
        }
    }
    out
}

pub fn convert_case(text: &str, case: Case) -> String {
    let lower_words = || -> Vec<String> {
        split_words(text).iter().map(|w| w.to_lowercase()).collect()
    };
    match case {
        Case::Upper => text.to_uppercase(),
        Case::Lower => text.to_lowercase(),
        Case::Title => title_case(text),
        Case::Sentence => sentence_case(text),
        Case::Camel => split_words(text)
            .iter()
            .enumerate()
            .map(|(i, w)| if i == 0 { w.to_lowercase() } else { capitalize(w) })
            .collect(),
        Case::Pascal => split_words(text).iter().map(|w| capitalize(w)).collect(),
        Case::Snake => lower_words().join("_"),
        Case::Kebab => lower_words().join("-"),
        Case::Constant => split_words(text)
            .iter()
            .map(|w| w.to_uppercase())
            .collect::<Vec<_>>()
            .join("_"),
    }
}

const WORDS_PER_MINUTE: f64 = 200.0;

pub fn stats(text: &str) -> TextStats {
    let words = text.split_whitespace().count();
    let sentences = text
        .split(['.', '!', '?'])
        .filter(|s| s.chars().any(char::is_alphanumeric))
        .count();
    let normalized = text.replace("\r\n", "\n");
    let paragraphs = normalized
        .split("\n\n")
        .filter(|p| !p.trim().is_empty())
        .count();
    TextStats {
        characters: text.chars().count(),
        characters_no_whitespace: text.chars().filter(|c| !c.is_whitespace()).count(),
        words,
        lines: text.lines().count(),
        sentences,
        paragraphs,
        bytes: text.len(),
        reading_minutes: (words as f64 / WORDS_PER_MINUTE * 100.0).round() / 100.0,
    }
}

pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

fn fold_accent(c: char) -> Option<&'static str> {
    Some(match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => "a",
        'æ' => "ae",
        'ç' => "c",
        'è' | 'é' | 'ê' | 'ë' => "e",
        'ì' | 'í' | 'î' | 'ï' => "i",
        'ñ' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => "o",
        'ù' | 'ú' | 'û' | 'ü' => "u",
        'ý' | 'ÿ' => "y",
        'ß' => "ss",
        _ => return None,
    })
}

pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.to_lowercase().chars() {
        let piece = if c.is_ascii_alphanumeric() {
            Some(c.to_string())
        } else {
            fold_accent(c).map(str::to_string)
        };
        match piece {
            Some(p) => {
                if pending_dash && !slug.is_empty() {
                    slug.push('-');
                }
                pending_dash = false;
                slug.push_str(&p);
            }
            None => pending_dash = true,
        }
    }
    slug
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LineOptions {
    pub trim: bool,
    pub remove_empty: bool,
    pub unique: bool,
    pub sort: bool,
    pub reverse: bool,
    pub ignore_case: bool,
}

/// Applies trim, empty-line removal, dedupe, sort and reverse, in that order.
pub fn process_lines(text: &str, opts: LineOptions) -> String {
    let key = |s: &str| {
        if opts.ignore_case {
            s.to_lowercase()
        } else {
            s.to_string()
        }
    };
    let mut lines: Vec<String> = text
        .lines()
        .map(|l| if opts.trim { l.trim().to_string() } else { l.to_string() })
        .collect();
    if opts.remove_empty {
        lines.retain(|l| !l.trim().is_empty());
    }
    if opts.unique {
        let mut seen = std::collections::HashSet::new();
        lines.retain(|l| seen.insert(key(l)));
    }
    if opts.sort {
        lines.sort_by_key(|l| key(l));
    }
    if opts.reverse {
        lines.reverse();
    }
    lines.join("\n")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LoremUnit {
    Words,
    Sentences,
    Paragraphs,
}

const LOREM: &str = "lorem ipsum dolor sit amet consectetur adipiscing elit sed do eiusmod \
tempor incididunt ut labore et dolore magna aliqua ut enim ad minim veniam quis nostrud \
exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat duis aute irure dolor in \
reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur excepteur sint \
occaecat cupidatat non proident sunt in culpa qui officia deserunt mollit anim id est laborum";

const WORDS_PER_SENTENCE: usize = 8;
const SENTENCES_PER_PARAGRAPH: usize = 4;
pub const MAX_LOREM_COUNT: usize = 1000;

fn sentence(words: &mut impl Iterator<Item = &'static str>, len: usize) -> String {
    let body: Vec<&str> = words.take(len).collect();
    format!("{}.", capitalize(&body.join(" ")))
}

pub fn lorem(unit: LoremUnit, count: usize) -> Result<String, ToolError> {
    if count == 0 || count > MAX_LOREM_COUNT {
        return Err(ToolError::InvalidArgument(format!(
            "count must be between 1 and {}",
            MAX_LOREM_COUNT
        )));
    }
    let mut words = LOREM.split(' ').cycle();
    Ok(match unit {
        LoremUnit::Words => sentence(&mut words, count),
        LoremUnit::Sentences => (0..count)
            .map(|_| sentence(&mut words, WORDS_PER_SENTENCE))
            .collect::<Vec<_>>()
            .join(" "),
        LoremUnit::Paragraphs => (0..count)
            .map(|_| {
                (0..SENTENCES_PER_PARAGRAPH)
                    .map(|_| sentence(&mut words, WORDS_PER_SENTENCE))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n\n"),
    })
}

pub fn regex_matches(
    pattern: &str,
    text: &str,
    case_insensitive: bool,
) -> Result<Vec<RegexMatch>, ToolError> {
    let re = RegexBuilder::new(pattern)
        .case_insensitive(case_insensitive)
        .build()?;
    Ok(re
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(RegexMatch {
                start: whole.start(),
                end: whole.end(),
                text: whole.as_str().to_string(),
                groups: caps
                    .iter()
                    .skip(1)
                    .map(|g| g.map(|m| m.as_str().to_string()))
                    .collect(),
            })
        })
        .collect())
}
