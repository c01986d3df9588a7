use crate::cli::{CipherCommands, EncodeCommands, InputArgs};
use crate::domain::models::Config;
use crate::services::hashing::{self, HashAlgorithm};
use crate::services::input::read_input;
use crate::services::output::{print_out, print_text};
use crate::services::{cipher, encoding};
use tracing::debug;

fn read(input: &InputArgs) -> anyhow::Result<String> {
    read_input(input.input.as_deref(), input.file.as_ref())
}

pub fn handle_encode_commands(json: bool, command: &EncodeCommands) -> anyhow::Result<()> {
    match command {
        EncodeCommands::Base64 {
            input,
            decode,
            url_safe,
        } => {
            let text = read(input)?;
            let out = if *decode {
                encoding::base64_decode(text.trim(), *url_safe)?
            } else {
                encoding::base64_encode(&text, *url_safe)
            };
            print_text(json, "base64", out)?;
        }
        EncodeCommands::Url { input, decode } => {
            let text = read(input)?;
            let out = if *decode {
                encoding::url_decode(text.trim())?
            } else {
                encoding::url_encode(&text)
            };
            print_text(json, "url-encoder", out)?;
        }
        EncodeCommands::Html { input, decode } => {
            let text = read(input)?;
            let out = if *decode {
                encoding::html_unescape(&text)
            } else {
                encoding::html_escape(&text)
            };
            print_text(json, "html-entities", out)?;
        }
        EncodeCommands::Hex { input, decode } => {
            let text = read(input)?;
            let out = if *decode {
                encoding::hex_decode(&text)?
            } else {
                encoding::hex_encode(&text)
            };
            print_text(json, "hex-encoder", out)?;
        }
    }
    Ok(())
}

pub fn parse_algorithms(raw: &str) -> anyhow::Result<Vec<HashAlgorithm>> {
    if raw.trim().eq_ignore_ascii_case("all") {
        return Ok(HashAlgorithm::ALL.to_vec());
    }
    HashAlgorithm::parse(raw)
        .map(|a| vec![a])
        .ok_or_else(|| anyhow::anyhow!("unsupported hash algorithm: {}", raw))
}

pub fn handle_hash(
    json: bool,
    input: &InputArgs,
    algorithm: Option<&str>,
    config: &Config,
) -> anyhow::Result<()> {
    let algorithms = parse_algorithms(algorithm.unwrap_or(&config.defaults.hash_algorithm))?;
    let text = read(input)?;
    debug!(tool = "hash-generator", count = algorithms.len(), bytes = text.len());
    let reports: Vec<_> = algorithms
        .into_iter()
        .map(|a| hashing::digest(a, text.as_bytes()))
        .collect();
    let single = reports.len() == 1;
    print_out(json, &reports, |r| {
        if single {
            r.digest.clone()
        } else {
            format!("{}\t{}", r.algorithm, r.digest)
        }
    })
}

pub fn handle_cipher_commands(json: bool, command: &CipherCommands) -> anyhow::Result<()> {
    match command {
        CipherCommands::Caesar {
            input,
            shift,
            decode,
        } => {
            let text = read(input)?;
            print_text(json, "caesar-cipher", cipher::caesar(&text, *shift, *decode))?;
        }
        CipherCommands::Rot13 { input } => {
            let text = read(input)?;
            print_text(json, "rot13", cipher::rot13(&text))?;
        }
    }
    Ok(())
}
