//! Service layer containing tool logic and side-effect helpers.
//!
//! ## Service map
//! - `formats.rs` — CSV/JSON/YAML/XML/Markdown conversion.
//! - `encoding.rs` — base64, percent, HTML entity and hex encodings.
//! - `hashing.rs` — MD5 and SHA-2 digests.
//! - `cipher.rs` — caesar and rot13.
//! - `numbers.rs` — radix and roman numeral conversion.
//! - `units.rs` — unit conversion tables.
//! - `calculators.rs` — BMI, percent, loan, age, date difference.
//! - `text.rs` — case, stats, slug, lines, lorem, regex.
//! - `generators.rs` — UUIDs, passwords, random integers.
//! - `datetime.rs` — unix timestamp conversion.
//! - `color.rs` — HEX/RGB/HSL.
//! - `developer.rs` — JWT decode, URL parse.
//! - `network.rs` — URL status check (blocking HTTP).
//! - `server.rs` — `/api/health` and `/api/tools`.
//! - `config.rs` — config file loading.
//! - `input.rs` — INPUT / --file / stdin resolution.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Tool functions are pure and return `Result<_, ToolError>`.
//! - Side effects (stdin, files, network, sockets) stay in `input`, `config`,
//!   `network` and `server`.
//! - Keep command handlers thin; delegate to services.

pub mod calculators;
pub mod cipher;
pub mod color;
pub mod config;
pub mod datetime;
pub mod developer;
pub mod encoding;
pub mod formats;
pub mod generators;
pub mod hashing;
pub mod input;
pub mod network;
pub mod numbers;
pub mod output;
pub mod server;
pub mod text;
pub mod units;
