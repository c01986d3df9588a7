//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `catalog.rs` — tools/config/serve.
//! - `data.rs` — convert/json/xml.
//! - `codec.rs` — encode/hash/cipher.
//! - `compute.rs` — number/unit/calc/time/color.
//! - `text.rs` — text/generate.
//! - `web.rs` — jwt/url.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate tool logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod catalog;
pub mod codec;
pub mod compute;
pub mod data;
pub mod text;
pub mod web;

use crate::cli::{Cli, Commands};
use crate::domain::models::Config;

pub fn dispatch(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    let json = cli.json;
    match &cli.command {
        Commands::Tools { command } => catalog::handle_tools_commands(json, command),
        Commands::Config { command } => {
            catalog::handle_config_commands(json, command, cli.config.as_deref(), config)
        }
        Commands::Serve { host, port } => {
            catalog::handle_serve(json, host.as_deref(), *port, config)
        }
        Commands::Convert { command } => data::handle_convert_commands(json, command, config),
        Commands::Json { command } => data::handle_json_commands(json, command, config),
        Commands::Xml { command } => data::handle_xml_commands(json, command),
        Commands::Encode { command } => codec::handle_encode_commands(json, command),
        Commands::Hash { input, algorithm } => {
            codec::handle_hash(json, input, algorithm.as_deref(), config)
        }
        Commands::Cipher { command } => codec::handle_cipher_commands(json, command),
        Commands::Number { command } => compute::handle_number_commands(json, command),
        Commands::Unit { command } => compute::handle_unit_commands(json, command),
        Commands::Calc { command } => compute::handle_calc_commands(json, command),
        Commands::Time { command } => compute::handle_time_commands(json, command),
        Commands::Color { value } => compute::handle_color(json, value),
        Commands::Text { command } => text::handle_text_commands(json, command),
        Commands::Generate { command } => text::handle_generate_commands(json, command, config),
        Commands::Jwt { command } => web::handle_jwt_commands(json, command),
        Commands::Url { command } => web::handle_url_commands(json, command, config),
    }
}
