use crate::cli::{JwtCommands, UrlCommands};
use crate::domain::models::Config;
use crate::services::output::print_one;
use crate::services::{developer, network};

pub fn handle_jwt_commands(json: bool, command: &JwtCommands) -> anyhow::Result<()> {
    match command {
        JwtCommands::Decode { token } => {
            let report = developer::jwt_decode(token)?;
            if json {
                print_one(json, report, |_| String::new())?;
            } else {
                println!("header:\n{}", serde_json::to_string_pretty(&report.header)?);
                println!("payload:\n{}", serde_json::to_string_pretty(&report.payload)?);
                println!("signature: {}", report.signature);
            }
        }
    }
    Ok(())
}

pub fn handle_url_commands(
    json: bool,
    command: &UrlCommands,
    config: &Config,
) -> anyhow::Result<()> {
    match command {
        UrlCommands::Parse { url } => {
            let parts = developer::url_parse(url)?;
            print_one(json, parts, |p| {
                let mut lines = vec![
                    format!("scheme\t{}", p.scheme),
                    format!("host\t{}", p.host.as_deref().unwrap_or("")),
                    format!("port\t{}", p.port.map(|n| n.to_string()).unwrap_or_default()),
                    format!("path\t{}", p.path),
                ];
                for (k, v) in &p.query_pairs {
                    lines.push(format!("query\t{}={}", k, v));
                }
                if let Some(f) = &p.fragment {
                    lines.push(format!("fragment\t{}", f));
                }
                lines.join("\n")
            })?;
        }
        UrlCommands::Check { url, timeout_ms } => {
            let status = network::check_url(url, timeout_ms.unwrap_or(config.network.timeout_ms))?;
            print_one(json, status, |s| {
                format!("{} {}\t{} ms\t{}", s.status, s.reason, s.elapsed_ms, s.final_url)
            })?;
        }
    }
    Ok(())
}
