use crate::cli::{ConfigCommands, ToolsCommands};
use crate::domain::catalog::{self, Category};
use crate::domain::errors::ToolError;
use crate::domain::models::{CategorySummary, Config};
use crate::services::config::resolve_config_path;
use crate::services::output::{print_one, print_out};
use crate::services::server;
use std::path::Path;

pub fn handle_tools_commands(json: bool, command: &ToolsCommands) -> anyhow::Result<()> {
    match command {
        ToolsCommands::List { category } => {
            let tools = match category {
                Some(c) => catalog::by_category(*c),
                None => catalog::all_tools().iter().collect(),
            };
            print_out(json, &tools, |t| {
                format!("{}\t{}\t{}", t.category.label(), t.id, t.description)
            })?;
        }
        ToolsCommands::Search { query } => {
            let tools = catalog::search(query);
            print_out(json, &tools, |t| format!("{}\t{}", t.id, t.description))?;
        }
        ToolsCommands::Show { id } => {
            let tool = catalog::find(id).ok_or_else(|| ToolError::ToolNotFound(id.clone()))?;
            print_one(json, tool, |t| {
                format!(
                    "id: {}\nname: {}\ncategory: {}\ndescription: {}\ncommand: {}",
                    t.id,
                    t.name,
                    t.category.label(),
                    t.description,
                    t.command
                )
            })?;
        }
        ToolsCommands::Categories => {
            let summary: Vec<CategorySummary> = Category::ALL
                .into_iter()
                .map(|c| CategorySummary {
                    category: c,
                    label: c.label().to_string(),
                    tool_count: catalog::by_category(c).len(),
                })
                .collect();
            print_out(json, &summary, |s| format!("{}\t{}", s.label, s.tool_count))?;
        }
    }
    Ok(())
}

pub fn handle_config_commands(
    json: bool,
    command: &ConfigCommands,
    explicit: Option<&Path>,
    config: &Config,
) -> anyhow::Result<()> {
    match command {
        ConfigCommands::Show => {
            if json {
                print_one(json, config, |_| String::new())?;
            } else {
                print!("{}", toml::to_string_pretty(config)?);
            }
        }
        ConfigCommands::Path => {
            let path = resolve_config_path(explicit)?;
            print_one(json, path.to_string_lossy().to_string(), |p| p.clone())?;
        }
    }
    Ok(())
}

pub fn handle_serve(
    json: bool,
    host: Option<&str>,
    port: Option<u16>,
    config: &Config,
) -> anyhow::Result<()> {
    if json {
        anyhow::bail!("serve does not support --json");
    }
    let host = host.unwrap_or(&config.server.host);
    let port = port.unwrap_or(config.server.port);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(server::serve(host, port))
}
