//! Dataset and configuration status command.

use anyhow::Result;
use console::style;

use roster_infra::filesystem::{WEB_DIR_ENV, config_path, resolve_web_dir};

use crate::state::AppState;

/// Display the status dashboard.
///
/// Shows character count, slug collisions, data directory and the effective
/// server configuration.
pub fn status(state: &AppState, json: bool) -> Result<()> {
    let count = state.character_service.count();
    let collisions = state.character_service.slug_collisions();
    let config = &state.config;
    let dataset = config
        .dataset_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "bundled".to_string());
    let web_dir = resolve_web_dir(config.web_dir.as_deref());

    if json {
        let collisions: Vec<_> = collisions
            .iter()
            .map(|c| serde_json::json!({ "slug": c.slug, "ids": c.ids }))
            .collect();
        let status = serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "data_dir": state.data_dir.display().to_string(),
            "config_file": config_path(&state.data_dir).display().to_string(),
            "dataset": dataset,
            "characters": count,
            "slug_collisions": collisions,
            "server": {
                "host": config.host,
                "port": config.port,
                "web_dir": web_dir.as_ref().map(|p| p.display().to_string()),
                "enable_otel": config.enable_otel,
            },
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Roster v{}",
        style("⚡").bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!();

    println!("  {}", style("── Dataset ──").dim());
    println!("  Source:     {}", style(&dataset).dim());
    println!("  Characters: {}", style(count).bold());
    if collisions.is_empty() {
        println!("  Collisions: {}", style("none").green());
    } else {
        println!("  Collisions: {}", style(collisions.len()).yellow());
        for c in &collisions {
            let ids: Vec<String> = c.ids.iter().map(|id| id.to_string()).collect();
            println!(
                "    {} {} (ids {})",
                style("!").yellow(),
                c.slug,
                ids.join(", ")
            );
        }
    }
    println!();

    println!("  {}", style("── Server ──").dim());
    println!("  Address: {}:{}", config.host, config.port);
    match &web_dir {
        Some(web_dir) => println!("  Web dir: {}", style(web_dir.display()).dim()),
        None => println!("  Web dir: {} (set web_dir or {WEB_DIR_ENV})", style("none").dim()),
    }
    println!(
        "  OTel:    {}",
        if config.enable_otel { "enabled" } else { "disabled" }
    );
    println!();

    println!("  {}", style("── System ──").dim());
    println!("  Data dir: {}", style(state.data_dir.display()).dim());
    println!(
        "  Config:   {}",
        style(config_path(&state.data_dir).display()).dim()
    );
    println!();

    Ok(())
}
