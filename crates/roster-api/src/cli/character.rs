//! Character commands: list, show, avatar.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use roster_core::character::avatar::render_avatar_svg;
use roster_types::character::{CharacterDetail, CharacterList};

use crate::state::AppState;

/// List all characters in dataset order.
pub fn list_characters(state: &AppState, json: bool) -> Result<()> {
    let characters = state.character_service.resolve_all();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&CharacterList { characters })?
        );
        return Ok(());
    }

    if characters.is_empty() {
        println!();
        println!(
            "  {} No characters in the dataset.",
            style("i").blue().bold()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("ID").fg(Color::White),
        Cell::new("Name").fg(Color::White),
        Cell::new("Slug").fg(Color::White),
        Cell::new("Species").fg(Color::White),
        Cell::new("Occupation").fg(Color::White),
    ]);

    for c in &characters {
        table.add_row(vec![
            Cell::new(c.id).fg(Color::DarkGrey),
            Cell::new(&c.name.full).fg(Color::Cyan),
            Cell::new(&c.slug).fg(Color::White),
            Cell::new(&c.species),
            Cell::new(truncate(&c.occupation, 40)),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} character{}",
        style(characters.len()).bold(),
        if characters.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}

/// Show one character with a fresh quote sample.
pub fn show_character(state: &AppState, slug: &str, json: bool) -> Result<()> {
    let character = state.character_service.resolve_by_slug(slug)?;
    let detail = CharacterDetail::from(character);

    if json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
        return Ok(());
    }

    let c = &detail.character;

    println!();
    println!("  {}", style(&c.name.full).cyan().bold());
    println!("  {}", style(&c.description).dim());
    println!();

    println!("  {}", style("── Details ──").dim());
    println!("  {}          {}", style("ID:").bold(), c.id);
    println!("  {}        {}", style("Slug:").bold(), c.slug);
    println!("  {}      {}", style("Gender:").bold(), c.gender);
    println!("  {}     {}", style("Species:").bold(), c.species);
    println!("  {} {}", style("Home planet:").bold(), c.home_planet);
    println!("  {}  {}", style("Occupation:").bold(), c.occupation);
    println!("  {}         {}", style("Age:").bold(), c.age);
    println!("  {}      {}", style("Avatar:").bold(), style(&c.avatar).dim());
    println!();

    println!("  {}", style("── Skills ──").dim());
    for skill in &c.skills {
        println!("  {} {}", style("•").green(), skill);
    }
    println!();

    println!("  {}", style("── Quotes ──").dim());
    for q in &detail.quotes {
        println!("  {}", style(format!("\"{}\"", q.quote)).italic());
    }
    println!();

    Ok(())
}

/// Print the placeholder avatar SVG to stdout.
pub fn print_avatar(slug: &str, color: Option<&str>) {
    println!("{}", render_avatar_svg(slug, color));
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let head: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{head}...")
    } else {
        s.to_string()
    }
}
