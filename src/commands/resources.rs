use std::path::PathBuf;

use anyhow::Result;
use booking_core::config::BookingConfig;
use owo_colors::OwoColorize;

use crate::render::Render;

use super::load_data;

pub fn run(data: Option<PathBuf>) -> Result<()> {
    let config = BookingConfig::load()?;
    let data = load_data(&config, data.as_deref())?;
    let selection = config.default_selection();

    println!("{}", format!("Resources ({} selected)", selection.len()).bold());
    if data.resources.is_empty() {
        println!("  {}", "No resources".dimmed());
    }
    for resource in &data.resources {
        let marker = if selection.contains(&resource.id) { "[x]" } else { "[ ]" };
        println!("  {} {} {}", marker, resource.render(), resource.id.dimmed());
    }

    println!();
    println!("{}", "Locations".bold());
    if data.locations.is_empty() {
        println!("  {}", "No locations".dimmed());
    }
    for location in &data.locations {
        println!("  {}", location.render());
    }

    Ok(())
}
