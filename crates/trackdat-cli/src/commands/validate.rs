//! Validate a design file command

use anyhow::{Context, Result};
use trackdat_core::Parser;

/// Run the validate command
pub fn run(design_path: &str, gis_mode: bool, json: bool) -> Result<()> {
    tracing::info!("Validating design file: {}", design_path);
    if gis_mode {
        tracing::info!("GIS mode enabled");
    }

    let parsed = Parser::new(gis_mode)
        .parse_file(design_path)
        .context("Failed to compile design file")?;

    for advisory in &parsed.advisories {
        tracing::warn!("{advisory}");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&parsed.design)?);
        return Ok(());
    }

    for relation in &parsed.design.relations {
        tracing::info!(
            "✓ {} ({} fields, id type: {:?})",
            relation.name,
            relation.fields.len(),
            relation.id_type
        );
    }

    tracing::info!(
        "✓ Design file is valid ({} relations, {} advisories)",
        parsed.design.relations.len(),
        parsed.advisories.len()
    );
    Ok(())
}
