//! Generate site artifacts command
//!
//! Compute everything in memory first, then write; a fatal compile error
//! leaves no partial output on disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use trackdat_codegen::Generator;
use trackdat_core::{ident, Advisory, Parser};

/// Run the generate command
pub fn run(design_path: &str, site_name_raw: &str, gis_mode: bool, out: &str) -> Result<()> {
    let site = ident::site_ident(site_name_raw).context("Invalid site name")?;
    if site.altered {
        tracing::warn!(
            "{}",
            Advisory::SiteNameSanitized {
                raw: site_name_raw.trim().to_string(),
                sanitized: site.name.clone(),
            }
        );
    }

    tracing::info!("Validating design file: {}", design_path);
    let parsed = Parser::new(gis_mode)
        .parse_file(design_path)
        .context("Failed to compile design file")?;

    for advisory in &parsed.advisories {
        tracing::warn!("{advisory}");
    }

    let artifacts = Generator::new(&site.name, gis_mode).generate(&parsed.design);

    let site_dir = Path::new(out).join(&site.name);
    let core_dir = site_dir.join("core");
    let snapshot_dir = site_dir.join("snapshot_manager");
    fs::create_dir_all(&core_dir)
        .with_context(|| format!("Failed to create {}", core_dir.display()))?;
    fs::create_dir_all(&snapshot_dir)
        .with_context(|| format!("Failed to create {}", snapshot_dir.display()))?;

    fs::write(core_dir.join("admin.py"), &artifacts.admin)?;
    fs::write(core_dir.join("models.py"), &artifacts.models)?;
    fs::write(core_dir.join("api.py"), &artifacts.api)?;
    fs::write(snapshot_dir.join("models.py"), &artifacts.snapshot_models)?;
    fs::write(snapshot_dir.join("admin.py"), &artifacts.snapshot_admin)?;

    tracing::info!(
        "✓ Generated {} relations into {}",
        parsed.design.relations.len(),
        site_dir.display()
    );
    Ok(())
}
