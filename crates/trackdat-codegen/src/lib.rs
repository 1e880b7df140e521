//! Trackdat Artifact Emission
//!
//! This crate turns a validated [`Design`] into the textual artifacts the
//! external scaffolding consumes: the administrative-interface descriptor,
//! the persistence-model descriptor, and the API descriptor, plus the two
//! snapshot-manager companions.
//!
//! # Pipeline Overview
//!
//! ```text
//! ┌─────────┐     ┌─────────┐     ┌──────────────────┐
//! │ Design  │────▶│ Render  │────▶│ admin / models /  │
//! │ (CSV)   │     │ (types) │     │ api descriptors   │
//! └─────────┘     └─────────┘     └──────────────────┘
//! ```
//!
//! All artifacts are computed fully in memory before any I/O happens;
//! emission is deterministic over the relation list.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod admin;
pub mod api;
pub mod models;
pub mod pylit;
pub mod render;
pub mod snapshot;

use trackdat_core::Design;

/// Version stamp written into every generated artifact header
pub(crate) const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The complete set of generated artifacts for one design
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    /// Administrative-interface descriptor (admin.py)
    pub admin: String,
    /// Persistence-model descriptor (models.py)
    pub models: String,
    /// API descriptor (api.py)
    pub api: String,
    /// Snapshot-manager model companion
    pub snapshot_models: String,
    /// Snapshot-manager admin companion
    pub snapshot_admin: String,
}

/// Emits all artifacts for a validated design
#[derive(Debug, Clone)]
pub struct Generator {
    site_name: String,
    gis_mode: bool,
}

impl Generator {
    /// Create a generator for the given site name and GIS mode
    pub fn new(site_name: impl Into<String>, gis_mode: bool) -> Self {
        Self {
            site_name: site_name.into(),
            gis_mode,
        }
    }

    /// Emit every artifact. Each emitter is an independent read-only pass
    /// over the same relation list.
    pub fn generate(&self, design: &Design) -> Artifacts {
        tracing::info!(
            relations = design.relations.len(),
            gis_mode = self.gis_mode,
            "generating artifacts for site '{}'",
            self.site_name
        );

        Artifacts {
            admin: admin::create_admin(design, &self.site_name),
            models: models::create_models(design, self.gis_mode),
            api: api::create_api(design, &self.site_name, self.gis_mode),
            snapshot_models: snapshot::snapshot_models(&self.site_name),
            snapshot_admin: snapshot::snapshot_admin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trackdat_core::Parser;

    const DESIGN: &str = "\
specimens,,,,,,
Specimen ID,specimen_id,auto key,,,,Unique key
Species,species,text,false,,,Species name,127
";

    #[test]
    fn generator_emits_all_artifacts() {
        let parsed = Parser::new(false).parse_reader(DESIGN.as_bytes()).unwrap();
        let artifacts = Generator::new("my_site", false).generate(&parsed.design);

        assert!(artifacts.admin.contains("SpecimensAdmin"));
        assert!(artifacts.models.contains("class Specimens(models.Model):"));
        assert!(artifacts.api.contains("SpecimensSerializer"));
        assert!(artifacts.snapshot_models.contains("class Snapshot(models.Model):"));
        assert!(artifacts.snapshot_admin.contains("SnapshotAdmin"));
    }

    #[test]
    fn generation_is_deterministic() {
        let parsed = Parser::new(false).parse_reader(DESIGN.as_bytes()).unwrap();
        let generator = Generator::new("my_site", false);
        assert_eq!(
            generator.generate(&parsed.design),
            generator.generate(&parsed.design)
        );
    }
}
