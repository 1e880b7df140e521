//! Trackdat CLI
//!
//! Compiles CSV design files into the generated-site artifacts.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

/// Trackdat - design-file to site-artifact compiler
#[derive(Parser)]
#[command(name = "trackdat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a design file without generating anything
    Validate {
        /// Path to the CSV design file
        design: String,

        /// Enable GIS mode (extends the type vocabulary with spatial types)
        #[arg(long)]
        gis: bool,

        /// Print the compiled schema as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compile a design file and write the generated artifacts
    Generate {
        /// Path to the CSV design file
        design: String,

        /// Site name; becomes the generated package identifier
        site_name: String,

        /// Enable GIS mode (extends the type vocabulary with spatial types)
        #[arg(long)]
        gis: bool,

        /// Output directory for the generated site tree
        #[arg(short, long, default_value = "tmp")]
        out: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    // Logs go to stderr so `validate --json` leaves stdout machine-readable
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Validate { design, gis, json } => {
            commands::validate::run(&design, gis, json)?;
        }
        Commands::Generate {
            design,
            site_name,
            gis,
            out,
        } => {
            commands::generate::run(&design, &site_name, gis, &out)?;
        }
    }

    Ok(())
}
