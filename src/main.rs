// Main entry point - Builds every dashboard definition and writes it out
mod application;
mod domain;
mod error;
mod infrastructure;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::load_settings;
use crate::infrastructure::definitions::builtin_definitions;

fn main() -> anyhow::Result<()> {
    // Load configuration
    let settings = load_settings()?;

    // Initialize tracing; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .context("Invalid log_level setting")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let service = DashboardService::new(settings.datasource.clone());

    for definition in builtin_definitions()? {
        let path = settings.output_path(&definition.output);
        service
            .build(&definition)
            .save(&path)
            .with_context(|| format!("Failed to generate '{}'", definition.title))?;
    }

    Ok(())
}
