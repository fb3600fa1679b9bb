use crate::domain::dashboard::DEFAULT_DATASOURCE;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Datasource name stamped on every panel and template variable
    pub datasource: String,
    /// Directory the generated files are written into; must already exist
    pub output_dir: PathBuf,
    /// Log filter used when RUST_LOG is unset
    pub log_level: String,
}

impl Settings {
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

pub fn load_settings() -> anyhow::Result<Settings> {
    load_settings_from("config/generator")
}

/// Built-in defaults, overridden by the file at `name` when it exists.
pub fn load_settings_from(name: &str) -> anyhow::Result<Settings> {
    let settings = config::Config::builder()
        .set_default("datasource", DEFAULT_DATASOURCE)?
        .set_default("output_dir", "dashboards")?
        .set_default("log_level", "info")?
        .add_source(config::File::with_name(name).required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Collapse a query written over several lines into one: every line is
/// trimmed and the pieces are joined with single spaces.
pub fn compact_query(query: &str) -> String {
    query
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}
