// Dashboard definitions compiled into the binary
use crate::domain::panel::DEFAULT_Y_FORMAT;
use crate::error::GeneratorError;
use serde::Deserialize;

const DNSDIST: &str = include_str!("../../config/dashboards/dnsdist.toml");

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardDefinition {
    pub title: String,
    /// File name of the generated document inside the output directory
    pub output: String,
    #[serde(default)]
    pub variables: Vec<VariableDefinition>,
    #[serde(default)]
    pub rows: Vec<RowDefinition>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct VariableDefinition {
    pub name: String,
    pub label: String,
    pub query: String,
    #[serde(default)]
    pub regex: String,
    #[serde(default)]
    pub multi: bool,
    #[serde(default)]
    pub include_all: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RowDefinition {
    pub title: String,
    pub targets: Vec<String>,
    #[serde(default)]
    pub collapse: bool,
    #[serde(default)]
    pub stack: bool,
    #[serde(default = "default_y_min")]
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
    #[serde(default = "default_y_format")]
    pub y_format: String,
}

fn default_y_min() -> Option<f64> {
    Some(0.0)
}

fn default_y_format() -> String {
    DEFAULT_Y_FORMAT.to_string()
}

pub fn parse_definition(source: &str) -> Result<DashboardDefinition, GeneratorError> {
    Ok(toml::from_str(source)?)
}

/// Every dashboard this binary generates, in output order.
pub fn builtin_definitions() -> Result<Vec<DashboardDefinition>, GeneratorError> {
    Ok(vec![parse_definition(DNSDIST)?])
}
