// Infrastructure layer - Configuration, definitions and file output
pub mod config;
pub mod definitions;
pub mod json_writer;
