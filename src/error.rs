use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Failed to serialize dashboard: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to write dashboard to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid dashboard definition: {0}")]
    Definition(#[from] toml::de::Error),
}
