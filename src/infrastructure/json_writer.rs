// JSON output for generated dashboards
use crate::error::GeneratorError;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Render `document` as 2-space indented JSON with every object's keys in
/// lexicographic order. Non-ASCII text is written as-is.
pub fn render_sorted<T: Serialize>(document: &T) -> Result<String, GeneratorError> {
    // Going through Value re-keys every object into serde_json's sorted Map.
    let value = serde_json::to_value(document)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Write `contents` to `path`, replacing whatever is there.
pub fn write_document(path: &Path, contents: &str) -> Result<(), GeneratorError> {
    let write_err = |source| GeneratorError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(write_err)?;
    file.write_all(contents.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)?;
    Ok(())
}
