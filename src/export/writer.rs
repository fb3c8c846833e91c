//! Deterministic encoding and atomic file output.
//!
//! Mappings keep their keys sorted, so both encoders emit keys in sorted
//! order. Non-ASCII text is written as-is.

use std::path::{Path, PathBuf};

use serde_json::Value;

use super::ExportFormat;
use crate::error::{Error, Result, ResultExt};
use crate::model::Mapping;

/// Encode a mapping in the given format.
pub fn encode(subjects: &Mapping, format: ExportFormat) -> Result<Vec<u8>> {
    let value = Value::Object(subjects.clone());
    let bytes = match format {
        ExportFormat::Json => {
            let mut bytes = serde_json::to_vec_pretty(&value)?;
            bytes.push(b'\n');
            bytes
        }
        ExportFormat::Yaml => serde_yaml::to_string(&value)?.into_bytes(),
    };
    Ok(bytes)
}

/// Decode a mapping from bytes in the given format.
pub fn decode(bytes: &[u8], format: ExportFormat) -> Result<Value> {
    let value = match format {
        ExportFormat::Json => serde_json::from_slice(bytes)?,
        ExportFormat::Yaml => serde_yaml::from_slice(bytes)?,
    };
    Ok(value)
}

/// Encode and write to `path`, replacing any existing content.
///
/// Bytes go to a sibling temp file which is then renamed over `path`.
pub fn write(path: &Path, subjects: &Mapping, format: ExportFormat) -> Result<()> {
    let bytes = encode(subjects, format)?;

    let temp_path = temp_path(path);
    std::fs::write(&temp_path, &bytes)
        .with_context(format!("Failed to write {}", temp_path.display()))?;
    if let Err(e) = std::fs::rename(&temp_path, path) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(Error::Io(e).context(format!(
            "Failed to rename {} to {}",
            temp_path.display(),
            path.display()
        )));
    }

    tracing::debug!("Wrote {} bytes to {:?}", bytes.len(), path);
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
