//! Output format selection by file suffix.

use std::path::Path;

use crate::error::{Error, Result};

/// Serialization format of an export file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
}

/// Recognized suffixes, matched case-insensitively.
const EXTENSIONS: [(&str, ExportFormat); 3] = [
    ("json", ExportFormat::Json),
    ("yaml", ExportFormat::Yaml),
    ("yml", ExportFormat::Yaml),
];

impl ExportFormat {
    /// Pick the format for a destination path.
    ///
    /// Fails with [`Error::Config`] for unknown suffixes, so callers can
    /// reject the path before doing any remote work.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_lowercase());

        EXTENSIONS
            .iter()
            .find(|(suffix, _)| ext.as_deref() == Some(*suffix))
            .map(|(_, format)| *format)
            .ok_or_else(|| {
                Error::config(format!(
                    "unsupported output format for {}. Must be one of {}",
                    path.display(),
                    supported_extensions()
                ))
            })
    }
}

/// Human-readable list of supported suffixes.
pub fn supported_extensions() -> String {
    EXTENSIONS
        .iter()
        .map(|(suffix, _)| format!(".{suffix}"))
        .collect::<Vec<_>>()
        .join(", ")
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Yaml => f.write_str("yaml"),
        }
    }
}
