//! Export command.

use std::path::Path;
use tokio::runtime::Runtime;

use crate::config::Config;
use crate::error::Error;
use crate::remote::{ExportConfig, ExportRequest, YandexClient, export_to_file};
use crate::subject::{SortBy, SubjectKind};

/// Fetch liked music and write it to `output`
pub fn cmd_export(
    rt: &Runtime,
    config: &Config,
    token: Option<&str>,
    subjects: &[SubjectKind],
    output: &Path,
    sort: Option<SortBy>,
    cover_size: Option<&str>,
) -> anyhow::Result<()> {
    let request = ExportRequest {
        output: output.to_path_buf(),
        subjects: subjects.to_vec(),
        sort: sort.unwrap_or(config.export.sort),
    };
    // Reject bad paths and selections before any network traffic
    request.validate()?;

    let token = resolve_token(token, config)?;
    let client =
        YandexClient::new(&token).map_err(|e| Error::remote("creating client", 0, e))?;
    let export_config = ExportConfig {
        cover_size: cover_size
            .map(str::to_string)
            .unwrap_or_else(|| config.export.cover_size.clone()),
    };

    let subjects = rt.block_on(export_to_file(client, export_config, &request))?;

    println!("Exported to {:?}:", request.output);
    for (kind, n) in subjects.counts() {
        if n > 0 {
            println!("  {}", kind.count(n));
        }
    }
    Ok(())
}

/// Token from the command line or environment first, then from the config file.
fn resolve_token(token: Option<&str>, config: &Config) -> crate::error::Result<String> {
    token
        .or(config.credentials.ym_token.as_deref())
        .filter(|t| !t.trim().is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            Error::config("no access token: pass --token, set YM_TOKEN or run `configure --token`")
        })
}
