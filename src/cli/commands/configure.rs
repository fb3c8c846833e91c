//! Configure command.

use std::path::Path;

use crate::config;
use crate::subject::SortBy;

/// Update the config file with the given values and save it
pub fn cmd_configure(
    path: Option<&Path>,
    token: Option<&str>,
    sort: Option<SortBy>,
    cover_size: Option<&str>,
) -> anyhow::Result<()> {
    let mut config = match path {
        Some(path) => config::load_from(path),
        None => config::load(),
    };

    if let Some(token) = token {
        config.credentials.ym_token = Some(token.to_string());
    }
    if let Some(sort) = sort {
        config.export.sort = sort;
    }
    if let Some(size) = cover_size {
        config.export.cover_size = size.to_string();
    }

    let saved = match path {
        Some(path) => {
            config::save_to(&config, path)?;
            path.to_path_buf()
        }
        None => config::save(&config)?,
    };

    println!("Saved config to {:?}", saved);
    println!("  sort:       {}", config.export.sort);
    println!("  cover size: {}", config.export.cover_size);
    println!(
        "  token:      {}",
        if config.credentials.ym_token.is_some() {
            "set"
        } else {
            "not set"
        }
    );
    Ok(())
}
