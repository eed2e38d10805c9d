//! Walk configuration loaded from a TOML file.
//!
//! Lookup order:
//! 1. `$NDWALK_CONFIG` environment variable
//! 2. `~/.config/ndwalk/config.toml`
//! 3. Built-in defaults (every field is optional)

use std::path::PathBuf;

use anyhow::{Context, Result};
use walk_core::config::WalkConfig;

/// Loads the config from disk, or the defaults if no file exists.
pub fn load_config() -> Result<WalkConfig> {
    if let Some(p) = config_path()
        && p.exists()
    {
        let content =
            std::fs::read_to_string(&p).with_context(|| format!("reading {}", p.display()))?;
        return parse_config(&content).with_context(|| format!("parsing {}", p.display()));
    }

    Ok(WalkConfig::default())
}

pub fn parse_config(content: &str) -> Result<WalkConfig> {
    Ok(toml::from_str(content)?)
}

fn config_path() -> Option<PathBuf> {
    if let Ok(p) = std::env::var("NDWALK_CONFIG") {
        return Some(PathBuf::from(p));
    }

    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config").join("ndwalk").join("config.toml"))
}
