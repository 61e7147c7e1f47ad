//! Skeleton configuration file handling
//!
//! Files ending in `.json` are read as JSON; anything else as TOML.

use anyhow::{Context, Result};
use bones_layout::SkeletonConfig;
use std::fs;
use std::path::Path;

/// Load a skeleton configuration from disk
pub fn load(path: &Path) -> Result<SkeletonConfig> {
    if !path.exists() {
        anyhow::bail!("No skeleton config found at {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let config = if is_json {
        SkeletonConfig::from_json_str(&content)
    } else {
        SkeletonConfig::from_toml_str(&content)
    }
    .with_context(|| format!("Failed to parse {}", path.display()))?;

    Ok(config)
}
