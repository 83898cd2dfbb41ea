pub mod analyze;
pub mod export;
pub mod frameworks;
pub mod init;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use scanboard::config::Config;
use scanboard::session::Dashboard;

use crate::FilterArgs;

const DEFAULT_CONFIG: &str = ".scanboard.toml";

pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    Config::load(&path)
}

/// Read a report from disk and apply filters from the config and command line.
pub fn open_report(path: &Path, filters: &FilterArgs, config: &Config) -> Result<Dashboard> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read report: {}", path.display()))?;

    let mut dashboard = Dashboard::new();
    dashboard
        .load(&text)
        .with_context(|| format!("Failed to parse report: {}", path.display()))?;
    dashboard.criteria = config.criteria(
        filters.framework.as_deref(),
        filters.region.as_deref(),
        filters.status.as_deref(),
    );
    Ok(dashboard)
}
