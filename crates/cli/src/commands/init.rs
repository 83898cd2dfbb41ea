use std::path::Path;

use anyhow::{Context, Result};
use scanboard::config::Config;

pub fn run() -> Result<()> {
    let path = Path::new(super::DEFAULT_CONFIG);
    if path.exists() {
        eprintln!("{} already exists, leaving it untouched", path.display());
        return Ok(());
    }
    std::fs::write(path, Config::default_toml())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Created {}", path.display());
    Ok(())
}
