use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use scanboard::export::report_filename;
use tracing::info;

use crate::FilterArgs;

pub fn run(
    path: &Path,
    filters: &FilterArgs,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = super::load_config(config)?;
    let dashboard = super::open_report(path, filters, &config)?;

    let rows = dashboard.findings().len();
    let csv = dashboard.export_csv();

    let output = output.unwrap_or_else(|| PathBuf::from(report_filename(Utc::now().date_naive())));
    std::fs::write(&output, csv)
        .with_context(|| format!("Failed to write CSV: {}", output.display()))?;
    info!(path = %output.display(), rows, "wrote CSV export");

    println!("Exported {} findings to {}", rows, output.display());
    Ok(())
}
