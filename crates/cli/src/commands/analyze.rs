use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::output;
use crate::{FilterArgs, OutputFormat};

pub fn run(
    path: &Path,
    filters: &FilterArgs,
    format: Option<OutputFormat>,
    limit: Option<usize>,
    config: Option<PathBuf>,
    quiet: bool,
    no_color: bool,
) -> Result<()> {
    let config = super::load_config(config)?;
    let dashboard = super::open_report(path, filters, &config)?;
    debug!(criteria = ?dashboard.criteria, "filters resolved");

    let stats = dashboard.stats().context("no report loaded")?;
    let charts = dashboard.charts().context("no report loaded")?;
    let findings = dashboard.findings();

    let format = format.unwrap_or_else(|| OutputFormat::from_config(&config.global.output_format));
    let limit = limit.unwrap_or(config.global.findings_limit);

    let view = output::DashboardView {
        criteria: &dashboard.criteria,
        stats: &stats,
        charts: &charts,
        findings: &findings,
        limit,
    };

    match format {
        OutputFormat::Json => output::json::print(&view)?,
        OutputFormat::Text => output::text::print(&view, quiet, no_color)?,
    }

    Ok(())
}
