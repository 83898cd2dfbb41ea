use serde::Serialize;

use super::stats::AggregateStats;
use crate::finding::{Finding, StatusCode};

/// Bars shown in the service and region charts.
pub const CHART_LIMIT: usize = 8;

/// Color for severities without a dedicated one.
pub const NEUTRAL_COLOR: &str = "#6b7280";

pub fn severity_color(bucket: &str) -> &'static str {
    match bucket {
        "Critical" | "High" => "#dc2626",
        "Medium" => "#d97706",
        "Low" => "#0284c7",
        "Info" => "#0891b2",
        _ => NEUTRAL_COLOR,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeveritySlice {
    pub name: String,
    pub value: usize,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceBar {
    pub name: String,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionBar {
    pub name: String,
    pub failed: usize,
    pub passed: usize,
    pub total: usize,
}

/// Chart-ready projections of one `AggregateStats`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub severity: Vec<SeveritySlice>,
    pub services: Vec<ServiceBar>,
    pub regions: Vec<RegionBar>,
}

impl ChartSeries {
    pub fn project(stats: &AggregateStats, batch: &[Finding]) -> Self {
        Self {
            severity: severity_series(stats),
            services: service_series(stats),
            regions: region_series(stats, batch),
        }
    }
}

/// One slice per severity bucket, in first-seen order.
pub fn severity_series(stats: &AggregateStats) -> Vec<SeveritySlice> {
    stats
        .severity_breakdown
        .iter()
        .map(|(name, value)| SeveritySlice {
            name: name.to_string(),
            value,
            color: severity_color(name),
        })
        .collect()
}

/// The first `CHART_LIMIT` services in first-seen order. Not sorted by count.
pub fn service_series(stats: &AggregateStats) -> Vec<ServiceBar> {
    stats
        .services
        .iter()
        .take(CHART_LIMIT)
        .map(|(name, value)| ServiceBar {
            name: name.to_string(),
            value,
        })
        .collect()
}

/// Pass/fail counts for the first `CHART_LIMIT` regions.
///
/// Counts are taken from the whole `batch`, so this chart ignores the active
/// framework and region filters while the headline numbers honor them.
pub fn region_series(stats: &AggregateStats, batch: &[Finding]) -> Vec<RegionBar> {
    stats
        .regions
        .iter()
        .take(CHART_LIMIT)
        .map(|region| {
            let in_region = || batch.iter().filter(|f| f.region() == Some(region.as_str()));
            RegionBar {
                name: region.clone(),
                failed: in_region().filter(|f| f.is_status(&StatusCode::Fail)).count(),
                passed: in_region().filter(|f| f.is_status(&StatusCode::Pass)).count(),
                total: in_region().count(),
            }
        })
        .collect()
}
