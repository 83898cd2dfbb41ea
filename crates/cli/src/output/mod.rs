pub mod json;
pub mod text;

use scanboard::filter::{FilterCriteria, StatusFilter};
use scanboard::finding::Finding;
use scanboard::report::{AggregateStats, ChartSeries};

/// Everything one `analyze` run renders.
pub struct DashboardView<'a> {
    pub criteria: &'a FilterCriteria,
    pub stats: &'a AggregateStats,
    pub charts: &'a ChartSeries,
    /// Findings after every filter.
    pub findings: &'a [&'a Finding],
    pub limit: usize,
}

impl DashboardView<'_> {
    /// Count behind each quick-filter button, computed on the fully filtered findings.
    pub fn button_counts(&self) -> Vec<(&'static str, usize)> {
        StatusFilter::BUTTONS
            .iter()
            .map(|&button| {
                let count = StatusFilter::parse(button).count_in(self.findings.iter().copied());
                (button, count)
            })
            .collect()
    }
}
