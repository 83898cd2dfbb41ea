use tracing::{info, warn};

use crate::export::to_csv;
use crate::filter::{filter, FilterCriteria};
use crate::finding::Finding;
use crate::ingest::{normalize, ParseError};
use crate::report::{AggregateStats, ChartSeries};

/// The loaded batch plus the active filter values.
///
/// The batch is immutable once loaded and is only ever replaced wholesale by a
/// successful `load`. Everything derived from it is recomputed on each call.
#[derive(Debug, Default)]
pub struct Dashboard {
    batch: Option<Vec<Finding>>,
    pub criteria: FilterCriteria,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest a new report. On failure the previously loaded batch is kept.
    /// Returns the number of findings loaded.
    pub fn load(&mut self, text: &str) -> Result<usize, ParseError> {
        match normalize(text) {
            Ok(findings) => {
                let count = findings.len();
                info!(findings = count, "loaded report");
                self.batch = Some(findings);
                Ok(count)
            }
            Err(err) => {
                warn!(error = %err, kept = self.batch().len(), "report rejected, keeping previous batch");
                Err(err)
            }
        }
    }

    /// All loaded findings, unfiltered. Empty before the first load.
    pub fn batch(&self) -> &[Finding] {
        self.batch.as_deref().unwrap_or(&[])
    }

    pub fn clear_filters(&mut self) {
        self.criteria.clear();
    }

    /// Findings matching framework and region only. Headline numbers use this view.
    pub fn stats_view(&self) -> Vec<&Finding> {
        filter(self.batch(), &self.criteria.without_status())
    }

    /// Findings matching every active criterion. This is what gets listed and exported.
    pub fn findings(&self) -> Vec<&Finding> {
        filter(self.batch(), &self.criteria)
    }

    /// `None` until a report has been loaded.
    pub fn stats(&self) -> Option<AggregateStats> {
        self.batch
            .as_deref()
            .map(|batch| AggregateStats::compute(batch, self.stats_view()))
    }

    pub fn charts(&self) -> Option<ChartSeries> {
        self.stats()
            .map(|stats| ChartSeries::project(&stats, self.batch()))
    }

    pub fn export_csv(&self) -> String {
        to_csv(self.findings())
    }
}
