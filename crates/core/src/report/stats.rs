use std::collections::HashSet;

use serde::Serialize;

use super::tally::Tally;
use crate::finding::{Finding, StatusCode};

/// Account shown when the view is empty or its first finding has no account.
pub const UNKNOWN_ACCOUNT: &str = "Unknown";

/// Display band for the security score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScoreRating {
    Good,
    Fair,
    Poor,
}

impl ScoreRating {
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => ScoreRating::Good,
            60.. => ScoreRating::Fair,
            _ => ScoreRating::Poor,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreRating::Good => "GOOD",
            ScoreRating::Fair => "FAIR",
            ScoreRating::Poor => "POOR",
        }
    }
}

/// Headline numbers for the dashboard. Always computed fresh from a batch and
/// a filtered view of it; never updated in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateStats {
    pub total: usize,
    pub failed: usize,
    pub passed: usize,
    pub manual: usize,
    /// Distinct regions of the whole batch, not the view. These are the
    /// options offered by the region filter.
    pub regions: Vec<String>,
    pub severity_breakdown: Tally,
    pub services: Tally,
    pub compliance_frameworks: Tally,
    /// Percentage of findings in the view that passed, rounded. 0 for an empty view.
    pub security_score: u32,
    pub rating: ScoreRating,
    pub critical_high: usize,
    pub account_id: String,
}

impl AggregateStats {
    /// Aggregate `view` (normally `batch` filtered by framework and region)
    /// in one pass. `batch` only contributes the region option list.
    pub fn compute<'a, I>(batch: &[Finding], view: I) -> Self
    where
        I: IntoIterator<Item = &'a Finding>,
    {
        let mut total = 0;
        let mut failed = 0;
        let mut passed = 0;
        let mut manual = 0;
        let mut severity_breakdown = Tally::new();
        let mut services = Tally::new();
        let mut compliance_frameworks = Tally::new();
        let mut account_id: Option<String> = None;

        for finding in view {
            if total == 0 {
                account_id = finding.account_id.clone();
            }
            total += 1;

            match finding.status_code {
                Some(StatusCode::Fail) => failed += 1,
                Some(StatusCode::Pass) => passed += 1,
                Some(StatusCode::Manual) => manual += 1,
                _ => {}
            }

            severity_breakdown.increment(finding.severity_bucket());
            services.increment(finding.service_bucket());

            // Keys come from one JSON object, so each control appears once per finding.
            for entry in finding.compliance_entries() {
                compliance_frameworks.increment(&entry.control);
            }
        }

        let critical_high = severity_breakdown.get("Critical") + severity_breakdown.get("High");
        let score = security_score(passed, total);

        Self {
            total,
            failed,
            passed,
            manual,
            regions: distinct_regions(batch),
            severity_breakdown,
            services,
            compliance_frameworks,
            security_score: score,
            rating: ScoreRating::from_score(score),
            critical_high,
            account_id: account_id.unwrap_or_else(|| UNKNOWN_ACCOUNT.to_string()),
        }
    }
}

/// Distinct non-empty regions in first-seen order.
pub fn distinct_regions(batch: &[Finding]) -> Vec<String> {
    let mut seen = HashSet::new();
    batch
        .iter()
        .filter_map(Finding::region)
        .filter(|region| seen.insert(*region))
        .map(str::to_string)
        .collect()
}

fn security_score(passed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((passed as f64 / total as f64) * 100.0).round() as u32
}
