use std::fmt;

use crate::finding::{Finding, StatusCode};

/// Status/severity quick filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    #[default]
    All,
    /// Only findings whose status is FAIL, whatever their severity.
    Failed,
    /// Only findings whose raw severity equals this value exactly.
    Severity(String),
}

impl StatusFilter {
    /// Quick filters offered next to the findings list.
    pub const BUTTONS: [&'static str; 6] = ["all", "FAIL", "Critical", "High", "Medium", "Low"];

    /// `""` and `"all"` both mean no filtering.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "" | "all" => StatusFilter::All,
            "FAIL" => StatusFilter::Failed,
            severity => StatusFilter::Severity(severity.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Failed => "FAIL",
            StatusFilter::Severity(severity) => severity,
        }
    }

    pub fn is_active(&self) -> bool {
        match self {
            StatusFilter::All => false,
            StatusFilter::Failed => true,
            StatusFilter::Severity(severity) => !severity.is_empty(),
        }
    }

    pub fn matches(&self, finding: &Finding) -> bool {
        if !self.is_active() {
            return true;
        }
        match self {
            StatusFilter::All => true,
            StatusFilter::Failed => finding.is_status(&StatusCode::Fail),
            StatusFilter::Severity(severity) => {
                finding.severity.as_ref().map(|s| s.as_str()) == Some(severity.as_str())
            }
        }
    }

    /// Number of findings in `view` this filter would keep. Used for the
    /// counter on each quick-filter button.
    pub fn count_in<'a, I>(&self, view: I) -> usize
    where
        I: IntoIterator<Item = &'a Finding>,
    {
        view.into_iter().filter(|f| self.matches(f)).count()
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Active filter values. An empty string means the filter is off.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Compliance framework, matched as a normalized substring of control keys.
    pub framework: String,
    /// Exact, case-sensitive region.
    pub region: String,
    pub status: StatusFilter,
}

impl FilterCriteria {
    pub fn new(framework: &str, region: &str, status: &str) -> Self {
        Self {
            framework: framework.to_string(),
            region: region.to_string(),
            status: StatusFilter::parse(status),
        }
    }

    /// The same criteria with the status/severity filter switched off.
    /// Headline statistics are computed on this view.
    pub fn without_status(&self) -> Self {
        Self {
            status: StatusFilter::All,
            ..self.clone()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.framework.is_empty() && self.region.is_empty() && !self.status.is_active()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
