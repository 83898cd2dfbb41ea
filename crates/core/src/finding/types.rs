use serde::{Serialize, Serializer};

/// Bucket name for findings whose severity is missing or not one of the known levels.
pub const UNKNOWN_SEVERITY: &str = "Unknown";

/// Bucket name for findings without a service on their first resource.
pub const OTHER_SERVICE: &str = "Other";

/// Outcome of a single check.
/// Values the scanner emits outside PASS/FAIL/MANUAL are kept verbatim in `Other`
/// so export stays lossless; they never count as passed, failed or manual.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StatusCode {
    Pass,
    Fail,
    Manual,
    Other(String),
}

impl StatusCode {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "PASS" => StatusCode::Pass,
            "FAIL" => StatusCode::Fail,
            "MANUAL" => StatusCode::Manual,
            other => StatusCode::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            StatusCode::Pass => "PASS",
            StatusCode::Fail => "FAIL",
            StatusCode::Manual => "MANUAL",
            StatusCode::Other(raw) => raw,
        }
    }
}

/// Severity as reported by the scanner. Matching is case-sensitive:
/// "critical" is not `Critical`, it lands in `Other` and buckets as "Unknown".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Info,
    Other(String),
}

impl Severity {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Critical" => Severity::Critical,
            "High" => Severity::High,
            "Medium" => Severity::Medium,
            "Low" => Severity::Low,
            "Info" => Severity::Info,
            other => Severity::Other(other.to_string()),
        }
    }

    /// The raw value, as it appeared in the input.
    pub fn as_str(&self) -> &str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
            Severity::Info => "Info",
            Severity::Other(raw) => raw,
        }
    }

    /// Name of the aggregation bucket this severity falls into.
    pub fn bucket(&self) -> &str {
        match self {
            Severity::Other(_) => UNKNOWN_SEVERITY,
            known => known.as_str(),
        }
    }
}

impl Serialize for StatusCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Remediation {
    pub description: Option<String>,
    pub references: Vec<String>,
}

/// Requirement ids a compliance control maps to. The scanner emits either a
/// bare string or a list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ComplianceValue {
    Single(String),
    Many(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplianceEntry {
    pub control: String,
    pub requirements: ComplianceValue,
}

/// One security-check result. Every attribute is optional: a record is never
/// rejected for missing data, it only falls into fallback buckets later.
/// Empty strings in the input are stored as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Finding {
    pub status_code: Option<StatusCode>,
    pub severity: Option<Severity>,
    pub region: Option<String>,
    pub account_id: Option<String>,
    pub service_name: Option<String>,
    pub resource_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub risk_details: Option<String>,
    pub check_id: Option<String>,
    pub remediation: Option<Remediation>,
    /// Compliance controls in document order. `None` when the input had no
    /// compliance object at all, which is distinct from an empty one.
    pub compliance: Option<Vec<ComplianceEntry>>,
}

impl Finding {
    pub fn is_status(&self, status: &StatusCode) -> bool {
        self.status_code.as_ref() == Some(status)
    }

    pub fn severity_bucket(&self) -> &str {
        self.severity.as_ref().map_or(UNKNOWN_SEVERITY, Severity::bucket)
    }

    pub fn service_bucket(&self) -> &str {
        self.service_name.as_deref().unwrap_or(OTHER_SERVICE)
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Risk text shown in the findings list: the risk details, or the
    /// description when the scanner left them out.
    pub fn risk_summary(&self) -> Option<&str> {
        self.risk_details
            .as_deref()
            .or(self.description.as_deref())
    }

    pub fn compliance_entries(&self) -> &[ComplianceEntry] {
        self.compliance.as_deref().unwrap_or(&[])
    }
}
