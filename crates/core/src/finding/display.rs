use std::fmt;

use super::types::{ComplianceEntry, ComplianceValue, Severity, StatusCode};

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ComplianceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplianceValue::Single(value) => f.write_str(value),
            ComplianceValue::Many(values) => f.write_str(&values.join(", ")),
        }
    }
}

impl fmt::Display for ComplianceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.control, self.requirements)
    }
}
