use super::criteria::StatusFilter;
use super::traits::RecordFilter;
use crate::finding::Finding;

/// Lower-case a compliance control key and fold `-` into `_`, so that
/// "CIS-1.4-AWS" and "cis_1.4_aws" compare equal.
pub fn normalize_control_key(key: &str) -> String {
    key.to_lowercase().replace('-', "_")
}

/// Keeps findings mapped to a compliance framework. A finding passes when any
/// of its control keys contains the framework name after normalization on
/// both sides. Findings without compliance data never pass.
pub struct FrameworkPredicate {
    needle: String,
}

impl FrameworkPredicate {
    pub fn new(framework: &str) -> Self {
        Self {
            needle: normalize_control_key(framework),
        }
    }
}

impl RecordFilter for FrameworkPredicate {
    fn name(&self) -> &str {
        "framework"
    }

    fn matches(&self, finding: &Finding) -> bool {
        finding.compliance.as_ref().is_some_and(|entries| {
            entries
                .iter()
                .any(|entry| normalize_control_key(&entry.control).contains(&self.needle))
        })
    }
}

/// Keeps findings from exactly one region (case-sensitive).
pub struct RegionPredicate {
    region: String,
}

impl RegionPredicate {
    pub fn new(region: &str) -> Self {
        Self {
            region: region.to_string(),
        }
    }
}

impl RecordFilter for RegionPredicate {
    fn name(&self) -> &str {
        "region"
    }

    fn matches(&self, finding: &Finding) -> bool {
        finding.region() == Some(self.region.as_str())
    }
}

pub struct StatusPredicate {
    status: StatusFilter,
}

impl StatusPredicate {
    pub fn new(status: StatusFilter) -> Self {
        Self { status }
    }
}

impl RecordFilter for StatusPredicate {
    fn name(&self) -> &str {
        "status"
    }

    fn matches(&self, finding: &Finding) -> bool {
        self.status.matches(finding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::{ComplianceEntry, ComplianceValue};

    fn with_controls(controls: &[&str]) -> Finding {
        Finding {
            compliance: Some(
                controls
                    .iter()
                    .map(|control| ComplianceEntry {
                        control: control.to_string(),
                        requirements: ComplianceValue::Many(vec![]),
                    })
                    .collect(),
            ),
            ..Default::default()
        }
    }

    #[test]
    fn test_normalize_control_key() {
        assert_eq!(normalize_control_key("CIS-1.4-AWS"), "cis_1.4_aws");
        assert_eq!(normalize_control_key("soc2_aws"), "soc2_aws");
    }

    #[test]
    fn test_framework_matches_normalized_substring() {
        let predicate = FrameworkPredicate::new("cis_1.4");
        assert!(predicate.matches(&with_controls(&["CIS-1.4"])));
        assert!(predicate.matches(&with_controls(&["CIS-1.4-AWS"])));
        assert!(predicate.matches(&with_controls(&["SOC2", "cis-1.4"])));
        assert!(!predicate.matches(&with_controls(&["CIS-1.5"])));
    }

    #[test]
    fn test_framework_filter_value_is_normalized_too() {
        let predicate = FrameworkPredicate::new("CIS-1.4");
        assert!(predicate.matches(&with_controls(&["cis_1.4_aws"])));
    }

    #[test]
    fn test_framework_excludes_findings_without_compliance() {
        let predicate = FrameworkPredicate::new("cis");
        assert!(!predicate.matches(&Finding::default()));
        assert!(!predicate.matches(&with_controls(&[])));
    }

    #[test]
    fn test_region_is_exact_and_case_sensitive() {
        let predicate = RegionPredicate::new("us-east-1");
        let finding = |region: &str| Finding {
            region: Some(region.to_string()),
            ..Default::default()
        };
        assert!(predicate.matches(&finding("us-east-1")));
        assert!(!predicate.matches(&finding("US-EAST-1")));
        assert!(!predicate.matches(&finding("us-east-1a")));
        assert!(!predicate.matches(&Finding::default()));
    }
}
