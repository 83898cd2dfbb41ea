use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::filter::FilterCriteria;

/// Compliance frameworks the scanner can map findings to. Offered as filter
/// choices only; reports are never checked against this list.
pub const COMPLIANCE_FRAMEWORKS: &[&str] = &[
    "aws_account_security_onboarding_aws",
    "aws_audit_manager_control_tower_guardrails_aws",
    "aws_foundational_security_best_practices_aws",
    "aws_foundational_technical_review_aws",
    "aws_well_architected_framework_reliability_pillar_aws",
    "aws_well_architected_framework_security_pillar_aws",
    "cis_1.4_aws",
    "cis_1.5_aws",
    "cis_2.0_aws",
    "cis_3.0_aws",
    "cis_4.0_aws",
    "cis_5.0_aws",
    "cisa_aws",
    "ens_rd2022_aws",
    "fedramp_low_revision_4_aws",
    "fedramp_moderate_revision_4_aws",
    "ffiec_aws",
    "gdpr_aws",
    "gxp_21_cfr_part_11_aws",
    "gxp_eu_annex_11_aws",
    "hipaa_aws",
    "iso27001_2013_aws",
    "iso27001_2022_aws",
    "kisa_isms_p_2023_aws",
    "kisa_isms_p_2023_korean_aws",
    "mitre_attack_aws",
    "nis2_aws",
    "nist_800_171_revision_2_aws",
    "nist_800_53_revision_4_aws",
    "nist_800_53_revision_5_aws",
    "nist_csf_1.1_aws",
    "pci_3.2.1_aws",
    "pci_4.0_aws",
    "prowler_threatscore_aws",
    "rbi_cyber_security_framework_aws",
    "soc2_aws",
];

/// Project-level configuration loaded from `.scanboard.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub global: GlobalConfig,
    pub filters: FilterConfig,
    pub frameworks: FrameworkConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    pub output_format: String,
    /// Findings shown in the text listing.
    pub findings_limit: usize,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_format: "text".to_string(),
            findings_limit: 15,
        }
    }
}

/// Filter values applied when none are given on the command line.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub framework: String,
    pub region: String,
    pub status: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            framework: String::new(),
            region: String::new(),
            status: "all".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FrameworkConfig {
    pub names: Vec<String>,
}

impl Default for FrameworkConfig {
    fn default() -> Self {
        Self {
            names: COMPLIANCE_FRAMEWORKS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    /// Load config from a TOML file path. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        Ok(config)
    }

    /// Filter criteria from the `[filters]` table, with command-line values
    /// taking precedence where given.
    pub fn criteria(
        &self,
        framework: Option<&str>,
        region: Option<&str>,
        status: Option<&str>,
    ) -> FilterCriteria {
        FilterCriteria::new(
            framework.unwrap_or(&self.filters.framework),
            region.unwrap_or(&self.filters.region),
            status.unwrap_or(&self.filters.status),
        )
    }

    /// Generate default config file content.
    pub fn default_toml() -> &'static str {
        r#"# scanboard configuration

[global]
# Output format: "text", "json"
output_format = "text"
# Number of findings listed by `scanboard analyze`
findings_limit = 15

[filters]
# Default filters; empty means off. Command-line flags override these.
# framework = "cis_2.0_aws"
# region = "us-east-1"
# "all", "FAIL", or a severity name such as "Critical"
status = "all"

# Compliance frameworks listed by `scanboard frameworks`.
# Leave unset to use the built-in list.
# [frameworks]
# names = ["cis_2.0_aws", "soc2_aws"]
"#
    }
}
