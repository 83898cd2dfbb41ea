use serde_json::Value;

use crate::finding::{ComplianceEntry, ComplianceValue, Finding, Remediation, Severity, StatusCode};

/// Map one decoded scanner document onto a `Finding`.
///
/// Total: any path that is absent or holds an object, array or null becomes
/// `None`, never an error. Numbers and booleans are kept as their JSON text. Only the first entry of `resources` is read.
pub fn lift_finding(doc: &Value) -> Finding {
    Finding {
        status_code: text_at(doc, "/status_code").as_deref().map(StatusCode::parse),
        severity: text_at(doc, "/severity").as_deref().map(Severity::parse),
        region: text_at(doc, "/cloud/region"),
        account_id: text_at(doc, "/cloud/account/uid"),
        service_name: text_at(doc, "/resources/0/group/name"),
        resource_id: text_at(doc, "/resources/0/uid"),
        title: text_at(doc, "/finding_info/title"),
        description: text_at(doc, "/finding_info/desc"),
        risk_details: text_at(doc, "/risk_details"),
        check_id: text_at(doc, "/metadata/event_code"),
        remediation: doc.get("remediation").and_then(lift_remediation),
        compliance: doc
            .pointer("/unmapped/compliance")
            .and_then(Value::as_object)
            .map(|map| {
                map.iter()
                    .map(|(control, value)| ComplianceEntry {
                        control: control.clone(),
                        requirements: lift_requirements(value),
                    })
                    .collect()
            }),
    }
}

fn text_at(doc: &Value, pointer: &str) -> Option<String> {
    match doc.pointer(pointer)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        value @ (Value::Number(_) | Value::Bool(_)) => Some(value.to_string()),
        _ => None,
    }
}

fn lift_remediation(value: &Value) -> Option<Remediation> {
    let obj = value.as_object()?;
    let references = obj
        .get("references")
        .and_then(Value::as_array)
        .map(|refs| {
            refs.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    Some(Remediation {
        description: obj
            .get("desc")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        references,
    })
}

fn lift_requirements(value: &Value) -> ComplianceValue {
    match value {
        Value::Array(items) => ComplianceValue::Many(
            items
                .iter()
                .map(|item| match item {
                    Value::Null => String::new(),
                    other => scalar_text(other),
                })
                .collect(),
        ),
        other => ComplianceValue::Single(scalar_text(other)),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_document() {
        let doc = json!({
            "status_code": "FAIL",
            "severity": "High",
            "cloud": { "region": "us-east-1", "account": { "uid": "123456789012" } },
            "resources": [
                { "uid": "arn:aws:s3:::logs", "group": { "name": "s3" } },
                { "uid": "arn:aws:s3:::other", "group": { "name": "ignored" } }
            ],
            "finding_info": { "title": "Bucket public", "desc": "Bucket allows public reads" },
            "risk_details": "Data exposure",
            "metadata": { "event_code": "s3_bucket_public_access" },
            "remediation": { "desc": "Block public access", "references": ["https://a", 7, "https://b"] },
            "unmapped": { "compliance": { "CIS-1.4": ["2.1.5"], "SOC2": "cc_6_1" } }
        });

        let finding = lift_finding(&doc);
        assert_eq!(finding.status_code, Some(StatusCode::Fail));
        assert_eq!(finding.severity, Some(Severity::High));
        assert_eq!(finding.region.as_deref(), Some("us-east-1"));
        assert_eq!(finding.account_id.as_deref(), Some("123456789012"));
        assert_eq!(finding.service_name.as_deref(), Some("s3"));
        assert_eq!(finding.resource_id.as_deref(), Some("arn:aws:s3:::logs"));
        assert_eq!(finding.check_id.as_deref(), Some("s3_bucket_public_access"));
        assert_eq!(finding.risk_summary(), Some("Data exposure"));

        let remediation = finding.remediation.unwrap();
        assert_eq!(remediation.description.as_deref(), Some("Block public access"));
        assert_eq!(remediation.references, vec!["https://a", "https://b"]);

        let compliance = finding.compliance.unwrap();
        assert_eq!(compliance[0].control, "CIS-1.4");
        assert_eq!(
            compliance[0].requirements,
            ComplianceValue::Many(vec!["2.1.5".to_string()])
        );
        assert_eq!(compliance[1].control, "SOC2");
        assert_eq!(
            compliance[1].requirements,
            ComplianceValue::Single("cc_6_1".to_string())
        );
    }

    #[test]
    fn test_missing_and_mistyped_paths_are_none() {
        let doc = json!({
            "severity": { "level": 3 },
            "status_code": null,
            "cloud": "us-east-1",
            "resources": [],
            "finding_info": null,
            "unmapped": { "compliance": ["not", "a", "map"] }
        });
        assert_eq!(lift_finding(&doc), Finding::default());
    }

    #[test]
    fn test_non_object_document_is_empty_finding() {
        assert_eq!(lift_finding(&json!(42)), Finding::default());
        assert_eq!(lift_finding(&json!("text")), Finding::default());
    }

    #[test]
    fn test_scalar_fields_keep_their_text() {
        let doc = json!({
            "severity": 3,
            "cloud": { "account": { "uid": 123456789012u64 } },
            "resources": [{ "uid": true }]
        });
        let finding = lift_finding(&doc);
        assert_eq!(finding.severity, Some(Severity::Other("3".to_string())));
        assert_eq!(finding.severity_bucket(), "Unknown");
        assert_eq!(finding.account_id.as_deref(), Some("123456789012"));
        assert_eq!(finding.resource_id.as_deref(), Some("true"));

        let csv = crate::export::to_csv([&finding]);
        assert!(csv.ends_with(r#""","3","","","","","true","""#));
    }

    #[test]
    fn test_empty_strings_are_missing() {
        let doc = json!({ "severity": "", "cloud": { "region": "" } });
        let finding = lift_finding(&doc);
        assert_eq!(finding.severity, None);
        assert_eq!(finding.region, None);
    }

    #[test]
    fn test_compliance_values_are_stringified() {
        let doc = json!({ "unmapped": { "compliance": { "ENS": [1, null, "op.exp.1"], "GDPR": 32 } } });
        let compliance = lift_finding(&doc).compliance.unwrap();
        assert_eq!(compliance[0].requirements.to_string(), "1, , op.exp.1");
        assert_eq!(compliance[1].requirements.to_string(), "32");
    }

    #[test]
    fn test_empty_compliance_object_is_kept() {
        let doc = json!({ "unmapped": { "compliance": {} } });
        assert_eq!(lift_finding(&doc).compliance, Some(vec![]));
    }
}
