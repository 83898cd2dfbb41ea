//! CSV export of findings.
//!
//! Every field is quoted and embedded double quotes are doubled (RFC 4180).
//! Line breaks inside a field are written verbatim inside the quotes. Rows are
//! separated by `\n` with no trailing terminator, so an empty export is just
//! the header line.

use chrono::NaiveDate;

use crate::finding::Finding;

/// CSV header row.
pub const CSV_HEADER: [&str; 8] = [
    "Status",
    "Severity",
    "Service",
    "Region",
    "Title",
    "Description",
    "Resource",
    "Compliance",
];

/// Serialize `findings` as-is: no reordering and no filtering.
pub fn to_csv<'a, I>(findings: I) -> String
where
    I: IntoIterator<Item = &'a Finding>,
{
    let mut rows = vec![render_row(&CSV_HEADER)];
    for f in findings {
        let compliance = f
            .compliance_entries()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        rows.push(render_row(&[
            f.status_code.as_ref().map_or("", |s| s.as_str()),
            f.severity.as_ref().map_or("", |s| s.as_str()),
            f.service_name.as_deref().unwrap_or(""),
            f.region.as_deref().unwrap_or(""),
            f.title.as_deref().unwrap_or(""),
            f.description.as_deref().unwrap_or(""),
            f.resource_id.as_deref().unwrap_or(""),
            compliance.as_str(),
        ]));
    }
    rows.join("\n")
}

/// Default export file name for a report produced on `date`.
pub fn report_filename(date: NaiveDate) -> String {
    format!("security_report_{}.csv", date.format("%Y-%m-%d"))
}

fn render_row(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|field| quote_field(field))
        .collect::<Vec<_>>()
        .join(",")
}

fn quote_field(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::{ComplianceEntry, ComplianceValue, Severity, StatusCode};

    const HEADER_LINE: &str =
        r#""Status","Severity","Service","Region","Title","Description","Resource","Compliance""#;

    #[test]
    fn test_empty_export_is_header_only() {
        assert_eq!(to_csv(&[] as &[Finding]), HEADER_LINE);
    }

    #[test]
    fn test_full_row() {
        let finding = Finding {
            status_code: Some(StatusCode::Fail),
            severity: Some(Severity::High),
            service_name: Some("s3".to_string()),
            region: Some("us-east-1".to_string()),
            title: Some("Bucket \"logs\" is public".to_string()),
            description: Some("line one\nline two".to_string()),
            resource_id: Some("arn:aws:s3:::logs".to_string()),
            compliance: Some(vec![
                ComplianceEntry {
                    control: "CIS-1.4".to_string(),
                    requirements: ComplianceValue::Many(vec!["2.1.1".to_string(), "2.1.5".to_string()]),
                },
                ComplianceEntry {
                    control: "SOC2".to_string(),
                    requirements: ComplianceValue::Single("cc_6_1".to_string()),
                },
            ]),
            ..Default::default()
        };

        let csv = to_csv([&finding]);
        let expected = format!(
            "{HEADER_LINE}\n\"FAIL\",\"High\",\"s3\",\"us-east-1\",\"Bucket \"\"logs\"\" is public\",\"line one\nline two\",\"arn:aws:s3:::logs\",\"CIS-1.4: 2.1.1, 2.1.5; SOC2: cc_6_1\""
        );
        assert_eq!(csv, expected);
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let csv = to_csv(&[Finding::default()]);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, r#""","","","","","","","""#);
    }

    #[test]
    fn test_raw_values_are_exported() {
        let finding = Finding {
            status_code: Some(StatusCode::parse("MUTED")),
            severity: Some(Severity::parse("critical")),
            ..Default::default()
        };
        let csv = to_csv([&finding]);
        assert!(csv.ends_with(r#""MUTED","critical","","","","","","""#));
    }

    #[test]
    fn test_report_filename() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(report_filename(date), "security_report_2024-03-09.csv");
    }
}
