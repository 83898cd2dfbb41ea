use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use super::lift::lift_finding;
use crate::finding::Finding;

/// The whole batch was rejected. No partial result accompanies it.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid JSON array: {0}")]
    Array(#[source] serde_json::Error),

    #[error("invalid JSON on line {line}: {source}")]
    Line {
        /// 1-based line number in the original text, blank lines included.
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Decode a scanner report into findings.
///
/// A leading byte-order mark is ignored. Text starting with `[` (after
/// trimming) is read as a single JSON array. Anything else is read as newline-delimited JSON, one object per non-blank
/// line. The first malformed document fails the entire batch.
pub fn normalize(text: &str) -> Result<Vec<Finding>, ParseError> {
    let documents = decode_documents(text)?;
    Ok(documents.iter().map(lift_finding).collect())
}

fn decode_documents(text: &str) -> Result<Vec<Value>, ParseError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    if text.trim_start().starts_with('[') {
        let documents: Vec<Value> = serde_json::from_str(text).map_err(ParseError::Array)?;
        debug!(records = documents.len(), "decoded JSON array report");
        return Ok(documents);
    }

    let mut documents = Vec::new();
    for (idx, line) in text.split('\n').enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let document = serde_json::from_str(line).map_err(|source| ParseError::Line {
            line: idx + 1,
            source,
        })?;
        documents.push(document);
    }
    debug!(records = documents.len(), "decoded newline-delimited report");
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::{Severity, StatusCode};

    #[test]
    fn test_array_input() {
        let text = r#"[{"status_code":"PASS","severity":"Low"},{"status_code":"FAIL","severity":"Critical"}]"#;
        let findings = normalize(text).unwrap();
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].status_code, Some(StatusCode::Pass));
        assert_eq!(findings[1].severity, Some(Severity::Critical));
    }

    #[test]
    fn test_array_with_leading_whitespace() {
        let findings = normalize("\n   [ {\"severity\": \"High\"} ]\n").unwrap();
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn test_ndjson_skips_blank_lines_and_keeps_order() {
        let text = "{\"finding_info\":{\"title\":\"a\"}}\n\n   \n{\"finding_info\":{\"title\":\"b\"}}\r\n";
        let findings = normalize(text).unwrap();
        let titles: Vec<_> = findings.iter().map(|f| f.title.as_deref()).collect();
        assert_eq!(titles, vec![Some("a"), Some("b")]);
    }

    #[test]
    fn test_byte_order_mark_is_ignored() {
        let findings = normalize("\u{feff}[{\"status_code\":\"PASS\"}]").unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].status_code, Some(StatusCode::Pass));

        let findings =
            normalize("\u{feff}{\"status_code\":\"FAIL\"}\n{\"status_code\":\"MANUAL\"}").unwrap();
        let statuses: Vec<_> = findings.iter().map(|f| f.status_code.clone()).collect();
        assert_eq!(statuses, vec![Some(StatusCode::Fail), Some(StatusCode::Manual)]);
    }

    #[test]
    fn test_empty_input_is_empty_batch() {
        assert!(normalize("").unwrap().is_empty());
        assert!(normalize("  \n \n").unwrap().is_empty());
        assert!(normalize("[]").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_input_fails_whole_batch() {
        assert!(matches!(normalize("{not json"), Err(ParseError::Line { line: 1, .. })));
        assert!(matches!(normalize("[{\"a\":1},"), Err(ParseError::Array(_))));
    }

    #[test]
    fn test_bad_line_reports_its_position() {
        let text = "{\"status_code\":\"PASS\"}\n\n{oops}\n{\"status_code\":\"FAIL\"}";
        match normalize(text) {
            Err(ParseError::Line { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected line error, got {other:?}"),
        }
    }
}
