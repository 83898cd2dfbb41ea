use crate::finding::Finding;

/// A single independent predicate over findings.
/// Predicates are combined by intersection, so their order never changes the result.
pub trait RecordFilter: Send + Sync {
    /// Short identifier used in logs (e.g., "region")
    fn name(&self) -> &str;

    /// Whether the finding is kept
    fn matches(&self, finding: &Finding) -> bool;
}
