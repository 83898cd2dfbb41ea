pub mod chain;
pub mod criteria;
pub mod predicates;
pub mod traits;

pub use chain::FilterChain;
pub use criteria::{FilterCriteria, StatusFilter};
pub use predicates::{normalize_control_key, FrameworkPredicate, RegionPredicate, StatusPredicate};
pub use traits::RecordFilter;

use crate::finding::Finding;

/// Findings that satisfy every active criterion, in input order.
pub fn filter<'a, I>(records: I, criteria: &FilterCriteria) -> Vec<&'a Finding>
where
    I: IntoIterator<Item = &'a Finding>,
{
    FilterChain::from_criteria(criteria).apply(records)
}
