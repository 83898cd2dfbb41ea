use tracing::trace;

use super::criteria::FilterCriteria;
use super::predicates::{FrameworkPredicate, RegionPredicate, StatusPredicate};
use super::traits::RecordFilter;
use crate::finding::Finding;

/// Ordered set of predicates applied as an intersection.
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<Box<dyn RecordFilter>>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build a chain holding one predicate per active criterion.
    /// Inactive (empty) criteria contribute nothing.
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let mut chain = Self::new();
        if !criteria.framework.is_empty() {
            chain.register(Box::new(FrameworkPredicate::new(&criteria.framework)));
        }
        if !criteria.region.is_empty() {
            chain.register(Box::new(RegionPredicate::new(&criteria.region)));
        }
        if criteria.status.is_active() {
            chain.register(Box::new(StatusPredicate::new(criteria.status.clone())));
        }
        chain
    }

    pub fn register(&mut self, filter: Box<dyn RecordFilter>) {
        self.filters.push(filter);
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    pub fn matches(&self, finding: &Finding) -> bool {
        self.filters.iter().all(|f| f.matches(finding))
    }

    /// Keep the findings every predicate accepts, preserving input order.
    pub fn apply<'a, I>(&self, records: I) -> Vec<&'a Finding>
    where
        I: IntoIterator<Item = &'a Finding>,
    {
        if self.is_empty() {
            return records.into_iter().collect();
        }
        let kept: Vec<&Finding> = records.into_iter().filter(|f| self.matches(f)).collect();
        trace!(filters = ?self.names(), kept = kept.len(), "applied filter chain");
        kept
    }
}
