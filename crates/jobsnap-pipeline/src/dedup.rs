//! Cross-query deduplication.

use std::collections::HashSet;

use jobsnap_core::JobRecord;

/// Accumulates records across queries, keeping the first occurrence of each
/// identity.
///
/// Queries overlap heavily (a posting matching "HR Data Analyst" often also
/// matches "People Analytics"), so later duplicates are discarded wholesale
/// rather than merged. Insertion order is preserved, which keeps the
/// snapshot ordering stable for a given plan.
#[derive(Debug, Default)]
pub struct SnapshotAccumulator {
    seen: HashSet<String>,
    jobs: Vec<JobRecord>,
}

impl SnapshotAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record unless its identity was already seen. Returns whether
    /// the record was kept.
    pub fn insert(&mut self, record: JobRecord) -> bool {
        if self.seen.insert(record.job_id.clone()) {
            self.jobs.push(record);
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Consumes the accumulator, yielding the kept records in insertion
    /// order.
    #[must_use]
    pub fn into_jobs(self) -> Vec<JobRecord> {
        self.jobs
    }
}
