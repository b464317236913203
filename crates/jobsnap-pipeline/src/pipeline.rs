//! Snapshot run orchestration.

use std::path::Path;
use std::time::Duration;

use chrono::Utc;
use jobsnap_core::{SearchPlan, Snapshot};
use jobsnap_jsearch::JsearchClient;

use crate::dedup::SnapshotAccumulator;
use crate::error::PipelineError;
use crate::filter::title_is_excluded;
use crate::normalize::normalize_posting;
use crate::snapshot::write_snapshot;

/// Counters describing one snapshot run.
///
/// `fetched` splits into the three drop buckets plus `kept`; the counters are
/// what the CLI reports and what the run's log line carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub queries_total: usize,
    pub queries_failed: usize,
    /// Raw postings returned by the successful queries.
    pub fetched: usize,
    /// Postings dropped by the title exclusion filter.
    pub excluded_title: usize,
    /// Postings dropped for lacking both a job id and an apply link.
    pub missing_identity: usize,
    /// Postings dropped as cross-query duplicates.
    pub duplicates: usize,
    /// Records written to the snapshot.
    pub kept: usize,
}

/// Runs one full snapshot refresh.
///
/// 1. Render one query per keyword group.
/// 2. Fetch each query's postings; a failed query is logged and skipped.
/// 3. Drop postings whose title matches an exclusion term.
/// 4. Normalize the rest, dropping postings with no usable identity.
/// 5. Deduplicate across queries, first occurrence winning.
/// 6. Write the snapshot, replacing the previous file wholesale.
///
/// # Errors
///
/// Returns [`PipelineError::AllQueriesFailed`] when no query succeeded, and
/// [`PipelineError::Io`] / [`PipelineError::Serialize`] when the final write
/// fails. In every error case the previous snapshot is left untouched.
pub async fn run_snapshot(
    client: &JsearchClient,
    plan: &SearchPlan,
    output_path: &Path,
    inter_query_delay_ms: u64,
) -> Result<RunSummary, PipelineError> {
    let queries = plan.queries();
    let mut accumulator = SnapshotAccumulator::new();

    let mut queries_failed = 0usize;
    let mut fetched = 0usize;
    let mut excluded_title = 0usize;
    let mut missing_identity = 0usize;
    let mut duplicates = 0usize;

    for query in &queries {
        match client
            .search_jobs(&query.query, &plan.date_posted, &plan.employment_types)
            .await
        {
            Ok(postings) => {
                let fetched_at = Utc::now();
                tracing::debug!(
                    group = %query.group,
                    count = postings.len(),
                    "collected postings"
                );
                fetched += postings.len();

                for posting in postings {
                    let excluded = posting
                        .job_title
                        .as_deref()
                        .is_some_and(|title| title_is_excluded(title, &plan.exclude_titles));
                    if excluded {
                        excluded_title += 1;
                        continue;
                    }

                    match normalize_posting(posting, fetched_at) {
                        Some(record) => {
                            if !accumulator.insert(record) {
                                duplicates += 1;
                            }
                        }
                        None => missing_identity += 1,
                    }
                }
            }
            Err(e) => {
                queries_failed += 1;
                tracing::warn!(
                    group = %query.group,
                    error = %e,
                    "search query failed; dropping its results and continuing"
                );
            }
        }

        // Fixed pause after each query's processing, successful or not,
        // the last one included.
        if inter_query_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(inter_query_delay_ms)).await;
        }
    }

    if queries_failed == queries.len() {
        return Err(PipelineError::AllQueriesFailed {
            attempted: queries.len(),
        });
    }

    let kept = accumulator.len();
    let snapshot = Snapshot::new(accumulator.into_jobs(), Utc::now());
    write_snapshot(&snapshot, output_path)?;

    tracing::info!(
        kept,
        duplicates,
        excluded = excluded_title,
        no_identity = missing_identity,
        failed_queries = queries_failed,
        path = %output_path.display(),
        "snapshot written"
    );

    Ok(RunSummary {
        queries_total: queries.len(),
        queries_failed,
        fetched,
        excluded_title,
        missing_identity,
        duplicates,
        kept,
    })
}
