use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One normalized job posting as it appears in the published snapshot.
///
/// Optional fields serialize as `null` rather than being omitted, so the
/// snapshot schema is identical for every record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    /// Stable identity: the upstream `job_id`, or the apply link when the
    /// upstream id is absent.
    pub job_id: String,
    pub job_title: Option<String>,
    pub employer_name: Option<String>,
    pub employer_logo: Option<String>,
    pub job_city: Option<String>,
    pub job_state: Option<String>,
    pub job_country: Option<String>,
    pub job_apply_link: Option<String>,
    /// UTC posting time in RFC 3339 with a `Z` designator. Backfilled with
    /// the fetch time when the upstream omits it.
    pub job_posted_at_datetime_utc: String,
}

/// The snapshot document written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub last_updated: String,
    pub total_jobs: usize,
    pub jobs: Vec<JobRecord>,
}

impl Snapshot {
    #[must_use]
    pub fn new(jobs: Vec<JobRecord>, generated_at: DateTime<Utc>) -> Self {
        Snapshot {
            last_updated: utc_iso8601(generated_at),
            total_jobs: jobs.len(),
            jobs,
        }
    }
}

/// Format an instant as RFC 3339 with second precision and a `Z` designator.
///
/// Every timestamp the pipeline emits goes through here, so the snapshot
/// never mixes `Z` and `+00:00` spellings.
#[must_use]
pub fn utc_iso8601(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}
