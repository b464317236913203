//! Normalization from raw `JSearch` postings to [`jobsnap_core::JobRecord`].

use chrono::{DateTime, Utc};
use jobsnap_core::{utc_iso8601, JobRecord};
use jobsnap_jsearch::JobPosting;

/// Normalizes a raw [`JobPosting`] into a [`JobRecord`], or `None` when the
/// posting has no usable identity.
///
/// Identity is the upstream `job_id`, falling back to the apply link. A
/// posting with neither cannot be deduplicated and is dropped. Empty strings
/// count as absent throughout: an empty `job_id` falls through to the link,
/// and empty optional fields become `None` rather than `""` in the snapshot.
///
/// A missing posting timestamp is backfilled with `fetched_at`, so every
/// record carries a sortable UTC timestamp even when the upstream omits one.
#[must_use]
pub fn normalize_posting(posting: JobPosting, fetched_at: DateTime<Utc>) -> Option<JobRecord> {
    let job_id = posting
        .job_id
        .filter(|s| !s.is_empty())
        .or_else(|| posting.job_apply_link.clone().filter(|s| !s.is_empty()))?;

    let job_posted_at_datetime_utc = posting
        .job_posted_at_datetime_utc
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| utc_iso8601(fetched_at));

    Some(JobRecord {
        job_id,
        job_title: posting.job_title.filter(|s| !s.is_empty()),
        employer_name: posting.employer_name.filter(|s| !s.is_empty()),
        employer_logo: posting.employer_logo.filter(|s| !s.is_empty()),
        job_city: posting.job_city.filter(|s| !s.is_empty()),
        job_state: posting.job_state.filter(|s| !s.is_empty()),
        job_country: posting.job_country.filter(|s| !s.is_empty()),
        job_apply_link: posting.job_apply_link.filter(|s| !s.is_empty()),
        job_posted_at_datetime_utc,
    })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn fetch_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 21, 9, 0, 0).unwrap()
    }

    fn posting_with_id(id: &str) -> JobPosting {
        JobPosting {
            job_id: Some(id.to_string()),
            job_title: Some("HR Data Analyst".to_string()),
            ..JobPosting::default()
        }
    }

    #[test]
    fn uses_upstream_id_when_present() {
        let record = normalize_posting(posting_with_id("abc123"), fetch_time()).unwrap();
        assert_eq!(record.job_id, "abc123");
    }

    #[test]
    fn falls_back_to_apply_link_when_id_missing() {
        let posting = JobPosting {
            job_apply_link: Some("https://jobs.example/42".to_string()),
            ..JobPosting::default()
        };
        let record = normalize_posting(posting, fetch_time()).unwrap();
        assert_eq!(record.job_id, "https://jobs.example/42");
        assert_eq!(
            record.job_apply_link.as_deref(),
            Some("https://jobs.example/42")
        );
    }

    #[test]
    fn empty_id_counts_as_missing() {
        let posting = JobPosting {
            job_id: Some(String::new()),
            job_apply_link: Some("https://jobs.example/42".to_string()),
            ..JobPosting::default()
        };
        let record = normalize_posting(posting, fetch_time()).unwrap();
        assert_eq!(record.job_id, "https://jobs.example/42");
    }

    #[test]
    fn posting_without_identity_is_dropped() {
        let posting = JobPosting {
            job_title: Some("Mystery Role".to_string()),
            ..JobPosting::default()
        };
        assert!(normalize_posting(posting, fetch_time()).is_none());
    }

    #[test]
    fn missing_timestamp_is_backfilled_with_fetch_time() {
        let record = normalize_posting(posting_with_id("abc"), fetch_time()).unwrap();
        assert_eq!(record.job_posted_at_datetime_utc, "2026-08-21T09:00:00Z");
    }

    #[test]
    fn empty_timestamp_is_backfilled_too() {
        let mut posting = posting_with_id("abc");
        posting.job_posted_at_datetime_utc = Some(String::new());
        let record = normalize_posting(posting, fetch_time()).unwrap();
        assert_eq!(record.job_posted_at_datetime_utc, "2026-08-21T09:00:00Z");
    }

    #[test]
    fn upstream_timestamp_passes_through_verbatim() {
        let mut posting = posting_with_id("abc");
        posting.job_posted_at_datetime_utc = Some("2026-08-19T23:59:59Z".to_string());
        let record = normalize_posting(posting, fetch_time()).unwrap();
        assert_eq!(record.job_posted_at_datetime_utc, "2026-08-19T23:59:59Z");
    }

    #[test]
    fn empty_optional_fields_become_none() {
        let mut posting = posting_with_id("abc");
        posting.employer_logo = Some(String::new());
        posting.job_city = Some(String::new());
        let record = normalize_posting(posting, fetch_time()).unwrap();
        assert_eq!(record.employer_logo, None);
        assert_eq!(record.job_city, None);
    }
}
