//! `JSearch` API response types.
//!
//! The wire format is permissive: apart from the envelope, every field of a
//! posting may be absent, `null`, or an empty string depending on which job
//! board the result was aggregated from. All posting fields are therefore
//! `Option<String>` with `#[serde(default)]`, and interpretation is left to
//! the caller.

use serde::Deserialize;

/// Top-level envelope of the `search` endpoint:
/// `{"status": "OK", "request_id": "...", "data": [...]}`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub data: Vec<JobPosting>,
}

/// One job posting exactly as the API returns it, before any filtering.
///
/// Unknown fields are ignored; the API attaches dozens of extra attributes
/// (salary estimates, highlights, publisher metadata) that the snapshot does
/// not carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct JobPosting {
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub employer_name: Option<String>,
    #[serde(default)]
    pub employer_logo: Option<String>,
    #[serde(default)]
    pub job_city: Option<String>,
    #[serde(default)]
    pub job_state: Option<String>,
    #[serde(default)]
    pub job_country: Option<String>,
    #[serde(default)]
    pub job_apply_link: Option<String>,
    #[serde(default)]
    pub job_posted_at_datetime_utc: Option<String>,
}
