//! HTTP client for the `JSearch` REST API.
//!
//! Wraps `reqwest` with the `RapidAPI` credential headers, typed response
//! deserialization, and envelope-level error handling. The API can answer
//! 200 while still reporting failure via `"status": "ERROR"`; that case is
//! surfaced as [`JsearchError::ApiError`].

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::JsearchError;
use crate::types::{JobPosting, SearchResponse};

const DEFAULT_BASE_URL: &str = "https://jsearch.p.rapidapi.com/";

/// Value of the `X-RapidAPI-Host` header, fixed for this API regardless of
/// the base URL in use.
const RAPIDAPI_HOST: &str = "jsearch.p.rapidapi.com";

/// Client for the `JSearch` REST API.
///
/// Manages the HTTP client, API key, and search endpoint URL. Use
/// [`JsearchClient::new`] for production or [`JsearchClient::with_base_url`]
/// to point at a mock server in tests.
pub struct JsearchClient {
    client: Client,
    api_key: String,
    search_url: Url,
}

impl JsearchClient {
    /// Creates a new client pointed at the production `JSearch` API.
    ///
    /// # Errors
    ///
    /// Returns [`JsearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, JsearchError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`JsearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`JsearchError::ApiError`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, JsearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("jobsnap/0.1 (jobs-snapshot)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // join() appends the endpoint as a path segment instead of replacing
        // the last one.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let search_url = Url::parse(&normalised)
            .and_then(|base| base.join("search"))
            .map_err(|e| JsearchError::ApiError(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            search_url,
        })
    }

    /// Runs one search against the `search` endpoint and returns the raw
    /// postings from its `data` array.
    ///
    /// Always requests the first page only (`page=1`, `num_pages=1`); the
    /// snapshot favours freshness over depth, and the caller issues one call
    /// per keyword group instead of paging.
    ///
    /// # Errors
    ///
    /// - [`JsearchError::ApiError`] if the API returns an error envelope.
    /// - [`JsearchError::Http`] on network failure or non-2xx HTTP status.
    /// - [`JsearchError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn search_jobs(
        &self,
        query: &str,
        date_posted: &str,
        employment_types: &str,
    ) -> Result<Vec<JobPosting>, JsearchError> {
        let url = self.build_url(&[
            ("query", query),
            ("page", "1"),
            ("num_pages", "1"),
            ("date_posted", date_posted),
            ("employment_types", employment_types),
        ]);
        let body = self.request_json(&url).await?;
        Self::check_api_error(&body)?;

        let envelope: SearchResponse =
            serde_json::from_value(body).map_err(|e| JsearchError::Deserialize {
                context: format!("search(query={query})"),
                source: e,
            })?;

        Ok(envelope.data)
    }

    /// Builds the full request URL with properly percent-encoded query
    /// parameters. The credential travels in headers, never in the URL, so
    /// the URL is safe to echo in error messages.
    fn build_url(&self, params: &[(&str, &str)]) -> Url {
        let mut url = self.search_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    /// Sends a GET request with the `RapidAPI` headers, asserts a 2xx HTTP
    /// status, and parses the response body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`JsearchError::Http`] on network failure or a non-2xx status.
    /// Returns [`JsearchError::Deserialize`] if the body is not valid JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, JsearchError> {
        let response = self
            .client
            .get(url.clone())
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", RAPIDAPI_HOST)
            .send()
            .await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| JsearchError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }

    /// Checks the top-level `"status"` field and returns an error if it
    /// indicates failure.
    fn check_api_error(body: &serde_json::Value) -> Result<(), JsearchError> {
        if body.get("status").and_then(serde_json::Value::as_str) == Some("ERROR") {
            let msg = body
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(serde_json::Value::as_str)
                .or_else(|| body.get("message").and_then(serde_json::Value::as_str))
                .unwrap_or("unknown error")
                .to_string();
            return Err(JsearchError::ApiError(msg));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> JsearchClient {
        JsearchClient::with_base_url("test-key", 30, base_url)
            .expect("client construction should not fail")
    }

    #[test]
    fn build_url_constructs_correct_query_string() {
        let client = test_client("https://jsearch.p.rapidapi.com");
        let url = client.build_url(&[
            ("query", "hr"),
            ("page", "1"),
            ("num_pages", "1"),
            ("date_posted", "3days"),
            ("employment_types", "FULLTIME"),
        ]);
        assert_eq!(
            url.as_str(),
            "https://jsearch.p.rapidapi.com/search?query=hr&page=1&num_pages=1&date_posted=3days&employment_types=FULLTIME"
        );
    }

    #[test]
    fn build_url_strips_trailing_slash() {
        let client = test_client("http://127.0.0.1:9000/");
        let url = client.build_url(&[("query", "hr")]);
        assert_eq!(url.as_str(), "http://127.0.0.1:9000/search?query=hr");
    }

    #[test]
    fn build_url_encodes_quoted_queries() {
        let client = test_client("https://jsearch.p.rapidapi.com");
        let url = client.build_url(&[("query", "(\"HR Data Analyst\") in USA")]);
        assert!(
            !url.as_str().contains('"') && !url.as_str().contains(' '),
            "query param should be percent-encoded: {url}"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = JsearchClient::with_base_url("test-key", 30, "not a url");
        assert!(matches!(result, Err(JsearchError::ApiError(_))));
    }

    #[test]
    fn check_api_error_prefers_nested_message() {
        let body = serde_json::json!({
            "status": "ERROR",
            "error": { "message": "quota exceeded", "code": 429 }
        });
        let err = JsearchClient::check_api_error(&body).unwrap_err();
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[test]
    fn check_api_error_accepts_ok_status() {
        let body = serde_json::json!({ "status": "OK", "data": [] });
        assert!(JsearchClient::check_api_error(&body).is_ok());
    }
}
