use thiserror::Error;

/// Errors returned by the `JSearch` API client.
#[derive(Debug, Error)]
pub enum JsearchError {
    /// Network or TLS failure from the underlying HTTP client, including
    /// non-2xx HTTP statuses.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered 200 but flagged `"status": "ERROR"` in the envelope.
    #[error("JSearch API error: {0}")]
    ApiError(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
