use std::path::PathBuf;

/// Runtime configuration assembled from environment variables.
///
/// `api_key` is the `RapidAPI` credential and the only required setting;
/// everything else carries a default suited to the scheduled-run deployment.
#[derive(Clone)]
pub struct AppConfig {
    /// `RapidAPI` credential sent as `X-RapidAPI-Key` on every request.
    pub api_key: String,
    /// Destination of the snapshot document. The parent directory is
    /// created on demand.
    pub output_path: PathBuf,
    /// Optional YAML file overriding the built-in search plan.
    pub searches_path: Option<PathBuf>,
    pub log_level: String,
    pub request_timeout_secs: u64,
    /// Fixed pause after each query's processing, regardless of outcome.
    pub inter_query_delay_ms: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"[redacted]")
            .field("output_path", &self.output_path)
            .field("searches_path", &self.searches_path)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("inter_query_delay_ms", &self.inter_query_delay_ms)
            .finish()
    }
}
