use thiserror::Error;

/// Errors that abort a snapshot run.
///
/// Per-query fetch failures are not represented here; the pipeline logs
/// them and keeps going. These variants are the cases where continuing
/// would either publish an empty snapshot over a good one or lose the
/// run's output entirely.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Reading or writing the snapshot file failed.
    #[error("snapshot I/O error for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot document could not be serialized.
    #[error("snapshot serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Every query in the plan failed, so there is nothing to publish.
    /// The previous snapshot on disk stays in place.
    #[error("all {attempted} search queries failed; keeping previous snapshot")]
    AllQueriesFailed { attempted: usize },
}
