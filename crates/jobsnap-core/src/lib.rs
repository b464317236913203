//! Shared configuration and data model for the jobsnap pipeline.
//!
//! Holds the environment-driven [`AppConfig`], the [`SearchPlan`] that the
//! query builder expands into `JSearch` query strings, and the persisted
//! snapshot shapes ([`JobRecord`], [`Snapshot`]) that the static front-end
//! consumes.

use thiserror::Error;

mod app_config;
mod config;
mod search;
mod types;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use search::{load_search_plan, KeywordGroup, SearchPlan, SearchQuery, DATE_POSTED_VALUES};
pub use types::{utc_iso8601, JobRecord, Snapshot};

/// Errors raised while loading configuration or the search plan.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// An environment variable is set but its value cannot be parsed.
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    /// The search-plan YAML file could not be read.
    #[error("failed to read search plan {path}: {source}")]
    SearchFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The search-plan YAML file could not be parsed.
    #[error("failed to parse search plan: {0}")]
    SearchFileParse(#[from] serde_yaml::Error),

    /// The search plan parsed but failed validation.
    #[error("invalid search plan: {0}")]
    Validation(String),
}
