//! The snapshot pipeline: fetch, filter, normalize, deduplicate, write.
//!
//! [`run_snapshot`] drives one full refresh. Each keyword group of the
//! search plan becomes one API call; postings flow through the title filter
//! and normalizer, land in a first-seen-wins accumulator, and the surviving
//! records are written out as a single JSON document that replaces the
//! previous snapshot wholesale.
//!
//! A failed query costs only its own results. Only two things abort a run:
//! every query failing, or the final write failing. In both cases the
//! previous snapshot on disk is left untouched.

mod dedup;
mod error;
mod filter;
mod normalize;
mod pipeline;
mod snapshot;

pub use dedup::SnapshotAccumulator;
pub use error::PipelineError;
pub use filter::title_is_excluded;
pub use normalize::normalize_posting;
pub use pipeline::{run_snapshot, RunSummary};
pub use snapshot::write_snapshot;
