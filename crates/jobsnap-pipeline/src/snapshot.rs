//! Snapshot persistence.

use std::fs;
use std::path::Path;

use jobsnap_core::Snapshot;

use crate::error::PipelineError;

/// Serializes the snapshot as pretty-printed JSON and writes it to `path`,
/// replacing any previous file wholesale.
///
/// Missing parent directories are created, so a fresh checkout can write to
/// `public/jobs.json` without setup. Non-ASCII text is written literally,
/// not `\u`-escaped.
///
/// # Errors
///
/// Returns [`PipelineError::Serialize`] if encoding fails and
/// [`PipelineError::Io`] if the directory or file cannot be written.
pub fn write_snapshot(snapshot: &Snapshot, path: &Path) -> Result<(), PipelineError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| PipelineError::Io {
                path: parent.display().to_string(),
                source: e,
            })?;
        }
    }

    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, json).map_err(|e| PipelineError::Io {
        path: path.display().to_string(),
        source: e,
    })
}
