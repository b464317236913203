//! Snapshot command handler.

use jobsnap_core::{load_search_plan, AppConfig, SearchPlan};
use jobsnap_jsearch::JsearchClient;

/// Resolves the search plan, then either previews it (`dry_run`) or runs the
/// full pipeline and reports the outcome.
///
/// # Errors
///
/// Returns an error if a configured plan file fails to load, the HTTP client
/// cannot be constructed, or the pipeline aborts (all queries failed, or the
/// snapshot could not be written).
pub(crate) async fn run(config: &AppConfig, dry_run: bool) -> anyhow::Result<()> {
    let plan = match &config.searches_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading search plan override");
            load_search_plan(path)?
        }
        None => SearchPlan::default(),
    };

    if dry_run {
        let queries = plan.queries();
        println!("dry-run: would run {} queries:", queries.len());
        for query in &queries {
            println!("  [{}] {}", query.group, query.query);
        }
        return Ok(());
    }

    let client = JsearchClient::new(&config.api_key, config.request_timeout_secs)
        .map_err(|e| anyhow::anyhow!("failed to build JSearch client: {e}"))?;

    let summary = jobsnap_pipeline::run_snapshot(
        &client,
        &plan,
        &config.output_path,
        config.inter_query_delay_ms,
    )
    .await?;

    println!(
        "saved {} jobs to {} ({} fetched, {} excluded by title, {} duplicates, {} without identity, {}/{} queries failed)",
        summary.kept,
        config.output_path.display(),
        summary.fetched,
        summary.excluded_title,
        summary.duplicates,
        summary.missing_identity,
        summary.queries_failed,
        summary.queries_total,
    );

    Ok(())
}
