use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod snapshot;

#[derive(Debug, Parser)]
#[command(name = "jobsnap")]
#[command(about = "Fetches job postings and publishes a JSON snapshot")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one snapshot refresh: fetch, filter, deduplicate, write.
    Snapshot {
        /// Print the rendered queries and exit without fetching.
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Config load precedes everything else: a missing credential aborts
    // here with a non-zero exit, before any network call.
    let config = jobsnap_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Some(Commands::Snapshot { dry_run }) => snapshot::run(&config, dry_run).await,
        // Bare invocation refreshes the snapshot, matching the cron deployment.
        None => snapshot::run(&config, false).await,
    }
}
