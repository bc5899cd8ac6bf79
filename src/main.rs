//! Docmirror main entry point
//!
//! This is the command-line interface for the docmirror documentation
//! crawler.

use clap::Parser;
use docmirror::config::{load_config, Config};
use docmirror::crawler::crawl;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Docmirror: mirror a documentation site as Markdown
///
/// Crawls every page under the seed URL's path prefix, converts each
/// page's main content to Markdown, and writes the result to a directory
/// tree mirroring the site. GitHub repository URLs are downloaded as a
/// ZIP snapshot instead of being crawled.
#[derive(Parser, Debug)]
#[command(name = "docmirror")]
#[command(version)]
#[command(about = "Mirror a documentation site as Markdown", long_about = None)]
struct Cli {
    /// Seed URL; its scheme, host, and path prefix define the crawl scope
    #[arg(value_name = "URL")]
    url: String,

    /// Number of concurrent fetch workers
    #[arg(short, long)]
    workers: Option<usize>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => Config::default(),
    };

    if let Some(workers) = cli.workers {
        config.crawler.max_workers = workers;
    }

    match crawl(&cli.url, &config).await {
        Ok(stats) => {
            tracing::info!(
                "Done: {} pages saved over {} rounds",
                stats.pages_saved,
                stats.rounds
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("docmirror=info,warn"),
            1 => EnvFilter::new("docmirror=debug,info"),
            2 => EnvFilter::new("docmirror=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
