//! Document review screen - Entry Point

use clap::Parser;
use docreview::store::{DocumentStore, InboxScanner};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Review scanned documents and capture new ones from an inbox directory
#[derive(Parser, Debug)]
#[command(name = "docreview")]
#[command(version)]
#[command(about = "Paged review screen for scanned documents")]
pub struct Args {
    /// Directory new scans are picked up from
    pub inbox: Option<PathBuf>,

    /// JSON file with documents to start with
    #[arg(long)]
    pub seed: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = docreview::config::load_config_with_precedence(args.config.clone())?;
        let merged = docreview::config::merge_config(config_file);
        let with_env = docreview::config::apply_env_overrides(merged);
        docreview::config::apply_cli_overrides(with_env, args.inbox.clone(), args.seed.clone())
    };

    docreview::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let upload_delay = Duration::from_millis(config.upload_delay_ms);
    let store = match &config.seed_file {
        Some(seed) => DocumentStore::load_seed(seed, upload_delay)?,
        None => DocumentStore::new(upload_delay),
    };

    if let Err(err) = std::fs::create_dir_all(&config.inbox_dir) {
        warn!(inbox = %config.inbox_dir.display(), error = %err, "Could not create scan inbox");
    }
    let scanner = Arc::new(InboxScanner::new(config.inbox_dir.clone()));

    // Scans and uploads run here; the review screen stays on the main thread.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let _guard = runtime.enter();

    docreview::view::run_review(store, scanner, runtime.handle().clone(), &config)?;

    Ok(())
}
