use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use taskmenu::context::Context;
use taskmenu::store::Store;
use taskmenu::{config, logging, tui};

#[derive(Parser)]
#[command(
    name = "taskmenu",
    version = env!("TASKMENU_VERSION"),
    about = "Keep a personal to-do list from a terminal menu"
)]
struct Cli {
    /// Database file to use instead of the configured one
    #[arg(long, value_name = "PATH")]
    db: Option<PathBuf>,

    /// Config file to read instead of ~/.taskmenu/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    config::ensure_dirs()?;
    let cfg = match &cli.config {
        Some(path) => config::load_from(path)?,
        None => config::load()?,
    };
    logging::init(&config::log_path()?, &cfg.log_level)?;

    let db_path = match cli.db {
        Some(path) => path,
        None => cfg.db_path()?,
    };
    tracing::info!(version = env!("TASKMENU_VERSION"), db = %db_path.display(), "starting");

    let ctx = Store::open(&db_path)
        .and_then(Context::new)
        .inspect_err(|e| tracing::error!("startup failed: {e}"))?;

    tui::run(ctx, &cfg)?;
    tracing::info!("exited cleanly");
    Ok(())
}
