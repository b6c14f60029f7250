//! Populate the track store with random sample tracks.
//!
//! ```text
//! melodex-seed --count 100 --data-dir ./data
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use melodex_api::config::ServerConfig;
use melodex_db::StorePaths;

#[derive(Debug, Parser)]
#[command(name = "melodex-seed", about = "Seed the track store with sample data")]
struct Args {
    /// Number of tracks to generate.
    #[arg(short, long, default_value_t = 50)]
    count: usize,

    /// Data directory holding `tracks/`, `uploads/` and `genres.json`.
    /// Defaults to the server's store configuration.
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "melodex_db=info".into()),
        )
        .init();

    let args = Args::parse();

    let paths = match &args.data_dir {
        Some(dir) => StorePaths::under(dir),
        None => {
            ServerConfig::from_env()
                .context("Invalid store configuration")?
                .store
        }
    };
    let tracks_dir = paths.tracks_dir.clone();

    let store = melodex_db::open_store(paths)
        .await
        .context("Failed to open track store")?;
    melodex_db::initialize(&store)
        .await
        .context("Failed to initialize track store")?;

    let mut rng = rand::rng();
    let report = melodex_db::seed::seed_tracks(&store, args.count, &mut rng)
        .await
        .context("Seeding failed")?;

    println!(
        "Seeded {} tracks ({} skipped as duplicates) into {}",
        report.created,
        report.skipped,
        tracks_dir.display()
    );
    Ok(())
}
