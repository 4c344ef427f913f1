//! Giftdrop Command Line Interface
//!
//! Usage:
//!   giftdrop start --assets <dir>   - Refresh the catalog and run the service
//!   giftdrop scan --assets <dir>    - List the assets a refresh would seed
//!
//! `start` wires the whole service together: one store, one claim
//! arbiter, one broadcast scheduler, one API server, all constructed
//! here and passed by handle.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use giftdrop_api::{run_server, ApiConfig, AppState};
use giftdrop_core::store::PrizeStore;
use giftdrop_engine::{
    refresh_catalog, AssetCatalog, AudienceService, BroadcastScheduler, ClaimArbiter, DirCatalog,
    LogGateway, NotificationGateway, SchedulerConfig,
};
use giftdrop_store::MemoryStore;

#[derive(Parser)]
#[command(name = "giftdrop")]
#[command(about = "Giftdrop mystery-prize distribution service")]
#[command(version)]
struct Cli {
    /// Directory holding the prize payload assets
    #[arg(short, long, default_value = "assets")]
    assets: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Refresh the catalog and run the scheduler plus the API server
    Start {
        /// Host to bind the API to
        #[arg(short = 'H', long, default_value = "0.0.0.0")]
        host: String,
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,
        /// Seconds between broadcast cycles (overrides environment)
        #[arg(long)]
        interval: Option<u64>,
        /// Enable permissive CORS on the API
        #[arg(long)]
        cors: bool,
    },

    /// List the assets a catalog refresh would seed
    Scan,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let catalog: Arc<dyn AssetCatalog> = Arc::new(DirCatalog::new(&cli.assets));

    match cli.command {
        Commands::Scan => {
            for payload_ref in catalog.list().await? {
                println!("{}", payload_ref);
            }
            Ok(())
        }
        Commands::Start {
            host,
            port,
            interval,
            cors,
        } => start(catalog, host, port, interval, cors).await,
    }
}

async fn start(
    catalog: Arc<dyn AssetCatalog>,
    host: String,
    port: u16,
    interval: Option<u64>,
    cors: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let store: Arc<dyn PrizeStore> = Arc::new(MemoryStore::new());
    let gateway: Arc<dyn NotificationGateway> = Arc::new(LogGateway);

    // One-shot bootstrap: wipe and reseed the prize table.
    let seeded = refresh_catalog(&store, &catalog).await?;
    info!(count = seeded, "Prize catalog ready");

    let mut scheduler_config = SchedulerConfig::from_env();
    if let Some(secs) = interval {
        scheduler_config.broadcast_interval_secs = secs;
    }

    let scheduler = BroadcastScheduler::new(
        store.clone(),
        gateway.clone(),
        catalog,
        scheduler_config,
    );
    scheduler.start();

    let arbiter = Arc::new(ClaimArbiter::new(store.clone(), gateway));
    let audience = Arc::new(AudienceService::new(store.clone()));
    let state = AppState::new(arbiter, audience, store);

    let api_config = ApiConfig {
        host,
        port,
        enable_cors: cors,
    };

    tokio::select! {
        result = run_server(&api_config, state) => result?,
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
            scheduler.stop();
        }
    }

    Ok(())
}
