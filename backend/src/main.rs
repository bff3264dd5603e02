//! Backend entry-point: seeds the in-memory store and serves the REST API.

use std::net::SocketAddr;

use actix_web::web;
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use techpulse_backend::inbound::http::health::HealthState;
use techpulse_backend::sample_data::seed_demo_data;
use techpulse_backend::server::{create_server, ServerConfig};
use techpulse_backend::storage::MemoryStore;

/// Command-line configuration.
#[derive(Debug, Parser)]
#[command(name = "techpulse-backend", about = "TechPulse dashboard backend")]
struct Cli {
    /// Socket address to bind.
    #[arg(long, default_value = "0.0.0.0:8080")]
    bind: SocketAddr,

    /// Start with an empty store instead of the generated demo dataset.
    #[arg(long)]
    no_demo_data: bool,

    /// Fixed RNG seed for a reproducible demo dataset.
    #[arg(long)]
    demo_seed: Option<u64>,
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();

    let store = MemoryStore::new();
    if !cli.no_demo_data {
        let mut rng = match cli.demo_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        seed_demo_data(&store, &mut rng)
            .map_err(|e| std::io::Error::other(format!("demo data seeding failed: {e}")))?;
        info!(
            departments = store.departments().len(),
            employees = store.employees().len(),
            activities = store.activities().len(),
            "seeded demo data"
        );
    }

    let health_state = web::Data::new(HealthState::new());
    info!(bind = %cli.bind, "starting server");
    let server = create_server(store, health_state, ServerConfig::new(cli.bind))?;
    server.await
}
