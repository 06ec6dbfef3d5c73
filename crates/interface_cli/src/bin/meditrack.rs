//! MediTrack - clinic record console
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin meditrack
//!
//! # Restore previously saved data from a custom directory
//! MEDITRACK_LOAD_DATA=true MEDITRACK_DATA_DIR=/var/lib/meditrack cargo run --bin meditrack
//! ```
//!
//! # Environment Variables
//!
//! * `MEDITRACK_DATA_DIR` - Directory for CSV data files (default: data)
//! * `MEDITRACK_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `MEDITRACK_LOAD_DATA` - Load saved CSV data on startup (default: false)

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use interface_cli::menu;
use interface_cli::sample::seed_sample_data;
use interface_cli::{CliConfig, ClinicApp};

fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = CliConfig::from_env().unwrap_or_default();
    init_tracing(&config.log_level);

    tracing::info!(data_dir = %config.data_dir, "starting MediTrack console");

    let mut app = ClinicApp::new(config);
    if app.config.load_data {
        app.load_from_disk().context("loading saved data")?;
    }
    if app.is_empty() {
        tracing::info!("no stored data, seeding sample roster");
        seed_sample_data(&mut app);
    }

    let stdin = std::io::stdin();
    menu::run(&mut app, &mut stdin.lock())?;

    tracing::info!("goodbye");
    Ok(())
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
