// Arbitrage Dashboard - terminal front end
// Mounts the simulated panels and renders them as log tables

use clap::{Parser, Subcommand};
use std::path::Path;
use std::time::Duration;
use tracing::{error, info, warn, Level};
use arbitrage_dashboard::{Config, DashboardError};

#[path = "../cli/dashboard_commands.rs"]
mod dashboard_commands;

#[derive(Parser)]
#[command(name = "arb-dash")]
#[command(version = "0.1.0")]
#[command(about = "Simulated cross-venue arbitrage dashboard", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "config.toml")]
    config: String,

    /// Seed the simulators for reproducible output
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter config.toml
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Mount the dashboard and log every refresh
    Run {
        /// Stop after this many seconds (runs until Ctrl+C otherwise)
        #[arg(short, long)]
        seconds: Option<u64>,

        /// Leave the live spread scanner unmounted
        #[arg(long)]
        no_scanner: bool,
    },

    /// Print a single snapshot of every panel
    Snapshot {
        /// Emit JSON instead of tables
        #[arg(short, long)]
        json: bool,
    },

    /// Show the effective configuration
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Read config before logging so its log level can apply; errors and the
    // missing-file warning are reported once the subscriber is up
    let config_exists = Path::new(&cli.config).exists();
    let loaded = Config::load_or_default(&cli.config).map_err(DashboardError::from);

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        loaded
            .as_ref()
            .ok()
            .and_then(|c| c.logging.log_level.parse::<Level>().ok())
            .unwrap_or(Level::INFO)
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("🚀 Arbitrage Dashboard v0.1.0");
    info!("📁 Config: {}", cli.config);

    // Init doesn't need a config (it creates it)
    if let Commands::Init { force } = cli.command {
        dashboard_commands::init_config(&cli.config, force)?;
        return Ok(());
    }

    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("❌ Configuration Error [{}]", e.category());
            for line in e.user_message().lines() {
                error!("{}", line);
            }
            std::process::exit(1);
        }
    };

    if !config_exists {
        warn!("⚠️  {} not found, using built-in defaults (run: arb-dash init)", cli.config);
    }
    if let Some(seed) = cli.seed {
        config.simulation.seed = Some(seed);
    }

    match cli.command {
        Commands::Init { .. } => {}

        Commands::Run { seconds, no_scanner } => {
            if no_scanner {
                config.scanner.enabled = false;
            }
            dashboard_commands::run_dashboard(config, seconds.map(Duration::from_secs)).await?;
        }

        Commands::Snapshot { json } => {
            dashboard_commands::print_snapshot(config, json).await?;
        }

        Commands::Status => {
            dashboard_commands::show_status(&config);
        }
    }

    Ok(())
}
