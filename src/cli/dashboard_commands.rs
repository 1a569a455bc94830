// Dashboard command implementations for arb-dash

use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};
use tokio::sync::watch;
use tracing::{info, warn};

use arbitrage_dashboard::dashboard::render;
use arbitrage_dashboard::{
    Config, Dashboard, DashboardResult, DashboardSnapshot, SessionProgress,
};

const EXAMPLE_CONFIG: &str = include_str!("../../config.toml.example");

pub fn init_config(path: &str, force: bool) -> DashboardResult<()> {
    if Path::new(path).exists() && !force {
        warn!("⚠️  {} already exists, skipping (use --force to overwrite)", path);
        return Ok(());
    }

    fs::write(path, EXAMPLE_CONFIG)?;
    info!("📝 Created {}", path);
    info!("💡 Next steps:");
    info!("   1. Adjust refresh intervals or venues in {}", path);
    info!("   2. Run: arb-dash run --seconds 30");
    Ok(())
}

pub fn show_status(config: &Config) {
    info!("📊 Dashboard configuration");
    info!("   🎲 Seed: {}", config.simulation.seed.map_or("entropy".to_string(), |s| s.to_string()));
    info!("   💰 Price feed: {}/{} every {:?} (history regeneration: {})",
        config.price_feed.instrument,
        config.price_feed.counter,
        config.price_feed.refresh_interval(),
        config.price_feed.regenerate_history
    );
    info!("   🎯 Opportunities: {} venues every {:?}, spread up to {:.1}%",
        config.opportunities.venues.len(),
        config.opportunities.refresh_interval(),
        config.opportunities.max_spread * 100.0
    );
    info!("   📜 Transactions: {} venues over the last {}h (generated once)",
        config.transactions.venues.len(),
        config.transactions.window_hours
    );
    if config.scanner.enabled {
        info!("   🔍 Scanner: {} quotes every {:?}, alert above ${:.2}",
            config.scanner.quotes.len(),
            config.scanner.refresh_interval(),
            config.scanner.min_profit
        );
    } else {
        info!("   🔍 Scanner: disabled");
    }
}

pub async fn print_snapshot(config: Config, json: bool) -> DashboardResult<()> {
    let dashboard = Dashboard::mount(&config);
    let snapshot = dashboard.snapshot();
    dashboard.unmount().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        for line in snapshot_lines(&snapshot) {
            println!("{}", line);
        }
    }

    Ok(())
}

fn snapshot_lines(snapshot: &DashboardSnapshot) -> Vec<String> {
    let mut lines = vec!["== Cross-Chain Price Monitor ==".to_string()];
    lines.extend(render::price_panel(&snapshot.price_feed));
    lines.push("== Arbitrage Opportunities ==".to_string());
    lines.extend(render::opportunity_table(&snapshot.opportunities));
    lines.push("== Transaction History ==".to_string());
    lines.extend(render::transaction_table(&snapshot.transactions));
    if let Some(scanner) = &snapshot.scanner {
        lines.push("== Live Spread Scanner ==".to_string());
        lines.extend(render::scanner_panel(scanner, snapshot.scanner_analyzing));
    }
    lines
}

fn log_lines(title: &str, lines: Vec<String>) {
    info!("{}", title);
    for line in lines {
        info!("   {}", line);
    }
}

async fn next_change<T>(rx: Option<&mut watch::Receiver<T>>) -> Result<(), watch::error::RecvError> {
    match rx {
        Some(rx) => rx.changed().await,
        None => std::future::pending().await,
    }
}

pub async fn run_dashboard(config: Config, duration: Option<Duration>) -> DashboardResult<()> {
    let dashboard = Dashboard::mount(&config);
    let log_snapshots = config.logging.enable_snapshot_logging;

    if log_snapshots {
        log_lines("🖥️  Initial dashboard", snapshot_lines(&dashboard.snapshot()));
    }

    match duration {
        Some(d) => info!("🎯 Running for {}s - Press Ctrl+C to stop early", d.as_secs()),
        None => info!("🎯 Running - Press Ctrl+C to stop"),
    }
    info!("⏱️  Fastest refresh: {:?}", Dashboard::fastest_refresh(&config));

    let mut prices = dashboard.prices.subscribe();
    let mut opportunities = dashboard.opportunities.subscribe();
    let mut scanner = dashboard.scanner.as_ref().map(|s| s.subscribe());

    let progress = duration.map(SessionProgress::new);
    let started = Instant::now();
    let mut updates: u64 = 0;
    let mut interrupted = false;

    let deadline = async {
        match duration {
            Some(d) => tokio::time::sleep(d).await,
            None => std::future::pending().await,
        }
    };
    tokio::pin!(deadline);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = &mut deadline => {
                info!("⏰ Session completed after scheduled duration");
                break;
            }
            _ = &mut ctrl_c => {
                info!("🛑 Received shutdown signal");
                interrupted = true;
                break;
            }
            changed = prices.changed() => {
                if changed.is_err() { break; }
                let snapshot = prices.borrow_and_update().clone();
                if log_snapshots {
                    log_lines("💰 Price monitor", render::price_panel(&snapshot));
                }
            }
            changed = opportunities.changed() => {
                if changed.is_err() { break; }
                let snapshot = opportunities.borrow_and_update().clone();
                if log_snapshots {
                    log_lines("🎯 Arbitrage opportunities", render::opportunity_table(&snapshot));
                }
            }
            changed = next_change(scanner.as_mut()) => {
                if changed.is_err() { break; }
                if let Some(rx) = scanner.as_mut() {
                    let snapshot = rx.borrow_and_update().clone();
                    if log_snapshots {
                        log_lines("🔍 Spread scanner", render::scanner_panel(&snapshot, true));
                    }
                }
            }
        }

        updates += 1;
        if let Some(progress) = &progress {
            let best = dashboard
                .opportunities
                .current()
                .iter()
                .map(|o| o.profit_percent)
                .fold(None, |best: Option<f64>, pct| Some(best.map_or(pct, |b| b.max(pct))));
            progress.update(started.elapsed(), best);
        }
    }

    if let Some(progress) = &progress {
        if interrupted {
            progress.abandon("Ctrl+C");
        } else {
            progress.finish(updates);
        }
    }

    info!("📊 Session summary: {} updates in {:.1}s", updates, started.elapsed().as_secs_f64());
    dashboard.unmount().await
}
