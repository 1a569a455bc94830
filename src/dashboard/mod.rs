// Dashboard: mounts every panel and hands out combined snapshots

pub mod panels;
pub mod render;

pub use panels::{OpportunityBoard, PriceMonitor, SpreadScanner, TransactionHistory};

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;
use tracing::info;

use crate::config::Config;
use crate::core::refresh::{self, RefreshHandle};
use crate::core::types::{
    OpportunityRecord, PriceFeedSnapshot, ScannerSnapshot, TransactionRecord,
};
use crate::error::DashboardResult;
use crate::simulation::{
    seeded_rng, SimulatedOpportunities, SimulatedPriceFeed, SimulatedQuotes, SimulatedTransactions,
};
use crate::sources::{OpportunitySource, PriceSource, QuoteSource, TransactionSource};

/// The data sources behind each panel
pub struct DashboardSources {
    pub prices: Box<dyn PriceSource>,
    pub opportunities: Box<dyn OpportunitySource>,
    pub transactions: Box<dyn TransactionSource>,
    pub quotes: Option<Box<dyn QuoteSource>>,
}

impl DashboardSources {
    /// Random simulators configured from `config`
    pub fn simulated(config: &Config) -> Self {
        let seed = config.simulation.seed;
        let scanner = &config.scanner;

        let quotes: Option<Box<dyn QuoteSource>> = if scanner.enabled {
            Some(Box::new(SimulatedQuotes::new(
                scanner.quotes.clone(),
                scanner.price_jitter,
                scanner.change_jitter,
                seeded_rng(seed, 3),
            )))
        } else {
            None
        };

        Self {
            prices: Box::new(SimulatedPriceFeed::new(config.price_feed.clone(), seeded_rng(seed, 0))),
            opportunities: Box::new(SimulatedOpportunities::new(config.opportunities.clone(), seeded_rng(seed, 1))),
            transactions: Box::new(SimulatedTransactions::new(config.transactions.clone(), seeded_rng(seed, 2))),
            quotes,
        }
    }
}

/// Everything on screen at one instant
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub taken_at: DateTime<Utc>,
    pub price_feed: PriceFeedSnapshot,
    pub opportunities: Vec<OpportunityRecord>,
    pub transactions: Vec<TransactionRecord>,
    pub scanner: Option<ScannerSnapshot>,
    pub scanner_analyzing: bool,
}

pub struct Dashboard {
    pub prices: RefreshHandle<PriceFeedSnapshot>,
    pub opportunities: RefreshHandle<Vec<OpportunityRecord>>,
    pub transactions: RefreshHandle<Vec<TransactionRecord>>,
    pub scanner: Option<RefreshHandle<ScannerSnapshot>>,
}

impl Dashboard {
    /// Mount all panels backed by the random simulators. Needs a tokio runtime.
    pub fn mount(config: &Config) -> Self {
        Self::mount_with_sources(config, DashboardSources::simulated(config))
    }

    /// Mount all panels over caller-supplied sources, timings from `config`
    pub fn mount_with_sources(config: &Config, sources: DashboardSources) -> Self {
        let log_ticks = config.logging.enable_tick_logging;

        let prices = refresh::mount(
            PriceMonitor::new(sources.prices).with_tick_logging(log_ticks),
            Some(config.price_feed.refresh_interval()),
        );
        let opportunities = refresh::mount(
            OpportunityBoard::new(sources.opportunities).with_tick_logging(log_ticks),
            Some(config.opportunities.refresh_interval()),
        );
        let transactions = refresh::mount(TransactionHistory::new(sources.transactions), None);
        let scanner = sources.quotes.map(|quotes| {
            refresh::mount(
                SpreadScanner::new(quotes, config.scanner.min_profit).with_tick_logging(log_ticks),
                Some(config.scanner.refresh_interval()),
            )
        });

        info!("🖥️  Dashboard mounted with {} panels", if scanner.is_some() { 4 } else { 3 });

        Self {
            prices,
            opportunities,
            transactions,
            scanner,
        }
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            taken_at: Utc::now(),
            price_feed: (*self.prices.current()).clone(),
            opportunities: (*self.opportunities.current()).clone(),
            transactions: (*self.transactions.current()).clone(),
            scanner: self.scanner.as_ref().map(|s| (*s.current()).clone()),
            scanner_analyzing: self.scanner.as_ref().map_or(false, |s| !s.is_paused()),
        }
    }

    /// Toggle the scanner's analysis; returns the new analyzing state
    pub fn toggle_analysis(&self) -> bool {
        match &self.scanner {
            Some(scanner) if scanner.is_paused() => {
                scanner.resume();
                true
            }
            Some(scanner) => {
                scanner.pause();
                false
            }
            None => false,
        }
    }

    /// Shortest refresh period among the ticking panels
    pub fn fastest_refresh(config: &Config) -> Duration {
        let mut periods = vec![
            config.price_feed.refresh_interval(),
            config.opportunities.refresh_interval(),
        ];
        if config.scanner.enabled {
            periods.push(config.scanner.refresh_interval());
        }
        periods.into_iter().min().unwrap_or(Duration::from_secs(5))
    }

    /// Stop every panel, waiting for each refresh task
    pub async fn unmount(self) -> DashboardResult<()> {
        self.prices.unmount().await?;
        self.opportunities.unmount().await?;
        self.transactions.unmount().await?;
        if let Some(scanner) = self.scanner {
            scanner.unmount().await?;
        }

        info!("👋 Dashboard unmounted");
        Ok(())
    }
}
