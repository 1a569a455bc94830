// Arbitrage Dashboard Library
//
// Simulated price feed, arbitrage opportunities and trade history for a
// cross-venue arbitrage dashboard, refreshed on timers and rendered as text

pub mod core;
pub mod sources;
pub mod simulation;
pub mod dashboard;
pub mod config;
pub mod error;       // Unified error handling
pub mod progress;

// Re-export record types and the refresh scheduler
pub use crate::core::{
    Direction, HistoryPoint, OpportunityRecord, PriceFeedSnapshot, PriceSample, ScannerSnapshot,
    SpreadAlert, TransactionRecord, TransactionStatus, VenueQuote, Refresh, RefreshHandle,
};

// Re-export error types
pub use error::{DashboardError, DashboardResult};

// Re-export source traits and their simulated implementations
pub use sources::{OpportunitySource, PriceSource, QuoteSource, TransactionSource};
pub use simulation::{
    SimulatedOpportunities, SimulatedPriceFeed, SimulatedQuotes, SimulatedTransactions,
};

// Re-export configuration
pub use config::{
    Config, ConfigError, LoggingConfig, OpportunityConfig, PriceFeedConfig, QuoteConfig,
    ScannerConfig, SimulationConfig, TransactionConfig,
};

// Re-export dashboard components
pub use dashboard::{Dashboard, DashboardSnapshot, DashboardSources};
pub use progress::SessionProgress;
