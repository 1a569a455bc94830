// Configuration management for the dashboard simulators

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Fixed seed for reproducible output; entropy when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceFeedConfig {
    pub refresh_interval_ms: u64,
    pub instrument: String,
    pub counter: String,
    pub initial_instrument_price: f64,
    pub initial_counter_price: f64,
    pub instrument_jitter: f64,      // Full width of the per-tick move
    pub counter_jitter: f64,
    pub initial_history_range: [f64; 2],
    pub history_range: [f64; 2],     // Used when the series is regenerated on a tick
    pub regenerate_history: bool,
}

impl Default for PriceFeedConfig {
    fn default() -> Self {
        Self {
            refresh_interval_ms: 5_000,
            instrument: "ZEC".to_string(),
            counter: "NEAR".to_string(),
            initial_instrument_price: 25.43,
            initial_counter_price: 1.15,
            instrument_jitter: 0.02,
            counter_jitter: 0.01,
            initial_history_range: [90.0, 100.0],
            history_range: [25.0, 25.5],
            regenerate_history: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpportunityConfig {
    pub refresh_interval_ms: u64,
    pub venues: Vec<String>,
    pub buy_price_range: [f64; 2],
    pub max_spread: f64,             // 0.05 = sell up to 5% above buy
}

impl Default for OpportunityConfig {
    fn default() -> Self {
        Self {
            refresh_interval_ms: 10_000,
            venues: default_venues(),
            buy_price_range: [85.0, 95.0],
            max_spread: 0.05,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionConfig {
    pub venues: Vec<String>,
    pub price_range: [f64; 2],
    pub max_quantity: f64,
    pub window_hours: u32,
}

impl Default for TransactionConfig {
    fn default() -> Self {
        Self {
            venues: default_venues(),
            price_range: [85.0, 95.0],
            max_quantity: 2.0,
            window_hours: 24,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteConfig {
    pub venue: String,
    pub asset: String,
    pub base_price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    pub enabled: bool,
    pub refresh_interval_ms: u64,
    pub min_profit: f64,
    pub price_jitter: f64,
    pub change_jitter: f64,
    pub quotes: Vec<QuoteConfig>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        let quote = |venue: &str, asset: &str, base_price: f64| QuoteConfig {
            venue: venue.to_string(),
            asset: asset.to_string(),
            base_price,
        };

        Self {
            enabled: true,
            refresh_interval_ms: 5_000,
            min_profit: 0.5,
            price_jitter: 2.0,
            change_jitter: 0.5,
            quotes: vec![
                quote("Binance", "BTC", 30.5),
                quote("Kraken", "ETH", 31.2),
                quote("FTX", "SOL", 29.8),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_level: String,
    pub enable_tick_logging: bool,
    pub enable_snapshot_logging: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            enable_tick_logging: false,
            enable_snapshot_logging: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub price_feed: PriceFeedConfig,
    #[serde(default)]
    pub opportunities: OpportunityConfig,
    #[serde(default)]
    pub transactions: TransactionConfig,
    #[serde(default)]
    pub scanner: ScannerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_venues() -> Vec<String> {
    ["Binance", "Kraken", "Gate.io", "MEXC"]
        .iter()
        .map(|v| v.to_string())
        .collect()
}

impl PriceFeedConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }
}

impl OpportunityConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }
}

impl ScannerConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(e.to_string()))?;

        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;

        fs::write(path, content)
            .map_err(|e| ConfigError::FileWrite(e.to_string()))?;

        Ok(())
    }

    /// Load configuration from file, or create default if file doesn't exist
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            let config = Self::default();
            config.to_file(&path)?;
            info!("📁 Created default config file: {}", path.as_ref().display());
            Ok(config)
        }
    }

    /// Load configuration from file, falling back to defaults without touching disk
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            warn!("⚠️  {} not found, using built-in defaults", path.as_ref().display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let feed = &self.price_feed;
        check_interval("price_feed.refresh_interval_ms", feed.refresh_interval_ms)?;
        check_finite("price_feed.initial_instrument_price", feed.initial_instrument_price)?;
        check_finite("price_feed.initial_counter_price", feed.initial_counter_price)?;
        if feed.initial_instrument_price <= 0.0 || feed.initial_counter_price <= 0.0 {
            return Err(ConfigError::Validation("price_feed initial prices must be positive".to_string()));
        }
        check_finite("price_feed.instrument_jitter", feed.instrument_jitter)?;
        check_finite("price_feed.counter_jitter", feed.counter_jitter)?;
        if feed.instrument_jitter < 0.0 || feed.counter_jitter < 0.0 {
            return Err(ConfigError::Validation("price_feed jitter must be non-negative".to_string()));
        }
        check_range("price_feed.initial_history_range", feed.initial_history_range)?;
        check_range("price_feed.history_range", feed.history_range)?;

        let opps = &self.opportunities;
        check_interval("opportunities.refresh_interval_ms", opps.refresh_interval_ms)?;
        if opps.venues.len() < 2 {
            return Err(ConfigError::Validation("opportunities.venues needs at least two venues".to_string()));
        }
        check_range("opportunities.buy_price_range", opps.buy_price_range)?;
        if opps.buy_price_range[0] <= 0.0 {
            return Err(ConfigError::Validation("opportunities.buy_price_range must be positive".to_string()));
        }
        check_finite("opportunities.max_spread", opps.max_spread)?;
        if opps.max_spread <= 0.0 || opps.max_spread > 1.0 {
            return Err(ConfigError::Validation("opportunities.max_spread must be between 0 and 1".to_string()));
        }

        let txs = &self.transactions;
        if txs.venues.is_empty() {
            return Err(ConfigError::Validation("transactions.venues must not be empty".to_string()));
        }
        check_range("transactions.price_range", txs.price_range)?;
        check_finite("transactions.max_quantity", txs.max_quantity)?;
        if txs.max_quantity <= 0.0 {
            return Err(ConfigError::Validation("transactions.max_quantity must be positive".to_string()));
        }
        if txs.window_hours == 0 {
            return Err(ConfigError::Validation("transactions.window_hours must be greater than 0".to_string()));
        }

        let scanner = &self.scanner;
        if scanner.enabled {
            check_interval("scanner.refresh_interval_ms", scanner.refresh_interval_ms)?;
            if scanner.quotes.len() < 2 {
                return Err(ConfigError::Validation("scanner.quotes needs at least two venues".to_string()));
            }
            for quote in &scanner.quotes {
                check_finite("scanner.quotes.base_price", quote.base_price)?;
            }
            check_finite("scanner.min_profit", scanner.min_profit)?;
            if scanner.min_profit < 0.0 {
                return Err(ConfigError::Validation("scanner.min_profit must be non-negative".to_string()));
            }
            check_finite("scanner.price_jitter", scanner.price_jitter)?;
            check_finite("scanner.change_jitter", scanner.change_jitter)?;
            if scanner.price_jitter < 0.0 || scanner.change_jitter < 0.0 {
                return Err(ConfigError::Validation("scanner jitter must be non-negative".to_string()));
            }
        }

        Ok(())
    }
}

/// Longest accepted refresh interval (one day)
pub const MAX_REFRESH_INTERVAL_MS: u64 = 86_400_000;

fn check_interval(name: &str, ms: u64) -> Result<(), ConfigError> {
    if ms == 0 || ms > MAX_REFRESH_INTERVAL_MS {
        return Err(ConfigError::Validation(format!(
            "{} must be between 1 and {}, got {}",
            name, MAX_REFRESH_INTERVAL_MS, ms
        )));
    }
    Ok(())
}

fn check_finite(name: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::Validation(format!("{} must be a finite number, got {}", name, value)));
    }
    Ok(())
}

fn check_range(name: &str, range: [f64; 2]) -> Result<(), ConfigError> {
    check_finite(name, range[0])?;
    check_finite(name, range[1])?;
    if range[0] >= range[1] {
        return Err(ConfigError::Validation(format!(
            "{} must be [min, max] with min < max, got [{}, {}]",
            name, range[0], range[1]
        )));
    }
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(String),

    #[error("Failed to write config file: {0}")]
    FileWrite(String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Failed to serialize config: {0}")]
    Serialize(String),

    #[error("Configuration validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = Config::from_toml_str("").expect("empty config should parse");
        assert_eq!(config.opportunities.venues.len(), 4);
        assert_eq!(config.price_feed.refresh_interval(), Duration::from_secs(5));
        assert!(config.simulation.seed.is_none());
    }

    #[test]
    fn test_rejects_single_venue() {
        let mut config = Config::default();
        config.opportunities.venues = vec!["Binance".to_string()];
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_rejects_inverted_range() {
        let mut config = Config::default();
        config.price_feed.history_range = [25.5, 25.0];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_disabled_scanner_skips_checks() {
        let mut config = Config::default();
        config.scanner.enabled = false;
        config.scanner.quotes.clear();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_interval_past_one_day() {
        let mut config = Config::default();
        config.opportunities.refresh_interval_ms = u64::MAX;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        config.opportunities.refresh_interval_ms = MAX_REFRESH_INTERVAL_MS;
        assert!(config.validate().is_ok());
    }
}
