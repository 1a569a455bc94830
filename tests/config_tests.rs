// Integration tests for configuration loading and validation

mod common;

use arbitrage_dashboard::{Config, ConfigError, DashboardError};
use common::create_test_config;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_bundled_example_matches_defaults() {
    let example = Config::from_toml_str(include_str!("../config.toml.example"))
        .expect("bundled example should parse");
    let defaults = Config::default();

    assert_eq!(example.price_feed.refresh_interval_ms, defaults.price_feed.refresh_interval_ms);
    assert_eq!(example.opportunities.venues, defaults.opportunities.venues);
    assert_eq!(example.transactions.window_hours, defaults.transactions.window_hours);
    assert_eq!(example.scanner.quotes, defaults.scanner.quotes);
    assert!(example.simulation.seed.is_none());
}

#[test]
fn test_config_round_trip_through_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");

    let config = create_test_config();
    config.to_file(&config_path).expect("Failed to write config");

    let loaded = Config::from_file(&config_path).expect("Failed to load config");
    assert_eq!(loaded.simulation.seed, Some(42));
    assert_eq!(loaded.price_feed.refresh_interval_ms, 1_000);
    assert_eq!(loaded.scanner.quotes.len(), 3);
}

#[test]
fn test_partial_file_fills_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        "[opportunities]\nvenues = [\"Binance\", \"Bybit\"]\n\n[simulation]\nseed = 7\n",
    )
    .expect("Failed to write config file");

    let config = Config::from_file(&config_path).expect("Failed to load config");
    assert_eq!(config.opportunities.venues, vec!["Binance", "Bybit"]);
    assert_eq!(config.opportunities.refresh_interval_ms, 10_000);
    assert_eq!(config.simulation.seed, Some(7));
    assert_eq!(config.price_feed.instrument, "ZEC");
}

#[test]
fn test_invalid_values_rejected() {
    let invalid = [
        "[price_feed]\nrefresh_interval_ms = 0\n",
        "[opportunities]\nvenues = [\"Binance\"]\n",
        "[opportunities]\nmax_spread = 1.5\n",
        "[transactions]\nvenues = []\n",
        "[transactions]\nprice_range = [95.0, 85.0]\n",
        "[scanner]\nmin_profit = -1.0\n",
        "[opportunities]\nmax_spread = nan\n",
        "[opportunities]\nbuy_price_range = [85.0, inf]\n",
        "[transactions]\nmax_quantity = nan\n",
        "[transactions]\nprice_range = [nan, 95.0]\n",
        "[price_feed]\ninitial_counter_price = inf\n",
        "[price_feed]\ninstrument_jitter = nan\n",
        "[scanner]\nmin_profit = nan\n",
        "[scanner]\nprice_jitter = inf\n",
        "[scanner]\nrefresh_interval_ms = 9223372036854775807\n",
    ];

    for content in invalid {
        let result = Config::from_toml_str(content);
        assert!(
            matches!(result, Err(ConfigError::Validation(_))),
            "expected validation error for {:?}",
            content
        );
    }
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let result = Config::from_toml_str("[price_feed\nrefresh_interval_ms = ");
    assert!(matches!(result, Err(ConfigError::Parse(_))));

    let err: DashboardError = result.unwrap_err().into();
    assert_eq!(err.category(), "config");
}

#[test]
fn test_missing_file_is_read_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let result = Config::from_file(temp_dir.path().join("missing.toml"));
    assert!(matches!(result, Err(ConfigError::FileRead(_))));
}

#[test]
fn test_load_or_create_writes_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");

    let created = Config::load_or_create(&config_path).expect("Failed to create config");
    assert!(config_path.exists());

    let reloaded = Config::from_file(&config_path).expect("Failed to reload config");
    assert_eq!(reloaded.opportunities.venues, created.opportunities.venues);
}

#[test]
fn test_load_or_default_leaves_disk_alone() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");

    let config = Config::load_or_default(&config_path).expect("Defaults should load");
    assert!(!config_path.exists());
    assert!(config.scanner.enabled);
}
