// Common test utilities and helpers
#![allow(dead_code)]

use arbitrage_dashboard::Config;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

/// Rounding slack when re-deriving a 2dp figure from other 2dp figures
pub const ROUNDING_TOLERANCE: f64 = 0.0051;

/// Configuration with a fixed seed and fast refresh intervals
pub fn create_test_config() -> Config {
    let mut config = Config::default();
    config.simulation.seed = Some(42);
    config.price_feed.refresh_interval_ms = 1_000;
    config.opportunities.refresh_interval_ms = 2_000;
    config.scanner.refresh_interval_ms = 1_000;
    config.logging.enable_tick_logging = false;
    config.logging.enable_snapshot_logging = false;
    config
}

/// Deterministic RNG for generator tests
pub fn test_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A sleep that lands between tick boundaries under paused time
pub fn just_after(period_ms: u64, ticks: u64) -> Duration {
    Duration::from_millis(period_ms * ticks + period_ms / 2)
}
