// Fabricated trade history over a trailing window

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::TransactionConfig;
use crate::core::types::{Direction, TransactionRecord, TransactionStatus, TRANSACTION_COUNT};
use crate::sources::TransactionSource;

pub struct SimulatedTransactions<R: Rng = StdRng> {
    config: TransactionConfig,
    rng: R,
}

impl<R: Rng> SimulatedTransactions<R> {
    pub fn new(config: TransactionConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn generate(&mut self, now: DateTime<Utc>) -> Vec<TransactionRecord> {
        generate_transactions(&mut self.rng, &self.config, now)
    }
}

/// Trades stamped within `window_hours` before `now`, newest first
pub fn generate_transactions(
    rng: &mut impl Rng,
    config: &TransactionConfig,
    now: DateTime<Utc>,
) -> Vec<TransactionRecord> {
    let [low, high] = config.price_range;
    let window_ms = i64::from(config.window_hours) * 3_600_000;

    let mut transactions: Vec<TransactionRecord> = (0..TRANSACTION_COUNT)
        .map(|_| {
            let direction = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
            let unit_price = rng.gen_range(low..high);
            let quantity = rng.gen_range(0.0..config.max_quantity);
            let venue = config
                .venues
                .choose(rng)
                .map(String::as_str)
                .unwrap_or_default();
            let status = TransactionStatus::ALL[rng.gen_range(0..TransactionStatus::ALL.len())];
            let age = Duration::milliseconds(rng.gen_range(0..window_ms));

            TransactionRecord::new(direction, venue, quantity, unit_price, status, now - age)
        })
        .collect();

    transactions.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
    transactions
}

impl<R: Rng + Send> TransactionSource for SimulatedTransactions<R> {
    fn transactions(&mut self) -> Vec<TransactionRecord> {
        self.generate(Utc::now())
    }
}
