// Record types shared by every panel

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Contractual list lengths
pub const OPPORTUNITY_COUNT: usize = 5;
pub const TRANSACTION_COUNT: usize = 10;
pub const HISTORY_POINTS: usize = 24;

// Rounding applied at generation time
pub const PRICE_DECIMALS: u32 = 2;
pub const QUANTITY_DECIMALS: u32 = 4;

/// Lowest counter price the feed will publish, keeps the ratio finite
pub const MIN_COUNTER_PRICE: f64 = 0.01;

/// Round `value` half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceSample {
    pub instrument_price: f64,
    pub counter_price: f64,
    pub ratio: f64,
}

impl PriceSample {
    /// Build a sample from a price pair, deriving the ratio
    pub fn new(instrument_price: f64, counter_price: f64) -> Self {
        let instrument_price = round_to(instrument_price, PRICE_DECIMALS);
        let counter_price = round_to(counter_price.max(MIN_COUNTER_PRICE), PRICE_DECIMALS);

        Self {
            instrument_price,
            counter_price,
            ratio: round_to(instrument_price / counter_price, PRICE_DECIMALS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub label: String,   // Hour of day, "13:00"
    pub value: f64,
}

/// Everything the price monitor shows: current pair plus the chart series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceFeedSnapshot {
    pub instrument: String,
    pub counter: String,
    pub current: PriceSample,
    pub history: Vec<HistoryPoint>,
}

impl PriceFeedSnapshot {
    pub fn pair_label(&self) -> String {
        format!("{}/{}", self.instrument, self.counter)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityRecord {
    pub id: Uuid,
    pub buy_venue: String,
    pub sell_venue: String,
    pub buy_price: f64,
    pub sell_price: f64,
    pub profit: f64,
    pub profit_percent: f64,
    pub observed_at: DateTime<Utc>,
}

impl OpportunityRecord {
    /// Price an opportunity from a buy price and the markup applied on the sell side.
    ///
    /// `inflation` is a fraction: 0.03 sells 3% above the buy price.
    pub fn priced(
        buy_venue: impl Into<String>,
        sell_venue: impl Into<String>,
        buy_price: f64,
        inflation: f64,
        observed_at: DateTime<Utc>,
    ) -> Self {
        let buy_price = round_to(buy_price, PRICE_DECIMALS);
        let sell_price = round_to(buy_price * (1.0 + inflation), PRICE_DECIMALS);
        let profit = round_to(sell_price - buy_price, PRICE_DECIMALS);
        let profit_percent = round_to(profit / buy_price * 100.0, PRICE_DECIMALS);

        Self {
            id: Uuid::new_v4(),
            buy_venue: buy_venue.into(),
            sell_venue: sell_venue.into(),
            buy_price,
            sell_price,
            profit,
            profit_percent,
            observed_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Buy,
    Sell,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Buy, Direction::Sell];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Buy => "BUY",
            Direction::Sell => "SELL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

impl TransactionStatus {
    pub const ALL: [TransactionStatus; 3] = [
        TransactionStatus::Completed,
        TransactionStatus::Pending,
        TransactionStatus::Failed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "COMPLETED",
            TransactionStatus::Pending => "PENDING",
            TransactionStatus::Failed => "FAILED",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: Uuid,
    pub direction: Direction,
    pub venue: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total: f64,
    pub status: TransactionStatus,
    pub occurred_at: DateTime<Utc>,
}

impl TransactionRecord {
    pub fn new(
        direction: Direction,
        venue: impl Into<String>,
        quantity: f64,
        unit_price: f64,
        status: TransactionStatus,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        let quantity = round_to(quantity, QUANTITY_DECIMALS);
        let unit_price = round_to(unit_price, PRICE_DECIMALS);

        Self {
            id: Uuid::new_v4(),
            direction,
            venue: venue.into(),
            quantity,
            unit_price,
            total: round_to(unit_price * quantity, PRICE_DECIMALS),
            status,
            occurred_at,
        }
    }
}

/// One venue's price on the live scanner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueQuote {
    pub venue: String,
    pub asset: String,
    pub price: f64,
    pub change_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpreadAlert {
    pub buy_at: VenueQuote,
    pub sell_at: VenueQuote,
    pub profit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScannerSnapshot {
    pub quotes: Vec<VenueQuote>,   // Ascending by price
    pub alert: Option<SpreadAlert>,
}

impl ScannerSnapshot {
    /// Sort quotes by price and raise an alert when the widest spread beats `min_profit`
    pub fn from_quotes(mut quotes: Vec<VenueQuote>, min_profit: f64) -> Self {
        quotes.sort_by(|a, b| a.price.total_cmp(&b.price));

        let alert = match (quotes.first(), quotes.last()) {
            (Some(cheapest), Some(dearest)) => {
                let spread = dearest.price - cheapest.price;
                (spread > min_profit).then(|| SpreadAlert {
                    buy_at: cheapest.clone(),
                    sell_at: dearest.clone(),
                    profit: round_to(spread, PRICE_DECIMALS),
                })
            }
            _ => None,
        };

        Self { quotes, alert }
    }
}
