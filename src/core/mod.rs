// Core dashboard building blocks

pub mod types;
pub mod refresh;

// Re-export commonly used types
pub use types::{
    round_to, Direction, HistoryPoint, OpportunityRecord, PriceFeedSnapshot, PriceSample,
    ScannerSnapshot, SpreadAlert, TransactionRecord, TransactionStatus, VenueQuote,
    HISTORY_POINTS, OPPORTUNITY_COUNT, TRANSACTION_COUNT,
};
pub use refresh::{mount, Refresh, RefreshHandle};
