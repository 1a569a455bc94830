// Simulation Module
// Random generators standing in for real market data sources

pub mod price_feed;
pub mod opportunities;
pub mod transactions;
pub mod quotes;

pub use price_feed::{SimulatedPriceFeed, generate_history};
pub use opportunities::{SimulatedOpportunities, generate_opportunities};
pub use transactions::{SimulatedTransactions, generate_transactions};
pub use quotes::SimulatedQuotes;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Odd 64-bit constant spreading stream numbers across the seed space
const STREAM_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// RNG for one generator. A fixed seed is mixed with `stream` so panels
/// sharing a seed draw independent sequences, and neighbouring seeds
/// never hand one panel's sequence to another.
pub fn seeded_rng(seed: Option<u64>, stream: u64) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed ^ stream.wrapping_mul(STREAM_MIX)),
        None => StdRng::from_entropy(),
    }
}
