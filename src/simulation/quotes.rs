// Jittered venue quotes for the live spread scanner

use rand::rngs::StdRng;
use rand::Rng;

use crate::config::QuoteConfig;
use crate::core::types::{round_to, VenueQuote, PRICE_DECIMALS};
use crate::sources::QuoteSource;

pub struct SimulatedQuotes<R: Rng = StdRng> {
    venues: Vec<QuoteConfig>,
    price_jitter: f64,
    change_jitter: f64,
    rng: R,
}

impl<R: Rng> SimulatedQuotes<R> {
    pub fn new(venues: Vec<QuoteConfig>, price_jitter: f64, change_jitter: f64, rng: R) -> Self {
        Self {
            venues,
            price_jitter,
            change_jitter,
            rng,
        }
    }
}

impl<R: Rng + Send> QuoteSource for SimulatedQuotes<R> {
    fn quotes(&mut self) -> Vec<VenueQuote> {
        let rng = &mut self.rng;
        let (price_jitter, change_jitter) = (self.price_jitter, self.change_jitter);

        self.venues
            .iter()
            .map(|venue| VenueQuote {
                venue: venue.venue.clone(),
                asset: venue.asset.clone(),
                price: round_to(
                    venue.base_price + (rng.gen::<f64>() - 0.5) * price_jitter,
                    PRICE_DECIMALS,
                ),
                change_percent: round_to((rng.gen::<f64>() - 0.5) * change_jitter, PRICE_DECIMALS),
            })
            .collect()
    }
}
