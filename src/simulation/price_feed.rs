// Random-walk price pair with a synthetic 24h chart series

use rand::rngs::StdRng;
use rand::Rng;

use crate::config::PriceFeedConfig;
use crate::core::types::{
    round_to, HistoryPoint, PriceFeedSnapshot, PriceSample, HISTORY_POINTS, PRICE_DECIMALS,
};
use crate::sources::PriceSource;

pub struct SimulatedPriceFeed<R: Rng = StdRng> {
    config: PriceFeedConfig,
    rng: R,
}

impl<R: Rng> SimulatedPriceFeed<R> {
    pub fn new(config: PriceFeedConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Move both prices by up to half their jitter in either direction
    pub fn perturb(&mut self, current: &PriceSample) -> PriceSample {
        let instrument_delta = (self.rng.gen::<f64>() - 0.5) * self.config.instrument_jitter;
        let counter_delta = (self.rng.gen::<f64>() - 0.5) * self.config.counter_jitter;

        PriceSample::new(
            current.instrument_price + instrument_delta,
            current.counter_price + counter_delta,
        )
    }
}

/// Hourly series "0:00".."23:00" with values drawn uniformly from `range`
pub fn generate_history(rng: &mut impl Rng, range: [f64; 2]) -> Vec<HistoryPoint> {
    (0..HISTORY_POINTS)
        .map(|hour| HistoryPoint {
            label: format!("{}:00", hour),
            value: round_to(rng.gen_range(range[0]..range[1]), PRICE_DECIMALS),
        })
        .collect()
}

impl<R: Rng + Send> PriceSource for SimulatedPriceFeed<R> {
    fn initial(&mut self) -> PriceFeedSnapshot {
        PriceFeedSnapshot {
            instrument: self.config.instrument.clone(),
            counter: self.config.counter.clone(),
            current: PriceSample::new(
                self.config.initial_instrument_price,
                self.config.initial_counter_price,
            ),
            history: generate_history(&mut self.rng, self.config.initial_history_range),
        }
    }

    fn refresh(&mut self, previous: &PriceFeedSnapshot) -> PriceFeedSnapshot {
        let current = self.perturb(&previous.current);
        let history = if self.config.regenerate_history {
            generate_history(&mut self.rng, self.config.history_range)
        } else {
            previous.history.clone()
        };

        PriceFeedSnapshot {
            instrument: previous.instrument.clone(),
            counter: previous.counter.clone(),
            current,
            history,
        }
    }
}
