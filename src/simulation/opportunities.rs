// Fabricated cross-venue arbitrage opportunities

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::Rng;

use crate::config::OpportunityConfig;
use crate::core::types::{OpportunityRecord, OPPORTUNITY_COUNT};
use crate::sources::OpportunitySource;

pub struct SimulatedOpportunities<R: Rng = StdRng> {
    config: OpportunityConfig,
    rng: R,
}

impl<R: Rng> SimulatedOpportunities<R> {
    pub fn new(config: OpportunityConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn generate(&mut self, now: DateTime<Utc>) -> Vec<OpportunityRecord> {
        generate_opportunities(&mut self.rng, &self.config, now)
    }
}

/// Pick two distinct indices into a list of `len` items (`len >= 2`)
fn distinct_pair(rng: &mut impl Rng, len: usize) -> (usize, usize) {
    let first = rng.gen_range(0..len);
    let mut second = rng.gen_range(0..len - 1);
    if second >= first {
        second += 1;
    }
    (first, second)
}

pub fn generate_opportunities(
    rng: &mut impl Rng,
    config: &OpportunityConfig,
    now: DateTime<Utc>,
) -> Vec<OpportunityRecord> {
    let [low, high] = config.buy_price_range;

    (0..OPPORTUNITY_COUNT)
        .map(|_| {
            let (buy, sell) = distinct_pair(rng, config.venues.len());
            let buy_price = rng.gen_range(low..high);
            let inflation = rng.gen_range(0.0..config.max_spread);

            OpportunityRecord::priced(
                config.venues[buy].as_str(),
                config.venues[sell].as_str(),
                buy_price,
                inflation,
                now,
            )
        })
        .collect()
}

impl<R: Rng + Send> OpportunitySource for SimulatedOpportunities<R> {
    fn opportunities(&mut self) -> Vec<OpportunityRecord> {
        self.generate(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_distinct_pair_covers_two_venues() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..500 {
            let (a, b) = distinct_pair(&mut rng, 2);
            assert_ne!(a, b);
            assert!(a < 2 && b < 2);
        }
    }

    #[test]
    fn test_generate_fixed_length() {
        let mut sim = SimulatedOpportunities::new(OpportunityConfig::default(), StdRng::seed_from_u64(3));
        let now = Utc::now();
        let opps = sim.generate(now);

        assert_eq!(opps.len(), OPPORTUNITY_COUNT);
        assert!(opps.iter().all(|o| o.observed_at == now));
        assert!(opps.iter().all(|o| o.sell_price >= o.buy_price));
    }

    #[test]
    fn test_fresh_ids_each_tick() {
        let mut sim = SimulatedOpportunities::new(OpportunityConfig::default(), StdRng::seed_from_u64(3));
        let first = sim.opportunities();
        let second = sim.opportunities();

        assert!(first.iter().all(|a| second.iter().all(|b| a.id != b.id)));
    }
}
