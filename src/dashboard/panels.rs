// Panels adapt a data source to the refresh scheduler

use tracing::info;

use crate::core::refresh::Refresh;
use crate::core::types::{
    OpportunityRecord, PriceFeedSnapshot, ScannerSnapshot, TransactionRecord,
};
use crate::sources::{OpportunitySource, PriceSource, QuoteSource, TransactionSource};

pub struct PriceMonitor<S> {
    source: S,
    log_ticks: bool,
}

impl<S: PriceSource> PriceMonitor<S> {
    pub fn new(source: S) -> Self {
        Self { source, log_ticks: false }
    }

    pub fn with_tick_logging(mut self, enabled: bool) -> Self {
        self.log_ticks = enabled;
        self
    }
}

impl<S: PriceSource + 'static> Refresh for PriceMonitor<S> {
    type Snapshot = PriceFeedSnapshot;

    fn name(&self) -> &'static str {
        "price-monitor"
    }

    fn mount(&mut self) -> PriceFeedSnapshot {
        self.source.initial()
    }

    fn tick(&mut self, current: &PriceFeedSnapshot) -> PriceFeedSnapshot {
        let next = self.source.refresh(current);
        if self.log_ticks {
            info!("💰 {} {:.2} / {:.2} | ratio {:.2}",
                next.pair_label(),
                next.current.instrument_price,
                next.current.counter_price,
                next.current.ratio
            );
        }
        next
    }
}

pub struct OpportunityBoard<S> {
    source: S,
    log_ticks: bool,
}

impl<S: OpportunitySource> OpportunityBoard<S> {
    pub fn new(source: S) -> Self {
        Self { source, log_ticks: false }
    }

    pub fn with_tick_logging(mut self, enabled: bool) -> Self {
        self.log_ticks = enabled;
        self
    }
}

impl<S: OpportunitySource + 'static> Refresh for OpportunityBoard<S> {
    type Snapshot = Vec<OpportunityRecord>;

    fn name(&self) -> &'static str {
        "opportunities"
    }

    fn mount(&mut self) -> Vec<OpportunityRecord> {
        self.source.opportunities()
    }

    fn tick(&mut self, _current: &Vec<OpportunityRecord>) -> Vec<OpportunityRecord> {
        let next = self.source.opportunities();
        if self.log_ticks {
            if let Some(best) = next.iter().max_by(|a, b| a.profit_percent.total_cmp(&b.profit_percent)) {
                info!("🎯 Best of {}: {} → {} +{:.2}%",
                    next.len(), best.buy_venue, best.sell_venue, best.profit_percent);
            }
        }
        next
    }
}

/// Mount-only: history is generated once and never ticks
pub struct TransactionHistory<S> {
    source: S,
}

impl<S: TransactionSource> TransactionHistory<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: TransactionSource + 'static> Refresh for TransactionHistory<S> {
    type Snapshot = Vec<TransactionRecord>;

    fn name(&self) -> &'static str {
        "transactions"
    }

    fn mount(&mut self) -> Vec<TransactionRecord> {
        self.source.transactions()
    }

    fn tick(&mut self, current: &Vec<TransactionRecord>) -> Vec<TransactionRecord> {
        current.clone()
    }
}

pub struct SpreadScanner<S> {
    source: S,
    min_profit: f64,
    log_ticks: bool,
}

impl<S: QuoteSource> SpreadScanner<S> {
    pub fn new(source: S, min_profit: f64) -> Self {
        Self { source, min_profit, log_ticks: false }
    }

    pub fn with_tick_logging(mut self, enabled: bool) -> Self {
        self.log_ticks = enabled;
        self
    }

    fn scan(&mut self) -> ScannerSnapshot {
        ScannerSnapshot::from_quotes(self.source.quotes(), self.min_profit)
    }
}

impl<S: QuoteSource + 'static> Refresh for SpreadScanner<S> {
    type Snapshot = ScannerSnapshot;

    fn name(&self) -> &'static str {
        "spread-scanner"
    }

    fn mount(&mut self) -> ScannerSnapshot {
        self.scan()
    }

    fn tick(&mut self, _current: &ScannerSnapshot) -> ScannerSnapshot {
        let next = self.scan();
        if self.log_ticks {
            if let Some(alert) = &next.alert {
                info!("🚨 Spread alert: buy {} @ {:.2}, sell {} @ {:.2}, profit {:.2}",
                    alert.buy_at.venue, alert.buy_at.price,
                    alert.sell_at.venue, alert.sell_at.price,
                    alert.profit);
            }
        }
        next
    }
}
