// Data sources feeding the dashboard panels
//
// Panels only see these traits. The random simulators in `simulation` are the
// one implementation shipped today; a live exchange feed can replace any of
// them without touching panels, renderer or CLI.

use crate::core::types::{
    OpportunityRecord, PriceFeedSnapshot, TransactionRecord, VenueQuote,
};

/// Current price pair and its chart series
pub trait PriceSource: Send {
    fn initial(&mut self) -> PriceFeedSnapshot;
    fn refresh(&mut self, previous: &PriceFeedSnapshot) -> PriceFeedSnapshot;
}

/// Cross-venue opportunities, replaced wholesale on each call
pub trait OpportunitySource: Send {
    fn opportunities(&mut self) -> Vec<OpportunityRecord>;
}

/// Past trades, newest first
pub trait TransactionSource: Send {
    fn transactions(&mut self) -> Vec<TransactionRecord>;
}

/// Per-venue quotes for the spread scanner
pub trait QuoteSource: Send {
    fn quotes(&mut self) -> Vec<VenueQuote>;
}

impl<T: PriceSource + ?Sized> PriceSource for Box<T> {
    fn initial(&mut self) -> PriceFeedSnapshot {
        (**self).initial()
    }

    fn refresh(&mut self, previous: &PriceFeedSnapshot) -> PriceFeedSnapshot {
        (**self).refresh(previous)
    }
}

impl<T: OpportunitySource + ?Sized> OpportunitySource for Box<T> {
    fn opportunities(&mut self) -> Vec<OpportunityRecord> {
        (**self).opportunities()
    }
}

impl<T: TransactionSource + ?Sized> TransactionSource for Box<T> {
    fn transactions(&mut self) -> Vec<TransactionRecord> {
        (**self).transactions()
    }
}

impl<T: QuoteSource + ?Sized> QuoteSource for Box<T> {
    fn quotes(&mut self) -> Vec<VenueQuote> {
        (**self).quotes()
    }
}
