//! Plain-text tables for terminal output
//!
//! Mirrors the columns of the web dashboard so `arb-dash run` can be read
//! side by side with it. Every function returns lines rather than printing,
//! leaving the caller to choose between `info!` and stdout.

use crate::core::types::{
    OpportunityRecord, PriceFeedSnapshot, ScannerSnapshot, TransactionRecord,
};

pub fn price_panel(snapshot: &PriceFeedSnapshot) -> Vec<String> {
    let (min, max) = snapshot
        .history
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p.value), hi.max(p.value)));

    let mut lines = vec![
        format!("{} Price: ${:.2}", snapshot.instrument, snapshot.current.instrument_price),
        format!("{} Price: ${:.2}", snapshot.counter, snapshot.current.counter_price),
        format!("{} Ratio: {:.2}", snapshot.pair_label(), snapshot.current.ratio),
    ];

    if !snapshot.history.is_empty() {
        lines.push(format!(
            "24-Hour History: {} points, low {:.2}, high {:.2}",
            snapshot.history.len(),
            min,
            max
        ));
    }

    lines
}

pub fn opportunity_table(opportunities: &[OpportunityRecord]) -> Vec<String> {
    let mut lines = vec![format!(
        "{:<10} {:<10} {:>10} {:>10} {:>8} {:>9}",
        "BUY", "SELL", "BUY PRICE", "SELL PRICE", "PROFIT", "PROFIT %"
    )];

    lines.extend(opportunities.iter().map(|opp| {
        format!(
            "{:<10} {:<10} {:>10} {:>10} {:>8} {:>9}",
            opp.buy_venue,
            opp.sell_venue,
            format!("${:.2}", opp.buy_price),
            format!("${:.2}", opp.sell_price),
            format!("+${:.2}", opp.profit),
            format!("+{:.2}%", opp.profit_percent),
        )
    }));

    lines
}

pub fn transaction_table(transactions: &[TransactionRecord]) -> Vec<String> {
    let mut lines = vec![format!(
        "{:<19} {:<4} {:<8} {:>8} {:>8} {:>9} {:<9}",
        "TIME", "TYPE", "EXCHANGE", "AMOUNT", "PRICE", "TOTAL", "STATUS"
    )];

    lines.extend(transactions.iter().map(|tx| {
        format!(
            "{:<19} {:<4} {:<8} {:>8.4} {:>8} {:>9} {:<9}",
            tx.occurred_at.format("%Y-%m-%d %H:%M:%S"),
            tx.direction.as_str(),
            tx.venue,
            tx.quantity,
            format!("${:.2}", tx.unit_price),
            format!("${:.2}", tx.total),
            tx.status.as_str(),
        )
    }));

    lines
}

pub fn scanner_panel(snapshot: &ScannerSnapshot, analyzing: bool) -> Vec<String> {
    let mut lines = vec![if analyzing {
        "Analyzing market conditions...".to_string()
    } else {
        "Analysis paused".to_string()
    }];

    lines.extend(snapshot.quotes.iter().map(|quote| {
        format!(
            "{:<4} {:<8} ${:.2} ({}{:.2}%)",
            quote.asset,
            quote.venue,
            quote.price,
            if quote.change_percent >= 0.0 { "+" } else { "" },
            quote.change_percent
        )
    }));

    if let Some(alert) = &snapshot.alert {
        lines.push(format!(
            "Arbitrage Opportunity Detected! Buy at {} ${:.2} → Sell at {} ${:.2} | Potential Profit ${:.2}",
            alert.buy_at.venue, alert.buy_at.price, alert.sell_at.venue, alert.sell_at.price, alert.profit
        ));
    }

    lines
}
