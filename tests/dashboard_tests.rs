// Integration tests for the mounted dashboard

mod common;

use arbitrage_dashboard::core::{HISTORY_POINTS, OPPORTUNITY_COUNT, TRANSACTION_COUNT};
use arbitrage_dashboard::{
    Dashboard, DashboardSources, OpportunityRecord, OpportunitySource, PriceFeedSnapshot,
    PriceSample, PriceSource, TransactionRecord, TransactionSource,
};
use chrono::Utc;
use common::{create_test_config, just_after};
use tokio::time::sleep;

#[tokio::test(start_paused = true)]
async fn test_mount_produces_full_snapshot() {
    let config = create_test_config();
    let dashboard = Dashboard::mount(&config);
    let snapshot = dashboard.snapshot();

    assert_eq!(snapshot.price_feed.history.len(), HISTORY_POINTS);
    assert_eq!(snapshot.opportunities.len(), OPPORTUNITY_COUNT);
    assert_eq!(snapshot.transactions.len(), TRANSACTION_COUNT);
    assert_eq!(snapshot.scanner.as_ref().map(|s| s.quotes.len()), Some(3));
    assert!(snapshot.scanner_analyzing);

    dashboard.unmount().await.expect("unmount should succeed");
}

#[tokio::test(start_paused = true)]
async fn test_opportunities_regenerate_and_transactions_do_not() {
    let config = create_test_config();
    let dashboard = Dashboard::mount(&config);
    let before = dashboard.snapshot();

    sleep(just_after(config.opportunities.refresh_interval_ms, 1)).await;
    let after = dashboard.snapshot();

    // Fresh ids every tick, history untouched
    assert!(before.opportunities.iter().all(|a| after.opportunities.iter().all(|b| a.id != b.id)));
    assert_eq!(before.transactions, after.transactions);
    assert_ne!(before.price_feed.history, after.price_feed.history);

    dashboard.unmount().await.expect("unmount should succeed");
}

#[tokio::test(start_paused = true)]
async fn test_toggle_analysis_freezes_scanner() {
    let config = create_test_config();
    let dashboard = Dashboard::mount(&config);

    assert!(!dashboard.toggle_analysis());
    let frozen = dashboard.snapshot().scanner;
    sleep(just_after(config.scanner.refresh_interval_ms, 3)).await;

    let snapshot = dashboard.snapshot();
    assert!(!snapshot.scanner_analyzing);
    assert_eq!(snapshot.scanner, frozen);

    assert!(dashboard.toggle_analysis());
    dashboard.unmount().await.expect("unmount should succeed");
}

#[tokio::test(start_paused = true)]
async fn test_scanner_can_be_disabled() {
    let mut config = create_test_config();
    config.scanner.enabled = false;
    let dashboard = Dashboard::mount(&config);

    let snapshot = dashboard.snapshot();
    assert!(snapshot.scanner.is_none());
    assert!(!snapshot.scanner_analyzing);
    assert!(!dashboard.toggle_analysis());

    dashboard.unmount().await.expect("unmount should succeed");
}

#[tokio::test(start_paused = true)]
async fn test_same_seed_reproduces_every_panel() {
    let config = create_test_config();
    let first = Dashboard::mount(&config);
    let second = Dashboard::mount(&config);
    let (a, b) = (first.snapshot(), second.snapshot());

    assert_eq!(a.price_feed, b.price_feed);
    assert_eq!(a.scanner, b.scanner);

    // Ids and timestamps are fresh per mount, the drawn values are not
    let figures = |txs: &[TransactionRecord]| {
        txs.iter()
            .map(|t| (t.venue.clone(), t.direction, t.quantity, t.unit_price, t.status))
            .collect::<Vec<_>>()
    };
    let mut a_txs = figures(&a.transactions);
    let mut b_txs = figures(&b.transactions);
    a_txs.sort_by(|x, y| x.3.total_cmp(&y.3).then(x.2.total_cmp(&y.2)));
    b_txs.sort_by(|x, y| x.3.total_cmp(&y.3).then(x.2.total_cmp(&y.2)));
    assert_eq!(a_txs, b_txs);

    first.unmount().await.expect("unmount should succeed");
    second.unmount().await.expect("unmount should succeed");
}

struct FixedPrice;

impl PriceSource for FixedPrice {
    fn initial(&mut self) -> PriceFeedSnapshot {
        PriceFeedSnapshot {
            instrument: "BTC".to_string(),
            counter: "ETH".to_string(),
            current: PriceSample::new(60_000.0, 3_000.0),
            history: Vec::new(),
        }
    }

    fn refresh(&mut self, previous: &PriceFeedSnapshot) -> PriceFeedSnapshot {
        previous.clone()
    }
}

struct SingleOpportunity;

impl OpportunitySource for SingleOpportunity {
    fn opportunities(&mut self) -> Vec<OpportunityRecord> {
        vec![OpportunityRecord::priced("Binance", "Kraken", 100.0, 0.01, Utc::now())]
    }
}

struct NoTransactions;

impl TransactionSource for NoTransactions {
    fn transactions(&mut self) -> Vec<TransactionRecord> {
        Vec::new()
    }
}

#[tokio::test(start_paused = true)]
async fn test_custom_sources_replace_simulators() {
    let config = create_test_config();
    let sources = DashboardSources {
        prices: Box::new(FixedPrice),
        opportunities: Box::new(SingleOpportunity),
        transactions: Box::new(NoTransactions),
        quotes: None,
    };
    let dashboard = Dashboard::mount_with_sources(&config, sources);

    sleep(just_after(config.price_feed.refresh_interval_ms, 2)).await;
    let snapshot = dashboard.snapshot();

    assert_eq!(snapshot.price_feed.pair_label(), "BTC/ETH");
    assert_eq!(snapshot.price_feed.current.ratio, 20.0);
    assert_eq!(snapshot.opportunities.len(), 1);
    assert_eq!(snapshot.opportunities[0].sell_price, 101.0);
    assert!(snapshot.transactions.is_empty());
    assert!(snapshot.scanner.is_none());

    dashboard.unmount().await.expect("unmount should succeed");
}

#[tokio::test(start_paused = true)]
async fn test_snapshot_serializes_to_json() {
    let config = create_test_config();
    let dashboard = Dashboard::mount(&config);

    let json = serde_json::to_value(dashboard.snapshot()).expect("snapshot should serialize");
    assert_eq!(json["opportunities"].as_array().map(Vec::len), Some(OPPORTUNITY_COUNT));
    assert_eq!(json["price_feed"]["instrument"], "ZEC");

    let status = json["transactions"][0]["status"].as_str().unwrap_or_default();
    assert!(["completed", "pending", "failed"].contains(&status));

    dashboard.unmount().await.expect("unmount should succeed");
}
