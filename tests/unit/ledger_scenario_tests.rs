//! End-to-end ledger scenarios driven through the public event API

use mbp_rs::orderbook::{MBP_DEPTH, format_price};
use mbp_rs::{Action, LevelSnapshot, MboEvent, OrderLedger};
use pricelevel::Side;

fn apply(ledger: &mut OrderLedger, action: Action, side: Option<Side>, id: u64, price: i64, size: u32) {
    ledger.apply(&MboEvent::new(action, side, id, price, size));
}

fn level(price: i64, size: u64, count: u32) -> LevelSnapshot {
    LevelSnapshot { price, size, count }
}

#[cfg(test)]
mod ledger_scenario_tests {
    use super::*;

    #[test]
    fn test_basic_add_orders() {
        let mut ledger = OrderLedger::new(1);
        apply(&mut ledger, Action::Add, Some(Side::Buy), 1001, 10000, 100);
        apply(&mut ledger, Action::Add, Some(Side::Sell), 1002, 10100, 50);

        let snapshot = ledger.snapshot();
        assert_eq!(snapshot.bids[0], level(10000, 100, 1));
        assert_eq!(snapshot.asks[0], level(10100, 50, 1));
        assert_eq!(format_price(snapshot.bids[0].price), "100.00");
        assert_eq!(format_price(snapshot.asks[0].price), "101.00");
    }

    #[test]
    fn test_full_cancellation_empties_ledger() {
        let mut ledger = OrderLedger::new(1);
        apply(&mut ledger, Action::Add, Some(Side::Buy), 1, 9900, 200);
        apply(&mut ledger, Action::Cancel, Some(Side::Buy), 1, 9900, 200);

        assert!(ledger.is_empty());
    }

    #[test]
    fn test_trade_fill_cancel_sequence() {
        let mut ledger = OrderLedger::new(1);
        apply(&mut ledger, Action::Add, Some(Side::Sell), 1, 10050, 100);
        apply(&mut ledger, Action::Trade, Some(Side::Buy), 1, 10050, 50);
        apply(&mut ledger, Action::Fill, Some(Side::Buy), 1, 10050, 50);
        apply(&mut ledger, Action::Cancel, Some(Side::Buy), 1, 10050, 50);

        let snapshot = ledger.snapshot();
        assert_eq!(snapshot.asks[0], level(10050, 50, 1));
        assert_eq!(format_price(snapshot.asks[0].price), "100.50");
    }

    #[test]
    fn test_multiple_levels_keep_best_ten() {
        let mut ledger = OrderLedger::new(1);
        for i in 0..15u64 {
            apply(&mut ledger, Action::Add, Some(Side::Buy), 4000 + i, 10000 - i as i64 * 10, 100);
        }
        for i in 0..15u64 {
            apply(&mut ledger, Action::Add, Some(Side::Sell), 5000 + i, 10100 + i as i64 * 10, 50);
        }

        let snapshot = ledger.snapshot();
        assert_eq!(snapshot.bids[0], level(10000, 100, 1));
        assert_eq!(snapshot.asks[0], level(10100, 50, 1));
        assert_eq!(snapshot.bids[MBP_DEPTH - 1].price, 9910);
        assert_eq!(snapshot.asks[MBP_DEPTH - 1].price, 10190);
        assert_eq!(ledger.depth().level_count(Side::Buy), 15);
    }

    #[test]
    fn test_empty_ledger_renders_zeros() {
        let mut ledger = OrderLedger::new(1);
        apply(&mut ledger, Action::Add, Some(Side::Buy), 1, 9900, 200);
        apply(&mut ledger, Action::Refresh, None, 0, 0, 0);

        assert!(ledger.is_empty());
        let row = ledger.snapshot().csv_row();
        let zero_levels = row[11..row.len() - 2]
            .iter()
            .filter(|field| *field == "0" || *field == "0.00")
            .count();
        assert_eq!(zero_levels, MBP_DEPTH * 6);
    }

    #[test]
    fn test_trade_without_side_is_ignored() {
        let mut ledger = OrderLedger::new(1);
        apply(&mut ledger, Action::Add, Some(Side::Buy), 1, 9950, 100);
        apply(&mut ledger, Action::Trade, None, 2, 9950, 50);
        apply(&mut ledger, Action::Fill, None, 2, 9950, 50);
        apply(&mut ledger, Action::Cancel, None, 2, 9950, 50);

        assert_eq!(ledger.snapshot().bids[0], level(9950, 100, 1));
    }

    #[test]
    fn test_adds_aggregate_per_price_and_side() {
        let mut ledger = OrderLedger::new(1);
        let sizes = [10u32, 25, 5, 40, 15, 30];
        for (i, size) in sizes.iter().enumerate() {
            let price = 10000 + (i as i64 % 3) * 5;
            apply(&mut ledger, Action::Add, Some(Side::Buy), i as u64, price, *size);
        }

        assert_eq!(ledger.snapshot().bids[..3], [
            level(10010, 35, 2),
            level(10005, 40, 2),
            level(10000, 50, 2),
        ]);
    }

    #[test]
    fn test_modify_moves_order_between_levels() {
        let mut ledger = OrderLedger::new(1);
        apply(&mut ledger, Action::Add, Some(Side::Sell), 1, 10100, 40);
        apply(&mut ledger, Action::Add, Some(Side::Sell), 2, 10100, 60);
        apply(&mut ledger, Action::Modify, Some(Side::Sell), 1, 10090, 25);

        let snapshot = ledger.snapshot();
        assert_eq!(snapshot.asks[0], level(10090, 25, 1));
        assert_eq!(snapshot.asks[1], level(10100, 60, 1));
        let order = ledger.order(1).unwrap();
        assert_eq!((order.id, order.side), (1, Side::Sell));
    }

    #[test]
    fn test_partial_cancel_keeps_count() {
        let mut ledger = OrderLedger::new(1);
        apply(&mut ledger, Action::Add, Some(Side::Buy), 1, 9900, 100);
        apply(&mut ledger, Action::Cancel, Some(Side::Buy), 1, 9900, 30);

        assert_eq!(ledger.snapshot().bids[0], level(9900, 70, 1));
        assert_eq!(ledger.order(1).unwrap().size, 70);
    }

    #[test]
    fn test_late_control_messages_are_ignored() {
        let mut ledger = OrderLedger::new(1);
        apply(&mut ledger, Action::Add, Some(Side::Buy), 1, 9900, 100);
        apply(&mut ledger, Action::Cancel, Some(Side::Buy), 1, 9900, 0);
        apply(&mut ledger, Action::Cancel, Some(Side::Buy), 1, 9900, 0);
        apply(&mut ledger, Action::Modify, Some(Side::Buy), 1, 9950, 10);
        apply(&mut ledger, Action::Fill, Some(Side::Buy), 1, 9900, 10);

        assert!(ledger.is_empty());
    }
}
