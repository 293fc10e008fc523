use mbp_rs::orderbook::format_price;
use mbp_rs::{Action, DepthSnapshot, MboEvent, OrderLedger, init_tracing};
use pricelevel::Side;
use tracing::info;

fn print_top(label: &str, snapshot: &DepthSnapshot) {
    info!("--- {} ---", label);
    for (bid, ask) in snapshot.bids.iter().zip(snapshot.asks.iter()) {
        if bid.is_absent() && ask.is_absent() {
            break;
        }
        info!(
            "{:>10} x {:<6} ({:>2}) | {:>10} x {:<6} ({:>2})",
            format_price(bid.price),
            bid.size,
            bid.count,
            format_price(ask.price),
            ask.size,
            ask.count
        );
    }
    match snapshot.spread() {
        Some(spread) => info!("Spread: {}", format_price(spread)),
        None => info!("Spread: N/A"),
    }
}

fn main() {
    init_tracing("info");
    let mut ledger = OrderLedger::new(1);

    let events = [
        MboEvent::new(Action::Add, Some(Side::Buy), 1, 10000, 100),
        MboEvent::new(Action::Add, Some(Side::Buy), 2, 9995, 40),
        MboEvent::new(Action::Add, Some(Side::Sell), 3, 10050, 100),
        MboEvent::new(Action::Add, Some(Side::Sell), 4, 10050, 30),
    ];
    for event in &events {
        ledger.apply(event);
    }
    print_top("Initial book", &ledger.snapshot());

    // A buyer lifts 50 from the 100.50 offer
    ledger.apply(&MboEvent::new(Action::Trade, Some(Side::Buy), 3, 10050, 50));
    ledger.apply(&MboEvent::new(Action::Fill, Some(Side::Sell), 3, 10050, 50));
    ledger.apply(&MboEvent::new(Action::Cancel, Some(Side::Sell), 3, 10050, 50));
    print_top("After execution", &ledger.snapshot());

    // The 99.95 bid improves to 100.00 with a larger size
    ledger.apply(&MboEvent::new(Action::Modify, Some(Side::Buy), 2, 10000, 60));
    print_top("After modify", &ledger.snapshot());

    // A trade with no side is never tracked
    ledger.apply(&MboEvent::new(Action::Trade, None, 1, 10000, 10));
    info!("Pending trade: {:?}", ledger.matcher().pending());

    ledger.apply(&MboEvent::new(Action::Refresh, None, 0, 0, 0));
    info!("After refresh, empty: {}", ledger.is_empty());
}
