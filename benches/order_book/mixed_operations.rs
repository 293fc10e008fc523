use criterion::Criterion;
use mbp_rs::{Action, MboEvent, OrderLedger};
use pricelevel::Side;
use std::hint::black_box;

fn build_event_stream() -> Vec<MboEvent> {
    let mut events = Vec::new();

    // Phase 1: build depth on both sides
    for i in 0..200u64 {
        let offset = (i % 20) as i64 * 5;
        events.push(MboEvent::new(Action::Add, Some(Side::Buy), i, 9990 - offset, 10));
        events.push(MboEvent::new(Action::Add, Some(Side::Sell), 1000 + i, 10010 + offset, 10));
    }

    // Phase 2: modify and partially cancel
    for i in 0..100u64 {
        events.push(MboEvent::new(Action::Modify, Some(Side::Buy), i, 9985, 15));
        events.push(MboEvent::new(Action::Cancel, Some(Side::Sell), 1000 + i, 0, 4));
    }

    // Phase 3: executions against the best asks
    for i in 100..150u64 {
        events.push(MboEvent::new(Action::Trade, Some(Side::Buy), 1000 + i, 10010, 5));
        events.push(MboEvent::new(Action::Fill, Some(Side::Buy), 1000 + i, 10010, 5));
        events.push(MboEvent::new(Action::Cancel, Some(Side::Buy), 1000 + i, 10010, 5));
    }

    events
}

/// Register benchmarks for mixed/realistic event flows
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderLedger - Mixed Operations");
    let events = build_event_stream();

    group.bench_function("realistic_event_flow", |b| {
        b.iter(|| {
            let mut ledger = OrderLedger::new(1);
            for event in &events {
                ledger.apply(event);
            }
            black_box(ledger.snapshot())
        })
    });

    group.bench_function("snapshot_render", |b| {
        let mut ledger = OrderLedger::new(1);
        for event in &events {
            ledger.apply(event);
        }
        b.iter(|| black_box(ledger.snapshot().csv_row()))
    });

    group.finish();
}
