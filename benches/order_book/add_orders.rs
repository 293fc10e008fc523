use criterion::{BenchmarkId, Criterion};
use mbp_rs::{Order, OrderLedger};
use pricelevel::Side;
use std::hint::black_box;

/// Register all benchmarks for adding orders to a ledger
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderLedger - Add Orders");

    // Many orders spread over both sides
    group.bench_function("add_alternating_sides", |b| {
        b.iter(|| {
            let mut ledger = OrderLedger::new(1);
            for i in 0..1000u64 {
                let (side, price) = if i % 2 == 0 {
                    (Side::Buy, 10000 - (i % 100) as i64)
                } else {
                    (Side::Sell, 10100 + (i % 100) as i64)
                };
                ledger.add_order(Order::new(i, side, price, 100, i));
            }
            black_box(ledger.depth().level_count(Side::Buy))
        })
    });

    // Parametrized benchmark with different order counts on a single level
    for order_count in [10u64, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::new("single_level_scaling", order_count),
            order_count,
            |b, &order_count| {
                b.iter(|| {
                    let mut ledger = OrderLedger::new(1);
                    for i in 0..order_count {
                        ledger.add_order(Order::new(i, Side::Buy, 10000, 10, i));
                    }
                    black_box(ledger.best_bid())
                })
            },
        );
    }

    group.finish();
}
