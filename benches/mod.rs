use criterion::{criterion_group, criterion_main};


use order_book::register_benchmarks as register_order_book_benchmarks;
use replay::register_benchmarks as register_replay_benchmarks;

// Define the benchmark groups
criterion_group!(
    benches,
    register_order_book_benchmarks,
    register_replay_benchmarks,
);

criterion_main!(benches);
