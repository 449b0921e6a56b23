use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use txdispatch::prelude::*;

const PAIRS: [(TransactionType, PaymentMethod); 6] = [
    (TransactionType::Payment, PaymentMethod::CreditCard),
    (TransactionType::Refund, PaymentMethod::CreditCard),
    (TransactionType::Payment, PaymentMethod::Paypal),
    (TransactionType::Refund, PaymentMethod::Paypal),
    (TransactionType::Payment, PaymentMethod::Plan),
    (TransactionType::Refund, PaymentMethod::Plan),
];

/// Batch cycling through every type/method pair
fn create_mixed_batch(count: usize) -> InMemoryTransactionSource {
    (0..count)
        .map(|i| {
            let (tx_type, method) = PAIRS[i % PAIRS.len()];
            Transaction::open(i as i64, tx_type, method)
        })
        .collect()
}

/// Benchmark dispatch throughput across batch sizes
fn bench_mixed_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_batch");

    for count in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter_batched(
                || Dispatcher::new(create_mixed_batch(count), RecordingOperations::new()),
                |dispatcher| black_box(dispatcher.process()).ok(),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark batches where every method is unknown (validation + skip only)
fn bench_skipped_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("skipped_batch");

    for count in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter_batched(
                || {
                    let source: InMemoryTransactionSource = (0..count)
                        .map(|i| Transaction::new(i as i64, OPEN_STATUS, "PAYMENT", "VOUCHER"))
                        .collect();
                    Dispatcher::new(source, UnimplementedOperations)
                },
                |dispatcher| black_box(dispatcher.process()).ok(),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mixed_batch, bench_skipped_batch);
criterion_main!(benches);
